//! # Domain models for the Kanban board
//!
//! These are the client-side copies of what the backend owns. They are
//! `Serialize + Deserialize` and carry serde attributes that map the API's
//! camelCase wire names (`ownerId`, `columnId`, `createdAt`) onto Rust fields.
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`User`] | The signed-in identity. Only ever held in memory by the session. |
//! | [`Board`] | A board with its ordered columns. |
//! | [`Column`] | A fixed status bucket, discriminated by [`ColumnStage`]. |
//! | [`Task`] | A card living in exactly one column. |
//!
//! Ids arrive as either JSON numbers or strings depending on the backend, so
//! every id field goes through [`de_id`] and is held as a `String`.

use serde::{Deserialize, Deserializer, Serialize};

/// Identity of the signed-in user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(deserialize_with = "de_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: Option<String>,
}

impl User {
    /// Name to show in the navbar, falling back to the email address.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.email
        } else {
            &self.name
        }
    }
}

/// The three fixed stages a column can represent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColumnStage {
    Todo,
    InProgress,
    Done,
}

impl ColumnStage {
    pub const ALL: [ColumnStage; 3] = [Self::Todo, Self::InProgress, Self::Done];

    pub fn label(self) -> &'static str {
        match self {
            Self::Todo => "To do",
            Self::InProgress => "In progress",
            Self::Done => "Done",
        }
    }

    pub fn next(self) -> Option<Self> {
        match self {
            Self::Todo => Some(Self::InProgress),
            Self::InProgress => Some(Self::Done),
            Self::Done => None,
        }
    }

    pub fn prev(self) -> Option<Self> {
        match self {
            Self::Todo => None,
            Self::InProgress => Some(Self::Todo),
            Self::Done => Some(Self::InProgress),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    #[serde(deserialize_with = "de_id")]
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "de_opt_id")]
    pub owner_id: Option<String>,
    #[serde(default)]
    pub columns: Vec<Column>,
}

impl Board {
    /// Columns sorted by stage, regardless of the order the API sent them in.
    pub fn ordered_columns(&self) -> Vec<&Column> {
        let mut columns: Vec<&Column> = self.columns.iter().collect();
        columns.sort_by_key(|c| c.order);
        columns
    }

    pub fn column_for_stage(&self, stage: ColumnStage) -> Option<&Column> {
        self.columns.iter().find(|c| c.order == stage)
    }

    pub fn column(&self, id: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.id == id)
    }

    /// All tasks on the board, in column order.
    pub fn tasks(&self) -> Vec<Task> {
        self.ordered_columns()
            .into_iter()
            .flat_map(|c| c.tasks.iter().cloned())
            .collect()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Column {
    #[serde(deserialize_with = "de_id")]
    pub id: String,
    pub name: String,
    pub order: ColumnStage,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(deserialize_with = "de_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(deserialize_with = "de_id")]
    pub column_id: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Num(i64),
    Str(String),
}

impl From<RawId> for String {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Num(n) => n.to_string(),
            RawId::Str(s) => s,
        }
    }
}

/// Accept an id as either a JSON number or a string.
pub fn de_id<'de, D: Deserializer<'de>>(de: D) -> Result<String, D::Error> {
    RawId::deserialize(de).map(String::from)
}

pub fn de_opt_id<'de, D: Deserializer<'de>>(de: D) -> Result<Option<String>, D::Error> {
    Option::<RawId>::deserialize(de).map(|id| id.map(String::from))
}
