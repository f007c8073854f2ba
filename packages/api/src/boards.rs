//! Board and task endpoints.

use store::{Board, Task};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{NewBoard, NewTask, TaskPatch};
use crate::require;

/// `GET /boards`
pub async fn list_boards(client: &ApiClient) -> Result<Vec<Board>, ApiError> {
    client.get("/boards").await
}

/// `POST /boards`
pub async fn create_board(client: &ApiClient, name: &str) -> Result<Board, ApiError> {
    require("Board name", name)?;
    client.post("/boards", &NewBoard { name }).await
}

/// `GET /boards/:id`
pub async fn get_board(client: &ApiClient, board_id: &str) -> Result<Board, ApiError> {
    let id = segment("Board id", board_id)?;
    client.get(&format!("/boards/{id}")).await
}

/// `POST /boards/:id/tasks`
pub async fn create_task(client: &ApiClient, board_id: &str, task: &NewTask) -> Result<Task, ApiError> {
    let id = segment("Board id", board_id)?;
    require("Title", &task.title)?;
    require("Column", &task.column_id)?;
    client.post(&format!("/boards/{id}/tasks"), task).await
}

/// `PATCH /tasks/:id`
pub async fn update_task(client: &ApiClient, task_id: &str, patch: &TaskPatch) -> Result<Task, ApiError> {
    let id = segment("Task id", task_id)?;
    if patch.is_empty() {
        return Err(ApiError::Validation("Nothing to update".to_string()));
    }
    if let Some(ref title) = patch.title {
        require("Title", title)?;
    }
    client.patch(&format!("/tasks/{id}"), patch).await
}

pub async fn move_task(client: &ApiClient, task_id: &str, column_id: &str) -> Result<Task, ApiError> {
    require("Column", column_id)?;
    update_task(client, task_id, &TaskPatch::move_to(column_id)).await
}

/// `DELETE /tasks/:id`
pub async fn delete_task(client: &ApiClient, task_id: &str) -> Result<(), ApiError> {
    let id = segment("Task id", task_id)?;
    client.delete(&format!("/tasks/{id}")).await
}

/// Ids are interpolated into paths, so they must be a single segment.
fn segment<'a>(field: &str, id: &'a str) -> Result<&'a str, ApiError> {
    let id = require(field, id)?;
    if id.contains(['/', '?', '#']) {
        return Err(ApiError::Validation(format!("{field} is not valid")));
    }
    Ok(id)
}
