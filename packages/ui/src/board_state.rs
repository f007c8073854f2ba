//! # Board task ledger
//!
//! The board page fires requests in the order the user acts, but responses can
//! come back in any order. [`TaskLedger`] is the only thing allowed to change
//! the rendered task list, and it refuses to let a late response undo a later
//! action.
//!
//! Every request takes a [`Ticket`] from [`TaskLedger::begin`] (or one of the
//! `begin_*` helpers). Tickets increase monotonically, and the rules are:
//!
//! - **Snapshots** (`GET /boards/:id`) apply only if newer than the last
//!   applied snapshot. Local results that settled after the snapshot was
//!   requested are layered back on top of it.
//! - **Deletes** tombstone the task id as soon as they are issued. A
//!   tombstoned id never comes back from a create, update or snapshot.
//! - **Creates** show as [`PendingTask`] rows until they settle. Cancelling a
//!   pending row makes its eventual response [`CreateOutcome::Orphaned`]; the
//!   page then deletes that task on the server.
//! - **Updates** to the same task apply only if newer than the last applied
//!   update for it.
//!
//! The page re-fetches after every settled mutation, so local results are a
//! bridge until the next authoritative snapshot, not a merge.

use std::collections::{HashMap, HashSet};

use store::{Board, Task};

pub type Ticket = u64;

/// A create that has been sent but not answered yet.
#[derive(Clone, Debug, PartialEq)]
pub struct PendingTask {
    pub ticket: Ticket,
    pub title: String,
    pub column_id: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CreateOutcome {
    Inserted,
    /// The create was cancelled while in flight; the server copy with this id
    /// must be deleted.
    Orphaned(String),
    /// The task was already deleted by id.
    Discarded,
}

#[derive(Clone, Debug, PartialEq)]
struct LocalResult {
    /// `issued` high-water mark when the response was applied.
    settled: Ticket,
    task: Task,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TaskLedger {
    /// Board from the last applied snapshot, with column task lists emptied.
    board: Option<Board>,
    tasks: Vec<Task>,
    pending: Vec<PendingTask>,
    cancelled: HashSet<Ticket>,
    tombstones: HashSet<String>,
    local: HashMap<String, LocalResult>,
    latest_update: HashMap<String, Ticket>,
    issued: Ticket,
    snapshot: Option<Ticket>,
}

impl TaskLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self) -> Ticket {
        self.issued += 1;
        self.issued
    }

    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn tasks_in(&self, column_id: &str) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|t| t.column_id == column_id)
            .cloned()
            .collect()
    }

    pub fn pending_in(&self, column_id: &str) -> Vec<PendingTask> {
        self.pending
            .iter()
            .filter(|p| p.column_id == column_id)
            .cloned()
            .collect()
    }

    /// Apply a fetched board. Returns `false` if a newer snapshot already won.
    pub fn apply_snapshot(&mut self, ticket: Ticket, mut board: Board) -> bool {
        if self.snapshot.is_some_and(|applied| applied >= ticket) {
            tracing::debug!(ticket, "Dropping stale board snapshot");
            return false;
        }
        self.snapshot = Some(ticket);

        let mut tasks = board.tasks();
        for column in &mut board.columns {
            column.tasks.clear();
        }

        // Anything that settled before this snapshot was requested is in it.
        self.local.retain(|_, result| result.settled >= ticket);
        tasks.retain(|t| !self.tombstones.contains(&t.id));
        for result in self.local.values() {
            upsert(&mut tasks, result.task.clone());
        }

        self.tasks = tasks;
        self.board = Some(board);
        true
    }

    pub fn begin_create(&mut self, title: &str, column_id: &str) -> Ticket {
        let ticket = self.begin();
        self.pending.push(PendingTask {
            ticket,
            title: title.to_string(),
            column_id: column_id.to_string(),
        });
        ticket
    }

    /// Drop a pending row. Returns `false` if it already settled.
    pub fn cancel_pending(&mut self, ticket: Ticket) -> bool {
        let before = self.pending.len();
        self.pending.retain(|p| p.ticket != ticket);
        let removed = self.pending.len() != before;
        if removed {
            self.cancelled.insert(ticket);
        }
        removed
    }

    pub fn settle_create(&mut self, ticket: Ticket, task: Task) -> CreateOutcome {
        self.pending.retain(|p| p.ticket != ticket);

        if self.cancelled.remove(&ticket) {
            self.tombstones.insert(task.id.clone());
            self.remove_task(&task.id);
            return CreateOutcome::Orphaned(task.id);
        }
        if self.tombstones.contains(&task.id) {
            return CreateOutcome::Discarded;
        }

        self.latest_update.insert(task.id.clone(), ticket);
        self.record(task);
        CreateOutcome::Inserted
    }

    pub fn fail_create(&mut self, ticket: Ticket) {
        self.pending.retain(|p| p.ticket != ticket);
        self.cancelled.remove(&ticket);
    }

    pub fn begin_delete(&mut self, task_id: &str) -> Ticket {
        let ticket = self.begin();
        self.tombstones.insert(task_id.to_string());
        self.remove_task(task_id);
        ticket
    }

    /// Lift the tombstone so the next snapshot shows the task again.
    pub fn fail_delete(&mut self, task_id: &str) {
        self.tombstones.remove(task_id);
    }

    pub fn is_deleted(&self, task_id: &str) -> bool {
        self.tombstones.contains(task_id)
    }

    /// Apply an update response. Returns `false` if it was superseded.
    pub fn settle_update(&mut self, ticket: Ticket, task: Task) -> bool {
        if self.tombstones.contains(&task.id) {
            return false;
        }
        if self
            .latest_update
            .get(&task.id)
            .is_some_and(|&latest| latest > ticket)
        {
            tracing::debug!(ticket, task_id = %task.id, "Dropping superseded task update");
            return false;
        }

        self.latest_update.insert(task.id.clone(), ticket);
        self.record(task);
        true
    }

    fn record(&mut self, task: Task) {
        self.local.insert(
            task.id.clone(),
            LocalResult {
                settled: self.issued,
                task: task.clone(),
            },
        );
        upsert(&mut self.tasks, task);
    }

    fn remove_task(&mut self, task_id: &str) {
        self.tasks.retain(|t| t.id != task_id);
        self.local.remove(task_id);
    }
}

fn upsert(tasks: &mut Vec<Task>, task: Task) {
    match tasks.iter_mut().find(|t| t.id == task.id) {
        Some(existing) => *existing = task,
        None => tasks.push(task),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::{Column, ColumnStage};

    fn task(id: &str, column: &str) -> Task {
        Task {
            id: id.into(),
            title: format!("Task {id}"),
            description: String::new(),
            column_id: column.into(),
            created_at: None,
        }
    }

    fn board(tasks: &[Task]) -> Board {
        let columns = [("c1", ColumnStage::Todo), ("c2", ColumnStage::InProgress), ("c3", ColumnStage::Done)]
            .into_iter()
            .map(|(id, stage)| Column {
                id: id.into(),
                name: stage.label().into(),
                order: stage,
                tasks: tasks.iter().filter(|t| t.column_id == id).cloned().collect(),
            })
            .collect();
        Board {
            id: "b1".into(),
            name: "Board".into(),
            owner_id: None,
            columns,
        }
    }

    fn ids(ledger: &TaskLedger) -> Vec<&str> {
        ledger.tasks().iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn test_snapshot_strips_column_tasks() {
        let mut ledger = TaskLedger::new();
        let t = ledger.begin();
        assert!(ledger.apply_snapshot(t, board(&[task("1", "c1"), task("2", "c3")])));

        assert!(ledger.board().unwrap().columns.iter().all(|c| c.tasks.is_empty()));
        assert_eq!(ledger.tasks_in("c1").len(), 1);
        assert_eq!(ledger.tasks_in("c3").len(), 1);
    }

    #[test]
    fn test_stale_snapshot_is_dropped() {
        let mut ledger = TaskLedger::new();
        let first = ledger.begin();
        let second = ledger.begin();

        assert!(ledger.apply_snapshot(second, board(&[task("2", "c1")])));
        assert!(!ledger.apply_snapshot(first, board(&[task("1", "c1")])));
        assert_eq!(ids(&ledger), vec!["2"]);
    }

    #[test]
    fn test_create_then_delete_before_response() {
        let mut ledger = TaskLedger::new();
        let load = ledger.begin();
        ledger.apply_snapshot(load, board(&[]));

        let create = ledger.begin_create("Draft", "c1");
        assert_eq!(ledger.pending_in("c1").len(), 1);

        // User deletes the pending row before the server answers.
        assert!(ledger.cancel_pending(create));
        assert!(ledger.pending_in("c1").is_empty());

        let outcome = ledger.settle_create(create, task("9", "c1"));
        assert_eq!(outcome, CreateOutcome::Orphaned("9".into()));
        assert!(ledger.tasks().is_empty());

        // A refetch that raced the orphan delete still lists the task.
        let refetch = ledger.begin();
        ledger.apply_snapshot(refetch, board(&[task("9", "c1")]));
        assert!(ledger.tasks().is_empty());
    }

    #[test]
    fn test_delete_then_late_snapshot() {
        let mut ledger = TaskLedger::new();
        let load = ledger.begin();

        let create = ledger.begin_create("Draft", "c1");
        assert_eq!(ledger.settle_create(create, task("9", "c1")), CreateOutcome::Inserted);
        ledger.begin_delete("9");
        assert!(ledger.tasks().is_empty());

        // The initial load resolves last and still contains the task.
        ledger.apply_snapshot(load, board(&[task("9", "c1")]));
        assert!(ledger.tasks().is_empty());
        assert!(ledger.is_deleted("9"));
    }

    #[test]
    fn test_create_response_after_delete_by_id() {
        let mut ledger = TaskLedger::new();
        let create = ledger.begin_create("Draft", "c1");
        ledger.begin_delete("9");
        assert_eq!(ledger.settle_create(create, task("9", "c1")), CreateOutcome::Discarded);
        assert!(ledger.tasks().is_empty());
        assert!(ledger.pending_in("c1").is_empty());
    }

    #[test]
    fn test_snapshot_requested_before_create_settled_keeps_it() {
        let mut ledger = TaskLedger::new();
        let load = ledger.begin();
        let create = ledger.begin_create("Draft", "c1");
        ledger.settle_create(create, task("9", "c1"));

        ledger.apply_snapshot(load, board(&[task("1", "c1")]));
        assert_eq!(ids(&ledger), vec!["1", "9"]);

        // A snapshot requested after the create settled is authoritative.
        let refetch = ledger.begin();
        ledger.apply_snapshot(refetch, board(&[task("1", "c1")]));
        assert_eq!(ids(&ledger), vec!["1"]);
    }

    #[test]
    fn test_out_of_order_updates() {
        let mut ledger = TaskLedger::new();
        let load = ledger.begin();
        ledger.apply_snapshot(load, board(&[task("1", "c1")]));

        let to_doing = ledger.begin();
        let to_done = ledger.begin();

        assert!(ledger.settle_update(to_done, task("1", "c3")));
        assert!(!ledger.settle_update(to_doing, task("1", "c2")));
        assert_eq!(ledger.tasks_in("c3").len(), 1);
        assert!(ledger.tasks_in("c2").is_empty());
    }

    #[test]
    fn test_update_after_delete_is_ignored() {
        let mut ledger = TaskLedger::new();
        let load = ledger.begin();
        ledger.apply_snapshot(load, board(&[task("1", "c1")]));

        let update = ledger.begin();
        ledger.begin_delete("1");
        assert!(!ledger.settle_update(update, task("1", "c2")));
        assert!(ledger.tasks().is_empty());
    }

    #[test]
    fn test_failed_delete_reappears_on_refetch() {
        let mut ledger = TaskLedger::new();
        let load = ledger.begin();
        ledger.apply_snapshot(load, board(&[task("1", "c1")]));

        ledger.begin_delete("1");
        assert!(ledger.tasks().is_empty());
        ledger.fail_delete("1");

        let refetch = ledger.begin();
        ledger.apply_snapshot(refetch, board(&[task("1", "c1")]));
        assert_eq!(ids(&ledger), vec!["1"]);
    }

    #[test]
    fn test_cancelled_create_reappears_when_its_delete_fails() {
        let mut ledger = TaskLedger::new();
        let load = ledger.begin();
        ledger.apply_snapshot(load, board(&[]));

        let create = ledger.begin_create("Draft", "c1");
        ledger.cancel_pending(create);
        assert_eq!(
            ledger.settle_create(create, task("9", "c1")),
            CreateOutcome::Orphaned("9".into())
        );

        // The cleanup delete failed, so the task is still on the server.
        ledger.fail_delete("9");
        assert!(!ledger.is_deleted("9"));

        let refetch = ledger.begin();
        ledger.apply_snapshot(refetch, board(&[task("9", "c1")]));
        assert_eq!(ids(&ledger), vec!["9"]);

        // And it can be deleted again from its card.
        ledger.begin_delete("9");
        assert!(ledger.tasks().is_empty());
    }

    #[test]
    fn test_failed_create_clears_pending() {
        let mut ledger = TaskLedger::new();
        let create = ledger.begin_create("Draft", "c2");
        ledger.fail_create(create);
        assert!(ledger.pending_in("c2").is_empty());
        assert!(!ledger.cancel_pending(create));
    }
}
