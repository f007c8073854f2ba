//! Board page: columns in stage order, task create / move / delete.
//!
//! Every mutation goes through the [`TaskLedger`] and is followed by a
//! re-fetch, so late responses cannot resurrect or revert anything.

use api::{ApiClient, ApiError, NewTask};
use dioxus::prelude::*;
use ui::{use_api, CreateOutcome, MoveDirection, TaskColumn, TaskLedger, Ticket};

#[component]
pub fn BoardPage(id: String) -> Element {
    // Keyed so switching boards remounts with a fresh ledger.
    rsx! {
        BoardScreen { key: "{id}", board_id: id.clone() }
    }
}

/// Re-fetch the board and hand it to the ledger under a fresh ticket.
async fn refresh(
    client: ApiClient,
    board_id: String,
    mut ledger: Signal<TaskLedger>,
    error: Signal<Option<String>>,
) {
    let ticket = ledger.write().begin();
    match api::boards::get_board(&client, &board_id).await {
        Ok(board) => {
            ledger.write().apply_snapshot(ticket, board);
        }
        Err(e) => report(error, "load board", e),
    }
}

fn report(mut error: Signal<Option<String>>, action: &str, e: ApiError) {
    tracing::error!("Failed to {action}: {e}");
    // The shell is already redirecting on auth failures.
    if !e.is_auth() {
        error.set(Some(format!("Could not {action}: {e}")));
    }
}

#[component]
fn BoardScreen(board_id: String) -> Element {
    let client = use_api();
    let mut ledger = use_signal(TaskLedger::new);
    let error = use_signal(|| Option::<String>::None);

    use_hook({
        let client = client.clone();
        let board_id = board_id.clone();
        move || {
            spawn(refresh(client, board_id, ledger, error));
        }
    });

    let on_create = {
        let client = client.clone();
        let board_id = board_id.clone();
        move |column_id: String| {
            move |(title, description): (String, String)| {
                let ticket = ledger.write().begin_create(&title, &column_id);
                let client = client.clone();
                let board_id = board_id.clone();
                let task = NewTask {
                    title,
                    description,
                    column_id: column_id.clone(),
                };
                spawn(async move {
                    match api::boards::create_task(&client, &board_id, &task).await {
                        Ok(created) => {
                            let outcome = ledger.write().settle_create(ticket, created);
                            if let CreateOutcome::Orphaned(id) = outcome {
                                if let Err(e) = api::boards::delete_task(&client, &id).await {
                                    // Still on the server: show it so it can be deleted again.
                                    ledger.write().fail_delete(&id);
                                    report(error, "remove cancelled task", e);
                                }
                            }
                        }
                        Err(e) => {
                            ledger.write().fail_create(ticket);
                            report(error, "create task", e);
                        }
                    }
                    refresh(client, board_id, ledger, error).await;
                });
            }
        }
    };

    let on_delete = {
        let client = client.clone();
        let board_id = board_id.clone();
        move |task_id: String| {
            ledger.write().begin_delete(&task_id);
            let client = client.clone();
            let board_id = board_id.clone();
            spawn(async move {
                if let Err(e) = api::boards::delete_task(&client, &task_id).await {
                    ledger.write().fail_delete(&task_id);
                    report(error, "delete task", e);
                }
                refresh(client, board_id, ledger, error).await;
            });
        }
    };

    let on_move = {
        let client = client.clone();
        let board_id = board_id.clone();
        move |(task_id, direction): (String, MoveDirection)| {
            let target = {
                let state = ledger.read();
                let Some(board) = state.board() else { return };
                let Some(task) = state.tasks().iter().find(|t| t.id == task_id) else { return };
                let Some(stage) = board.column(&task.column_id).map(|c| c.order) else { return };
                let next = match direction {
                    MoveDirection::Back => stage.prev(),
                    MoveDirection::Forward => stage.next(),
                };
                next.and_then(|s| board.column_for_stage(s)).map(|c| c.id.clone())
            };
            let Some(column_id) = target else { return };

            let ticket: Ticket = ledger.write().begin();
            let client = client.clone();
            let board_id = board_id.clone();
            spawn(async move {
                match api::boards::move_task(&client, &task_id, &column_id).await {
                    Ok(task) => {
                        ledger.write().settle_update(ticket, task);
                    }
                    Err(e) => report(error, "move task", e),
                }
                refresh(client, board_id, ledger, error).await;
            });
        }
    };

    let on_cancel = move |ticket: Ticket| {
        ledger.write().cancel_pending(ticket);
    };

    let state = ledger.read();
    let Some(board) = state.board() else {
        return rsx! {
            if let Some(err) = error() {
                p { class: "text-red-600", "{err}" }
            } else {
                p { class: "text-neutral-500", "Loading board..." }
            }
        };
    };

    let columns: Vec<_> = board
        .ordered_columns()
        .into_iter()
        .map(|column| {
            (
                column.clone(),
                state.tasks_in(&column.id),
                state.pending_in(&column.id),
            )
        })
        .collect();
    let name = board.name.clone();
    drop(state);

    rsx! {
        div {
            class: "flex flex-col gap-4",
            h1 { class: "m-0 text-2xl font-bold text-neutral-800", "{name}" }

            if let Some(err) = error() {
                div { class: "text-sm text-red-600", "{err}" }
            }

            div {
                class: "flex gap-4 items-start overflow-x-auto",
                for (column, tasks, pending) in columns {
                    TaskColumn {
                        key: "{column.id}",
                        can_move_back: column.order.prev().is_some(),
                        can_move_forward: column.order.next().is_some(),
                        on_create: on_create.clone()(column.id.clone()),
                        on_move: on_move.clone(),
                        on_delete: on_delete.clone(),
                        on_cancel,
                        column: column.clone(),
                        tasks,
                        pending,
                    }
                }
            }
        }
    }
}
