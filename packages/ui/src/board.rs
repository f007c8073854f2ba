//! Presentational pieces of the board page: one column of tasks and a card.
//!
//! These render props and raise events; every request is made by the page.

use dioxus::prelude::*;
use store::{Column, Task};

use crate::board_state::{PendingTask, Ticket};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveDirection {
    Back,
    Forward,
}

#[component]
pub fn TaskColumn(
    column: Column,
    tasks: Vec<Task>,
    pending: Vec<PendingTask>,
    can_move_back: bool,
    can_move_forward: bool,
    on_create: EventHandler<(String, String)>,
    on_move: EventHandler<(String, MoveDirection)>,
    on_delete: EventHandler<String>,
    on_cancel: EventHandler<Ticket>,
) -> Element {
    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let t = title().trim().to_string();
        if t.is_empty() {
            return;
        }
        on_create.call((t, description().trim().to_string()));
        title.set(String::new());
        description.set(String::new());
    };

    let count = tasks.len() + pending.len();

    rsx! {
        section {
            class: "flex flex-col gap-2 w-72 p-3 bg-neutral-100 rounded",
            h2 {
                class: "m-0 text-sm font-semibold text-neutral-700",
                "{column.name} "
                span { class: "text-neutral-400", "({count})" }
            }

            for task in tasks {
                TaskCard {
                    key: "{task.id}",
                    task: task.clone(),
                    can_move_back,
                    can_move_forward,
                    on_move,
                    on_delete,
                }
            }

            for row in pending {
                div {
                    key: "pending-{row.ticket}",
                    class: "flex items-center justify-between p-2 bg-white rounded opacity-60",
                    span { "{row.title}" }
                    button {
                        class: "text-xs text-red-600",
                        title: "Cancel",
                        onclick: move |_| on_cancel.call(row.ticket),
                        "\u{2715}"
                    }
                }
            }

            form {
                class: "flex flex-col gap-1 mt-2",
                onsubmit: handle_submit,
                input {
                    r#type: "text",
                    placeholder: "New task",
                    value: title(),
                    oninput: move |evt: FormEvent| title.set(evt.value()),
                }
                input {
                    r#type: "text",
                    placeholder: "Description (optional)",
                    value: description(),
                    oninput: move |evt: FormEvent| description.set(evt.value()),
                }
                button {
                    r#type: "submit",
                    disabled: title().trim().is_empty(),
                    "Add"
                }
            }
        }
    }
}

#[component]
pub fn TaskCard(
    task: Task,
    can_move_back: bool,
    can_move_forward: bool,
    on_move: EventHandler<(String, MoveDirection)>,
    on_delete: EventHandler<String>,
) -> Element {
    let id = task.id.clone();

    rsx! {
        article {
            class: "flex flex-col gap-1 p-2 bg-white rounded shadow-sm",
            h3 { class: "m-0 text-sm font-medium", "{task.title}" }
            if !task.description.is_empty() {
                p { class: "m-0 text-xs text-neutral-600", "{task.description}" }
            }
            div {
                class: "flex gap-2 text-xs",
                if can_move_back {
                    button {
                        onclick: {
                            let id = id.clone();
                            move |_| on_move.call((id.clone(), MoveDirection::Back))
                        },
                        "\u{2190}"
                    }
                }
                if can_move_forward {
                    button {
                        onclick: {
                            let id = id.clone();
                            move |_| on_move.call((id.clone(), MoveDirection::Forward))
                        },
                        "\u{2192}"
                    }
                }
                button {
                    class: "ml-auto text-red-600",
                    onclick: move |_| on_delete.call(id.clone()),
                    "Delete"
                }
            }
        }
    }
}
