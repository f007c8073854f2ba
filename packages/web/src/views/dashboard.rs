use api::ApiError;
use dioxus::prelude::*;
use store::Board;
use ui::use_api;

use crate::Route;

#[component]
pub fn Dashboard() -> Element {
    let client = use_api();
    let mut new_board_name = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut creating = use_signal(|| false);

    let mut boards = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move { api::boards::list_boards(&client).await }
        }
    });

    let handle_create = move |evt: FormEvent| {
        evt.prevent_default();
        let name = new_board_name().trim().to_string();
        if name.is_empty() {
            return;
        }
        let client = client.clone();
        spawn(async move {
            creating.set(true);
            error.set(None);
            match api::boards::create_board(&client, &name).await {
                Ok(board) => {
                    tracing::info!(board_id = %board.id, "Board created");
                    new_board_name.set(String::new());
                    boards.restart();
                }
                Err(e) => {
                    tracing::error!("Failed to create board: {e}");
                    error.set(visible_error("create board", &e));
                }
            }
            creating.set(false);
        });
    };

    rsx! {
        div {
            class: "flex flex-col gap-6 max-w-2xl",
            h1 { class: "m-0 text-2xl font-bold text-neutral-800", "Your boards" }

            form {
                class: "flex gap-2",
                onsubmit: handle_create,
                input {
                    class: "flex-1",
                    r#type: "text",
                    placeholder: "New board name",
                    value: new_board_name(),
                    oninput: move |evt: FormEvent| new_board_name.set(evt.value()),
                }
                button {
                    r#type: "submit",
                    disabled: creating() || new_board_name().trim().is_empty(),
                    if creating() { "Creating..." } else { "Create board" }
                }
            }

            if let Some(err) = error() {
                div { class: "text-sm text-red-600", "{err}" }
            }

            {match &*boards.read() {
                None => rsx! { p { class: "text-neutral-500", "Loading boards..." } },
                Some(Err(e)) => match visible_error("load boards", e) {
                    Some(message) => rsx! { p { class: "text-red-600", "{message}" } },
                    None => rsx! {},
                },
                Some(Ok(list)) if list.is_empty() => rsx! {
                    p { class: "text-neutral-500", "No boards yet. Create one above." }
                },
                Some(Ok(list)) => rsx! {
                    ul {
                        class: "flex flex-col gap-2 p-0 list-none",
                        for board in list.iter() {
                            BoardLink { key: "{board.id}", board: board.clone() }
                        }
                    }
                },
            }}
        }
    }
}

/// Message to show for a failed request. Auth failures show nothing because
/// the app is already on its way to the login page.
fn visible_error(action: &str, e: &ApiError) -> Option<String> {
    (!e.is_auth()).then(|| format!("Could not {action}: {e}"))
}

#[component]
fn BoardLink(board: Board) -> Element {
    let task_count = board.tasks().len();

    rsx! {
        li {
            class: "p-3 border border-neutral-200 rounded",
            Link {
                to: Route::BoardPage { id: board.id.clone() },
                "{board.name}"
            }
            span { class: "ml-2 text-xs text-neutral-500", "{task_count} tasks" }
        }
    }
}
