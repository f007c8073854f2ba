use dioxus::prelude::*;

use crate::auth::use_auth;

/// Top bar with the app title on the left and `children` (actions) on the right.
#[component]
pub fn Navbar(children: Element) -> Element {
    let auth = use_auth();
    let name = auth().user.map(|u| u.display_name().to_string());

    rsx! {
        div {
            class: "flex items-center justify-between px-6 py-3 border-b border-neutral-200",
            span { class: "text-lg font-bold text-neutral-800", "Kanban" }
            div {
                class: "flex items-center gap-4",
                if let Some(name) = name {
                    span { class: "text-sm text-neutral-600", "{name}" }
                }
                {children}
            }
        }
    }
}
