use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        div {
            class: "flex flex-col items-center justify-center min-h-screen gap-4",
            h1 { class: "m-0 text-2xl font-bold", "Page not found" }
            p { class: "m-0 text-neutral-600", "Nothing lives at {path}." }
            Link { to: Route::Landing {}, "Back home" }
        }
    }
}
