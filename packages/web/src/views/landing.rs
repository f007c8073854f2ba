use dioxus::prelude::*;
use ui::use_auth;

use crate::Route;

#[component]
pub fn Landing() -> Element {
    let auth = use_auth();

    rsx! {
        div {
            class: "flex flex-col items-center justify-center min-h-screen p-8 gap-6",
            h1 { class: "m-0 text-3xl font-bold text-neutral-800", "Kanban" }
            p { class: "m-0 text-neutral-600", "Plan work in columns. Move it until it's done." }
            div {
                class: "flex gap-3",
                if auth().is_authenticated() {
                    Link { to: Route::Dashboard {}, "Go to your boards" }
                } else {
                    Link { to: Route::Login { next: String::new() }, "Sign in" }
                    Link { to: Route::Register {}, "Create account" }
                }
            }
        }
    }
}
