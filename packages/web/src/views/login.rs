//! Login page view with email/password form.

use dioxus::prelude::*;
use ui::{safe_next, use_api, use_auth};

use crate::Route;

/// Where to go after signing in: the remembered path if it is one of ours,
/// the dashboard otherwise.
pub(crate) fn after_login(next: &str) -> Route {
    safe_next(next)
        .and_then(|path| path.parse::<Route>().ok())
        .filter(|route| !matches!(route, Route::Login { .. } | Route::NotFound { .. }))
        .unwrap_or(Route::Dashboard {})
}

/// Login page component.
#[component]
pub fn Login(next: String) -> Element {
    let auth = use_auth();
    let client = use_api();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // If already logged in, go straight on
    if auth().is_authenticated() {
        nav.replace(after_login(&next));
        return rsx! {};
    }

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        let next = next.clone();
        spawn(async move {
            error.set(None);

            let e = email().trim().to_string();
            let p = password();
            if e.is_empty() || p.is_empty() {
                error.set(Some("Email and password are required".to_string()));
                return;
            }

            loading.set(true);
            match api::auth::sign_in(&client, &e, &p).await {
                Ok(_) => {
                    nav.replace(after_login(&next));
                }
                Err(err) => {
                    loading.set(false);
                    let message = if err.is_auth() {
                        "Invalid email or password".to_string()
                    } else {
                        err.to_string()
                    };
                    tracing::error!("Login failed: {err}");
                    error.set(Some(message));
                }
            }
        });
    };

    rsx! {
        div {
            class: "flex flex-col items-center justify-center min-h-screen p-8 bg-white",

            h1 {
                class: "mb-2 text-neutral-800 font-bold text-[1.75rem]",
                "Sign in"
            }

            p {
                class: "mb-8 text-neutral-600 text-[0.9375rem]",
                "Welcome back to Kanban"
            }

            form {
                onsubmit: handle_login,
                class: "flex flex-col gap-3 w-full max-w-[320px]",

                if let Some(err) = error() {
                    div {
                        class: "px-2.5 py-2.5 bg-red-50 border border-red-200 rounded text-red-600 text-[0.8125rem]",
                        "{err}"
                    }
                }

                input {
                    class: "w-full",
                    r#type: "email",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                input {
                    class: "w-full",
                    r#type: "password",
                    placeholder: "Password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                button {
                    class: "w-full text-[0.9375rem] font-medium",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Signing in..." } else { "Sign in" }
                }
            }

            p {
                class: "mt-6 text-sm text-neutral-600",
                "No account yet? "
                Link {
                    class: "text-primary-500 no-underline",
                    to: Route::Register {},
                    "Create one"
                }
            }
        }
    }
}
