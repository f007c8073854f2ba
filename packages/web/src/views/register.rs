//! Registration page view with email/password form.

use dioxus::prelude::*;
use ui::{use_api, use_auth};

use crate::Route;

/// Page-level checks the API wrappers deliberately leave out.
pub(crate) fn validate(name: &str, email: &str, password: &str, confirm: &str) -> Result<(), &'static str> {
    if name.is_empty() {
        return Err("Name is required");
    }
    if email.is_empty() || !email.contains('@') {
        return Err("Please enter a valid email");
    }
    if password.len() < 8 {
        return Err("Password must be at least 8 characters");
    }
    if password != confirm {
        return Err("Passwords do not match");
    }
    Ok(())
}

/// Register page component.
#[component]
pub fn Register() -> Element {
    let auth = use_auth();
    let client = use_api();
    let nav = use_navigator();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // If already logged in, redirect to the dashboard
    if auth().is_authenticated() {
        nav.replace(Route::Dashboard {});
        return rsx! {};
    }

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            error.set(None);

            let n = name().trim().to_string();
            let e = email().trim().to_string();
            let p = password();
            let cp = confirm_password();

            if let Err(message) = validate(&n, &e, &p, &cp) {
                error.set(Some(message.to_string()));
                return;
            }

            loading.set(true);
            match api::auth::sign_up(&client, &n, &e, &p).await {
                Ok(_) => {
                    nav.replace(Route::Dashboard {});
                }
                Err(e) => {
                    tracing::error!("Registration failed: {e}");
                    loading.set(false);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "flex flex-col items-center justify-center min-h-screen p-8 bg-white",

            h1 {
                class: "mb-2 text-neutral-800 font-bold text-[1.75rem]",
                "Create Account"
            }

            p {
                class: "mb-8 text-neutral-600 text-[0.9375rem]",
                "Sign up for Kanban"
            }

            form {
                onsubmit: handle_register,
                class: "flex flex-col gap-3 w-full max-w-[320px]",

                if let Some(err) = error() {
                    div {
                        class: "px-2.5 py-2.5 bg-red-50 border border-red-200 rounded text-red-600 text-[0.8125rem]",
                        "{err}"
                    }
                }

                input {
                    class: "w-full",
                    r#type: "text",
                    placeholder: "Name",
                    value: name(),
                    oninput: move |evt: FormEvent| name.set(evt.value()),
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
                    placeholder: "Password (min 8 characters)",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                input {
                    class: "w-full",
                    r#type: "password",
                    placeholder: "Confirm password",
                    value: confirm_password(),
                    oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                }

                button {
                    class: "w-full text-[0.9375rem] font-medium",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Creating account..." } else { "Sign up" }
                }
            }

            p {
                class: "mt-6 text-sm text-neutral-600",
                "Already have an account? "
                Link {
                    class: "text-primary-500 no-underline",
                    to: Route::Login { next: String::new() },
                    "Sign in"
                }
            }
        }
    }
}
