//! Authentication context and hooks for the UI.
//!
//! [`AuthProvider`] puts the [`ApiClient`] (and through it the session) into
//! context, and mirrors the session's `watch` channel into a signal so
//! components re-render on login/logout.

use api::{ApiClient, AuthSnapshot, SessionEvent};
use dioxus::prelude::*;
use tokio::sync::broadcast::error::RecvError;

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthSnapshot> {
    use_context::<Signal<AuthSnapshot>>()
}

/// The API client provided by [`AuthProvider`].
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}

/// Call `on_event` for every [`SessionEvent`] for as long as the calling
/// component is mounted.
pub fn use_session_events(mut on_event: impl FnMut(SessionEvent) + 'static) {
    let client = use_api();
    use_hook(move || {
        let mut events = client.session().navigation();
        spawn(async move {
            loop {
                match events.recv().await {
                    Ok(event) => on_event(event),
                    Err(RecvError::Lagged(skipped)) => {
                        tracing::debug!("Skipped {skipped} session events");
                    }
                    Err(RecvError::Closed) => break,
                }
            }
        });
    });
}

/// Provider component that owns the auth context.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(client: ApiClient, children: Element) -> Element {
    let mut auth_state = use_signal(|| client.session().snapshot());
    let client = use_context_provider(|| client);
    use_context_provider(|| auth_state);

    use_future(move || {
        let session = client.session().clone();
        async move {
            let mut changes = session.subscribe();
            auth_state.set(changes.borrow_and_update().clone());
            while changes.changed().await.is_ok() {
                let next = changes.borrow_and_update().clone();
                auth_state.set(next);
            }
        }
    });

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
    onlogout: Option<EventHandler<()>>,
) -> Element {
    let client = use_api();

    let onclick = move |_| {
        api::auth::sign_out(client.session());
        if let Some(handler) = onlogout {
            handler.call(());
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
