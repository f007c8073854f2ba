//! Route layouts: the app-wide shell and the auth guard for protected pages.

use api::SessionEvent;
use dioxus::prelude::*;
use ui::{guard, use_auth, use_session_events, GuardDecision, LogoutButton, Navbar};

use crate::Route;

/// Wraps every route. Reacts to [`SessionEvent::LoginRequired`] on public
/// pages by sending the user to login and remembering where they were.
///
/// Protected pages are left to [`Protected`], which redirects as soon as the
/// cleared session reaches the auth signal, so each expiry navigates once.
#[component]
pub fn AppShell() -> Element {
    let nav = use_navigator();

    use_session_events(move |event| match event {
        SessionEvent::LoginRequired => {
            let current = router().current::<Route>();
            if matches!(current, Route::Login { .. }) || current.is_protected() {
                return;
            }
            tracing::info!("Session expired, redirecting to login");
            nav.replace(Route::Login {
                next: current.to_string(),
            });
        }
    });

    rsx! {
        Outlet::<Route> {}
    }
}

/// Layout for routes that require a credential.
#[component]
pub fn Protected() -> Element {
    let auth = use_auth();
    let route = use_route::<Route>();
    let nav = use_navigator();

    match guard(auth().is_authenticated(), &route.to_string()) {
        GuardDecision::Allowed => rsx! {
            Navbar {
                LogoutButton {
                    class: "text-sm",
                    onlogout: move |_| {
                        nav.replace(Route::Landing {});
                    },
                }
            }
            main {
                class: "p-6",
                Outlet::<Route> {}
            }
        },
        GuardDecision::Denied { next } => {
            nav.replace(Route::Login { next });
            rsx! {}
        }
    }
}
