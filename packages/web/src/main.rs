use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use api::ApiClient;
use store::ClientConfig;
use ui::AuthProvider;
use views::{AppShell, BoardPage, Dashboard, Landing, Login, NotFound, Protected, Register};

mod views;

/// Public pages first, then the guarded ones, then the catch-all. The
/// catch-all has to stay last so it never shadows a real route.
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(AppShell)]
        #[route("/")]
        Landing {},
        #[route("/login?:next")]
        Login { next: String },
        #[route("/register")]
        Register {},
        #[layout(Protected)]
            #[route("/dashboard")]
            Dashboard {},
            #[route("/boards/:id")]
            BoardPage { id: String },
        #[end_layout]
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

impl Route {
    /// Routes rendered inside the [`Protected`] layout.
    fn is_protected(&self) -> bool {
        matches!(self, Route::Dashboard {} | Route::BoardPage { .. })
    }
}

fn main() {
    if let Err(e) = dioxus::logger::init(Level::INFO) {
        eprintln!("Failed to initialise logger: {e}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let client = use_hook(|| {
        let config = ClientConfig::from_env().unwrap_or_else(|e| {
            tracing::error!("{e}; falling back to {}", store::config::DEFAULT_API_URL);
            ClientConfig::default()
        });
        tracing::info!(api = %config.api_base_url, "Starting");
        ApiClient::new(config, ui::make_session())
    });

    rsx! {
        AuthProvider {
            client,
            Router::<Route> {}
        }
    }
}
