//! Headless shell entry point.
//!
//! Wires the application state and reports the start route; a UI host
//! (desktop webview or terminal front end) embeds [`AppState`] the same
//! way this binary does.

use payflow_app::{AppState, Route, landing_route};

fn main() -> anyhow::Result<()> {
    payflow_observability::init();

    let api_url = std::env::var("PAYFLOW_API_URL")
        .unwrap_or_else(|_| "http://localhost:8080/api".to_string());

    let state = AppState::new(&api_url)?;

    let start_route = match state.restore() {
        Some(principal) => {
            tracing::info!(username = %principal.username, "restored persisted session");
            landing_route(&principal)
        }
        None => Route::Login,
    };

    tracing::info!(%api_url, route = %start_route, "payflow shell ready");

    Ok(())
}
