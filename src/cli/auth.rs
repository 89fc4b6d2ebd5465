use std::{sync::Arc, time::Duration};

use crate::{
    config::Config,
    error,
    server::{AppState, start_api_server},
    success, warning,
};

/// Runs the authorization-code flow.
///
/// Starts the redirect server in the background, opens `/auth` in the default
/// browser and waits up to two minutes for the callback to deliver a refresh
/// token. The token itself is printed by the callback handler.
pub async fn auth(config: Config) {
    let state = Arc::new(AppState::new(config));

    let server_state = Arc::clone(&state);
    tokio::spawn(async move {
        if let Err(e) = start_api_server(server_state).await {
            warning!("Redirect server stopped: {}", e);
        }
    });

    let url = state.config.local_auth_url();
    if webbrowser::open(&url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            url
        )
    }

    match wait_for_refresh_token(&state).await {
        Some(_) => success!("Authentication successful! Set REFRESH_TOKEN to the value above."),
        None => error!("Authentication failed or timed out."),
    }
}

async fn wait_for_refresh_token(state: &AppState) -> Option<String> {
    use std::time::Instant;

    let max_wait = Duration::from_secs(120);
    let start = Instant::now();

    while start.elapsed() < max_wait {
        if let Some(token) = state.refresh_token().await {
            return Some(token);
        }
        tokio::time::sleep(Duration::from_secs(1)).await;
    }

    None
}
