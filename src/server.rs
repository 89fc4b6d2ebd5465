use std::{collections::HashSet, sync::Arc};

use axum::{Extension, Router, routing::get};
use reqwest::Client;
use tokio::sync::Mutex;

use crate::{Res, api, config::Config, utils};

/// State shared by the redirect server handlers.
pub struct AppState {
    pub config: Config,
    pub http: Client,
    issued_states: Mutex<HashSet<String>>,
    refresh_token: Mutex<Option<String>>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        AppState {
            config,
            http: Client::new(),
            issued_states: Mutex::new(HashSet::new()),
            refresh_token: Mutex::new(None),
        }
    }

    /// Generates and remembers a state value for a new authorization request.
    pub async fn issue_state(&self) -> String {
        let state = utils::generate_state();
        self.issued_states.lock().await.insert(state.clone());
        state
    }

    /// Checks a state value returned on the callback. Each value is accepted
    /// once.
    pub async fn consume_state(&self, state: &str) -> bool {
        self.issued_states.lock().await.remove(state)
    }

    pub async fn store_refresh_token(&self, refresh_token: String) {
        *self.refresh_token.lock().await = Some(refresh_token);
    }

    /// Refresh token captured by the last successful callback.
    pub async fn refresh_token(&self) -> Option<String> {
        self.refresh_token.lock().await.clone()
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/auth", get(api::auth))
        .route("/callback", get(api::callback))
        .route("/devices", get(api::devices))
        .layer(Extension(state))
}

/// Serves the redirect endpoints on `127.0.0.1:<PORT>` until the process
/// exits.
pub async fn start_api_server(state: Arc<AppState>) -> Res<()> {
    let addr = state.config.server_addr();
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
