use std::sync::Arc;

use crate::{
    config::Config,
    error, info,
    server::{AppState, start_api_server},
};

pub async fn serve(config: Config) {
    let state = Arc::new(AppState::new(config));

    info!(
        "Open {} in your web browser",
        state.config.local_auth_url()
    );

    if let Err(e) = start_api_server(state).await {
        error!("Redirect server failed: {}", e);
    }
}
