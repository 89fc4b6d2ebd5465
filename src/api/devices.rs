use std::sync::Arc;

use axum::{Extension, response::Html};

use crate::{api::ERROR_PAGE, info, server::AppState, spotify::SpotifyClient, warning};

pub async fn devices(Extension(state): Extension<Arc<AppState>>) -> Html<&'static str> {
    let client = SpotifyClient::new(&state.config);

    match client.get_devices().await {
        Ok(devices) if devices.is_empty() => {
            warning!("No devices found.");
            Html("<h4>No devices found.</h4>")
        }
        Ok(devices) => {
            println!();
            info!("Devices:");
            for (name, id) in &devices {
                println!("{}: {}", name, id);
            }
            println!();
            Html("<h4>Check console output for devices.</h4>")
        }
        Err(e) => {
            warning!("Listing devices failed: {}", e);
            Html(ERROR_PAGE)
        }
    }
}
