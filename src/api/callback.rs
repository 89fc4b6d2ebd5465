use std::{collections::HashMap, sync::Arc};

use axum::{
    Extension,
    extract::Query,
    response::{Html, IntoResponse, Redirect, Response},
};

use crate::{api::ERROR_PAGE, server::AppState, spotify, success, warning};

pub async fn callback(
    Query(params): Query<HashMap<String, String>>,
    Extension(state): Extension<Arc<AppState>>,
) -> Response {
    let issued = match params.get("state") {
        Some(value) => state.consume_state(value).await,
        None => false,
    };
    if !issued {
        return Redirect::to("/#error=state_mismatch").into_response();
    }

    if let Some(error) = params.get("error") {
        warning!("Authorization was not granted: {}", error);
        return Html("<h4>Authorization failed.</h4>").into_response();
    }

    let Some(code) = params.get("code") else {
        return Html("<h4>Missing authorization code.</h4>").into_response();
    };

    let config = &state.config;
    let token = spotify::auth::exchange_code(
        &state.http,
        &config.token_url,
        &config.credentials(),
        code,
        &config.redirect_uri(),
    )
    .await;

    match token {
        Ok(token) => match token.refresh_token {
            Some(refresh_token) => {
                println!();
                success!("Add REFRESH_TOKEN to your environment:");
                println!("{}", refresh_token);
                println!();

                state.store_refresh_token(refresh_token).await;
                Html("<h2>Authentication successful.</h2><p>Check console output for token.</p>")
                    .into_response()
            }
            None => {
                warning!("Token response did not contain a refresh token.");
                Html(ERROR_PAGE).into_response()
            }
        },
        Err(e) => {
            warning!("Token exchange failed: {}", e);
            Html(ERROR_PAGE).into_response()
        }
    }
}
