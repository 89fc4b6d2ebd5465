use std::sync::Arc;

use axum::{
    Extension,
    response::{Html, IntoResponse, Redirect, Response},
};

use crate::{api::ERROR_PAGE, server::AppState, spotify, warning};

pub async fn auth(Extension(state): Extension<Arc<AppState>>) -> Response {
    let csrf = state.issue_state().await;

    match spotify::auth::authorize_url(&state.config, &csrf) {
        Ok(url) => Redirect::to(&url).into_response(),
        Err(e) => {
            warning!("Cannot build authorize URL: {}", e);
            Html(ERROR_PAGE).into_response()
        }
    }
}
