mod common;

use std::{collections::HashMap, sync::Arc};

use axum::{
    Extension,
    extract::Query,
    http::{StatusCode, header::LOCATION},
    response::{IntoResponse, Response},
};
use mockito::{Matcher, Server};
use reqwest::Url;
use spotcue::{api, server::AppState};

use common::{basic_header, test_config};

// Helper function to build shared server state against a mock server
fn create_state(server: &Server) -> Arc<AppState> {
    Arc::new(AppState::new(test_config(&server.url(), &[])))
}

fn location(response: &Response) -> String {
    response
        .headers()
        .get(LOCATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

fn query(pairs: &[(&str, &str)]) -> Query<HashMap<String, String>> {
    Query(
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    )
}

#[tokio::test]
async fn test_health() {
    let response = api::health().await;

    assert_eq!(response.0["status"], "ok");
    assert_eq!(response.0["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_auth_redirects_to_authorize_page() {
    let server = Server::new_async().await;
    let state = create_state(&server);

    let response = api::auth(Extension(Arc::clone(&state))).await;

    assert!(response.status().is_redirection());
    let url = Url::parse(&location(&response)).unwrap();
    assert_eq!(url.host_str(), Some("accounts.spotify.com"));
    assert_eq!(url.path(), "/authorize");

    let params: HashMap<String, String> = url.query_pairs().into_owned().collect();
    assert_eq!(params["response_type"], "code");
    assert_eq!(params["client_id"], common::CLIENT_ID);
    assert_eq!(params["redirect_uri"], "http://localhost:8888/callback");
    assert_eq!(
        params["scope"],
        "user-read-playback-state user-modify-playback-state"
    );

    // The issued state is accepted exactly once
    let issued = &params["state"];
    assert_eq!(issued.len(), 32);
    assert!(state.consume_state(issued).await);
    assert!(!state.consume_state(issued).await);
}

#[tokio::test]
async fn test_callback_rejects_missing_state() {
    let server = Server::new_async().await;
    let state = create_state(&server);

    let response = api::callback(query(&[("code", "abc")]), Extension(state)).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/#error=state_mismatch");
}

#[tokio::test]
async fn test_callback_rejects_unknown_state() {
    let server = Server::new_async().await;
    let state = create_state(&server);
    state.issue_state().await;

    let response = api::callback(
        query(&[("code", "abc"), ("state", "forged")]),
        Extension(state),
    )
    .await;

    assert_eq!(location(&response), "/#error=state_mismatch");
}

#[tokio::test]
async fn test_callback_exchanges_code_for_refresh_token() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/token")
        .match_header("authorization", basic_header().as_str())
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("grant_type".into(), "authorization_code".into()),
            Matcher::UrlEncoded("code".into(), "abc".into()),
            Matcher::UrlEncoded(
                "redirect_uri".into(),
                "http://localhost:8888/callback".into(),
            ),
        ]))
        .with_status(200)
        .with_body(
            r#"{"access_token":"access","token_type":"Bearer","expires_in":3600,"refresh_token":"refresh-123","scope":"user-read-playback-state"}"#,
        )
        .expect(1)
        .create_async()
        .await;

    let state = create_state(&server);
    let issued = state.issue_state().await;

    let response = api::callback(
        query(&[("code", "abc"), ("state", issued.as_str())]),
        Extension(Arc::clone(&state)),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(state.refresh_token().await.as_deref(), Some("refresh-123"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_callback_reports_failed_exchange() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/token")
        .with_status(400)
        .with_body(r#"{"error":"invalid_grant","error_description":"Invalid authorization code"}"#)
        .expect(1)
        .create_async()
        .await;

    let state = create_state(&server);
    let issued = state.issue_state().await;

    let response = api::callback(
        query(&[("code", "expired"), ("state", issued.as_str())]),
        Extension(Arc::clone(&state)),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(state.refresh_token().await, None);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_callback_with_provider_error_skips_exchange() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/token")
        .expect(0)
        .create_async()
        .await;

    let state = create_state(&server);
    let issued = state.issue_state().await;

    let response = api::callback(
        query(&[("error", "access_denied"), ("state", issued.as_str())]),
        Extension(Arc::clone(&state)),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(state.refresh_token().await, None);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_devices_page() {
    let mut server = Server::new_async().await;
    let _token = server
        .mock("POST", "/api/token")
        .with_status(200)
        .with_body(common::token_body("access"))
        .create_async()
        .await;
    let devices = server
        .mock("GET", "/v1/me/player/devices")
        .match_header("authorization", "Bearer access")
        .with_status(200)
        .with_body(r#"{"devices":[{"id":"A","name":"Kitchen"}]}"#)
        .expect(1)
        .create_async()
        .await;

    let state = create_state(&server);
    let page = api::devices(Extension(state)).await;

    assert!(page.0.contains("Check console output"));
    devices.assert_async().await;
}

#[tokio::test]
async fn test_devices_page_without_devices() {
    let mut server = Server::new_async().await;
    let _token = server
        .mock("POST", "/api/token")
        .with_status(200)
        .with_body(common::token_body("access"))
        .create_async()
        .await;
    let _devices = server
        .mock("GET", "/v1/me/player/devices")
        .with_status(200)
        .with_body(r#"{"devices":[]}"#)
        .create_async()
        .await;

    let state = create_state(&server);
    let page = api::devices(Extension(state)).await.into_response();

    assert_eq!(page.status(), StatusCode::OK);
}
