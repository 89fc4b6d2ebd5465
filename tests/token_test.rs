mod common;

use mockito::{Matcher, Server};
use reqwest::Client;
use spotcue::{management::TokenManager, spotify::SpotifyError, types::Credentials};

use common::{CLIENT_ID, CLIENT_SECRET, basic_header, token_body};

// Helper function to create a token manager against a mock token endpoint
fn create_manager(server: &Server, refresh_token: Option<&str>) -> TokenManager {
    TokenManager::new(
        Client::new(),
        &format!("{}/api/token", server.url()),
        Credentials::new(CLIENT_ID, CLIENT_SECRET),
        refresh_token.map(str::to_string),
    )
}

#[tokio::test]
async fn test_get_access_token_exchanges_once_and_caches() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/token")
        .match_header("authorization", basic_header().as_str())
        .match_header("content-type", "application/x-www-form-urlencoded")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("grant_type".into(), "refresh_token".into()),
            Matcher::UrlEncoded("refresh_token".into(), "refresh-token".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(token_body("access-1"))
        .expect(1)
        .create_async()
        .await;

    let manager = create_manager(&server, Some("refresh-token"));
    assert_eq!(manager.current_token().await, None);

    for _ in 0..3 {
        assert_eq!(manager.get_access_token().await.unwrap(), "access-1");
    }

    mock.assert_async().await;
}

#[tokio::test]
async fn test_concurrent_first_access_shares_one_exchange() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/token")
        .with_status(200)
        .with_body(token_body("access-1"))
        .expect(1)
        .create_async()
        .await;

    let manager = create_manager(&server, Some("refresh-token"));

    let (a, b, c) = tokio::join!(
        manager.get_access_token(),
        manager.get_access_token(),
        manager.get_access_token()
    );

    assert_eq!(a.unwrap(), "access-1");
    assert_eq!(b.unwrap(), "access-1");
    assert_eq!(c.unwrap(), "access-1");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_refresh_access_token_replaces_token() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/token")
        .with_status(200)
        .with_body(token_body("fresh"))
        .expect(1)
        .create_async()
        .await;

    let manager = create_manager(&server, Some("refresh-token")).with_access_token("stale");
    assert_eq!(manager.get_access_token().await.unwrap(), "stale");

    assert_eq!(manager.refresh_access_token().await.unwrap(), "fresh");
    assert_eq!(manager.current_token().await.as_deref(), Some("fresh"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_failed_refresh_keeps_previous_token() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/token")
        .with_status(400)
        .with_body(r#"{"error":"invalid_grant","error_description":"Invalid refresh token"}"#)
        .expect(1)
        .create_async()
        .await;

    let manager = create_manager(&server, Some("revoked")).with_access_token("stale");

    let err = manager.refresh_access_token().await.unwrap_err();
    match &err {
        SpotifyError::TokenExchange { status, message } => {
            assert_eq!(*status, 400);
            assert_eq!(message, "invalid_grant: Invalid refresh token");
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(err.is_misconfiguration());
    assert!(!err.is_transient());

    assert_eq!(manager.current_token().await.as_deref(), Some("stale"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_failed_first_exchange_leaves_token_unset() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/token")
        .with_status(503)
        .with_body("Service Unavailable")
        .expect(1)
        .create_async()
        .await;

    let manager = create_manager(&server, Some("refresh-token"));

    let err = manager.get_access_token().await.unwrap_err();
    assert!(err.is_transient());
    assert_eq!(manager.current_token().await, None);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_missing_refresh_token_is_reported_without_request() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/token")
        .expect(0)
        .create_async()
        .await;

    let manager = create_manager(&server, None);

    let err = manager.get_access_token().await.unwrap_err();
    assert!(matches!(err, SpotifyError::MissingRefreshToken));
    assert!(err.is_misconfiguration());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_refresh_rejected_reuses_newer_token() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/token")
        .expect(0)
        .create_async()
        .await;

    let manager = create_manager(&server, Some("refresh-token")).with_access_token("newer");

    // Another caller already replaced the rejected token
    assert_eq!(manager.refresh_rejected("older").await.unwrap(), "newer");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_set_implicit_token_uses_client_credentials() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/token")
        .match_header("authorization", basic_header().as_str())
        .match_body(Matcher::UrlEncoded(
            "grant_type".into(),
            "client_credentials".into(),
        ))
        .with_status(200)
        .with_body(token_body("app-token"))
        .expect(1)
        .create_async()
        .await;

    // No refresh token needed for the client-credentials grant
    let manager = create_manager(&server, None);
    manager.set_implicit_token().await.unwrap();

    assert_eq!(manager.get_access_token().await.unwrap(), "app-token");
    mock.assert_async().await;
}
