use reqwest::{Client, Url, header::AUTHORIZATION};
use serde_json::Value;

use crate::{
    config::Config,
    spotify::SpotifyError,
    types::{Credentials, TokenResponse},
};

/// Builds the Spotify authorize URL the user is redirected to.
///
/// The `state` value is echoed back on the callback and must be checked
/// against the one issued here.
pub fn authorize_url(config: &Config, state: &str) -> Result<String, SpotifyError> {
    let redirect_uri = config.redirect_uri();
    let url = Url::parse_with_params(
        &config.auth_url,
        &[
            ("response_type", "code"),
            ("client_id", config.client_id.as_str()),
            ("scope", config.scope.as_str()),
            ("redirect_uri", redirect_uri.as_str()),
            ("state", state),
        ],
    )
    .map_err(|e| SpotifyError::InvalidUrl(e.to_string()))?;

    Ok(url.to_string())
}

/// Exchanges an authorization code from the callback for a token pair.
pub async fn exchange_code(
    http: &Client,
    token_url: &str,
    credentials: &Credentials,
    code: &str,
    redirect_uri: &str,
) -> Result<TokenResponse, SpotifyError> {
    request_token(
        http,
        token_url,
        credentials,
        &[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", redirect_uri),
        ],
    )
    .await
}

/// Exchanges a refresh token for a fresh access token.
pub async fn exchange_refresh_token(
    http: &Client,
    token_url: &str,
    credentials: &Credentials,
    refresh_token: &str,
) -> Result<TokenResponse, SpotifyError> {
    request_token(
        http,
        token_url,
        credentials,
        &[
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
        ],
    )
    .await
}

/// Requests an application-scoped token (no user permissions).
pub async fn exchange_client_credentials(
    http: &Client,
    token_url: &str,
    credentials: &Credentials,
) -> Result<TokenResponse, SpotifyError> {
    request_token(
        http,
        token_url,
        credentials,
        &[("grant_type", "client_credentials")],
    )
    .await
}

/// Posts a form-encoded grant request authenticated with HTTP Basic
/// credentials.
async fn request_token(
    http: &Client,
    token_url: &str,
    credentials: &Credentials,
    form: &[(&str, &str)],
) -> Result<TokenResponse, SpotifyError> {
    let response = http
        .post(token_url)
        .header(AUTHORIZATION, credentials.basic_authorization())
        .form(form)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(SpotifyError::TokenExchange {
            status: status.as_u16(),
            message: error_message(&body),
        });
    }

    Ok(response.json::<TokenResponse>().await?)
}

/// Extracts a readable message from a Spotify error body.
///
/// Handles both the Web API envelope (`{"error":{"message":..}}`) and the
/// accounts service form (`{"error":..,"error_description":..}`).
pub(crate) fn error_message(body: &str) -> String {
    let Ok(json) = serde_json::from_str::<Value>(body) else {
        return body.trim().to_string();
    };

    if let Some(message) = json["error"]["message"].as_str() {
        return message.to_string();
    }

    match (json["error"].as_str(), json["error_description"].as_str()) {
        (Some(code), Some(description)) => format!("{}: {}", code, description),
        (Some(code), None) => code.to_string(),
        _ => body.trim().to_string(),
    }
}
