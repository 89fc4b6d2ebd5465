use reqwest::{
    Client, Method, Response, StatusCode,
    header::{AUTHORIZATION, CONTENT_TYPE},
};
use serde_json::Value;

use crate::{
    config::Config,
    management::TokenManager,
    spotify::{SpotifyError, auth},
    warning,
};

/// Spotify Web API client.
///
/// Every call goes through [`SpotifyClient::send_api_request`], which attaches
/// the bearer token and retries once with a refreshed token when the API
/// answers 401.
pub struct SpotifyClient {
    http: Client,
    api_url: String,
    pub(crate) market: Option<String>,
    pub(crate) default_device: Option<String>,
    tokens: TokenManager,
}

impl SpotifyClient {
    pub fn new(config: &Config) -> Self {
        let http = Client::new();
        let tokens = TokenManager::new(
            http.clone(),
            &config.token_url,
            config.credentials(),
            config.refresh_token.clone(),
        );

        SpotifyClient {
            http,
            api_url: config.api_url.clone(),
            market: config.market.clone(),
            default_device: config.device_id.clone(),
            tokens,
        }
    }

    /// Seeds the token slot, e.g. with a token obtained out of band.
    pub fn with_access_token(mut self, token: &str) -> Self {
        self.tokens = self.tokens.with_access_token(token);
        self
    }

    pub fn tokens(&self) -> &TokenManager {
        &self.tokens
    }

    /// Absolute URL for an API path such as `/me/player/play`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_url, path.trim_start_matches('/'))
    }

    /// Sends an authenticated request to the Web API.
    ///
    /// A 401 on the first attempt refreshes the token and resubmits the same
    /// request once. A second 401 yields [`SpotifyError::Unauthorized`]; other
    /// non-success statuses yield [`SpotifyError::Api`].
    pub async fn send_api_request(
        &self,
        method: Method,
        url: &str,
        params: &[(&str, String)],
        body: Option<&Value>,
    ) -> Result<Response, SpotifyError> {
        let token = self.tokens.get_access_token().await?;
        let response = self
            .dispatch(method.clone(), url, params, body, &token)
            .await?;

        if response.status() != StatusCode::UNAUTHORIZED {
            return check_status(response).await;
        }

        warning!("Access token was rejected, retrying with a fresh one.");
        let token = self.tokens.refresh_rejected(&token).await?;
        let response = self.dispatch(method, url, params, body, &token).await?;

        if response.status() == StatusCode::UNAUTHORIZED {
            return Err(SpotifyError::Unauthorized);
        }

        check_status(response).await
    }

    async fn dispatch(
        &self,
        method: Method,
        url: &str,
        params: &[(&str, String)],
        body: Option<&Value>,
        token: &str,
    ) -> Result<Response, SpotifyError> {
        let mut request = self
            .http
            .request(method, url)
            .header(AUTHORIZATION, format!("Bearer {}", token))
            .header(CONTENT_TYPE, "application/json");

        if !params.is_empty() {
            request = request.query(params);
        }

        if let Some(body) = body {
            request = request.json(body);
        }

        Ok(request.send().await?)
    }
}

async fn check_status(response: Response) -> Result<Response, SpotifyError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(SpotifyError::Api {
        status: status.as_u16(),
        message: auth::error_message(&body),
    })
}
