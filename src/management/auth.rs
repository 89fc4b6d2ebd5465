use reqwest::Client;
use tokio::sync::Mutex;

use crate::{
    info,
    spotify::{SpotifyError, auth},
    types::Credentials,
    warning,
};

/// Owns the bearer token used for Web API calls.
///
/// The token starts out absent, is fetched on first access and is replaced
/// wholesale whenever it is refreshed. Expiry is not tracked; a rejected
/// token is detected by the request dispatcher and triggers a refresh.
///
/// The slot is held locked across token exchanges, so callers racing for a
/// token share a single exchange.
pub struct TokenManager {
    http: Client,
    token_url: String,
    credentials: Credentials,
    refresh_token: Option<String>,
    token: Mutex<Option<String>>,
}

impl TokenManager {
    pub fn new(
        http: Client,
        token_url: &str,
        credentials: Credentials,
        refresh_token: Option<String>,
    ) -> Self {
        TokenManager {
            http,
            token_url: token_url.to_string(),
            credentials,
            refresh_token,
            token: Mutex::new(None),
        }
    }

    /// Starts out holding `token` instead of an empty slot.
    pub fn with_access_token(mut self, token: &str) -> Self {
        self.token = Mutex::new(Some(token.to_string()));
        self
    }

    /// Returns the cached token, exchanging the refresh token for one first
    /// if none is held yet.
    pub async fn get_access_token(&self) -> Result<String, SpotifyError> {
        let mut token = self.token.lock().await;
        if let Some(current) = token.as_ref() {
            return Ok(current.clone());
        }

        let fresh = self.exchange_refresh_token().await?;
        *token = Some(fresh.clone());
        Ok(fresh)
    }

    /// Unconditionally exchanges the refresh token for a new access token.
    ///
    /// On failure the previously held token (or its absence) is kept.
    pub async fn refresh_access_token(&self) -> Result<String, SpotifyError> {
        let mut token = self.token.lock().await;
        let fresh = self.exchange_refresh_token().await?;
        *token = Some(fresh.clone());
        Ok(fresh)
    }

    /// Replaces a token the API rejected.
    ///
    /// If the slot no longer holds `rejected`, another caller has refreshed
    /// in the meantime and that token is returned without a new exchange.
    pub async fn refresh_rejected(&self, rejected: &str) -> Result<String, SpotifyError> {
        let mut token = self.token.lock().await;
        if let Some(current) = token.as_ref().filter(|current| current.as_str() != rejected) {
            return Ok(current.clone());
        }

        let fresh = self.exchange_refresh_token().await?;
        *token = Some(fresh.clone());
        Ok(fresh)
    }

    /// Initializes the slot with an application-scoped token from the
    /// client-credentials grant. Such a token cannot control playback.
    pub async fn set_implicit_token(&self) -> Result<(), SpotifyError> {
        let mut token = self.token.lock().await;
        match auth::exchange_client_credentials(&self.http, &self.token_url, &self.credentials)
            .await
        {
            Ok(response) => {
                *token = Some(response.access_token);
                Ok(())
            }
            Err(e) => {
                warning!("Client credentials exchange failed: {}", e);
                Err(e)
            }
        }
    }

    /// Token currently held, without fetching one.
    pub async fn current_token(&self) -> Option<String> {
        self.token.lock().await.clone()
    }

    async fn exchange_refresh_token(&self) -> Result<String, SpotifyError> {
        let Some(refresh_token) = self.refresh_token.as_deref() else {
            return Err(SpotifyError::MissingRefreshToken);
        };

        info!("Refreshing access token...");
        match auth::exchange_refresh_token(
            &self.http,
            &self.token_url,
            &self.credentials,
            refresh_token,
        )
        .await
        {
            Ok(response) => Ok(response.access_token),
            Err(e) => {
                warning!("Refreshing access token failed: {}", e);
                Err(e)
            }
        }
    }
}
