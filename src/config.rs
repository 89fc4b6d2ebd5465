//! Configuration management for spotcue.
//!
//! Configuration is read once at startup into a [`Config`] value that is passed
//! explicitly to everything that needs it. Values come from, in order of
//! priority:
//! 1. Process environment variables
//! 2. `.env` file in the local data directory (`spotcue/.env`)
//! 3. `.env` file in the current working directory
//! 4. Built-in defaults for the Spotify endpoints

use std::{fmt, net::SocketAddr, path::PathBuf};

use reqwest::Url;
use thiserror::Error;

use crate::types::Credentials;

pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_SCOPE: &str = "user-read-playback-state user-modify-playback-state";

/// Placeholder in `REDIRECT_URI` that is replaced with the configured port.
pub const PORT_PLACEHOLDER: &str = "{PORT}";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{key} is invalid: {reason}")]
    Invalid { key: &'static str, reason: String },

    #[error("cannot load environment: {0}")]
    Env(String),
}

/// Runtime configuration.
///
/// Required: `CLIENT_ID`, `CLIENT_SECRET`, `REDIRECT_URI`, `PORT`.
/// Optional: `REFRESH_TOKEN`, `MARKET`, `DEVICE_ID` and the `SPOTIFY_API_*`
/// endpoint overrides.
#[derive(Clone)]
pub struct Config {
    pub client_id: String,
    pub client_secret: String,
    /// Redirect URI as configured, possibly containing `{PORT}`.
    pub redirect_uri_template: String,
    pub port: u16,
    pub refresh_token: Option<String>,
    pub market: Option<String>,
    pub device_id: Option<String>,
    pub api_url: String,
    pub auth_url: String,
    pub token_url: String,
    pub scope: String,
}

impl Config {
    /// Builds the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// Values are trimmed and empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let required = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        let client_id = required("CLIENT_ID")?;
        let client_secret = required("CLIENT_SECRET")?;
        let redirect_uri_template = required("REDIRECT_URI")?;
        let port = required("PORT")?
            .parse::<u16>()
            .map_err(|e| ConfigError::Invalid {
                key: "PORT",
                reason: e.to_string(),
            })?;

        let config = Config {
            client_id,
            client_secret,
            redirect_uri_template,
            port,
            refresh_token: get("REFRESH_TOKEN"),
            market: get("MARKET"),
            device_id: get("DEVICE_ID"),
            api_url: endpoint(get("SPOTIFY_API_URL"), DEFAULT_API_URL),
            auth_url: endpoint(get("SPOTIFY_API_AUTH_URL"), DEFAULT_AUTH_URL),
            token_url: endpoint(get("SPOTIFY_API_TOKEN_URL"), DEFAULT_TOKEN_URL),
            scope: get("SPOTIFY_API_AUTH_SCOPE").unwrap_or_else(|| DEFAULT_SCOPE.to_string()),
        };

        Url::parse(&config.redirect_uri()).map_err(|e| ConfigError::Invalid {
            key: "REDIRECT_URI",
            reason: e.to_string(),
        })?;

        Ok(config)
    }

    /// Redirect URI with `{PORT}` substituted.
    pub fn redirect_uri(&self) -> String {
        self.redirect_uri_template
            .replace(PORT_PLACEHOLDER, &self.port.to_string())
    }

    pub fn credentials(&self) -> Credentials {
        Credentials::new(&self.client_id, &self.client_secret)
    }

    /// Address the local redirect server binds to.
    pub fn server_addr(&self) -> SocketAddr {
        SocketAddr::from(([127, 0, 0, 1], self.port))
    }

    /// Local URL that starts the authorization flow.
    pub fn local_auth_url(&self) -> String {
        format!("http://localhost:{}/auth", self.port)
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("redirect_uri_template", &self.redirect_uri_template)
            .field("port", &self.port)
            .field(
                "refresh_token",
                &self.refresh_token.as_ref().map(|_| "<redacted>"),
            )
            .field("market", &self.market)
            .field("device_id", &self.device_id)
            .field("api_url", &self.api_url)
            .field("auth_url", &self.auth_url)
            .field("token_url", &self.token_url)
            .field("scope", &self.scope)
            .finish()
    }
}

fn endpoint(value: Option<String>, default: &str) -> String {
    value
        .unwrap_or_else(|| default.to_string())
        .trim_end_matches('/')
        .to_string()
}

/// Loads environment variables from `.env` files.
///
/// The file in the platform-specific local data directory is read first:
/// - Linux: `~/.local/share/spotcue/.env`
/// - macOS: `~/Library/Application Support/spotcue/.env`
/// - Windows: `%LOCALAPPDATA%/spotcue/.env`
///
/// A `.env` in the working directory is read afterwards. Neither file is
/// required and neither overrides variables that are already set.
///
/// # Errors
///
/// Fails if the data directory cannot be created or an existing `.env` file
/// cannot be parsed.
pub async fn load_env() -> Result<(), ConfigError> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spotcue/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| ConfigError::Env(e.to_string()))?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| ConfigError::Env(e.to_string()))?;
    }

    if let Err(e) = dotenv::dotenv() {
        if !e.not_found() {
            return Err(ConfigError::Env(e.to_string()));
        }
    }

    Ok(())
}
