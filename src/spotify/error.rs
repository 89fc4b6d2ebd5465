use reqwest::StatusCode;
use thiserror::Error;

/// Errors returned by the Spotify client and token manager.
#[derive(Debug, Error)]
pub enum SpotifyError {
    /// Network or transport failure, or an unreadable response body.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The token endpoint rejected a grant request.
    #[error("token exchange failed: {status} - {message}")]
    TokenExchange { status: u16, message: String },

    /// A refresh-token grant was needed but none is configured.
    #[error("no refresh token configured. Run spotcue auth and set REFRESH_TOKEN")]
    MissingRefreshToken,

    /// The API rejected the request again after refreshing the token.
    #[error("request unauthorized after token refresh")]
    Unauthorized,

    /// Any other non-success response from the Web API.
    #[error("Spotify API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("no track found for query: {0}")]
    TrackNotFound(String),

    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}

impl SpotifyError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, SpotifyError::TrackNotFound(_))
    }

    /// Errors worth retrying later: transport failures, 429 and 5xx responses.
    pub fn is_transient(&self) -> bool {
        match self {
            SpotifyError::Http(e) => e.is_timeout() || e.is_connect() || e.is_request(),
            SpotifyError::Api { status, .. } | SpotifyError::TokenExchange { status, .. } => {
                is_transient_status(*status)
            }
            _ => false,
        }
    }

    /// Errors that will not go away without fixing credentials or config.
    pub fn is_misconfiguration(&self) -> bool {
        match self {
            SpotifyError::MissingRefreshToken | SpotifyError::InvalidUrl(_) => true,
            SpotifyError::TokenExchange { status, .. } => {
                *status == StatusCode::BAD_REQUEST.as_u16()
                    || *status == StatusCode::UNAUTHORIZED.as_u16()
            }
            _ => false,
        }
    }
}

fn is_transient_status(status: u16) -> bool {
    status == StatusCode::TOO_MANY_REQUESTS.as_u16() || (500..600).contains(&status)
}
