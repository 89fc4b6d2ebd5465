use base64::{Engine, engine::general_purpose::STANDARD};
use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// Spotify application credentials used for HTTP Basic authentication
/// against the token endpoint.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

impl Credentials {
    pub fn new(client_id: &str, client_secret: &str) -> Self {
        Credentials {
            client_id: client_id.to_string(),
            client_secret: client_secret.to_string(),
        }
    }

    /// `base64(client_id:client_secret)`
    pub fn encode(&self) -> String {
        STANDARD.encode(format!("{}:{}", self.client_id, self.client_secret))
    }

    /// Value for the `Authorization` header of a token request.
    pub fn basic_authorization(&self) -> String {
        format!("Basic {}", self.encode())
    }

    /// Decodes an `Authorization` header value (or bare base64 payload) back
    /// into credentials. The pair is split at the first `:`.
    pub fn from_basic_authorization(value: &str) -> Option<Self> {
        let encoded = value.strip_prefix("Basic ").unwrap_or(value).trim();
        let decoded = STANDARD.decode(encoded).ok()?;
        let decoded = String::from_utf8(decoded).ok()?;
        let (client_id, client_secret) = decoded.split_once(':')?;
        Some(Credentials::new(client_id, client_secret))
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

/// Body of a successful `POST /api/token` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: Option<String>,
    pub scope: Option<String>,
    pub expires_in: Option<u64>,
    pub refresh_token: Option<String>,
}

/// A playable track as returned by search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackReference {
    /// `spotify:track:...` URI used to start playback.
    pub internal_uri: String,
    /// `https://open.spotify.com/track/...` link.
    pub external_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub tracks: Option<TrackPage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackPage {
    #[serde(default)]
    pub items: Vec<Track>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub uri: String,
    pub external_urls: ExternalUrls,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExternalUrls {
    pub spotify: String,
}

impl From<Track> for TrackReference {
    fn from(track: Track) -> Self {
        TrackReference {
            internal_uri: track.uri,
            external_url: track.external_urls.spotify,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DevicesResponse {
    #[serde(default)]
    pub devices: Vec<Device>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Device {
    pub name: String,
    /// Restricted devices are reported without an id.
    pub id: Option<String>,
}

#[derive(Tabled)]
pub struct DeviceTableRow {
    pub name: String,
    pub id: String,
}
