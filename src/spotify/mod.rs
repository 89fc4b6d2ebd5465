//! # Spotify Integration Module
//!
//! Interface to the parts of the Spotify Web API that spotcue uses: the
//! accounts service token endpoint and the search and player endpoints.
//!
//! ## Architecture
//!
//! ```text
//! CLI / redirect server
//!          ↓
//! SpotifyClient (search, play, pause, resume, devices)
//!          ↓
//! send_api_request (bearer auth, single retry on 401)
//!          ↓
//! TokenManager (cached access token, refresh token grant)
//!          ↓
//! reqwest
//! ```
//!
//! ## Modules
//!
//! - [`auth`] - Token grants (authorization code, refresh token, client
//!   credentials) and the authorize URL.
//! - [`client`] - [`SpotifyClient`] and the request dispatcher.
//! - [`search`] - Track search.
//! - [`player`] - Playback control and device listing.
//! - [`error`] - [`SpotifyError`].
//!
//! ## API Coverage
//!
//! - `POST /api/token`
//! - `GET /search`
//! - `PUT /me/player/play`
//! - `PUT /me/player/pause`
//! - `GET /me/player/devices`

pub mod auth;
pub mod client;
pub mod error;
pub mod player;
pub mod search;

pub use client::SpotifyClient;
pub use error::SpotifyError;
