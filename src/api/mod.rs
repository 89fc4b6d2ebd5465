//! # API Module
//!
//! HTTP handlers for the local redirect server used during authorization.
//!
//! ## Endpoints
//!
//! - [`auth`] - `GET /auth`, redirects the browser to Spotify's authorize page
//!   with a fresh anti-forgery `state`.
//! - [`callback`] - `GET /callback`, verifies `state`, exchanges the code and
//!   prints the refresh token for the operator to put into `REFRESH_TOKEN`.
//! - [`devices`] - `GET /devices`, prints the user's devices and their ids.
//! - [`health`] - `GET /health`, status and version.
//!
//! Handlers receive [`crate::server::AppState`] through an `Extension` layer.

mod auth;
mod callback;
mod devices;
mod health;

pub use auth::auth;
pub use callback::callback;
pub use devices::devices;
pub use health::health;

pub(crate) const ERROR_PAGE: &str =
    "<h4>An error occurred.</h4><p>Check console output for details.</p>";
