//! spotcue library
//!
//! Search for tracks and control playback through the Spotify Web API. The
//! crate covers the OAuth2 authorization-code handshake (via a small local
//! redirect server), access-token lifecycle management, and the handful of
//! player endpoints the `spotcue` binary exposes.
//!
//! # Modules
//!
//! - `api` - HTTP handlers for the local redirect server
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration loading and validation
//! - `management` - Access token lifecycle
//! - `server` - Local HTTP server for the OAuth redirect
//! - `spotify` - Spotify Web API client
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use spotcue::{config, spotify::SpotifyClient};
//!
//! #[tokio::main]
//! async fn main() -> spotcue::Res<()> {
//!     config::load_env().await?;
//!     let client = SpotifyClient::new(&config::Config::from_env()?);
//!     client.pause_playback().await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod management;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Used by the application glue (server, binary) where errors from several
/// sources meet. Library operations return their own typed errors.
///
/// # Example
///
/// ```
/// use spotcue::Res;
///
/// async fn fetch_data() -> Res<String> {
///     Ok("data".to_string())
/// }
/// ```
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints a status line prefixed with a blue `[o]`.
///
/// ```
/// info!("Refreshing access token...");
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a completion line prefixed with a green `[✓]`.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a red `[!]` line and exits the process with status 1.
///
/// Only for the binary and CLI layer. Library code returns errors instead.
///
/// ```
/// error!("Invalid configuration: {}", err);
/// // not reached
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a recoverable problem prefixed with a yellow `[!]`.
///
/// Used where a failure is reported to the caller but the operator should
/// also see it, such as a rejected token or a failed token exchange.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
