//! # CLI Module
//!
//! User-facing commands of the `spotcue` binary. Each command builds what it
//! needs from the [`crate::config::Config`] it is handed, reports progress
//! with a spinner and prints results with the crate's logging macros.
//!
//! ## Commands
//!
//! - [`auth`] - Runs the authorization flow and prints a refresh token.
//! - [`serve`] - Runs the redirect server until interrupted.
//! - [`search`] - Prints the first track matching a title and artist.
//! - [`play`] - Searches a track and starts it on a device.
//! - [`resume`] / [`pause`] - Playback control on the active device.
//! - [`devices`] - Lists devices in a table.
//!
//! ## Usage
//!
//! ```bash
//! spotcue auth                                 # obtain REFRESH_TOKEN
//! spotcue devices                              # find a DEVICE_ID
//! spotcue play "Teardrop" --artist "Massive Attack"
//! spotcue pause
//! ```
//!
//! Failures terminate the process with a message that says whether the
//! problem is a missing track, the configuration, or something transient.

mod auth;
mod devices;
mod playback;
mod serve;

pub use auth::auth;
pub use devices::devices;
pub use playback::pause;
pub use playback::play;
pub use playback::resume;
pub use playback::search;
pub use serve::serve;

use crate::{error, spotify::SpotifyError};

pub(crate) fn fail(action: &str, e: SpotifyError) -> ! {
    if e.is_not_found() {
        error!("{}", e)
    } else if e.is_misconfiguration() {
        error!("{} failed: {}\nCheck your configuration.", action, e)
    } else if e.is_transient() {
        error!("{} failed: {}\nTry again later.", action, e)
    } else {
        error!("{} failed: {}", action, e)
    }
}
