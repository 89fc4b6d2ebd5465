use std::collections::BTreeMap;

use reqwest::Method;
use serde_json::json;

use crate::{
    spotify::{SpotifyClient, SpotifyError},
    types::{Device, DevicesResponse, TrackReference},
};

impl SpotifyClient {
    /// Searches for a track and starts playing it.
    ///
    /// Playback targets `device_id`, else the configured default device, else
    /// whatever device Spotify considers active. Returns the track that was
    /// started.
    pub async fn play_track(
        &self,
        title: &str,
        artist: Option<&str>,
        device_id: Option<&str>,
    ) -> Result<TrackReference, SpotifyError> {
        let track = self.search(title, artist).await?;

        let params: Vec<(&str, String)> =
            target_device(device_id, self.default_device.as_deref())
                .map(|id| vec![("device_id", id.to_string())])
                .unwrap_or_default();
        let body = json!({ "uris": [track.internal_uri] });

        self.send_api_request(
            Method::PUT,
            &self.endpoint("/me/player/play"),
            &params,
            Some(&body),
        )
        .await?;

        Ok(track)
    }

    /// Resumes playback on the currently active device.
    pub async fn resume_playback(&self) -> Result<(), SpotifyError> {
        self.send_api_request(Method::PUT, &self.endpoint("/me/player/play"), &[], None)
            .await?;
        Ok(())
    }

    /// Pauses playback on the currently active device.
    pub async fn pause_playback(&self) -> Result<(), SpotifyError> {
        self.send_api_request(Method::PUT, &self.endpoint("/me/player/pause"), &[], None)
            .await?;
        Ok(())
    }

    /// Lists the user's devices as a name to id map.
    pub async fn get_devices(&self) -> Result<BTreeMap<String, String>, SpotifyError> {
        let response = self
            .send_api_request(
                Method::GET,
                &self.endpoint("/me/player/devices"),
                &[],
                None,
            )
            .await?;
        let result = response.json::<DevicesResponse>().await?;

        Ok(device_map(result.devices))
    }
}

/// Picks the playback device: explicit id first, then the configured default.
/// Empty ids count as unset.
pub fn target_device<'a>(explicit: Option<&'a str>, default: Option<&'a str>) -> Option<&'a str> {
    explicit
        .filter(|id| !id.is_empty())
        .or(default.filter(|id| !id.is_empty()))
}

/// Folds devices into a name-keyed map. Later devices win on duplicate names;
/// devices without an id are skipped.
pub fn device_map(devices: Vec<Device>) -> BTreeMap<String, String> {
    devices
        .into_iter()
        .filter_map(|device| device.id.map(|id| (device.name, id)))
        .collect()
}
