use crate::{cli::fail, config::Config, info, spotify::SpotifyClient, success, utils};

pub async fn search(config: &Config, title: &str, artist: Option<&str>) {
    let client = SpotifyClient::new(config);

    let pb = utils::spinner("Searching track...");
    let result = client.search(title, artist).await;
    pb.finish_and_clear();

    match result {
        Ok(track) => {
            info!("Track URI: {}", track.internal_uri);
            info!("Track URL: {}", track.external_url);
        }
        Err(e) => fail("Search", e),
    }
}

pub async fn play(config: &Config, title: &str, artist: Option<&str>, device_id: Option<&str>) {
    let client = SpotifyClient::new(config);

    let pb = utils::spinner("Starting playback...");
    let result = client.play_track(title, artist, device_id).await;
    pb.finish_and_clear();

    match result {
        Ok(track) => success!("Playing {}", track.external_url),
        Err(e) => fail("Playback", e),
    }
}

pub async fn resume(config: &Config) {
    let client = SpotifyClient::new(config);

    match client.resume_playback().await {
        Ok(()) => success!("Playback resumed."),
        Err(e) => fail("Resume", e),
    }
}

pub async fn pause(config: &Config) {
    let client = SpotifyClient::new(config);

    match client.pause_playback().await {
        Ok(()) => success!("Playback paused."),
        Err(e) => fail("Pause", e),
    }
}
