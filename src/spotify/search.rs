use reqwest::Method;

use crate::{
    spotify::{SpotifyClient, SpotifyError},
    types::{SearchResponse, TrackReference},
};

impl SpotifyClient {
    /// Searches for a track and returns the first hit.
    ///
    /// The query is `title` or `title artist:<artist>`, restricted to the
    /// configured market when one is set. An empty result is reported as
    /// [`SpotifyError::TrackNotFound`].
    pub async fn search(
        &self,
        title: &str,
        artist: Option<&str>,
    ) -> Result<TrackReference, SpotifyError> {
        let query = search_query(title, artist);

        let mut params = vec![
            ("q", query.clone()),
            ("type", "track".to_string()),
            ("limit", "1".to_string()),
        ];
        if let Some(market) = &self.market {
            params.push(("market", market.clone()));
        }

        let response = self
            .send_api_request(Method::GET, &self.endpoint("/search"), &params, None)
            .await?;
        let result = response.json::<SearchResponse>().await?;

        result
            .tracks
            .and_then(|page| page.items.into_iter().next())
            .map(TrackReference::from)
            .ok_or(SpotifyError::TrackNotFound(query))
    }
}

/// Builds the search query string, adding an `artist:` filter when an artist
/// is given.
pub fn search_query(title: &str, artist: Option<&str>) -> String {
    match artist.map(str::trim).filter(|artist| !artist.is_empty()) {
        Some(artist) => format!("{} artist:{}", title.trim(), artist),
        None => title.trim().to_string(),
    }
}
