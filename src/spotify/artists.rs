use crate::{
    http, mapping,
    pipeline::Lookup,
    spotify::SpotifyClient,
    types::{ArtistSummary, ArtistTopTracks, TrackEntry},
};

impl SpotifyClient {
    /// Best match for `name` among Spotify artists.
    ///
    /// Returns `None` when the search fails or finds no artist.
    pub async fn search_artist(&self, name: &str) -> Option<ArtistSummary> {
        let request = self
            .http
            .get(format!("{uri}/search", uri = self.api_url))
            .query(&[("q", name), ("type", "artist")])
            .bearer_auth(self.token.secret());

        let raw = http::fetch_json(request).await?;
        mapping::first_artist(&raw)
    }

    /// Top tracks of an artist, in Spotify's order.
    pub async fn top_tracks(&self, artist_id: &str) -> Option<Vec<TrackEntry>> {
        let url = http::join_segment(&format!("{}/artists", self.api_url), artist_id)
            .and_then(|url| http::join_segment(url.as_str(), "top-tracks"));
        let url = match url {
            Ok(url) => url,
            Err(e) => {
                log::warn!("Request error --> {}", e);
                return None;
            }
        };

        let mut request = self.http.get(url).bearer_auth(self.token.secret());
        if let Some(market) = &self.market {
            request = request.query(&[("market", market)]);
        }

        let raw = http::fetch_json(request).await?;
        mapping::top_tracks(&raw)
    }
}

impl Lookup for SpotifyClient {
    type Record = ArtistTopTracks;

    async fn fetch(&self, query: &str) -> Option<ArtistTopTracks> {
        // no artist, no top-tracks call
        let artist = self.search_artist(query).await?;
        let tracks = self.top_tracks(&artist.id).await?;
        Some(ArtistTopTracks { artist, tracks })
    }
}
