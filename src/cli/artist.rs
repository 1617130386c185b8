use crate::{
    config::Config,
    error, info,
    pipeline::Outcome,
    spotify::{self, SpotifyClient},
    success,
    types::ArtistTopTracks,
    utils,
    view::View,
};

/// Shows an artist's Spotify popularity and top tracks.
///
/// Authenticates before reading any input; a failed token request ends the
/// process.
pub async fn artist(config: &Config, name: Option<String>, market: Option<String>) {
    info!("Spotify");
    info!("Spotify Web API data ({})", spotify::SOURCE);

    let client = match SpotifyClient::connect(config, market).await {
        Ok(client) => client,
        Err(e) => error!("Spotify authentication failed: {}", e),
    };
    success!("Token obtained successfully!");

    super::drive(&client, name, "Search for an artist: ", present).await;
}

pub fn present(outcome: &Outcome<ArtistTopTracks>) -> View {
    View::from_outcome(outcome, render, warning)
}

pub fn render(_name: &str, record: &ArtistTopTracks) -> String {
    let mut lines = vec![format!(
        "Artist: {} (popularity: {})",
        record.artist.name, record.artist.popularity
    )];

    if record.tracks.is_empty() {
        lines.push("No top tracks available.".to_string());
    }

    lines.extend(record.tracks.iter().map(|track| {
        format!(
            "{}, popularity: {}",
            utils::markdown_link(&track.name, &track.url),
            track.popularity
        )
    }));

    lines.join("\n")
}

pub fn warning(name: &str) -> String {
    format!("No artist found with the name {}.", name)
}
