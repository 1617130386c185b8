//! # Spotify Integration Module
//!
//! A small client for the parts of the Spotify Web API the artist lookup
//! needs: the client-credentials token exchange, artist search and an
//! artist's top tracks.
//!
//! ## Flow
//!
//! ```text
//! SpotifyClient::connect
//!     └── POST /api/token  (Basic auth, grant_type=client_credentials)
//!             ↓ bearer token
//! SpotifyClient::search_artist
//!     └── GET /search?q=&type=artist
//!             ↓ artists.items[0]
//! SpotifyClient::top_tracks
//!     └── GET /artists/{id}/top-tracks
//! ```
//!
//! A [`SpotifyClient`] only exists once a token was obtained, so no search can
//! be issued before authentication. Tokens are neither cached nor refreshed;
//! every process run authenticates exactly once.
//!
//! ## Error Handling
//!
//! - Authentication failures are returned as [`crate::errors::AuthError`] and
//!   are fatal for the caller.
//! - Search and top-tracks failures collapse to `None` after being logged.

pub mod artists;
pub mod auth;

use reqwest::Client;

use crate::{config::Config, errors::AuthError};

pub use auth::BearerToken;

pub const SOURCE: &str = "https://developer.spotify.com/documentation/web-api";

pub struct SpotifyClient {
    http: Client,
    api_url: String,
    market: Option<String>,
    token: BearerToken,
}

impl SpotifyClient {
    /// Authenticates with the configured client credentials.
    ///
    /// # Errors
    ///
    /// - [`AuthError::MissingCredential`] if the client id or secret is unset
    /// - [`AuthError::Request`] if the token endpoint fails or answers non-2xx
    /// - [`AuthError::MissingToken`] if the response has no `access_token`
    pub async fn connect(config: &Config, market: Option<String>) -> Result<Self, AuthError> {
        let credentials = config.spotify_credentials()?;
        let http = Client::new();
        let token = auth::authenticate(&http, &config.spotify_token_url, &credentials).await?;

        Ok(Self {
            http,
            api_url: config.spotify_api_url.clone(),
            market: market.or_else(|| config.spotify_market.clone()),
            token,
        })
    }

    pub fn token(&self) -> &BearerToken {
        &self.token
    }
}
