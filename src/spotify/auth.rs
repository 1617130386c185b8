use std::fmt;

use log::debug;
use reqwest::Client;

use crate::{config::SpotifyCredentials, errors::AuthError, http, types::TokenResponse};

/// Access token from the client-credentials flow.
///
/// `Debug` never prints the token itself.
#[derive(Clone)]
pub struct BearerToken {
    access_token: String,
    pub expires_in: Option<u64>,
}

impl BearerToken {
    pub fn new(access_token: String, expires_in: Option<u64>) -> Self {
        Self {
            access_token,
            expires_in,
        }
    }

    pub fn secret(&self) -> &str {
        &self.access_token
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BearerToken")
            .field("access_token", &"<redacted>")
            .field("expires_in", &self.expires_in)
            .finish()
    }
}

/// Requests an app token with the OAuth 2.0 client-credentials grant.
///
/// The client id and secret are sent as HTTP Basic credentials and the form
/// body only carries `grant_type=client_credentials`. There is no retry; any
/// failure is returned to the caller, which treats it as fatal.
///
/// # Example
///
/// ```
/// let token = authenticate(&Client::new(), &config.spotify_token_url, &credentials).await?;
/// ```
pub async fn authenticate(
    client: &Client,
    token_url: &str,
    credentials: &SpotifyCredentials,
) -> Result<BearerToken, AuthError> {
    debug!("Requesting Spotify token for client {}", credentials.client_id);

    let request = client
        .post(token_url)
        .basic_auth(&credentials.client_id, Some(&credentials.client_secret))
        .form(&[("grant_type", "client_credentials")]);

    let json = http::send_json(request).await?;
    let res: TokenResponse =
        serde_json::from_value(json).map_err(|_| AuthError::MissingToken)?;

    match res.access_token {
        Some(token) if !token.is_empty() => Ok(BearerToken::new(token, res.expires_in)),
        _ => Err(AuthError::MissingToken),
    }
}
