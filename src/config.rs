//! Configuration management for the lookup tools.
//!
//! Environment variables are read exactly once, at startup, into a [`Config`]
//! value that is passed to every API client. Nothing else in the crate reads
//! the process environment.
//!
//! The loading order is:
//! 1. Environment variables (highest priority)
//! 2. `.env` in the current working directory
//! 3. `.env` in the local data directory (`<data_local_dir>/lookupcli/.env`)
//! 4. Built-in defaults for the API base URLs

use std::{env, fmt, path::PathBuf};

use crate::errors::ConfigError;

pub const IBGE_API_URL: &str = "https://servicodados.ibge.gov.br/api/v2/censos/nomes";
pub const OPENWEATHER_API_URL: &str = "https://api.openweathermap.org/data/2.5/weather";
pub const SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";
pub const SPOTIFY_API_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

/// Loads `.env` files from the working directory and the local data directory.
///
/// Creates `<data_local_dir>/lookupcli` if it does not exist yet so users have
/// an obvious place to drop their credentials. Missing `.env` files are not an
/// error; variables that are already set are never overridden.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/lookupcli/.env`
/// - macOS: `~/Library/Application Support/lookupcli/.env`
/// - Windows: `%LOCALAPPDATA%/lookupcli/.env`
///
/// # Errors
///
/// Returns an error string if the data directory cannot be created or an
/// existing `.env` file cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let path = env_file_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    // cwd first so a project-local file wins over the per-user one
    load_env_files(&[PathBuf::from(".env"), path])
}

/// Loads each `.env` file in order, skipping the ones that do not exist.
///
/// Variables already present in the environment, including those set by an
/// earlier file, keep their value.
pub fn load_env_files(paths: &[PathBuf]) -> Result<(), String> {
    for path in paths {
        match dotenv::from_path(path) {
            Ok(()) => {}
            Err(e) if e.not_found() => {}
            Err(e) => return Err(format!("{}: {}", path.display(), e)),
        }
    }
    Ok(())
}

/// Location of the per-user `.env` file.
pub fn env_file_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("lookupcli/.env");
    path
}

/// Everything the API clients need, resolved once at startup.
#[derive(Clone)]
pub struct Config {
    pub ibge_api_url: String,
    pub openweather_api_url: String,
    pub openweather_api_key: Option<String>,
    pub spotify_api_url: String,
    pub spotify_token_url: String,
    pub spotify_client_id: Option<String>,
    pub spotify_client_secret: Option<String>,
    pub spotify_market: Option<String>,
}

/// The client-credentials pair used for the Spotify token request.
#[derive(Clone)]
pub struct SpotifyCredentials {
    pub client_id: String,
    pub client_secret: String,
}

impl fmt::Debug for SpotifyCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpotifyCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

impl Config {
    /// Builds the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_source(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// Values are trimmed; empty values are treated as unset.
    pub fn from_source<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let url = |key: &str, default: &str| {
            get(key)
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or_else(|| default.to_string())
        };

        Config {
            ibge_api_url: url("IBGE_API_URL", IBGE_API_URL),
            openweather_api_url: url("OPENWEATHER_API_URL", OPENWEATHER_API_URL),
            openweather_api_key: get("OPENWEATHER_API_KEY")
                .or_else(|| get("CHAVE_API_OPENWEATHER")),
            spotify_api_url: url("SPOTIFY_API_URL", SPOTIFY_API_URL),
            spotify_token_url: url("SPOTIFY_API_TOKEN_URL", SPOTIFY_API_TOKEN_URL),
            spotify_client_id: get("SPOTIFY_CLIENT_ID"),
            spotify_client_secret: get("SPOTIFY_CLIENT_SECRET"),
            spotify_market: get("SPOTIFY_MARKET"),
        }
    }

    pub fn openweather_api_key(&self) -> Result<&str, ConfigError> {
        self.openweather_api_key
            .as_deref()
            .ok_or(ConfigError::Missing("OPENWEATHER_API_KEY"))
    }

    pub fn spotify_credentials(&self) -> Result<SpotifyCredentials, ConfigError> {
        let client_id = self
            .spotify_client_id
            .clone()
            .ok_or(ConfigError::Missing("SPOTIFY_CLIENT_ID"))?;
        let client_secret = self
            .spotify_client_secret
            .clone()
            .ok_or(ConfigError::Missing("SPOTIFY_CLIENT_SECRET"))?;
        Ok(SpotifyCredentials {
            client_id,
            client_secret,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_source(|_| None)
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |v: &Option<String>| v.as_ref().map(|_| "<redacted>");
        f.debug_struct("Config")
            .field("ibge_api_url", &self.ibge_api_url)
            .field("openweather_api_url", &self.openweather_api_url)
            .field("openweather_api_key", &redact(&self.openweather_api_key))
            .field("spotify_api_url", &self.spotify_api_url)
            .field("spotify_token_url", &self.spotify_token_url)
            .field("spotify_client_id", &self.spotify_client_id)
            .field("spotify_client_secret", &redact(&self.spotify_client_secret))
            .field("spotify_market", &self.spotify_market)
            .finish()
    }
}
