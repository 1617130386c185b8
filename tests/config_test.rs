use std::{collections::HashMap, env, fs, path::PathBuf};

use lookupcli::{config::*, errors::ConfigError};

fn config_from(vars: &[(&str, &str)]) -> Config {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Config::from_source(|key| vars.get(key).cloned())
}

#[test]
fn test_defaults() {
    let config = config_from(&[]);

    assert_eq!(config.ibge_api_url, IBGE_API_URL);
    assert_eq!(config.openweather_api_url, OPENWEATHER_API_URL);
    assert_eq!(config.spotify_api_url, SPOTIFY_API_URL);
    assert_eq!(config.spotify_token_url, SPOTIFY_API_TOKEN_URL);
    assert!(config.openweather_api_key.is_none());
    assert!(config.spotify_market.is_none());
}

#[test]
fn test_overrides_trim_trailing_slash() {
    let config = config_from(&[("SPOTIFY_API_URL", "http://localhost:9000/v1/")]);
    assert_eq!(config.spotify_api_url, "http://localhost:9000/v1");
}

#[test]
fn test_empty_values_count_as_unset() {
    let config = config_from(&[
        ("OPENWEATHER_API_KEY", ""),
        ("SPOTIFY_CLIENT_ID", "  "),
        ("IBGE_API_URL", ""),
    ]);

    assert!(config.openweather_api_key.is_none());
    assert!(config.spotify_client_id.is_none());
    assert_eq!(config.ibge_api_url, IBGE_API_URL);
}

#[test]
fn test_weather_key_fallback() {
    let config = config_from(&[("CHAVE_API_OPENWEATHER", "legacy")]);
    assert_eq!(config.openweather_api_key(), Ok("legacy"));

    // The primary name wins when both are present
    let config = config_from(&[
        ("CHAVE_API_OPENWEATHER", "legacy"),
        ("OPENWEATHER_API_KEY", "primary"),
    ]);
    assert_eq!(config.openweather_api_key(), Ok("primary"));
}

#[test]
fn test_missing_weather_key() {
    let config = config_from(&[]);
    assert_eq!(
        config.openweather_api_key(),
        Err(ConfigError::Missing("OPENWEATHER_API_KEY"))
    );
}

#[test]
fn test_spotify_credentials() {
    let config = config_from(&[("SPOTIFY_CLIENT_ID", "id")]);
    assert_eq!(
        config.spotify_credentials().unwrap_err(),
        ConfigError::Missing("SPOTIFY_CLIENT_SECRET")
    );

    let config = config_from(&[
        ("SPOTIFY_CLIENT_ID", "id"),
        ("SPOTIFY_CLIENT_SECRET", "secret"),
    ]);
    let creds = config.spotify_credentials().unwrap();
    assert_eq!(creds.client_id, "id");
    assert_eq!(creds.client_secret, "secret");
}

#[test]
fn test_debug_redacts_secrets() {
    let config = config_from(&[
        ("OPENWEATHER_API_KEY", "weather-secret-key"),
        ("SPOTIFY_CLIENT_ID", "public-id"),
        ("SPOTIFY_CLIENT_SECRET", "spotify-secret"),
    ]);

    let printed = format!("{:?}", config);
    assert!(!printed.contains("weather-secret-key"));
    assert!(!printed.contains("spotify-secret"));
    assert!(printed.contains("public-id"));

    let creds = config.spotify_credentials().unwrap();
    assert!(!format!("{:?}", creds).contains("spotify-secret"));
}

#[test]
fn test_values_are_trimmed() {
    let config = config_from(&[
        ("SPOTIFY_CLIENT_ID", " id "),
        ("SPOTIFY_CLIENT_SECRET", "secret\n"),
        ("SPOTIFY_MARKET", " BR"),
    ]);

    let creds = config.spotify_credentials().unwrap();
    assert_eq!(creds.client_id, "id");
    assert_eq!(creds.client_secret, "secret");
    assert_eq!(config.spotify_market.as_deref(), Some("BR"));
}

fn env_dir(name: &str) -> PathBuf {
    let dir = env::temp_dir().join(format!("lookupcli-{}-{}", name, std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn test_env_files_load_in_order_without_override() {
    let dir = env_dir("order");
    let local = dir.join("local.env");
    let user = dir.join("user.env");
    fs::write(
        &local,
        "LOOKUPCLI_TEST_PRESET=from-file\nLOOKUPCLI_TEST_SHARED=local\n",
    )
    .unwrap();
    fs::write(
        &user,
        "LOOKUPCLI_TEST_SHARED=user\nLOOKUPCLI_TEST_USER_ONLY=user\n",
    )
    .unwrap();

    // SAFETY: no other test in this binary touches these variables
    unsafe { env::set_var("LOOKUPCLI_TEST_PRESET", "from-shell") };

    load_env_files(&[local, user]).unwrap();

    assert_eq!(env::var("LOOKUPCLI_TEST_PRESET").unwrap(), "from-shell");
    assert_eq!(env::var("LOOKUPCLI_TEST_SHARED").unwrap(), "local");
    assert_eq!(env::var("LOOKUPCLI_TEST_USER_ONLY").unwrap(), "user");

    fs::remove_dir_all(dir).ok();
}

#[test]
fn test_missing_env_files_are_ignored() {
    let dir = env_dir("missing");

    assert_eq!(
        load_env_files(&[dir.join("absent.env"), dir.join("also-absent.env")]),
        Ok(())
    );

    fs::remove_dir_all(dir).ok();
}
