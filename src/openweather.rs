use reqwest::Client;

use crate::{
    config::Config, errors::ConfigError, http, mapping, pipeline::Lookup, types::WeatherSnapshot,
};

pub const SOURCE: &str = "https://api.openweathermap.org/data/2.5/weather";
pub const DEFAULT_LANG: &str = "pt_br";

/// Client for the OpenWeather current-conditions endpoint.
///
/// Temperatures are always requested in metric units.
pub struct OpenWeatherClient {
    http: Client,
    base_url: String,
    api_key: String,
    lang: String,
}

impl OpenWeatherClient {
    /// Fails when no API key is configured; no request could succeed without one.
    pub fn new(config: &Config, lang: Option<String>) -> Result<Self, ConfigError> {
        let api_key = config.openweather_api_key()?.to_string();
        Ok(Self {
            http: Client::new(),
            base_url: config.openweather_api_url.clone(),
            api_key,
            lang: lang.unwrap_or_else(|| DEFAULT_LANG.to_string()),
        })
    }

    pub async fn current(&self, location: &str) -> Option<WeatherSnapshot> {
        let request = self.http.get(&self.base_url).query(&[
            ("appid", self.api_key.as_str()),
            ("q", location),
            ("units", "metric"),
            ("lang", self.lang.as_str()),
        ]);

        let raw = http::fetch_json(request).await?;
        mapping::weather(&raw)
    }
}

impl Lookup for OpenWeatherClient {
    type Record = WeatherSnapshot;

    async fn fetch(&self, query: &str) -> Option<WeatherSnapshot> {
        self.current(query).await
    }
}
