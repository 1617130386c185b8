use crate::{
    config::Config,
    error, info,
    openweather::{self, OpenWeatherClient},
    pipeline::Outcome,
    types::WeatherSnapshot,
    utils,
    view::View,
};

/// Shows the current weather for a city.
///
/// Exits with an error when no OpenWeather API key is configured.
pub async fn weather(config: &Config, city: Option<String>, lang: Option<String>) {
    info!("Weather");
    info!("OpenWeather data source: {}", openweather::SOURCE);

    let client = match OpenWeatherClient::new(config, lang) {
        Ok(client) => client,
        Err(e) => error!("Cannot query OpenWeather: {}", e),
    };

    super::drive(&client, city, "Search for a city: ", present).await;
}

pub fn present(outcome: &Outcome<WeatherSnapshot>) -> View {
    View::from_outcome(outcome, render, warning)
}

/// One metric card per line, each labelled with the capitalized city.
pub fn render(city: &str, snapshot: &WeatherSnapshot) -> String {
    let city = utils::capitalize(city);

    [
        format!(
            "Current weather in {}: {}",
            city,
            utils::capitalize(&snapshot.description)
        ),
        format!(
            "Temperature in {}: {}",
            city,
            utils::format_celsius(snapshot.temperature)
        ),
        format!(
            "Feels like in {}: {}",
            city,
            utils::format_celsius(snapshot.feels_like)
        ),
        format!("Humidity in {}: {}%", city, snapshot.humidity),
        format!("Cloud coverage in {}: {}%", city, snapshot.cloud_coverage),
    ]
    .join("\n")
}

pub fn warning(city: &str) -> String {
    format!("No data found for city {}", utils::capitalize(city))
}
