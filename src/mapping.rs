//! Response mappers.
//!
//! Each mapper is a pure function from a raw JSON payload to a record. A
//! payload without the expected shape maps to `None`, never to a panic.

use log::debug;
use serde::Deserialize;
use serde_json::Value;

use crate::types::{
    ArtistSearchResponse, ArtistSummary, CensusNameEntry, CurrentWeatherResponse,
    NameFrequencyRecord, TopTracksResponse, TrackEntry, WeatherSnapshot,
};

fn parse<'a, T>(raw: &'a Value, what: &str) -> Option<T>
where
    T: Deserialize<'a>,
{
    match T::deserialize(raw) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            debug!("Unexpected {} payload shape: {}", what, e);
            None
        }
    }
}

/// `[0].res[*].{periodo, frequencia}` from the IBGE names endpoint.
pub fn name_frequency(raw: &Value) -> Option<NameFrequencyRecord> {
    let entries: Vec<CensusNameEntry> = parse(raw, "IBGE names")?;
    let first = entries.into_iter().next()?;

    let record = NameFrequencyRecord::from_pairs(
        first
            .res
            .into_iter()
            .map(|period| (period.periodo, period.frequencia)),
    );

    if record.is_empty() { None } else { Some(record) }
}

pub fn weather(raw: &Value) -> Option<WeatherSnapshot> {
    let res: CurrentWeatherResponse = parse(raw, "current weather")?;
    let condition = res.weather.into_iter().next()?;
    let main = res.main?;
    let clouds = res.clouds?;

    Some(WeatherSnapshot {
        description: condition.description,
        temperature: main.temp,
        feels_like: main.feels_like,
        humidity: main.humidity,
        cloud_coverage: clouds.all,
    })
}

/// First hit of an artist search, if there is one.
pub fn first_artist(raw: &Value) -> Option<ArtistSummary> {
    let res: ArtistSearchResponse = parse(raw, "artist search")?;
    let artist = res.artists?.items.into_iter().next()?;

    Some(ArtistSummary {
        id: artist.id,
        name: artist.name,
        popularity: artist.popularity,
    })
}

/// Top tracks in the order Spotify ranked them.
///
/// A payload with an empty `tracks` list is a valid, empty result; a payload
/// without `tracks` at all is not.
pub fn top_tracks(raw: &Value) -> Option<Vec<TrackEntry>> {
    let res: TopTracksResponse = parse(raw, "top tracks")?;

    Some(
        res.tracks?
            .into_iter()
            .map(|t| TrackEntry {
                name: t.name,
                popularity: t.popularity,
                url: t.external_urls.spotify,
            })
            .collect(),
    )
}
