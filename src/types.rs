use serde::Deserialize;
use tabled::Tabled;

/// One IBGE bucket: people registered with a name, born in a given decade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecadeFrequency {
    pub decade: String,
    pub count: u64,
}

/// Decade label to occurrence count, in the order IBGE returned them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NameFrequencyRecord {
    decades: Vec<DecadeFrequency>,
}

impl NameFrequencyRecord {
    /// Builds a record from `(decade, count)` pairs.
    ///
    /// A label seen twice keeps its first position and takes the later count.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, u64)>,
    {
        let mut decades: Vec<DecadeFrequency> = Vec::new();
        for (decade, count) in pairs {
            match decades.iter_mut().find(|d| d.decade == decade) {
                Some(existing) => existing.count = count,
                None => decades.push(DecadeFrequency { decade, count }),
            }
        }
        Self { decades }
    }

    pub fn decades(&self) -> &[DecadeFrequency] {
        &self.decades
    }

    pub fn is_empty(&self) -> bool {
        self.decades.is_empty()
    }

    pub fn max_count(&self) -> u64 {
        self.decades.iter().map(|d| d.count).max().unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeatherSnapshot {
    pub description: String,
    pub temperature: f64,
    pub feels_like: f64,
    pub humidity: u8,
    pub cloud_coverage: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistSummary {
    pub id: String,
    pub name: String,
    pub popularity: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackEntry {
    pub name: String,
    pub popularity: u8,
    pub url: String,
}

/// An artist together with their top tracks, in API order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistTopTracks {
    pub artist: ArtistSummary,
    pub tracks: Vec<TrackEntry>,
}

#[derive(Tabled)]
pub struct DecadeTableRow {
    #[tabled(rename = "decade")]
    pub decade: String,
    #[tabled(rename = "frequency")]
    pub frequency: u64,
}

// Raw payload shapes. Every field is optional or defaulted so a partial
// payload maps to `None` instead of failing halfway through.

#[derive(Debug, Clone, Deserialize)]
pub struct CensusNameEntry {
    #[serde(default)]
    pub res: Vec<CensusPeriod>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CensusPeriod {
    pub periodo: String,
    pub frequencia: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CurrentWeatherResponse {
    #[serde(default)]
    pub weather: Vec<WeatherCondition>,
    pub main: Option<MainReadings>,
    pub clouds: Option<Clouds>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherCondition {
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MainReadings {
    pub temp: f64,
    pub feels_like: f64,
    pub humidity: u8,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Clouds {
    pub all: u8,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArtistSearchResponse {
    pub artists: Option<ArtistsContainer>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArtistsContainer {
    #[serde(default)]
    pub items: Vec<SearchArtist>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchArtist {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub popularity: u8,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TopTracksResponse {
    pub tracks: Option<Vec<TopTrack>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TopTrack {
    pub name: String,
    #[serde(default)]
    pub popularity: u8,
    #[serde(default)]
    pub external_urls: ExternalUrls,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExternalUrls {
    #[serde(default)]
    pub spotify: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: Option<String>,
    #[serde(default)]
    pub expires_in: Option<u64>,
}
