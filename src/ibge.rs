use reqwest::Client;

use crate::{config::Config, http, mapping, pipeline::Lookup, types::NameFrequencyRecord};

pub const SOURCE: &str = "https://servicodados.ibge.gov.br/api/docs/nomes?versao=2";

/// Client for the IBGE census names endpoint (`GET /api/v2/censos/nomes/{name}`).
pub struct IbgeClient {
    http: Client,
    base_url: String,
}

impl IbgeClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: Client::new(),
            base_url: config.ibge_api_url.clone(),
        }
    }

    /// Decade frequencies for `name`, or `None` when IBGE has nothing usable.
    pub async fn name_frequency(&self, name: &str) -> Option<NameFrequencyRecord> {
        let url = match http::join_segment(&self.base_url, name) {
            Ok(url) => url,
            Err(e) => {
                log::warn!("Request error --> {}", e);
                return None;
            }
        };

        let raw = http::fetch_json(self.http.get(url)).await?;
        mapping::name_frequency(&raw)
    }
}

impl Lookup for IbgeClient {
    type Record = NameFrequencyRecord;

    async fn fetch(&self, query: &str) -> Option<NameFrequencyRecord> {
        self.name_frequency(query).await
    }
}
