use log::warn;
use reqwest::{RequestBuilder, Url};
use serde_json::Value;

use crate::errors::ApiError;

/// Sends a request once and returns the JSON body of a 2xx response.
///
/// No retries: transport failures, non-2xx statuses and undecodable bodies are
/// reported as the matching [`ApiError`] variant. Errors never carry the query
/// string of the request URL.
pub async fn send_json(request: RequestBuilder) -> Result<Value, ApiError> {
    let (client, request) = request.build_split();
    let request = request.map_err(|e| ApiError::InvalidUrl(e.without_url().to_string()))?;
    let endpoint = endpoint(request.url());

    let response = client
        .execute(request)
        .await
        .map_err(|e| ApiError::Transport {
            endpoint: endpoint.clone(),
            source: e.without_url(),
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Status { endpoint, status });
    }

    response
        .json::<Value>()
        .await
        .map_err(|e| ApiError::Decode {
            endpoint,
            source: e.without_url(),
        })
}

/// Same as [`send_json`] with every failure collapsed to `None`.
///
/// The cause goes to the operator log; callers only see "no data".
pub async fn fetch_json(request: RequestBuilder) -> Option<Value> {
    match send_json(request).await {
        Ok(json) => Some(json),
        Err(e) => {
            warn!("Request error --> {}", e);
            None
        }
    }
}

/// The URL without query string or fragment.
pub fn endpoint(url: &Url) -> String {
    let mut url = url.clone();
    url.set_query(None);
    url.set_fragment(None);
    url.to_string()
}

/// Appends `segment` to `base` as one percent-encoded path segment.
pub fn join_segment(base: &str, segment: &str) -> Result<Url, ApiError> {
    let mut url = Url::parse(base).map_err(|e| ApiError::InvalidUrl(format!("{base}: {e}")))?;
    url.path_segments_mut()
        .map_err(|_| ApiError::InvalidUrl(format!("{base}: cannot be a base URL")))?
        .pop_if_empty()
        .push(segment);
    Ok(url)
}
