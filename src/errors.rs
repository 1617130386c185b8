use reqwest::StatusCode;
use thiserror::Error;

/// Why a request to an upstream API produced no usable body.
///
/// `endpoint` never carries the query string, so API keys passed as query
/// parameters stay out of logs.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("invalid request URL: {0}")]
    InvalidUrl(String),

    #[error("request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        source: reqwest::Error,
    },

    #[error("{endpoint} answered with HTTP {status}")]
    Status {
        endpoint: String,
        status: StatusCode,
    },

    #[error("cannot decode JSON from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        source: reqwest::Error,
    },
}

impl ApiError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("{0} must be set")]
    MissingCredential(&'static str),

    #[error("token request failed: {0}")]
    Request(#[from] ApiError),

    #[error("token response carried no access_token")]
    MissingToken,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
}

impl From<ConfigError> for AuthError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Missing(var) => AuthError::MissingCredential(var),
        }
    }
}
