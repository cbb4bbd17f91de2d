use thiserror::Error;

use super::types::Cursor;

/// Everything that can go wrong talking to the platform.
///
/// None of these are retried; the caller decides whether the run survives.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid request URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP {status}: {body}")]
    Status {
        url: String,
        status: u16,
        body: String,
    },

    #[error("could not decode response from {url}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("server returned pagination cursor {0} that was already requested")]
    StalledCursor(Cursor),
}
