use thiserror::Error;

/// Transport-level failure talking to the remote catalog.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected HTTP status {0}")]
    Status(reqwest::StatusCode),

    #[error("could not decode catalog response: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Failure reading or writing a cache envelope.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cache I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("cache envelope is not valid JSON: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Boundary-facing failure of the data layer. Cache problems never surface
/// here; they degrade to a miss or a logged warning, so the only way a
/// request fails outright is the remote fetch failing with nothing usable
/// cached.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("no catalog data available: {source}")]
    Unavailable {
        #[source]
        source: FetchError,
    },
}
