use thiserror::Error;

/// Errors produced by the core library.
#[derive(Debug, Error)]
pub enum Error {
    /// Transport-level failure talking to the upstream provider.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Upstream call completed but did not yield usable data.
    #[error("lookup failed: {0}")]
    Lookup(String),

    /// A response or stored payload could not be encoded/decoded.
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// History file could not be written.
    #[error("storage error: {0}")]
    Storage(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
