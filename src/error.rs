//! Error types for IP lookups.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, LookupError>;

#[derive(Error, Debug)]
pub enum LookupError {
    /// The service answered with an error payload (invalid address, rate limit, ...).
    #[error("{status} {title}: {message}")]
    Remote {
        status: String,
        title: String,
        message: String,
    },

    /// The response body was not a JSON object.
    #[error("Malformed response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    /// The HTTP request itself failed.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// `loc` is present but is not a `"lat,lon"` pair.
    #[error("Malformed location: {0:?}")]
    MalformedLocation(String),

    /// The payload named a timezone the tz database does not know.
    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),
}
