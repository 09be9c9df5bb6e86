//! Error taxonomy for gateway clients.
//!
//! Validation failures are caught before any network I/O and carry every
//! missing field name at once. Transport failures mean the gateway was
//! never reached meaningfully. Gateway declines are neither: they come
//! back as ordinary results whose response code classifies them.

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Required request fields were absent or empty. Raised before any
    /// network call; `fields` names every missing field, not just the
    /// first one found.
    #[error("Missing required parameters: {}", .fields.join(", "))]
    MissingParameters { fields: Vec<String> },

    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// A failure to exchange one request with the gateway.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("Invalid endpoint URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The gateway answered outside the 2xx range. Gateway-level declines
    /// are not this: those arrive as 200 responses with a decline code.
    #[error("Gateway returned HTTP status {status}")]
    Status { status: u16, body: String },
}

pub type Result<T> = std::result::Result<T, Error>;
