//! Error types exposed by the catalogue API layer.

use thiserror::Error;

/// Errors surfaced while configuring Curator or talking to the catalogue API.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogueError {
    /// Configuration could not be loaded or is inconsistent.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// A command-line or configuration value could not be interpreted.
    #[error("unrecognised argument: {argument}")]
    InvalidArgument {
        /// The value Curator does not accept.
        argument: String,
    },

    /// The configured API base address is not a usable HTTP(S) URL.
    #[error("API base URL is invalid: {0}")]
    InvalidBaseUrl(String),

    /// Networking failed while calling the catalogue API.
    #[error("network error talking to the catalogue API: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// The catalogue API answered with a non-success status.
    #[error("catalogue API returned status {status}: {message}")]
    Api {
        /// HTTP status code of the response.
        status: u16,
        /// Response detail describing the failure.
        message: String,
    },

    /// A response body could not be decoded.
    #[error("catalogue API response could not be decoded: {message}")]
    Decode {
        /// Decoder error detail.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },
}

impl CatalogueError {
    /// Returns the HTTP status for API errors.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
