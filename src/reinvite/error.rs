//! Re-invite endpoint error types

use thiserror::Error;

/// Error types for calls to the re-invite endpoint
#[derive(Debug, Error)]
pub enum ReinviteError {
    /// Transport failure: connection refused, timeout, TLS, ...
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Endpoint answered with a body that is not JSON
    #[error("Unexpected response from endpoint (HTTP {status}): {source}")]
    Decode {
        status: u16,
        #[source]
        source: serde_json::Error,
    },

    /// Invalid input parameters
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Client setup/configuration error
    #[error("Client setup failed: {0}")]
    ClientSetup(String),
}

/// Convenience result alias for endpoint operations
pub type ReinviteResultOf<T> = Result<T, ReinviteError>;
