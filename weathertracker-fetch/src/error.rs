//! Fetch error types.

use thiserror::Error;

/// Error type for fetch operations.
///
/// Transport failures and body-decoding failures both surface as
/// [`FetchError::Http`] (reqwest reports decoding through its own error
/// type); unexpected status codes surface as
/// [`FetchError::InvalidResponse`].
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP request or body decoding failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid response from the provider.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}
