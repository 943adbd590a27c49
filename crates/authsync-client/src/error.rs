//! Error types for remote calls.

use thiserror::Error;

/// Errors produced while talking to the token endpoint or the
/// Authorization Extension API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The token endpoint answered with a non-success status.
    #[error("token request to {url} failed with {status}: {body}")]
    Auth {
        url: String,
        status: reqwest::StatusCode,
        body: String,
    },

    /// The API answered with a non-success status.
    #[error("{method} {url} returned {status}: {body}")]
    Remote {
        method: &'static str,
        url: String,
        status: reqwest::StatusCode,
        body: String,
    },

    /// The request never produced a usable response (connection, timeout,
    /// or response decoding failure).
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl ApiError {
    pub(crate) fn transport(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Transport {
            url: url.into(),
            source,
        }
    }
}
