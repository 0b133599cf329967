// File: crates/dash-client/src/error.rs
// Summary: Error types for transport, sign-in, token storage and data fetches.

use thiserror::Error;

/// Substrings (case-insensitive) that mark a GraphQL or HTTP error as an
/// expired or invalid session.
pub const SESSION_EXPIRY_MARKERS: [&str; 6] =
    ["jwtexpired", "jwtinvalid", "invalidtoken", "jwserror", "tokennotprovided", "unauthorized"];

pub fn is_session_expiry(message: &str) -> bool {
    let lower = message.to_ascii_lowercase();
    SESSION_EXPIRY_MARKERS.iter().any(|m| lower.contains(m))
}

#[derive(Debug, Error)]
#[error("transport error: {0}")]
pub struct TransportError(pub String);

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self { TransportError(e.to_string()) }
}

/// Failure of a dashboard fetch. Every kind carries a human-readable detail.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),
    #[error("graphql error: {0}")]
    GraphQl(String),
    #[error("unexpected response shape: {0}")]
    InvalidShape(String),
    #[error("session expired: {0}")]
    SessionExpired(String),
}

impl FetchError {
    pub fn is_session_expired(&self) -> bool { matches!(self, FetchError::SessionExpired(_)) }

    pub fn detail(&self) -> &str {
        match self {
            FetchError::Network(d)
            | FetchError::GraphQl(d)
            | FetchError::InvalidShape(d)
            | FetchError::SessionExpired(d) => d,
        }
    }
}

pub type FetchResult<T> = Result<T, FetchError>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("token store io: {0}")]
    Io(#[from] std::io::Error),
    #[error("token store is not valid JSON: {0}")]
    Corrupt(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("sign-in request failed: {0}")]
    Network(String),
    #[error("sign-in rejected: {0}")]
    Rejected(String),
    #[error("unexpected sign-in response: {0}")]
    InvalidShape(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}
