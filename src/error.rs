//! Client-visible error taxonomy.
//!
//! Every failure surfaced by this crate is one of four kinds, each carrying
//! the original message text verbatim plus the HTTP status code when one was
//! available. Transport-library errors are converted at the transport
//! boundary and never leak to callers.

use thiserror::Error;

/// Errors raised by the transport, service adapter, and model factories.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    /// Generic API failure: network errors, unexpected status codes,
    /// malformed response bodies, invalid response envelopes.
    #[error("{message}")]
    Api {
        message: String,
        status: Option<u16>,
    },

    /// The server rejected our credentials (HTTP 401/403).
    #[error("authentication failed: {message}")]
    Authentication {
        message: String,
        status: Option<u16>,
    },

    /// The server throttled the request (HTTP 429).
    #[error("rate limit exceeded: {message}")]
    RateLimit {
        message: String,
        status: Option<u16>,
    },

    /// A payload did not match the domain schema (missing required field,
    /// wrong shape).
    #[error("validation failed: {message}")]
    Validation {
        message: String,
        status: Option<u16>,
    },
}

impl ClientError {
    pub fn api(message: impl Into<String>, status: Option<u16>) -> Self {
        Self::Api {
            message: message.into(),
            status,
        }
    }

    pub fn authentication(message: impl Into<String>, status: Option<u16>) -> Self {
        Self::Authentication {
            message: message.into(),
            status,
        }
    }

    pub fn rate_limit(message: impl Into<String>, status: Option<u16>) -> Self {
        Self::RateLimit {
            message: message.into(),
            status,
        }
    }

    pub fn validation(message: impl Into<String>, status: Option<u16>) -> Self {
        Self::Validation {
            message: message.into(),
            status,
        }
    }

    /// The original message text, without the kind prefix added by `Display`.
    pub fn message(&self) -> &str {
        match self {
            Self::Api { message, .. }
            | Self::Authentication { message, .. }
            | Self::RateLimit { message, .. }
            | Self::Validation { message, .. } => message,
        }
    }

    /// The HTTP status code associated with this error, when one was known.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. }
            | Self::Authentication { status, .. }
            | Self::RateLimit { status, .. }
            | Self::Validation { status, .. } => *status,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        Self::Api {
            message: err.to_string(),
            status: err.status().map(|s| s.as_u16()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_is_preserved_verbatim() {
        let err = ClientError::authentication("forbidden", Some(403));
        assert_eq!(err.message(), "forbidden");
        assert_eq!(err.status(), Some(403));
        assert!(err.to_string().contains("forbidden"));
    }

    #[test]
    fn kinds_are_distinguishable() {
        let api = ClientError::api("boom", None);
        let auth = ClientError::authentication("boom", None);
        assert!(matches!(api, ClientError::Api { .. }));
        assert!(matches!(auth, ClientError::Authentication { .. }));
        assert_ne!(api, auth);
    }

    #[test]
    fn status_survives_construction() {
        let err = ClientError::rate_limit("slow down", Some(429));
        assert_eq!(err.status(), Some(429));
    }
}
