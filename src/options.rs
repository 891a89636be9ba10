//! Transport configuration.

use std::time::Duration;

/// Wrapper for credentials so they cannot leak through `Debug` formatting:
/// the debug output is a fixed redaction marker, and the raw value is only
/// reachable through [`SecretString::expose_secret`].
#[derive(Clone, PartialEq, Eq)]
pub struct SecretString(String);

impl SecretString {
    /// Wrap a raw credential.
    pub fn new(s: String) -> Self {
        Self(s)
    }

    /// Read the wrapped value, e.g. to build an auth header.
    pub fn expose_secret(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SecretString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SecretString([REDACTED])")
    }
}

impl From<String> for SecretString {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for SecretString {
    fn from(s: &str) -> Self {
        Self::new(s.to_string())
    }
}

/// Configuration for the insight API transport.
///
/// Base URL and both keys are required and stored for the lifetime of the
/// client; headers are installed once at construction and all later use is
/// read-only.
///
/// # Example
/// ```
/// use leadsight::options::TransportConfig;
///
/// let config = TransportConfig::new(
///     "https://insights.example.com".to_string(),
///     "api-key",
///     "provider-key",
/// );
/// ```
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Base URL for API endpoints, without a trailing slash.
    pub base_url: String,

    /// Primary API key, sent as `x-api-key` on every request.
    pub api_key: SecretString,

    /// Secondary model-provider key, sent as `x-provider-key`.
    pub provider_key: SecretString,

    /// Whether to verify TLS certificates. Disable only against trusted
    /// development servers.
    pub verify_certificates: bool,

    /// Request timeout for synchronous calls. Streaming calls hold the
    /// connection open and rely on server-side flushing, so no overall
    /// timeout is applied to them.
    pub timeout: Option<Duration>,
}

impl TransportConfig {
    /// Create a new configuration with certificate verification enabled and
    /// no timeout.
    pub fn new(
        base_url: String,
        api_key: impl Into<SecretString>,
        provider_key: impl Into<SecretString>,
    ) -> Self {
        Self {
            base_url,
            api_key: api_key.into(),
            provider_key: provider_key.into(),
            verify_certificates: true,
            timeout: None,
        }
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Control TLS certificate verification.
    pub fn with_certificate_verification(mut self, verify: bool) -> Self {
        self.verify_certificates = verify;
        self
    }
}
