//! Connection settings for `TodoApi`.

use std::time::Duration;

use crate::http::Credentials;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Host URL, credentials, and I/O timeout for one API client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub host_url: String,
    pub credentials: Credentials,
    /// Overall per-request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn new(host_url: impl Into<String>, credentials: Credentials) -> Self {
        Self {
            host_url: host_url.into(),
            credentials,
            timeout: Some(DEFAULT_TIMEOUT),
        }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_thirty_second_timeout() {
        let config = ClientConfig::new("http://localhost:5000", Credentials::new("u", "p"));
        assert_eq!(config.timeout, Some(Duration::from_secs(30)));
        assert_eq!(config.credentials.username(), "u");
    }

    #[test]
    fn timeout_can_be_disabled() {
        let config = ClientConfig::new("http://localhost:5000", Credentials::new("u", "p"))
            .with_timeout(None);
        assert!(config.timeout.is_none());
    }
}
