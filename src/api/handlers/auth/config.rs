//! Identity service configuration.

use secrecy::SecretString;
use std::time::Duration;

const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 5;
const DEFAULT_SESSION_COOKIE_NAME: &str = "uriel_session";

/// How to reach the identity service that owns accounts and sessions.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    identity_url: String,
    service_token: Option<SecretString>,
    request_timeout: Duration,
    cookie_name: String,
}

impl AuthConfig {
    #[must_use]
    pub fn new(identity_url: String) -> Self {
        Self {
            identity_url: identity_url.trim_end_matches('/').to_string(),
            service_token: None,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECONDS),
            cookie_name: DEFAULT_SESSION_COOKIE_NAME.to_string(),
        }
    }

    #[must_use]
    pub fn with_service_token(mut self, token: Option<SecretString>) -> Self {
        self.service_token = token;
        self
    }

    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_cookie_name(mut self, name: String) -> Self {
        self.cookie_name = name;
        self
    }

    #[must_use]
    pub fn identity_url(&self) -> &str {
        &self.identity_url
    }

    /// Endpoint that turns a session token into a snapshot.
    #[must_use]
    pub fn verify_url(&self) -> String {
        format!("{}/v1/session/verify", self.identity_url)
    }

    #[must_use]
    pub fn service_token(&self) -> Option<&SecretString> {
        self.service_token.as_ref()
    }

    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    #[must_use]
    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = AuthConfig::new("https://id.uriel.page/".to_string());

        assert_eq!(config.identity_url(), "https://id.uriel.page");
        assert_eq!(
            config.verify_url(),
            "https://id.uriel.page/v1/session/verify"
        );
    }

    #[test]
    fn test_defaults() {
        let config = AuthConfig::new("http://localhost:9000".to_string());

        assert_eq!(config.cookie_name(), "uriel_session");
        assert_eq!(config.request_timeout(), Duration::from_secs(5));
        assert!(config.service_token().is_none());
    }

    #[test]
    fn test_builders() {
        let config = AuthConfig::new("http://localhost:9000".to_string())
            .with_service_token(Some(SecretString::from("s3cret".to_string())))
            .with_request_timeout(Duration::from_secs(1))
            .with_cookie_name("other_cookie".to_string());

        assert_eq!(
            config.service_token().unwrap().expose_secret(),
            "s3cret"
        );
        assert_eq!(config.request_timeout(), Duration::from_secs(1));
        assert_eq!(config.cookie_name(), "other_cookie");
    }
}
