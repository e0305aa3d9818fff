//! HTTP client for the identity service.
//!
//! One call: exchange a session token for an auth snapshot. A `200` carries
//! the account, a `204` means signed out; anything else is the identity
//! service failing us, which callers surface instead of guessing.

use anyhow::{Context, Result};
use regex::Regex;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;

use crate::guard::AuthState;
use crate::APP_USER_AGENT;

use super::config::AuthConfig;

const SERVICE_TOKEN_HEADER: &str = "x-uriel-service-token";

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("identity service request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("identity service returned unexpected status {0}")]
    UnexpectedStatus(StatusCode),

    #[error("identity service returned a malformed snapshot: {0}")]
    MalformedSnapshot(String),
}

/// What a `200` from the verify endpoint carries.
#[derive(Debug, Deserialize)]
struct VerifiedSession {
    email: String,
    #[serde(default)]
    admin: bool,
}

/// Client for the identity service's session verification endpoint.
#[derive(Debug, Clone)]
pub struct SessionClient {
    http: Client,
    verify_url: String,
    service_token: Option<SecretString>,
    cookie_name: String,
}

impl SessionClient {
    pub fn new(config: &AuthConfig) -> Result<Self> {
        let http = Client::builder()
            .user_agent(APP_USER_AGENT)
            .timeout(config.request_timeout())
            .build()
            .context("failed to build identity service client")?;

        Ok(Self {
            http,
            verify_url: config.verify_url(),
            service_token: config.service_token().cloned(),
            cookie_name: config.cookie_name().to_string(),
        })
    }

    #[must_use]
    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }

    /// Exchanges a session token for a snapshot. A signed-out answer is
    /// `Ok`; only the identity service misbehaving is an `Err`.
    pub async fn verify(&self, token: &str) -> Result<AuthState, SessionError> {
        let mut request = self.http.post(&self.verify_url).json(&json!({
            "token": token,
        }));
        if let Some(secret) = &self.service_token {
            request = request.header(SERVICE_TOKEN_HEADER, secret.expose_secret());
        }

        let response = request.send().await?;
        match response.status() {
            StatusCode::OK => {
                let session: VerifiedSession = response.json().await?;
                let email = normalize_email(&session.email);
                if !valid_email(&email) {
                    return Err(SessionError::MalformedSnapshot(format!(
                        "unusable email {:?}",
                        session.email
                    )));
                }
                Ok(AuthState::signed_in(&email, session.admin))
            }
            StatusCode::NO_CONTENT => Ok(AuthState::signed_out()),
            status => Err(SessionError::UnexpectedStatus(status)),
        }
    }
}

/// Normalize an email before display or comparison.
fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Basic format check on already-normalized input.
fn valid_email(email_normalized: &str) -> bool {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").is_ok_and(|regex| regex.is_match(email_normalized))
}
