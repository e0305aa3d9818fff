//! Session resolution for guarded routes.
//!
//! Flow Overview:
//! 1) Pull the session token from the bearer header, falling back to the
//!    session cookie.
//! 2) Exchange the token for an [`AuthState`] snapshot at the identity
//!    service; no token short-circuits to a signed-out snapshot.
//! 3) Callers feed the snapshot to [`crate::guard::evaluate`]. An identity
//!    service failure is the one thing that is not a snapshot: it maps to
//!    `502` here and never reaches the guard.

use axum::http::{
    header::{AUTHORIZATION, COOKIE},
    HeaderMap, StatusCode,
};
use tracing::error;

use crate::guard::AuthState;

pub mod client;
pub mod config;

pub use client::{SessionClient, SessionError};
pub use config::AuthConfig;

/// Resolves the caller's auth snapshot for one request.
pub async fn resolve_auth(
    headers: &HeaderMap,
    client: &SessionClient,
) -> Result<AuthState, StatusCode> {
    let Some(token) = extract_session_token(headers, client.cookie_name()) else {
        return Ok(AuthState::signed_out());
    };
    match client.verify(&token).await {
        Ok(auth) => Ok(auth),
        Err(err) => {
            error!("Failed to verify session: {err}");
            Err(StatusCode::BAD_GATEWAY)
        }
    }
}

fn extract_session_token(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    if let Some(token) = extract_bearer_token(headers) {
        return Some(token);
    }
    let value = headers.get(COOKIE)?.to_str().ok()?;
    for pair in value.split(';') {
        let Some((key, val)) = pair.split_once('=') else {
            continue;
        };
        if key.trim() == cookie_name {
            let val = val.trim();
            if !val.is_empty() {
                return Some(val.to_string());
            }
        }
    }
    None
}

fn extract_bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let trimmed = value.trim();
    let token = trimmed
        .strip_prefix("Bearer ")
        .or_else(|| trimmed.strip_prefix("bearer "))?
        .trim();
    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    const COOKIE_NAME: &str = "uriel_session";

    fn headers_with(name: axum::http::HeaderName, value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(name, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_bearer_token_wins_over_cookie() {
        let mut headers = headers_with(AUTHORIZATION, "Bearer from-header");
        headers.insert(
            COOKIE,
            HeaderValue::from_static("uriel_session=from-cookie"),
        );

        assert_eq!(
            extract_session_token(&headers, COOKIE_NAME).as_deref(),
            Some("from-header")
        );
    }

    #[test]
    fn test_lowercase_bearer_prefix() {
        let headers = headers_with(AUTHORIZATION, "bearer tok");

        assert_eq!(
            extract_session_token(&headers, COOKIE_NAME).as_deref(),
            Some("tok")
        );
    }

    #[test]
    fn test_empty_bearer_falls_back_to_cookie() {
        let mut headers = headers_with(AUTHORIZATION, "Bearer ");
        headers.insert(
            COOKIE,
            HeaderValue::from_static("uriel_session=from-cookie"),
        );

        assert_eq!(
            extract_session_token(&headers, COOKIE_NAME).as_deref(),
            Some("from-cookie")
        );
    }

    #[test]
    fn test_cookie_among_other_pairs() {
        let headers = headers_with(
            COOKIE,
            "theme=dark; uriel_session=tok-42 ; consent=yes",
        );

        assert_eq!(
            extract_session_token(&headers, COOKIE_NAME).as_deref(),
            Some("tok-42")
        );
    }

    #[test]
    fn test_malformed_cookie_pairs_are_skipped() {
        let headers = headers_with(COOKIE, "garbage; uriel_session=tok");

        assert_eq!(
            extract_session_token(&headers, COOKIE_NAME).as_deref(),
            Some("tok")
        );
    }

    #[test]
    fn test_no_token_anywhere() {
        assert_eq!(extract_session_token(&HeaderMap::new(), COOKIE_NAME), None);

        let headers = headers_with(COOKIE, "theme=dark");
        assert_eq!(extract_session_token(&headers, COOKIE_NAME), None);

        let headers = headers_with(COOKIE, "uriel_session=");
        assert_eq!(extract_session_token(&headers, COOKIE_NAME), None);
    }

    #[test]
    fn test_other_auth_scheme_is_ignored() {
        let headers = headers_with(AUTHORIZATION, "Basic dXNlcjpwYXNz");

        assert_eq!(extract_session_token(&headers, COOKIE_NAME), None);
    }

    #[tokio::test]
    async fn test_resolve_without_token_never_calls_the_identity_service() {
        // Unroutable endpoint: any network attempt would error, so Ok proves
        // the signed-out short circuit.
        let config = AuthConfig::new("http://127.0.0.1:1".to_string());
        let client = SessionClient::new(&config).unwrap();

        let auth = resolve_auth(&HeaderMap::new(), &client).await.unwrap();

        assert_eq!(auth, AuthState::signed_out());
    }

    #[tokio::test]
    async fn test_resolve_maps_identity_failure_to_bad_gateway() {
        let config = AuthConfig::new("http://127.0.0.1:1".to_string())
            .with_request_timeout(std::time::Duration::from_millis(200));
        let client = SessionClient::new(&config).unwrap();
        let headers = headers_with(AUTHORIZATION, "Bearer tok");

        let err = resolve_auth(&headers, &client).await.unwrap_err();

        assert_eq!(err, StatusCode::BAD_GATEWAY);
    }
}
