//! Route handlers for the uriel API.
//!
//! Public routes serve published content. Guarded routes resolve an auth
//! snapshot first, then let [`crate::guard::evaluate`] classify the request;
//! the mapping from outcome to HTTP response lives here so the guard itself
//! stays framework-free.

pub mod admin;
pub mod auth;
pub mod content;
pub mod drafts;
pub mod health;
pub mod root;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::guard::{self, Outcome};

/// Renders a guard outcome: the fixed sign-in prompt for signed-out callers,
/// the account-naming denial for non-admins, and the protected payload
/// untouched for everyone allowed through.
pub(crate) fn outcome_response<T: IntoResponse>(outcome: Outcome<T>) -> Response {
    match outcome {
        Outcome::Unauthenticated => {
            (StatusCode::UNAUTHORIZED, guard::SIGN_IN_PROMPT).into_response()
        }
        Outcome::InsufficientPrivilege { email } => {
            (StatusCode::FORBIDDEN, guard::privilege_message(&email)).into_response()
        }
        Outcome::Authorized(content) => content.into_response(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn test_unauthenticated_renders_the_sign_in_prompt() {
        let response = outcome_response(Outcome::<&str>::Unauthenticated);

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(body, guard::SIGN_IN_PROMPT.as_bytes());
    }

    #[tokio::test]
    async fn test_insufficient_privilege_names_the_account() {
        let response = outcome_response(Outcome::<&str>::InsufficientPrivilege {
            email: "a@x.com".to_string(),
        });

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let text = String::from_utf8(body.to_vec()).unwrap();
        assert!(text.contains("a@x.com"));
    }

    #[tokio::test]
    async fn test_authorized_passes_the_payload_through() {
        let response = outcome_response(Outcome::Authorized("the protected page"));

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(body, "the protected page".as_bytes());
    }
}
