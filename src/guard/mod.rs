//! Access guard for protected content.
//!
//! A single pure decision: given a point-in-time auth snapshot and a per-call
//! configuration, classify the request as unauthenticated, privilege-denied
//! or authorized, passing the protected payload through unchanged in the
//! authorized case.
//!
//! The guard performs no I/O, never logs and never mutates the snapshot.
//! Signed-out and non-admin are ordinary outcomes here, not errors; the
//! caller decides how to present them. Resolving the snapshot (and failing
//! when the identity service is unreachable) happens upstream, in
//! `api::handlers::auth`.

/// Resolved profile of the authenticated user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub email: String,
}

/// Point-in-time snapshot of the caller's session, owned and produced by the
/// identity service. `user` is present iff a session exists; `is_admin` is
/// meaningful only when it is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<Identity>,
    pub is_admin: bool,
}

impl AuthState {
    /// Snapshot for a signed-in account.
    #[must_use]
    pub fn signed_in(email: &str, is_admin: bool) -> Self {
        Self {
            user: Some(Identity {
                email: email.to_string(),
            }),
            is_admin,
        }
    }

    /// Snapshot with no active session.
    #[must_use]
    pub const fn signed_out() -> Self {
        Self {
            user: None,
            is_admin: false,
        }
    }
}

/// Per-invocation guard configuration. The default gate only requires a
/// session; `admin_only` additionally requires the admin flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GuardConfig {
    pub require_admin: bool,
}

impl GuardConfig {
    #[must_use]
    pub const fn admin_only() -> Self {
        Self {
            require_admin: true,
        }
    }
}

/// Classification of one guarded request. Exactly one variant per
/// evaluation; `Authorized` carries the protected payload unmodified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    Unauthenticated,
    InsufficientPrivilege { email: String },
    Authorized(T),
}

/// Fixed prompt shown to signed-out visitors.
pub const SIGN_IN_PROMPT: &str = "Sign in to view this page.";

/// Denial message naming the signed-in account, so a visitor on the wrong
/// account can tell which one lacks privilege.
#[must_use]
pub fn privilege_message(email: &str) -> String {
    format!("Signed in as {email}. This page requires an administrator account.")
}

/// Classifies one request against the snapshot and configuration.
///
/// The session check runs before the privilege check; a signed-out visitor
/// always gets the sign-in prompt, never a privilege denial.
#[must_use]
pub fn evaluate<T>(auth: &AuthState, config: GuardConfig, content: T) -> Outcome<T> {
    match &auth.user {
        None => Outcome::Unauthenticated,
        Some(user) if config.require_admin && !auth.is_admin => Outcome::InsufficientPrivilege {
            email: user.email.clone(),
        },
        Some(_) => Outcome::Authorized(content),
    }
}
