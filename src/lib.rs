//! # Uriel (Portfolio & Content Service)
//!
//! `uriel` serves a personal portfolio: projects, posts and pages written in
//! markdown, published over a small JSON API. Everyone can read what is
//! published; drafts and the content-management surface sit behind an
//! access guard.
//!
//! ## Access Model
//!
//! Identity is external: a hosted identity service owns accounts, sessions
//! and the admin flag. Each request that touches a guarded route resolves a
//! point-in-time [`guard::AuthState`] snapshot from it and feeds the snapshot
//! to [`guard::evaluate`], which classifies the request into exactly one of
//! three outcomes:
//!
//! - **Unauthenticated:** no session, answered with a sign-in prompt.
//! - **Insufficient privilege:** signed in but not admin where admin is
//!   required, answered with a message naming the signed-in account.
//! - **Authorized:** the protected content passes through unchanged.
//!
//! Signed-out and non-admin are ordinary outcomes, not errors; only a
//! failure to reach the identity service is an error, and it surfaces as
//! `502` before the guard ever runs.
//!
//! ## Content Model
//!
//! Entries (`project`, `post`, `page`) are identified by normalized slugs
//! (lowercase `[a-z0-9-]`). The store is process-local and optionally seeded
//! from a JSON document at startup; persistence belongs to the hosted
//! platform, not to this service.

pub mod api;
pub mod cli;
pub mod content;
pub mod guard;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);
