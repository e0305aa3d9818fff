//! Portfolio content: projects, posts and pages.
//!
//! Entries live in a process-local store keyed by normalized slug. The
//! hosted platform owns durable storage; this service only carries what it
//! was seeded with plus whatever admins create at runtime.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub mod slug;
mod store;

pub use store::{seed_from_file, ContentStore, SeedEntry, StoreError};

/// What an entry is, which decides where the frontend mounts it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Project,
    Post,
    Page,
}

/// One piece of portfolio content. `body` is markdown source, opaque to
/// this service; rendering belongs to the frontend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Entry {
    /// UUIDv7, assigned at creation and stable across updates.
    pub id: String,
    pub slug: String,
    pub title: String,
    pub body: String,
    pub kind: EntryKind,
    pub published: bool,
    pub updated_at_unix: i64,
}
