//! Process-local content store.
//!
//! Flow Overview:
//! 1) Optionally seed entries from a JSON document at startup.
//! 2) Serve reads (published lists, single published entries, drafts).
//! 3) Apply admin mutations, enforcing slug policy and uniqueness.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::slug::normalize_slug;
use super::{Entry, EntryKind};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("slug cannot be derived from {0:?}")]
    InvalidSlug(String),

    #[error("an entry with slug '{0}' already exists")]
    DuplicateSlug(String),

    #[error("no entry with slug '{0}'")]
    UnknownSlug(String),
}

/// In-memory entry map keyed by normalized slug.
#[derive(Debug, Default)]
pub struct ContentStore {
    entries: RwLock<HashMap<String, Entry>>,
}

impl ContentStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Published entries, newest first.
    pub async fn list_published(&self) -> Vec<Entry> {
        self.list_where(|entry| entry.published).await
    }

    /// Unpublished entries, newest first.
    pub async fn list_drafts(&self) -> Vec<Entry> {
        self.list_where(|entry| !entry.published).await
    }

    /// Every entry regardless of publication state, newest first.
    pub async fn list_all(&self) -> Vec<Entry> {
        self.list_where(|_| true).await
    }

    /// Looks up one entry visible to the public. Drafts stay invisible here
    /// so unpublished slugs are indistinguishable from absent ones.
    pub async fn get_published(&self, slug: &str) -> Option<Entry> {
        let entries = self.entries.read().await;
        entries.get(slug).filter(|entry| entry.published).cloned()
    }

    pub async fn insert(
        &self,
        slug_input: &str,
        title: &str,
        body: &str,
        kind: EntryKind,
        published: bool,
    ) -> Result<Entry, StoreError> {
        let slug = normalize_slug(slug_input)
            .ok_or_else(|| StoreError::InvalidSlug(slug_input.to_string()))?;

        let mut entries = self.entries.write().await;
        if entries.contains_key(&slug) {
            return Err(StoreError::DuplicateSlug(slug));
        }

        let entry = Entry {
            id: Uuid::now_v7().to_string(),
            slug: slug.clone(),
            title: title.to_string(),
            body: body.to_string(),
            kind,
            published,
            updated_at_unix: unix_now(),
        };
        entries.insert(slug, entry.clone());
        Ok(entry)
    }

    /// Applies the provided fields to an existing entry and bumps its
    /// timestamp. `None` fields keep their current value.
    pub async fn update(
        &self,
        slug: &str,
        title: Option<&str>,
        body: Option<&str>,
        kind: Option<EntryKind>,
        published: Option<bool>,
    ) -> Result<Entry, StoreError> {
        let mut entries = self.entries.write().await;
        let entry = entries
            .get_mut(slug)
            .ok_or_else(|| StoreError::UnknownSlug(slug.to_string()))?;

        if let Some(title) = title {
            entry.title = title.to_string();
        }
        if let Some(body) = body {
            entry.body = body.to_string();
        }
        if let Some(kind) = kind {
            entry.kind = kind;
        }
        if let Some(published) = published {
            entry.published = published;
        }
        entry.updated_at_unix = unix_now();
        Ok(entry.clone())
    }

    pub async fn remove(&self, slug: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.write().await;
        entries
            .remove(slug)
            .map(|_| ())
            .ok_or_else(|| StoreError::UnknownSlug(slug.to_string()))
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    async fn list_where(&self, keep: impl Fn(&Entry) -> bool) -> Vec<Entry> {
        let entries = self.entries.read().await;
        let mut selected: Vec<Entry> = entries.values().filter(|e| keep(e)).cloned().collect();
        // Newest first; slug breaks ties so listings stay deterministic.
        selected.sort_by(|a, b| {
            b.updated_at_unix
                .cmp(&a.updated_at_unix)
                .then_with(|| a.slug.cmp(&b.slug))
        });
        selected
    }
}

/// One entry of the startup seed document.
#[derive(Debug, Deserialize)]
pub struct SeedEntry {
    pub slug: String,
    pub title: String,
    pub body: String,
    pub kind: EntryKind,
    #[serde(default)]
    pub published: bool,
}

/// Loads a JSON array of [`SeedEntry`] into the store. Any invalid or
/// duplicate entry aborts the load; a half-seeded store is worse than a
/// clear startup failure.
pub async fn seed_from_file(store: &ContentStore, path: &Path) -> Result<usize> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read content seed {}", path.display()))?;
    let seeds: Vec<SeedEntry> =
        serde_json::from_str(&raw).context("failed to parse content seed")?;

    let mut loaded = 0;
    for seed in seeds {
        store
            .insert(&seed.slug, &seed.title, &seed.body, seed.kind, seed.published)
            .await
            .with_context(|| format!("failed to seed entry '{}'", seed.slug))?;
        loaded += 1;
    }
    Ok(loaded)
}

fn unix_now() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|duration| {
            #[allow(clippy::cast_possible_wrap)]
            {
                duration.as_secs() as i64
            }
        })
        .unwrap_or_default()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_insert_normalizes_slug() {
        let store = ContentStore::new();

        let entry = store
            .insert("Hello World!", "Hello", "body", EntryKind::Post, true)
            .await
            .unwrap();

        assert_eq!(entry.slug, "hello-world");
        assert!(store.get_published("hello-world").await.is_some());
    }

    #[tokio::test]
    async fn test_insert_rejects_duplicate_slug() {
        let store = ContentStore::new();
        store
            .insert("one", "One", "body", EntryKind::Page, false)
            .await
            .unwrap();

        let err = store
            .insert("one", "Other", "body", EntryKind::Post, false)
            .await
            .unwrap_err();

        assert_eq!(err, StoreError::DuplicateSlug("one".to_string()));
    }

    #[tokio::test]
    async fn test_insert_rejects_unusable_slug() {
        let store = ContentStore::new();

        let err = store
            .insert("!!!", "Nope", "body", EntryKind::Post, false)
            .await
            .unwrap_err();

        assert_eq!(err, StoreError::InvalidSlug("!!!".to_string()));
    }

    #[tokio::test]
    async fn test_drafts_are_invisible_to_public_lookup() {
        let store = ContentStore::new();
        store
            .insert("draft", "Draft", "wip", EntryKind::Post, false)
            .await
            .unwrap();

        assert!(store.get_published("draft").await.is_none());
        assert_eq!(store.list_drafts().await.len(), 1);
        assert!(store.list_published().await.is_empty());
    }

    #[tokio::test]
    async fn test_update_patches_fields_and_keeps_the_rest() {
        let store = ContentStore::new();
        store
            .insert("post", "Old title", "old body", EntryKind::Post, false)
            .await
            .unwrap();

        let updated = store
            .update("post", Some("New title"), None, None, Some(true))
            .await
            .unwrap();

        assert_eq!(updated.title, "New title");
        assert_eq!(updated.body, "old body");
        assert_eq!(updated.kind, EntryKind::Post);
        assert!(updated.published);
    }

    #[tokio::test]
    async fn test_update_unknown_slug() {
        let store = ContentStore::new();

        let err = store
            .update("missing", Some("title"), None, None, None)
            .await
            .unwrap_err();

        assert_eq!(err, StoreError::UnknownSlug("missing".to_string()));
    }

    #[tokio::test]
    async fn test_remove() {
        let store = ContentStore::new();
        store
            .insert("gone", "Gone", "body", EntryKind::Page, true)
            .await
            .unwrap();

        store.remove("gone").await.unwrap();

        assert!(store.is_empty().await);
        assert_eq!(
            store.remove("gone").await.unwrap_err(),
            StoreError::UnknownSlug("gone".to_string())
        );
    }

    #[tokio::test]
    async fn test_listings_order_newest_first_with_slug_tiebreak() {
        let store = ContentStore::new();
        for slug in ["gamma", "alpha", "beta"] {
            store
                .insert(slug, slug, "body", EntryKind::Post, true)
                .await
                .unwrap();
        }

        let listed = store.list_published().await;

        assert_eq!(listed.len(), 3);
        assert!(listed.windows(2).all(|pair| {
            pair[0].updated_at_unix > pair[1].updated_at_unix
                || (pair[0].updated_at_unix == pair[1].updated_at_unix
                    && pair[0].slug < pair[1].slug)
        }));
    }

    #[tokio::test]
    async fn test_seed_from_file() {
        let store = ContentStore::new();
        let mut file = tempfile_json(
            r##"[
                {"slug": "uriel", "title": "Uriel", "body": "# Hi", "kind": "page", "published": true},
                {"slug": "first-post", "title": "First post", "body": "…", "kind": "post"}
            ]"##,
        );
        file.flush().unwrap();

        let loaded = seed_from_file(&store, file.path()).await.unwrap();

        assert_eq!(loaded, 2);
        assert_eq!(store.len().await, 2);
        assert!(store.get_published("uriel").await.is_some());
        // Seeded entries default to draft unless marked published.
        assert!(store.get_published("first-post").await.is_none());
    }

    #[tokio::test]
    async fn test_seed_rejects_duplicate_slugs() {
        let store = ContentStore::new();
        let file = tempfile_json(
            r#"[
                {"slug": "dup", "title": "One", "body": "a", "kind": "post"},
                {"slug": "dup", "title": "Two", "body": "b", "kind": "post"}
            ]"#,
        );

        let err = seed_from_file(&store, file.path()).await.unwrap_err();

        assert!(err.to_string().contains("dup"));
    }

    #[tokio::test]
    async fn test_seed_rejects_malformed_json() {
        let store = ContentStore::new();
        let file = tempfile_json("{ not json ]");

        assert!(seed_from_file(&store, file.path()).await.is_err());
    }

    fn tempfile_json(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }
}
