//! Public content routes. No auth involved; drafts never show up here.

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use crate::content::{ContentStore, Entry};

#[utoipa::path(
    get,
    path = "/v1/content",
    responses(
        (status = 200, description = "Published entries, newest first.", body = [Entry])
    ),
    tag = "content"
)]
pub async fn list_published(store: Extension<Arc<ContentStore>>) -> impl IntoResponse {
    Json(store.list_published().await)
}

#[utoipa::path(
    get,
    path = "/v1/content/{slug}",
    params(
        ("slug" = String, Path, description = "Entry slug")
    ),
    responses(
        (status = 200, description = "The published entry.", body = Entry),
        (status = 404, description = "No published entry under this slug.")
    ),
    tag = "content"
)]
pub async fn get_published(
    Path(slug): Path<String>,
    store: Extension<Arc<ContentStore>>,
) -> impl IntoResponse {
    match store.get_published(&slug).await {
        Some(entry) => (StatusCode::OK, Json(entry)).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
