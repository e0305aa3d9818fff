//! Content management routes, gated on the admin flag.
//!
//! Flow Overview:
//! 1) Resolve the caller's auth snapshot.
//! 2) Classify it with the admin-only guard; denials return before any
//!    store access.
//! 3) Apply the mutation and map store errors onto the HTTP surface.

use axum::{
    extract::{Extension, Path},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Json},
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::error;
use utoipa::ToSchema;

use crate::content::{ContentStore, Entry, EntryKind, StoreError};
use crate::guard::{self, GuardConfig, Outcome};

use super::auth::{resolve_auth, SessionClient};
use super::outcome_response;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateEntryRequest {
    /// Slug override; derived from the title when omitted.
    pub slug: Option<String>,
    pub title: String,
    pub body: String,
    pub kind: EntryKind,
    #[serde(default)]
    pub published: bool,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateEntryRequest {
    pub title: Option<String>,
    pub body: Option<String>,
    pub kind: Option<EntryKind>,
    pub published: Option<bool>,
}

#[utoipa::path(
    get,
    path = "/v1/admin/content",
    responses(
        (status = 200, description = "Every entry, drafts included.", body = [Entry]),
        (status = 401, description = "Signed out; body carries the sign-in prompt."),
        (status = 403, description = "Signed in without the admin flag; body names the account."),
        (status = 502, description = "Identity service could not be reached.")
    ),
    tag = "admin"
)]
pub async fn list_all(
    headers: HeaderMap,
    client: Extension<Arc<SessionClient>>,
    store: Extension<Arc<ContentStore>>,
) -> impl IntoResponse {
    let auth = match resolve_auth(&headers, &client).await {
        Ok(auth) => auth,
        Err(status) => return status.into_response(),
    };

    let entries = store.list_all().await;
    outcome_response(guard::evaluate(
        &auth,
        GuardConfig::admin_only(),
        Json(entries),
    ))
}

#[utoipa::path(
    post,
    path = "/v1/admin/content",
    request_body = CreateEntryRequest,
    responses(
        (status = 201, description = "Entry created.", body = Entry),
        (status = 400, description = "No usable slug in the request."),
        (status = 401, description = "Signed out; body carries the sign-in prompt."),
        (status = 403, description = "Signed in without the admin flag; body names the account."),
        (status = 409, description = "An entry with this slug already exists."),
        (status = 502, description = "Identity service could not be reached.")
    ),
    tag = "admin"
)]
pub async fn create_entry(
    headers: HeaderMap,
    client: Extension<Arc<SessionClient>>,
    store: Extension<Arc<ContentStore>>,
    Json(payload): Json<CreateEntryRequest>,
) -> impl IntoResponse {
    let auth = match resolve_auth(&headers, &client).await {
        Ok(auth) => auth,
        Err(status) => return status.into_response(),
    };
    match guard::evaluate(&auth, GuardConfig::admin_only(), ()) {
        Outcome::Authorized(()) => {}
        denied => return outcome_response(denied),
    }

    let slug_input = payload.slug.as_deref().unwrap_or(&payload.title);
    match store
        .insert(
            slug_input,
            &payload.title,
            &payload.body,
            payload.kind,
            payload.published,
        )
        .await
    {
        Ok(entry) => (StatusCode::CREATED, Json(entry)).into_response(),
        Err(err @ StoreError::DuplicateSlug(_)) => {
            (StatusCode::CONFLICT, err.to_string()).into_response()
        }
        Err(err @ StoreError::InvalidSlug(_)) => {
            (StatusCode::BAD_REQUEST, err.to_string()).into_response()
        }
        Err(err) => {
            error!("Failed to create entry: {err}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

#[utoipa::path(
    put,
    path = "/v1/admin/content/{slug}",
    params(
        ("slug" = String, Path, description = "Entry slug")
    ),
    request_body = UpdateEntryRequest,
    responses(
        (status = 200, description = "Entry updated.", body = Entry),
        (status = 401, description = "Signed out; body carries the sign-in prompt."),
        (status = 403, description = "Signed in without the admin flag; body names the account."),
        (status = 404, description = "No entry under this slug."),
        (status = 502, description = "Identity service could not be reached.")
    ),
    tag = "admin"
)]
pub async fn update_entry(
    headers: HeaderMap,
    client: Extension<Arc<SessionClient>>,
    store: Extension<Arc<ContentStore>>,
    Path(slug): Path<String>,
    Json(payload): Json<UpdateEntryRequest>,
) -> impl IntoResponse {
    let auth = match resolve_auth(&headers, &client).await {
        Ok(auth) => auth,
        Err(status) => return status.into_response(),
    };
    match guard::evaluate(&auth, GuardConfig::admin_only(), ()) {
        Outcome::Authorized(()) => {}
        denied => return outcome_response(denied),
    }

    match store
        .update(
            &slug,
            payload.title.as_deref(),
            payload.body.as_deref(),
            payload.kind,
            payload.published,
        )
        .await
    {
        Ok(entry) => (StatusCode::OK, Json(entry)).into_response(),
        Err(StoreError::UnknownSlug(_)) => StatusCode::NOT_FOUND.into_response(),
        Err(err) => {
            error!("Failed to update entry '{slug}': {err}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

#[utoipa::path(
    delete,
    path = "/v1/admin/content/{slug}",
    params(
        ("slug" = String, Path, description = "Entry slug")
    ),
    responses(
        (status = 204, description = "Entry deleted."),
        (status = 401, description = "Signed out; body carries the sign-in prompt."),
        (status = 403, description = "Signed in without the admin flag; body names the account."),
        (status = 404, description = "No entry under this slug."),
        (status = 502, description = "Identity service could not be reached.")
    ),
    tag = "admin"
)]
pub async fn delete_entry(
    headers: HeaderMap,
    client: Extension<Arc<SessionClient>>,
    store: Extension<Arc<ContentStore>>,
    Path(slug): Path<String>,
) -> impl IntoResponse {
    let auth = match resolve_auth(&headers, &client).await {
        Ok(auth) => auth,
        Err(status) => return status.into_response(),
    };
    match guard::evaluate(&auth, GuardConfig::admin_only(), ()) {
        Outcome::Authorized(()) => {}
        denied => return outcome_response(denied),
    }

    match store.remove(&slug).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(StoreError::UnknownSlug(_)) => StatusCode::NOT_FOUND.into_response(),
        Err(err) => {
            error!("Failed to delete entry '{slug}': {err}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
