//! Draft listing for signed-in authors.
//!
//! Any account may read drafts; this is the one gate that does not require
//! the admin flag and exists so authors can preview unpublished work.

use axum::{
    extract::Extension,
    http::HeaderMap,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use crate::content::{ContentStore, Entry};
use crate::guard::{self, GuardConfig};

use super::auth::{resolve_auth, SessionClient};
use super::outcome_response;

#[utoipa::path(
    get,
    path = "/v1/drafts",
    responses(
        (status = 200, description = "Unpublished entries, newest first.", body = [Entry]),
        (status = 401, description = "Signed out; body carries the sign-in prompt."),
        (status = 502, description = "Identity service could not be reached.")
    ),
    tag = "content"
)]
pub async fn list_drafts(
    headers: HeaderMap,
    client: Extension<Arc<SessionClient>>,
    store: Extension<Arc<ContentStore>>,
) -> impl IntoResponse {
    let auth = match resolve_auth(&headers, &client).await {
        Ok(auth) => auth,
        Err(status) => return status.into_response(),
    };

    let drafts = store.list_drafts().await;
    outcome_response(guard::evaluate(&auth, GuardConfig::default(), Json(drafts)))
}
