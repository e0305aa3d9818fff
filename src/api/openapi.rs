//! OpenAPI document for the uriel API.
//!
//! Routes registered here are the documented surface; `/` and the
//! preflight-only `OPTIONS /health` stay out on purpose. The `openapi`
//! binary prints this document for clients and CI artifacts.

use utoipa::OpenApi;

use crate::api::handlers::{admin, content, drafts, health};
use crate::content::{Entry, EntryKind};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        content::list_published,
        content::get_published,
        drafts::list_drafts,
        admin::list_all,
        admin::create_entry,
        admin::update_entry,
        admin::delete_entry,
    ),
    components(schemas(
        Entry,
        EntryKind,
        health::Health,
        admin::CreateEntryRequest,
        admin::UpdateEntryRequest,
    )),
    tags(
        (name = "health", description = "Service health"),
        (name = "content", description = "Published portfolio content and drafts"),
        (name = "admin", description = "Content management, admin accounts only")
    )
)]
struct ApiDoc;

#[must_use]
pub fn openapi() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}
