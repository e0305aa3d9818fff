//! Undocumented banner route.

use axum::response::IntoResponse;

// axum handler for the root path, kept out of the OpenAPI document
pub async fn root() -> impl IntoResponse {
    concat!(env!("CARGO_PKG_NAME"), " ", env!("CARGO_PKG_VERSION"))
}
