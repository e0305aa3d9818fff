//! HTTP surface for uriel.
//!
//! Flow Overview:
//! 1) Build the router: public content, guarded drafts, admin-gated CRUD.
//! 2) Stack the service layers: request ids, tracing spans, CORS pinned to
//!    the frontend origin, shared state extensions.
//! 3) Serve until ctrl-c asks for a graceful shutdown.

use anyhow::{anyhow, Context, Result};
use axum::{
    body::Body,
    extract::{Extension, MatchedPath},
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderName, HeaderValue, Method, Request,
    },
    routing::{get, put},
    Router,
};
use std::sync::Arc;
use tokio::{net::TcpListener, sync::mpsc};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    request_id::PropagateRequestIdLayer,
    set_header::SetRequestHeaderLayer,
    trace::TraceLayer,
};
use tracing::{error, info, info_span, Span};
use ulid::Ulid;
use url::Url;

use crate::content::ContentStore;

pub(crate) mod handlers;
mod openapi;

pub use handlers::auth::AuthConfig;
pub use openapi::openapi;

/// Start the server
/// # Errors
/// Return error if failed to start the server
pub async fn new(
    port: u16,
    auth_config: AuthConfig,
    frontend_url: &str,
    store: Arc<ContentStore>,
) -> Result<()> {
    let session_client = Arc::new(handlers::auth::SessionClient::new(&auth_config)?);

    let frontend_origin = frontend_origin(frontend_url)?;
    let cors = CorsLayer::new()
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_origin(AllowOrigin::exact(frontend_origin))
        .allow_credentials(true);

    let app = Router::new()
        .route("/", get(handlers::root::root))
        .route(
            "/health",
            get(handlers::health::health).options(handlers::health::health),
        )
        .route("/v1/content", get(handlers::content::list_published))
        .route("/v1/content/:slug", get(handlers::content::get_published))
        .route("/v1/drafts", get(handlers::drafts::list_drafts))
        .route(
            "/v1/admin/content",
            get(handlers::admin::list_all).post(handlers::admin::create_entry),
        )
        .route(
            "/v1/admin/content/:slug",
            put(handlers::admin::update_entry).delete(handlers::admin::delete_entry),
        )
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestHeaderLayer::if_not_present(
                    HeaderName::from_static("x-request-id"),
                    |_req: &_| HeaderValue::from_str(Ulid::new().to_string().as_str()).ok(),
                ))
                .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
                    "x-request-id",
                )))
                .layer(TraceLayer::new_for_http().make_span_with(make_span))
                .layer(cors)
                .layer(Extension(session_client))
                .layer(Extension(store)),
        );

    // ctrl-c feeds the shutdown channel; anything else that needs to stop
    // the server can hold a sender too.
    let (tx, mut rx) = mpsc::unbounded_channel();
    tokio::spawn(async move {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for shutdown signal: {err}");
        }
        let _ = tx.send(());
    });

    let listener = TcpListener::bind(format!("::0:{port}")).await?;

    info!("Listening on [::]:{}", port);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(async move {
            rx.recv().await;
            info!("Gracefully shutdown");
        })
        .await?;

    Ok(())
}

fn make_span(request: &Request<Body>) -> Span {
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|val| val.to_str().ok())
        .unwrap_or("none");
    let matched_path = request
        .extensions()
        .get::<MatchedPath>()
        .map_or_else(|| request.uri().path(), MatchedPath::as_str);

    info_span!(
        "http.request",
        http.method = %request.method(),
        http.route = matched_path,
        request_id
    )
}

fn frontend_origin(frontend_base_url: &str) -> Result<HeaderValue> {
    let parsed = Url::parse(frontend_base_url)
        .with_context(|| format!("Invalid frontend base URL: {frontend_base_url}"))?;
    let host = parsed.host_str().ok_or_else(|| {
        anyhow!("Frontend base URL must include a valid host: {frontend_base_url}")
    })?;
    let port = parsed
        .port()
        .map_or_else(String::new, |port| format!(":{port}"));
    let origin = format!("{}://{}{}", parsed.scheme(), host, port);
    HeaderValue::from_str(&origin).context("Failed to build frontend origin header")
}
