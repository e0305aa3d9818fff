use crate::{
    api,
    cli::telemetry,
    content::{ContentStore, seed_from_file},
};
use anyhow::{Context, Result};
use secrecy::SecretString;
use std::{path::Path, sync::Arc};
use tracing::info;

#[derive(Debug)]
pub struct Args {
    pub port: u16,
    pub identity_url: String,
    pub identity_token: Option<String>,
    pub frontend_origin: String,
    pub content_seed: Option<String>,
}

/// Execute the server action.
/// # Errors
/// Returns an error if the seed file cannot be loaded or the server fails to start.
pub async fn execute(args: Args) -> Result<()> {
    let auth_config = api::AuthConfig::new(args.identity_url)
        .with_service_token(args.identity_token.map(SecretString::from));

    let store = Arc::new(ContentStore::new());

    if let Some(seed) = &args.content_seed {
        let loaded = seed_from_file(&store, Path::new(seed))
            .await
            .with_context(|| format!("Failed to load content seed from {seed}"))?;
        info!("Seeded {loaded} content entries from {seed}");
    }

    api::new(args.port, auth_config, &args.frontend_origin, store).await?;

    telemetry::shutdown_tracer();

    Ok(())
}
