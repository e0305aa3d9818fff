//! Command-line argument dispatch.
//!
//! Maps validated CLI matches to the action executed by the binary.

use crate::cli::actions::{Action, server::Args};
use crate::cli::commands::{content, identity};
use anyhow::{Context, Result, anyhow};
use url::Url;

/// Map validated CLI matches to a server action.
///
/// # Errors
/// Returns an error if required arguments are missing or malformed.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let port = matches.get_one::<u16>("port").copied().unwrap_or(8080);

    let identity_url = matches
        .get_one::<String>(identity::ARG_IDENTITY_URL)
        .cloned()
        .context("missing required argument: --identity-url")?;

    let parsed = Url::parse(&identity_url).context("invalid URIEL_IDENTITY_URL")?;
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(anyhow!("identity-url must be http(s): {identity_url}"));
    }

    let identity_token = matches
        .get_one::<String>(identity::ARG_IDENTITY_TOKEN)
        .cloned();

    let frontend_origin = matches
        .get_one::<String>(content::ARG_FRONTEND_ORIGIN)
        .cloned()
        .context("missing required argument: --frontend-origin")?;

    let content_seed = matches
        .get_one::<String>(content::ARG_CONTENT_SEED)
        .cloned();

    Ok(Action::Server(Args {
        port,
        identity_url,
        identity_token,
        frontend_origin,
        content_seed,
    }))
}
