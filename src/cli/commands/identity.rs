use clap::{Arg, Command};

pub const ARG_IDENTITY_URL: &str = "identity-url";
pub const ARG_IDENTITY_TOKEN: &str = "identity-token";

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_IDENTITY_URL)
                .long("identity-url")
                .help("Base URL of the identity service that verifies session tokens")
                .env("URIEL_IDENTITY_URL"),
        )
        .arg(
            Arg::new(ARG_IDENTITY_TOKEN)
                .long("identity-token")
                .help("Service token sent with each verification call")
                .env("URIEL_IDENTITY_TOKEN"),
        )
}
