use clap::{Arg, Command};

pub const ARG_FRONTEND_ORIGIN: &str = "frontend-origin";
pub const ARG_CONTENT_SEED: &str = "content-seed";

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_FRONTEND_ORIGIN)
                .long("frontend-origin")
                .help("Frontend origin allowed to call the API from a browser")
                .env("URIEL_FRONTEND_ORIGIN")
                .default_value("http://localhost:3000"),
        )
        .arg(
            Arg::new(ARG_CONTENT_SEED)
                .long("content-seed")
                .help("Path to a JSON file with entries loaded into the store at startup")
                .env("URIEL_CONTENT_SEED"),
        )
}
