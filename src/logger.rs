//! Diagnostics logging. Always stderr; stdout carries only passwords.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

pub const ENV_FILTER: &str = "PWGEN_LOG";

pub fn init_cli_logger(verbose: bool) {
    let default = if verbose { "pwgen=debug" } else { "pwgen=warn" };
    let filter = EnvFilter::try_from_env(ENV_FILTER).unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();
}
