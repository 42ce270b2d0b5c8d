// File: crates/chat/src/logging.rs
// Summary: Console logging setup using `tracing-subscriber`.

use tracing_subscriber::EnvFilter;

/// Initialise stderr logging for the CLI.
///
/// `RUST_LOG` wins when set; otherwise `level` (from `[chat] log_level`)
/// is used as the filter directive.
pub fn init_cli(level: &str) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}
