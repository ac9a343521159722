// vnname-cli: shared utilities for CLI tools.

use std::process;

use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the default name dictionary path.
pub const NAMES_ENV: &str = "VNNAME_NAMES";

/// Install the tracing subscriber on stderr.
///
/// Defaults to WARN; `RUST_LOG` overrides it (e.g. `RUST_LOG=vnname_core=debug`
/// traces every split line).
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}
