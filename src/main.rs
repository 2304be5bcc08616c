//! bikeshare main entrypoint.

use bikeshare::run;
use bikeshare::ui::messages::error;
use tracing_subscriber::EnvFilter;

fn main() {
    // Diagnostics go to stderr and stay quiet unless RUST_LOG asks for more.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    if let Err(e) = run() {
        error(e);
        std::process::exit(1);
    }
}
