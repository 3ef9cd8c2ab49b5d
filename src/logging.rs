//! Diagnostic tracing for the command-line binary.
//!
//! Reads `RUST_LOG` and defaults to `warn`, which reports each fall.
//! Output goes to stderr so stdout only carries result lines.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
