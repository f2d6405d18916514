//! Build-step tools for the Frida framework
//!
//! Commands:
//! - `generate-framework <triplet> <framework-dir> <binary> <header> <info-plist>`
//! - `generate-modulemap <destination> <header>`
//!
//! Both take positional arguments only and exit nonzero on any failure.

use tracing_subscriber::EnvFilter;

pub mod framework;
pub mod modulemap;

/// Install the stderr logger. `RUST_LOG` overrides the default `warn` level.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // A subscriber may already be installed when running under a test harness.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
