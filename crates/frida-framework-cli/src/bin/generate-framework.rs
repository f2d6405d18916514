//! generate-framework - assemble Frida.framework for one target triplet

use clap::Parser;
use frida_framework_cli::framework::{self, Args};

fn main() -> anyhow::Result<()> {
    frida_framework_cli::init_logging();

    let args = Args::parse();
    let report = framework::run(&args)?;

    tracing::debug!("Wrote {} files", report.files().len());
    Ok(())
}
