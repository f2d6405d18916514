//! Private module-map command.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "generate-modulemap")]
#[command(version, about = "Write the Frida_Private module-map", long_about = None)]
pub struct Args {
    /// Module-map file to write; its directory must already exist
    #[arg(allow_hyphen_values = true)]
    pub destination: PathBuf,

    /// Header path to reference, inserted verbatim
    #[arg(allow_hyphen_values = true)]
    pub header: String,
}

/// Run the module-map command.
pub fn run(args: &Args) -> Result<()> {
    frida_framework::write_private_modulemap(&args.destination, &args.header).with_context(
        || {
            format!(
                "Failed to write module-map: {}",
                args.destination.display()
            )
        },
    )
}
