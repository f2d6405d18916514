//! Framework assembly command.

use anyhow::{Context, Result};
use clap::Parser;
use frida_framework::{
    AssemblyReport, FrameworkAssembler, FrameworkLayout, FrameworkSources, Triplet,
};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "generate-framework")]
#[command(version, about = "Assemble Frida.framework from compiled artifacts", long_about = None)]
pub struct Args {
    /// Target triplet used to name the Swift module files (e.g., arm64-apple-ios)
    #[arg(allow_hyphen_values = true)]
    pub triplet: String,

    /// Framework directory to (re)create
    #[arg(allow_hyphen_values = true)]
    pub framework_dir: PathBuf,

    /// Compiled shared library; its `<name>.p` sibling holds the Swift assets
    #[arg(allow_hyphen_values = true)]
    pub binary: PathBuf,

    /// Public C header to place under Headers/
    #[arg(allow_hyphen_values = true)]
    pub header: PathBuf,

    /// Info.plist to place under Resources/
    #[arg(allow_hyphen_values = true)]
    pub info_plist: PathBuf,
}

/// Run the framework command.
pub fn run(args: &Args) -> Result<AssemblyReport> {
    let sources = FrameworkSources::new(&args.binary, &args.header, &args.info_plist);

    tracing::debug!(
        "Assembling {} for {}",
        args.framework_dir.display(),
        args.triplet
    );

    FrameworkAssembler::new(FrameworkLayout::default())
        .assemble(&Triplet::new(args.triplet.as_str()), &args.framework_dir, &sources)
        .with_context(|| {
            format!(
                "Failed to assemble framework: {}",
                args.framework_dir.display()
            )
        })
}
