//! generate-modulemap - write the Frida_Private module-map

use clap::Parser;
use frida_framework_cli::modulemap::{self, Args};

fn main() -> anyhow::Result<()> {
    frida_framework_cli::init_logging();

    let args = Args::parse();
    modulemap::run(&args)
}
