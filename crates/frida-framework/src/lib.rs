//! Framework bundle assembly for Frida
//!
//! This crate turns the artifacts produced by the Swift toolchain (a shared
//! library, its public header and the `<library>.p` private-asset directory)
//! into an Apple-style `.framework` directory, and writes the module-maps
//! that let module-aware compilers import it.
//!
//! # Bundle Structure
//!
//! ```text
//! Frida.framework
//! ├── Frida
//! ├── Headers/
//! │   └── frida-core.h
//! ├── Modules/
//! │   ├── module.modulemap
//! │   ├── module.private.modulemap
//! │   └── Frida.swiftmodule/
//! │       ├── arm64-apple-ios.abi.json
//! │       ├── arm64-apple-ios.private.swiftinterface
//! │       ├── arm64-apple-ios.swiftdoc
//! │       ├── arm64-apple-ios.swiftinterface
//! │       ├── arm64-apple-ios.swiftmodule
//! │       └── Project/
//! │           └── arm64-apple-ios.swiftsourceinfo
//! └── Resources/
//!     └── Info.plist
//! ```
//!
//! # Example
//!
//! ```no_run
//! use frida_framework::{FrameworkAssembler, FrameworkLayout, FrameworkSources, Triplet};
//!
//! let sources = FrameworkSources::new("build/Frida.dylib", "build/frida-core.h", "Info.plist");
//! let report = FrameworkAssembler::new(FrameworkLayout::default()).assemble(
//!     &Triplet::new("arm64-apple-ios"),
//!     "build/Frida.framework",
//!     &sources,
//! )?;
//!
//! println!("wrote {} files", report.files().len());
//! # Ok::<(), frida_framework::FrameworkError>(())
//! ```

mod asset;
mod error;
mod layout;

pub mod framework;
pub mod modulemap;

pub use asset::{AssetPlacement, SwiftAsset, private_asset_dir};
pub use error::FrameworkError;
pub use framework::{AssemblyReport, FrameworkAssembler, FrameworkSources};
pub use layout::{FrameworkLayout, Triplet};
pub use modulemap::{ModuleMap, write_private_modulemap};

/// Result type for framework operations.
pub type FrameworkResult<T> = Result<T, FrameworkError>;

/// Suffix appended to the binary's file name to locate its private assets.
pub const PRIVATE_ASSET_SUFFIX: &str = ".p";

/// File name of the public module-map inside `Modules/`.
pub const MODULEMAP_FILE: &str = "module.modulemap";

/// File name of the private module-map inside `Modules/`.
pub const PRIVATE_MODULEMAP_FILE: &str = "module.private.modulemap";
