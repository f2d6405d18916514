//! Swift module assets shipped inside the framework.

use crate::{FrameworkError, FrameworkResult, PRIVATE_ASSET_SUFFIX};
use std::fmt;
use std::path::{Path, PathBuf};

/// The fixed set of per-architecture files copied out of the private-asset
/// directory into `Modules/<product>.swiftmodule/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwiftAsset {
    /// ABI description (`abi.json`).
    AbiJson,
    /// Private textual interface (`private.swiftinterface`).
    PrivateSwiftInterface,
    /// Documentation (`swiftdoc`).
    SwiftDoc,
    /// Public textual interface (`swiftinterface`).
    SwiftInterface,
    /// Compiled module (`swiftmodule`).
    SwiftModule,
    /// Source locations (`swiftsourceinfo`), stored under `Project/`.
    SwiftSourceInfo,
}

/// Where an asset lands inside the `.swiftmodule` directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetPlacement {
    /// Directly inside `<product>.swiftmodule/`.
    ModuleRoot,
    /// Inside `<product>.swiftmodule/Project/`.
    Project,
}

impl SwiftAsset {
    /// Every asset, in copy order.
    pub const ALL: [SwiftAsset; 6] = [
        Self::AbiJson,
        Self::PrivateSwiftInterface,
        Self::SwiftDoc,
        Self::SwiftInterface,
        Self::SwiftModule,
        Self::SwiftSourceInfo,
    ];

    /// The extension shared by the source and destination file names.
    #[must_use]
    pub fn extension(&self) -> &'static str {
        match self {
            Self::AbiJson => "abi.json",
            Self::PrivateSwiftInterface => "private.swiftinterface",
            Self::SwiftDoc => "swiftdoc",
            Self::SwiftInterface => "swiftinterface",
            Self::SwiftModule => "swiftmodule",
            Self::SwiftSourceInfo => "swiftsourceinfo",
        }
    }

    #[must_use]
    pub fn placement(&self) -> AssetPlacement {
        match self {
            Self::SwiftSourceInfo => AssetPlacement::Project,
            _ => AssetPlacement::ModuleRoot,
        }
    }

    /// Name of the file the toolchain leaves in the private-asset directory.
    ///
    /// # Example
    ///
    /// ```
    /// use frida_framework::SwiftAsset;
    ///
    /// assert_eq!(SwiftAsset::AbiJson.source_file_name("Frida"), "Frida.abi.json");
    /// ```
    #[must_use]
    pub fn source_file_name(&self, product: &str) -> String {
        format!("{product}.{}", self.extension())
    }

    /// Name of the file inside the bundle, prefixed with the target triplet.
    ///
    /// # Example
    ///
    /// ```
    /// use frida_framework::SwiftAsset;
    ///
    /// assert_eq!(
    ///     SwiftAsset::SwiftModule.destination_file_name("arm64-apple-ios"),
    ///     "arm64-apple-ios.swiftmodule"
    /// );
    /// ```
    #[must_use]
    pub fn destination_file_name(&self, triplet: &str) -> String {
        format!("{triplet}.{}", self.extension())
    }
}

impl fmt::Display for SwiftAsset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// Locate the private-asset directory that sits next to `binary`.
///
/// The result is `<binary>.p`, derived lexically so it does not depend on
/// the current working directory or on the binary existing.
pub fn private_asset_dir(binary: &Path) -> FrameworkResult<PathBuf> {
    let file_name = binary
        .file_name()
        .ok_or_else(|| FrameworkError::InvalidPath(binary.to_path_buf()))?;

    let mut dir_name = file_name.to_os_string();
    dir_name.push(PRIVATE_ASSET_SUFFIX);

    Ok(binary.with_file_name(dir_name))
}
