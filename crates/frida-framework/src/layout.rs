//! Framework layout configuration

use crate::{AssetPlacement, MODULEMAP_FILE, PRIVATE_MODULEMAP_FILE, SwiftAsset};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Target triplet such as `arm64-apple-ios`.
///
/// Used verbatim as a file name prefix; its structure is never inspected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Triplet(String);

impl Triplet {
    pub fn new(triplet: impl Into<String>) -> Self {
        Self(triplet.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Triplet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Names that shape the framework bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameworkLayout {
    /// Product name: the binary's name inside the bundle, the framework
    /// module name and the `.swiftmodule` directory stem.
    #[serde(default = "default_product_name")]
    pub product_name: String,

    /// Name of the opaque `[extern_c]` module.
    #[serde(default = "default_private_module_name")]
    pub private_module_name: String,

    /// Umbrella header named by the public module-map.
    #[serde(default = "default_umbrella_header")]
    pub umbrella_header: String,
}

fn default_product_name() -> String {
    "Frida".to_string()
}

fn default_private_module_name() -> String {
    "Frida_Private".to_string()
}

fn default_umbrella_header() -> String {
    "Frida.h".to_string()
}

impl Default for FrameworkLayout {
    fn default() -> Self {
        Self {
            product_name: default_product_name(),
            private_module_name: default_private_module_name(),
            umbrella_header: default_umbrella_header(),
        }
    }
}

impl FrameworkLayout {
    #[must_use]
    pub fn binary_path(&self, root: &Path) -> PathBuf {
        root.join(&self.product_name)
    }

    #[must_use]
    pub fn headers_dir(&self, root: &Path) -> PathBuf {
        root.join("Headers")
    }

    #[must_use]
    pub fn modules_dir(&self, root: &Path) -> PathBuf {
        root.join("Modules")
    }

    #[must_use]
    pub fn modulemap_path(&self, root: &Path) -> PathBuf {
        self.modules_dir(root).join(MODULEMAP_FILE)
    }

    #[must_use]
    pub fn private_modulemap_path(&self, root: &Path) -> PathBuf {
        self.modules_dir(root).join(PRIVATE_MODULEMAP_FILE)
    }

    /// `Modules/<product>.swiftmodule`
    #[must_use]
    pub fn swiftmodule_dir(&self, root: &Path) -> PathBuf {
        self.modules_dir(root)
            .join(format!("{}.swiftmodule", self.product_name))
    }

    #[must_use]
    pub fn project_dir(&self, root: &Path) -> PathBuf {
        self.swiftmodule_dir(root).join("Project")
    }

    #[must_use]
    pub fn resources_dir(&self, root: &Path) -> PathBuf {
        root.join("Resources")
    }

    #[must_use]
    pub fn info_plist_path(&self, root: &Path) -> PathBuf {
        self.resources_dir(root).join("Info.plist")
    }

    /// Bundle path an asset is copied to for `triplet`.
    #[must_use]
    pub fn asset_path(&self, root: &Path, triplet: &Triplet, asset: SwiftAsset) -> PathBuf {
        let dir = match asset.placement() {
            AssetPlacement::ModuleRoot => self.swiftmodule_dir(root),
            AssetPlacement::Project => self.project_dir(root),
        };
        dir.join(asset.destination_file_name(triplet.as_str()))
    }

    /// Every file a successful assembly leaves under `root`, in the order it
    /// is written.
    #[must_use]
    pub fn expected_files(&self, root: &Path, triplet: &Triplet, header_name: &str) -> Vec<PathBuf> {
        let mut files = vec![
            self.binary_path(root),
            self.headers_dir(root).join(header_name),
            self.modulemap_path(root),
            self.private_modulemap_path(root),
        ];
        files.extend(
            SwiftAsset::ALL
                .into_iter()
                .map(|asset| self.asset_path(root, triplet, asset)),
        );
        files.push(self.info_plist_path(root));
        files
    }
}
