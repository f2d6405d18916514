//! Framework assembly.
//!
//! The [`FrameworkAssembler`] lays out a `.framework` directory from a
//! compiled library, its header, its private Swift assets and an
//! `Info.plist`.

use crate::{
    FrameworkError, FrameworkLayout, FrameworkResult, ModuleMap, SwiftAsset, Triplet,
    private_asset_dir,
};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Input artifacts for a framework.
#[derive(Debug, Clone)]
pub struct FrameworkSources {
    /// Compiled shared library. Its `<name>.p` sibling holds the Swift assets.
    pub binary: PathBuf,
    /// Public C header, copied into `Headers/` under its own name.
    pub header: PathBuf,
    /// Property list copied to `Resources/Info.plist`.
    pub info_plist: PathBuf,
}

impl FrameworkSources {
    pub fn new(
        binary: impl Into<PathBuf>,
        header: impl Into<PathBuf>,
        info_plist: impl Into<PathBuf>,
    ) -> Self {
        Self {
            binary: binary.into(),
            header: header.into(),
            info_plist: info_plist.into(),
        }
    }
}

/// Files written by a successful assembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssemblyReport {
    root: PathBuf,
    files: Vec<PathBuf>,
}

impl AssemblyReport {
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Written files, in the order they were produced.
    #[must_use]
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }
}

/// Assembles framework bundles for a given [`FrameworkLayout`].
///
/// # Example
///
/// ```no_run
/// use frida_framework::{FrameworkAssembler, FrameworkLayout, FrameworkSources, Triplet};
///
/// let sources = FrameworkSources::new("out/Frida.dylib", "out/frida-core.h", "Info.plist");
/// FrameworkAssembler::new(FrameworkLayout::default()).assemble(
///     &Triplet::new("arm64-apple-macos"),
///     "out/Frida.framework",
///     &sources,
/// )?;
/// # Ok::<(), frida_framework::FrameworkError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct FrameworkAssembler {
    layout: FrameworkLayout,
}

impl FrameworkAssembler {
    #[must_use]
    pub fn new(layout: FrameworkLayout) -> Self {
        Self { layout }
    }

    #[must_use]
    pub fn layout(&self) -> &FrameworkLayout {
        &self.layout
    }

    /// Build the framework at `root`, discarding whatever was there before.
    ///
    /// Any missing input aborts the whole operation. Files already written
    /// are left in place; the next successful run removes them.
    pub fn assemble<P: AsRef<Path>>(
        &self,
        triplet: &Triplet,
        root: P,
        sources: &FrameworkSources,
    ) -> FrameworkResult<AssemblyReport> {
        let root = root.as_ref();
        let layout = &self.layout;
        let mut written = Vec::new();

        reset_dir(root)?;

        let binary_dest = layout.binary_path(root);
        copy_file(&sources.binary, &binary_dest)?;
        written.push(binary_dest);

        let headers_dir = layout.headers_dir(root);
        create_dir(&headers_dir)?;
        let header_name = sources
            .header
            .file_name()
            .ok_or_else(|| FrameworkError::InvalidPath(sources.header.clone()))?;
        let header_dest = headers_dir.join(header_name);
        copy_file(&sources.header, &header_dest)?;
        written.push(header_dest);

        create_dir(&layout.modules_dir(root))?;
        let modulemap = layout.modulemap_path(root);
        ModuleMap::umbrella(&layout.product_name, &layout.umbrella_header).write_to(&modulemap)?;
        written.push(modulemap);
        let private_modulemap = layout.private_modulemap_path(root);
        ModuleMap::private_placeholder(&layout.private_module_name)
            .write_to(&private_modulemap)?;
        written.push(private_modulemap);

        create_dir(&layout.swiftmodule_dir(root))?;
        let asset_dir = private_asset_dir(&sources.binary)?;
        for asset in SwiftAsset::ALL {
            if asset == SwiftAsset::SwiftSourceInfo {
                create_dir(&layout.project_dir(root))?;
            }
            let source = asset_dir.join(asset.source_file_name(&layout.product_name));
            let dest = layout.asset_path(root, triplet, asset);
            copy_file(&source, &dest)?;
            written.push(dest);
        }

        create_dir(&layout.resources_dir(root))?;
        let plist_dest = layout.info_plist_path(root);
        copy_file(&sources.info_plist, &plist_dest)?;
        written.push(plist_dest);

        tracing::info!(
            "Assembled {} for {} ({} files)",
            root.display(),
            triplet,
            written.len()
        );

        Ok(AssemblyReport {
            root: root.to_path_buf(),
            files: written,
        })
    }
}

/// Remove `dir` if it is a directory, then create it empty.
///
/// Anything other than a directory at `dir` (a file, a symlink) is refused
/// and left untouched.
fn reset_dir(dir: &Path) -> FrameworkResult<()> {
    match fs::symlink_metadata(dir) {
        Ok(meta) if meta.is_dir() => {
            tracing::debug!("Removing previous bundle at {}", dir.display());
            fs::remove_dir_all(dir).map_err(|e| FrameworkError::io(dir, e))?;
        }
        Ok(_) => return Err(FrameworkError::NotADirectory(dir.to_path_buf())),
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => return Err(FrameworkError::io(dir, e)),
    }
    create_dir(dir)
}

fn create_dir(dir: &Path) -> FrameworkResult<()> {
    fs::create_dir(dir).map_err(|e| FrameworkError::io(dir, e))
}

/// Copy `source` to `dest`, reporting a missing source as [`FrameworkError::MissingFile`].
fn copy_file(source: &Path, dest: &Path) -> FrameworkResult<()> {
    match fs::metadata(source) {
        Ok(meta) if meta.is_file() => {}
        Ok(_) => return Err(FrameworkError::MissingFile(source.to_path_buf())),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(FrameworkError::MissingFile(source.to_path_buf()));
        }
        Err(e) => return Err(FrameworkError::io(source, e)),
    }

    fs::copy(source, dest).map_err(|e| FrameworkError::io(dest, e))?;
    tracing::debug!("Copied {} -> {}", source.display(), dest.display());
    Ok(())
}
