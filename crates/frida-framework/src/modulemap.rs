//! Module-map rendering.
//!
//! The documents produced here are consumed by clang's module loader, so the
//! exact text (indentation, blank lines, trailing newline) is part of the
//! contract. Nothing in this crate parses them back.

use crate::{FrameworkError, FrameworkResult};
use std::fs;
use std::path::Path;

/// A module-map document ready to be written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleMap {
    text: String,
}

impl ModuleMap {
    /// Public framework module-map exporting an umbrella header and every
    /// nested submodule.
    #[must_use]
    pub fn umbrella(product: &str, umbrella_header: &str) -> Self {
        let opening = format!("framework module {product} {{");
        let header = format!("  umbrella header \"{umbrella_header}\"");
        Self::from_lines(&[
            opening.as_str(),
            header.as_str(),
            "  export *",
            "",
            "  module * { export * }",
            "}",
            "",
        ])
    }

    /// Empty `[extern_c]` module declaration shipped inside the framework.
    #[must_use]
    pub fn private_placeholder(private_module: &str) -> Self {
        let opening = format!("module {private_module} [extern_c] {{");
        Self::from_lines(&[opening.as_str(), "}", ""])
    }

    /// `[extern_c]` module exporting a single header.
    ///
    /// The header is inserted verbatim; no quoting or escaping is applied.
    #[must_use]
    pub fn private_with_header(private_module: &str, header: &str) -> Self {
        let opening = format!("module {private_module} [extern_c] {{");
        let header = format!("  header \"{header}\"");
        Self::from_lines(&[
            opening.as_str(),
            header.as_str(),
            "  export *",
            "}",
            "",
            "",
        ])
    }

    fn from_lines(lines: &[&str]) -> Self {
        Self {
            text: lines.join("\n"),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Write the document to `path`, replacing any existing file.
    ///
    /// Parent directories are not created.
    pub fn write_to(&self, path: &Path) -> FrameworkResult<()> {
        fs::write(path, self.text.as_bytes()).map_err(|e| FrameworkError::io(path, e))?;
        tracing::debug!("Wrote module-map {}", path.display());
        Ok(())
    }
}

/// Write the standalone private module-map for the `Frida_Private` module.
///
/// This is the module-map the Swift package uses to import the core C API
/// before the framework exists, so it names `header` explicitly.
pub fn write_private_modulemap(destination: &Path, header: &str) -> FrameworkResult<()> {
    let layout = crate::FrameworkLayout::default();
    ModuleMap::private_with_header(&layout.private_module_name, header).write_to(destination)
}
