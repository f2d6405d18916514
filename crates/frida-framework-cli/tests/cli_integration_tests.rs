//! Integration tests for the generate-framework and generate-modulemap binaries.
//!
//! Runs the built executables and checks exit status, diagnostics and the
//! tree left on disk.

#![allow(non_snake_case)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

const ASSET_EXTENSIONS: &[&str] = &[
    "abi.json",
    "private.swiftinterface",
    "swiftdoc",
    "swiftinterface",
    "swiftmodule",
    "swiftsourceinfo",
];

/// Helper to create fake toolchain output: binary, header, plist and `.p` assets.
fn create_fake_build(dir: &Path) -> (PathBuf, PathBuf, PathBuf) {
    let binary = dir.join("Frida.dylib");
    fs::write(&binary, b"fake dylib").unwrap();
    let header = dir.join("frida-core.h");
    fs::write(&header, b"#pragma once\n").unwrap();
    let plist = dir.join("Info.plist");
    fs::write(&plist, b"<plist/>").unwrap();

    let private_dir = dir.join("Frida.dylib.p");
    fs::create_dir(&private_dir).unwrap();
    for ext in ASSET_EXTENSIONS {
        fs::write(private_dir.join(format!("Frida.{ext}")), ext.as_bytes()).unwrap();
    }

    (binary, header, plist)
}

fn generate_framework(args: &[&PathBuf], triplet: &str) -> Output {
    Command::new(env!("CARGO_BIN_EXE_generate-framework"))
        .arg(triplet)
        .args(args)
        .output()
        .unwrap()
}

fn collect_files(root: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    let mut pending = vec![root.to_path_buf()];
    while let Some(dir) = pending.pop() {
        for entry in fs::read_dir(&dir).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                pending.push(path);
            } else {
                files.push(path.strip_prefix(root).unwrap().to_path_buf());
            }
        }
    }
    files.sort();
    files
}

// =============================================================================
// generate-framework
// =============================================================================

mod framework_command {
    use super::*;

    #[test]
    fn generate_framework___valid_inputs___exits_zero_with_full_tree() {
        let temp_dir = TempDir::new().unwrap();
        let (binary, header, plist) = create_fake_build(temp_dir.path());
        let root = temp_dir.path().join("Frida.framework");

        let output = generate_framework(&[&root, &binary, &header, &plist], "arm64-apple-ios");

        assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
        let expected: Vec<PathBuf> = [
            "Frida",
            "Headers/frida-core.h",
            "Modules/Frida.swiftmodule/Project/arm64-apple-ios.swiftsourceinfo",
            "Modules/Frida.swiftmodule/arm64-apple-ios.abi.json",
            "Modules/Frida.swiftmodule/arm64-apple-ios.private.swiftinterface",
            "Modules/Frida.swiftmodule/arm64-apple-ios.swiftdoc",
            "Modules/Frida.swiftmodule/arm64-apple-ios.swiftinterface",
            "Modules/Frida.swiftmodule/arm64-apple-ios.swiftmodule",
            "Modules/module.modulemap",
            "Modules/module.private.modulemap",
            "Resources/Info.plist",
        ]
        .into_iter()
        .map(PathBuf::from)
        .collect();
        assert_eq!(collect_files(&root), expected);
    }

    #[test]
    fn generate_framework___run_twice___produces_identical_bytes() {
        let temp_dir = TempDir::new().unwrap();
        let (binary, header, plist) = create_fake_build(temp_dir.path());
        let root = temp_dir.path().join("Frida.framework");
        let args = [&root, &binary, &header, &plist];

        assert!(generate_framework(&args, "arm64-apple-ios").status.success());
        let first: Vec<_> = collect_files(&root)
            .into_iter()
            .map(|p| (fs::read(root.join(&p)).unwrap(), p))
            .collect();
        assert!(generate_framework(&args, "arm64-apple-ios").status.success());
        let second: Vec<_> = collect_files(&root)
            .into_iter()
            .map(|p| (fs::read(root.join(&p)).unwrap(), p))
            .collect();

        assert_eq!(first, second);
    }

    #[test]
    fn generate_framework___missing_asset___exits_nonzero_naming_path() {
        let temp_dir = TempDir::new().unwrap();
        let (binary, header, plist) = create_fake_build(temp_dir.path());
        fs::remove_file(temp_dir.path().join("Frida.dylib.p/Frida.swiftdoc")).unwrap();
        let root = temp_dir.path().join("Frida.framework");

        let output = generate_framework(&[&root, &binary, &header, &plist], "arm64-apple-ios");

        assert!(!output.status.success());
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Frida.swiftdoc"), "{stderr}");
        assert!(root.is_dir());
        assert!(!root.join("Modules/Frida.swiftmodule/arm64-apple-ios.swiftdoc").exists());
    }

    #[test]
    fn generate_framework___dash_prefixed_triplet___names_assets_verbatim() {
        let temp_dir = TempDir::new().unwrap();
        let (binary, header, plist) = create_fake_build(temp_dir.path());
        let root = temp_dir.path().join("Frida.framework");

        let output = generate_framework(&[&root, &binary, &header, &plist], "-arm64-apple-ios");

        assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
        assert!(
            root.join("Modules/Frida.swiftmodule/-arm64-apple-ios.swiftmodule")
                .is_file()
        );
    }

    #[test]
    fn generate_framework___too_few_arguments___exits_nonzero() {
        let output = Command::new(env!("CARGO_BIN_EXE_generate-framework"))
            .args(["arm64-apple-ios", "Frida.framework"])
            .output()
            .unwrap();

        assert!(!output.status.success());
    }
}

// =============================================================================
// generate-modulemap
// =============================================================================

mod modulemap_command {
    use super::*;

    #[test]
    fn generate_modulemap___writes_exact_text() {
        let temp_dir = TempDir::new().unwrap();
        let destination = temp_dir.path().join("module.modulemap");

        let output = Command::new(env!("CARGO_BIN_EXE_generate-modulemap"))
            .arg(&destination)
            .arg("Foo.h")
            .output()
            .unwrap();

        assert!(output.status.success());
        assert_eq!(
            fs::read_to_string(&destination).unwrap(),
            "module Frida_Private [extern_c] {\n  header \"Foo.h\"\n  export *\n}\n\n"
        );
    }

    #[test]
    fn generate_modulemap___dash_prefixed_header___writes_exact_text() {
        let temp_dir = TempDir::new().unwrap();
        let destination = temp_dir.path().join("module.modulemap");

        let output = Command::new(env!("CARGO_BIN_EXE_generate-modulemap"))
            .arg(&destination)
            .arg("-Foo.h")
            .output()
            .unwrap();

        assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
        assert_eq!(
            fs::read_to_string(&destination).unwrap(),
            "module Frida_Private [extern_c] {\n  header \"-Foo.h\"\n  export *\n}\n\n"
        );
    }

    #[test]
    fn generate_modulemap___missing_parent_directory___exits_nonzero() {
        let temp_dir = TempDir::new().unwrap();
        let destination = temp_dir.path().join("missing/module.modulemap");

        let output = Command::new(env!("CARGO_BIN_EXE_generate-modulemap"))
            .arg(&destination)
            .arg("Foo.h")
            .output()
            .unwrap();

        assert!(!output.status.success());
        assert!(String::from_utf8_lossy(&output.stderr).contains("module.modulemap"));
    }

    #[test]
    fn generate_modulemap___missing_header_argument___exits_nonzero() {
        let temp_dir = TempDir::new().unwrap();
        let destination = temp_dir.path().join("module.modulemap");

        let output = Command::new(env!("CARGO_BIN_EXE_generate-modulemap"))
            .arg(&destination)
            .output()
            .unwrap();

        assert!(!output.status.success());
        assert!(!destination.exists());
    }
}
