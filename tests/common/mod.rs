//! Integration test fixtures for googlesignin-fix.
//!
//! These tests verify end-to-end behavior by creating synthetic DerivedData
//! trees and executing fixes through the command-line interface.

use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Manifest with all three deprecated syntax families present.
pub const DEPRECATED_MANIFEST: &str = r#"// swift-tools-version:5.3
import PackageDescription

let package = Package(
    name: "GoogleSignIn",
    dependencies: [
        .package(
            name: "AppAuth",
            url: "https://github.com/openid/AppAuth-iOS.git",
            .revision("c89ed571ae140f8eb1142735e6e23d7bb8c34cb2")
        ),
        .package(
            name: "GoogleUtilities",
            url: "https://github.com/google/GoogleUtilities.git",
            "7.2.1"..<"8.0.0"
        ),
    ],
    targets: [
        .target(
            name: "GoogleSignIn",
            dependencies: [
                .product(name: "AppAuth", package: "AppAuth"),
                .product(name: "GULAppDelegateSwizzler", package: "GoogleUtilities"),
            ]
        ),
    ]
)
"#;

/// Creates a DerivedData tree with a GoogleSignIn-iOS checkout containing
/// `content`, returning the tree root and the manifest path.
#[allow(unused)]
pub fn create_derived_data(content: &str) -> (TempDir, PathBuf) {
    let temp = TempDir::new().unwrap();
    let checkout = temp
        .path()
        .join("MyApp-gfkcayawbzmpkfbuxhftqnonqkpv")
        .join("SourcePackages/checkouts/GoogleSignIn-iOS");
    fs::create_dir_all(&checkout).unwrap();

    let manifest = checkout.join("Package.swift");
    fs::write(&manifest, content).unwrap();

    (temp, manifest)
}

/// Helper to run the fix command against a DerivedData directory
#[allow(unused)]
pub fn run_fix(derived_data: &Path, extra_args: &[&str]) -> assert_cmd::assert::Assert {
    let mut cmd = cargo_bin_cmd!("googlesignin-fix");
    cmd.arg("--derived-data")
        .arg(derived_data)
        .args(extra_args);

    cmd.assert()
}
