//! Locates the GoogleSignIn-iOS Package.swift inside Xcode's DerivedData.
//!
//! Read-only filesystem queries; nothing here mutates state.

use crate::error::Result;
use std::path::{Path, PathBuf};

/// Search pattern relative to the DerivedData root. The wildcard segment is
/// the per-project build directory Xcode derives from the project name.
const MANIFEST_GLOB: &str = "*/SourcePackages/checkouts/GoogleSignIn-iOS/Package.swift";

/// DerivedData location relative to the user's home directory.
const DERIVED_DATA_DIR: &str = "Library/Developer/Xcode/DerivedData";

/// Searches the default DerivedData location for the manifest.
///
/// Returns `Ok(None)` when the home directory cannot be determined; with no
/// home there is no DerivedData to search either.
pub fn find_manifest() -> Result<Option<PathBuf>> {
    let Some(home) = dirs::home_dir() else {
        log::debug!("Home directory could not be determined");
        return Ok(None);
    };

    find_manifest_in(&home.join(DERIVED_DATA_DIR))
}

/// Searches `derived_data` for the manifest.
///
/// Returns the first match in alphabetical order, or `Ok(None)` when the
/// directory does not exist or nothing matches. The returned path is not
/// checked for readability.
pub fn find_manifest_in(derived_data: &Path) -> Result<Option<PathBuf>> {
    if !derived_data.exists() {
        log::debug!(
            "DerivedData directory does not exist: {}",
            derived_data.display()
        );
        return Ok(None);
    }

    let pattern = derived_data.join(MANIFEST_GLOB);
    let pattern = pattern.to_str().ok_or_else(|| {
        anyhow::anyhow!(
            "DerivedData path is not valid UTF-8: {}",
            derived_data.display()
        )
    })?;

    log::debug!("Searching for manifest: {}", pattern);
    let first = glob::glob(pattern)?.next().transpose()?;
    Ok(first)
}
