use crate::error::{FixError, Result};
use crate::ops::rules;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Applies the full set of syntax fixes to a manifest buffer.
///
/// Pure transform; the rule families run in the fixed order declared in
/// [`rules`]. Input that contains none of the targeted patterns comes back
/// byte-identical.
pub fn apply_fixes(content: &str) -> Result<String> {
    let mut content = content.to_string();

    for name in rules::SIMPLIFIED_PACKAGE_NAMES {
        let pattern = Regex::new(&rules::package_decl_pattern(name))?;
        content = pattern
            .replace_all(&content, rules::PACKAGE_DECL_REPLACEMENT)
            .to_string();
    }

    let pin = Regex::new(rules::REVISION_PIN_PATTERN)?;
    content = pin
        .replace_all(&content, rules::REVISION_PIN_REPLACEMENT)
        .to_string();

    for (old, new) in rules::RENAMED_PACKAGE_IDS {
        content = content.replace(&rules::package_ref(old), &rules::package_ref(new));
    }

    Ok(content)
}

/// Rewrites the manifest at `path` in place.
///
/// Returns `true` if the file was modified. When the content is already
/// clean, nothing is written and the permission bits are left untouched.
/// The checkout is created read-only by Xcode, so the file is made
/// owner-writable before the rewrite.
pub fn fix_manifest(path: &Path) -> Result<bool> {
    let original = fs::read_to_string(path).map_err(|e| {
        FixError::Io(std::io::Error::new(
            e.kind(),
            format!("Failed to read {}: {}", path.display(), e),
        ))
    })?;

    let fixed = apply_fixes(&original)?;

    if fixed == original {
        log::debug!("No changes needed for: {}", path.display());
        return Ok(false);
    }

    make_writable(path)?;

    fs::write(path, &fixed).map_err(|e| {
        FixError::Io(std::io::Error::new(
            e.kind(),
            format!("Failed to write {}: {}", path.display(), e),
        ))
    })?;

    log::debug!("Updated: {}", path.display());
    Ok(true)
}

/// Sets the manifest to owner read/write, group/other read-only.
fn make_writable(path: &Path) -> Result<()> {
    let mut perms = fs::metadata(path)?.permissions();

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        perms.set_mode(0o644);
    }

    #[cfg(not(unix))]
    perms.set_readonly(false);

    fs::set_permissions(path, perms)?;
    Ok(())
}
