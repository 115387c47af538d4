mod rewrite;
mod rules;

pub use rewrite::{apply_fixes, fix_manifest};
pub use rules::{RENAMED_PACKAGE_IDS, SIMPLIFIED_PACKAGE_NAMES};
