use crate::cli::FixArgs;
use crate::error::Result;
use crate::locate;
use crate::ops::{apply_fixes, fix_manifest};
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

pub fn execute(args: FixArgs) -> Result<()> {
    let Some(manifest) = resolve_manifest(&args)? else {
        println!("GoogleSignIn-iOS Package.swift not found.");
        println!("Make sure Xcode has resolved packages first.");
        return Ok(());
    };

    println!("Found Package.swift at: {}", manifest.display());

    if args.dry_run {
        let content = fs::read_to_string(&manifest)?;
        if apply_fixes(&content)? != content {
            println!(
                "{}",
                "Deprecated syntax found. Run without --dry-run to fix it.".yellow()
            );
        } else {
            println!("Package.swift already fixed or doesn't need fixing");
        }
        return Ok(());
    }

    if fix_manifest(&manifest)? {
        println!(
            "{} {}",
            "✓".green().bold(),
            "Fixed deprecated syntax in GoogleSignIn-iOS Package.swift".green()
        );
    } else {
        println!("Package.swift already fixed or doesn't need fixing");
    }

    Ok(())
}

/// An explicit --manifest-path wins over the DerivedData search.
fn resolve_manifest(args: &FixArgs) -> Result<Option<PathBuf>> {
    if let Some(path) = &args.manifest_path {
        log::debug!("Using explicit manifest path: {}", path.display());
        return Ok(Some(path.clone()));
    }

    match &args.derived_data {
        Some(dir) => locate::find_manifest_in(dir),
        None => locate::find_manifest(),
    }
}
