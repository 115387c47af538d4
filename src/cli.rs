use clap::Parser;
use std::path::PathBuf;

/// Fix deprecated Swift Package Manager syntax in the GoogleSignIn-iOS
/// Package.swift checked out under Xcode's DerivedData.
#[derive(Parser, Debug, Clone)]
#[command(name = "googlesignin-fix", version)]
pub struct FixArgs {
    /// Path to the Package.swift to fix (skips the DerivedData search)
    #[arg(long, value_name = "PATH")]
    pub manifest_path: Option<PathBuf>,

    /// DerivedData directory to search
    ///
    /// Defaults to ~/Library/Developer/Xcode/DerivedData.
    #[arg(long, value_name = "DIR", conflicts_with = "manifest_path")]
    pub derived_data: Option<PathBuf>,

    /// Report whether the manifest needs fixing without writing changes
    #[arg(long, short = 'n')]
    pub dry_run: bool,
}
