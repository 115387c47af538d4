//! Substitution rules for the deprecated GoogleSignIn-iOS manifest syntax.
//!
//! The tables are ordered, and the rule families must be applied in the
//! order they appear here: declaration simplification, then revision-pin
//! normalization, then package-reference renaming.

/// Dependencies declared with the deprecated two-argument
/// `.package(name:, url:)` form. The `name` argument is redundant and
/// rejected by newer toolchains.
pub const SIMPLIFIED_PACKAGE_NAMES: &[&str] = &[
    "AppAuth",
    "AppCheck",
    "GTMAppAuth",
    "GTMSessionFetcher",
    "GoogleUtilities",
    "OCMock",
];

/// Target references that still use the packages' old display names,
/// paired with their canonical identifiers.
pub const RENAMED_PACKAGE_IDS: &[(&str, &str)] = &[
    ("AppAuth", "appauth-ios"),
    ("AppCheck", "app-check"),
    ("GTMAppAuth", "gtmappauth"),
    ("GTMSessionFetcher", "gtm-session-fetcher"),
    ("GoogleUtilities", "googleutilities"),
];

/// Deprecated function-call revision pin, e.g. `.revision("abc123")`.
pub const REVISION_PIN_PATTERN: &str = r#"\.revision\("([^"]+)"\)"#;

/// Keyword-style replacement, preserving the pinned value verbatim.
pub const REVISION_PIN_REPLACEMENT: &str = r#"revision: "${1}""#;

/// Replacement for a simplified package declaration.
pub const PACKAGE_DECL_REPLACEMENT: &str = ".package(url:";

/// Builds the pattern matching a two-argument declaration of `name`.
///
/// Whitespace-insensitive after the opening parenthesis and the comma; the
/// name literal must match exactly.
pub fn package_decl_pattern(name: &str) -> String {
    format!(r#"\.package\(\s*name: "{}",\s*url:"#, regex::escape(name))
}

/// Literal `package:` reference for `name`, as it appears in target
/// dependency lists.
pub fn package_ref(name: &str) -> String {
    format!(r#"package: "{}""#, name)
}
