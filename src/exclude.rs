//! Exclusion rule handling for the template builder.
//! Rules identify paths that must never ship in the distributable template:
//! dependency caches, build output, lock files, version-control metadata,
//! environment files and editor directories.

use crate::error::{Error, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::Path;

/// Entries stripped from the working tree when assembling the template.
pub const DEFAULT_EXCLUDES: [&str; 14] = [
    "node_modules",
    "dist",
    "build",
    "coverage",
    ".git",
    ".DS_Store",
    "package-lock.json",
    "yarn.lock",
    "pnpm-lock.yaml",
    ".env",
    ".env.local",
    ".vscode",
    ".idea",
    "templates",
];

/// An immutable set of exclusion rules, fixed when the builder starts.
///
/// A plain rule matches a relative path by exact equality, by directory
/// prefix (`rule/`), or by base name at any depth. A rule containing glob
/// metacharacters is compiled into a glob matcher instead. The set is a
/// union: any matching strategy excludes the entry, and an excluded
/// directory excludes its entire subtree.
pub struct ExcludeSet {
    plain: Vec<String>,
    globs: GlobSet,
}

fn is_glob_rule(rule: &str) -> bool {
    rule.contains(['*', '?', '[', '{'])
}

impl ExcludeSet {
    /// Compiles a rule list into a matcher.
    ///
    /// # Errors
    /// * `Error::ExcludeError` if a glob-style rule fails to compile
    pub fn new<S: AsRef<str>>(rules: &[S]) -> Result<Self> {
        let mut plain = Vec::new();
        let mut builder = GlobSetBuilder::new();

        for rule in rules {
            let rule = rule.as_ref();
            if is_glob_rule(rule) {
                builder.add(Glob::new(rule).map_err(|e| {
                    Error::ExcludeError(format!("invalid pattern '{}': {}", rule, e))
                })?);
            } else {
                plain.push(rule.to_string());
            }
        }

        let globs = builder
            .build()
            .map_err(|e| Error::ExcludeError(format!("pattern set failed to build: {}", e)))?;

        Ok(Self { plain, globs })
    }

    /// A set that matches nothing.
    pub fn empty() -> Self {
        Self { plain: Vec::new(), globs: GlobSet::empty() }
    }

    /// Builds the default rule set used by `build-template`.
    pub fn defaults() -> Result<Self> {
        Self::new(&DEFAULT_EXCLUDES)
    }

    /// Tests a path, relative to the tree root, against the rule set.
    pub fn matches<P: AsRef<Path>>(&self, relative_path: P) -> bool {
        let relative_path = relative_path.as_ref();
        let Some(path_str) = relative_path.to_str() else {
            // Non-UTF-8 paths cannot match any rule; the builder rejects
            // them later as unsupported entries.
            return false;
        };
        // Rules are written with forward slashes.
        let normalized = path_str.replace('\\', "/");

        let base_name = relative_path.file_name().and_then(|n| n.to_str());

        for rule in &self.plain {
            if normalized == *rule
                || normalized.starts_with(&format!("{}/", rule))
                || base_name == Some(rule.as_str())
            {
                return true;
            }
        }

        self.globs.is_match(&normalized)
    }
}
