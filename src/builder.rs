//! Template builder: assembles the distributable template from the working
//! source tree. The build is never incremental; a pre-existing output tree is
//! removed first so stale files from earlier builds cannot accumulate.

use crate::error::{Error, Result};
use crate::exclude::ExcludeSet;
use crate::manifest::Manifest;
use log::debug;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Placeholder identity written into the template manifest.
pub const PLACEHOLDER_NAME: &str = "my-app";
pub const PLACEHOLDER_VERSION: &str = "0.1.0";

/// devDependencies used only by the scaffolding tool itself; stripped from
/// the template manifest (prompt, spinner, color and file-copy helpers).
pub const TOOL_ONLY_DEV_DEPENDENCIES: [&str; 4] = ["inquirer", "ora", "chalk", "fs-extra"];

/// scripts entries that drive the scaffolding workflow, not the generated
/// project; stripped from the template manifest.
pub const TOOL_ONLY_SCRIPTS: [&str; 3] = ["build:template", "test:cli", "prepublishOnly"];

const GITIGNORE_CONTENT: &str = "\
# Dependencies
node_modules/

# Build output
dist/
build/
coverage/

# Environment
.env
.env.local

# Editor
.vscode/
.idea/
.DS_Store
";

const README_CONTENT: &str = "\
# My App

A React single-page application.

## Getting started

```bash
npm install
npm run dev
```

## Scripts

- `npm run dev` - start the development server
- `npm run build` - build for production
- `npm run preview` - preview the production build
- `npm run lint` - lint the sources
- `npm test` - run the test suite
";

/// Recursively copies `source_root` to `dest_root`, skipping every entry the
/// exclusion set matches. Excluded directories are pruned from the walk, so
/// arbitrarily large trees (dependency caches) are never entered.
///
/// # Errors
/// * `Error::TemplateError` for unreadable entries and for anything that is
///   neither a regular file nor a directory (symlinks, fifos); a template
///   with such entries must not ship
/// * `Error::IoError` for copy failures
pub fn copy_tree(source_root: &Path, dest_root: &Path, excludes: &ExcludeSet) -> Result<()> {
    let walker = WalkDir::new(source_root).into_iter().filter_entry(|entry| {
        let relative = match entry.path().strip_prefix(source_root) {
            Ok(relative) => relative,
            Err(_) => return true,
        };
        // The root itself has an empty relative path and is always kept.
        if relative.as_os_str().is_empty() {
            return true;
        }
        if excludes.matches(relative) {
            debug!("excluding: {}", relative.display());
            false
        } else {
            true
        }
    });

    for entry in walker {
        let entry = entry.map_err(|e| Error::TemplateError(e.to_string()))?;
        let relative = entry
            .path()
            .strip_prefix(source_root)
            .map_err(|e| Error::TemplateError(e.to_string()))?;
        let target = dest_root.join(relative);

        let file_type = entry.file_type();
        if file_type.is_dir() {
            fs::create_dir_all(&target).map_err(Error::IoError)?;
        } else if file_type.is_file() {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent).map_err(Error::IoError)?;
            }
            fs::copy(entry.path(), &target).map_err(Error::IoError)?;
            debug!("copying: {}", relative.display());
        } else {
            return Err(Error::TemplateError(format!(
                "unsupported entry (not a regular file or directory): {}",
                entry.path().display()
            )));
        }
    }

    Ok(())
}

/// Produces a clean template tree under `output_root`.
///
/// Any pre-existing `output_root` is removed first; every build starts from
/// a clean slate.
pub fn build_template(
    source_root: &Path,
    output_root: &Path,
    excludes: &ExcludeSet,
) -> Result<()> {
    if !source_root.exists() {
        return Err(Error::TemplateError(format!(
            "source directory does not exist: {}",
            source_root.display()
        )));
    }

    if output_root.exists() {
        if output_root.is_dir() {
            fs::remove_dir_all(output_root).map_err(Error::IoError)?;
        } else {
            fs::remove_file(output_root).map_err(Error::IoError)?;
        }
    }

    copy_tree(source_root, output_root, excludes)
}

/// Rewrites the manifest copied into the template: strips the tool's own
/// packaging fields, dependencies and scripts, and resets the project
/// identity to placeholders.
///
/// # Errors
/// * `Error::ManifestError` if the manifest is missing or unparseable; a
///   template without a valid manifest is unusable
pub fn rewrite_manifest(output_root: &Path) -> Result<()> {
    let mut manifest = Manifest::load_required(output_root)?;

    manifest.remove_packaging_fields();
    manifest.set_name(PLACEHOLDER_NAME);
    manifest.set_version(PLACEHOLDER_VERSION);
    manifest.set_private(true);
    manifest.remove_dev_dependencies(&TOOL_ONLY_DEV_DEPENDENCIES);
    manifest.remove_scripts(&TOOL_ONLY_SCRIPTS);

    manifest.save()
}

/// Overwrites the ignore file and readme with fixed end-user content. Plain
/// overwrite, no merging; deterministic output beats accidental retention of
/// tool-specific notes.
pub fn write_aux_files(output_root: &Path) -> Result<()> {
    fs::write(output_root.join(".gitignore"), GITIGNORE_CONTENT).map_err(Error::IoError)?;
    fs::write(output_root.join("README.md"), README_CONTENT).map_err(Error::IoError)?;
    Ok(())
}
