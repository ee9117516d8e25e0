//! Typed access to the project manifest (package.json).
//! Only the handful of fields this tool touches get named accessors; every
//! other field is carried through unexamined so a rewrite never loses data.

use crate::error::{Error, Result};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// Manifest file name inside both the template and a generated project.
pub const MANIFEST_FILE: &str = "package.json";

/// A structural view over a manifest document.
///
/// The underlying map preserves key order, so writing the manifest back
/// produces the same ordering it was read with.
pub struct Manifest {
    path: PathBuf,
    fields: Map<String, Value>,
}

impl Manifest {
    /// Loads the manifest found in `dir`, or `None` if the file is absent.
    ///
    /// # Errors
    /// * `Error::ManifestError` if the file exists but cannot be read or parsed
    pub fn load<P: AsRef<Path>>(dir: P) -> Result<Option<Self>> {
        let path = dir.as_ref().join(MANIFEST_FILE);
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path).map_err(|e| {
            Error::ManifestError(format!("cannot read {}: {}", path.display(), e))
        })?;
        let value: Value = serde_json::from_str(&content).map_err(|e| {
            Error::ManifestError(format!("cannot parse {}: {}", path.display(), e))
        })?;
        let Value::Object(fields) = value else {
            return Err(Error::ManifestError(format!(
                "{} is not a JSON object",
                path.display()
            )));
        };

        Ok(Some(Self { path, fields }))
    }

    /// Like `load`, but a missing manifest is an error. Used by the builder,
    /// where a template without a manifest is unusable.
    pub fn load_required<P: AsRef<Path>>(dir: P) -> Result<Self> {
        Self::load(dir.as_ref())?.ok_or_else(|| {
            Error::ManifestError(format!(
                "no {} found in {}",
                MANIFEST_FILE,
                dir.as_ref().display()
            ))
        })
    }

    /// Writes the manifest back to the path it was loaded from,
    /// pretty-printed with a trailing newline.
    pub fn save(&self) -> Result<()> {
        let rendered = serde_json::to_string_pretty(&Value::Object(self.fields.clone()))
            .map_err(|e| Error::ManifestError(format!("cannot serialize manifest: {}", e)))?;
        fs::write(&self.path, rendered + "\n").map_err(Error::IoError)
    }

    pub fn name(&self) -> Option<&str> {
        self.fields.get("name").and_then(Value::as_str)
    }

    pub fn set_name(&mut self, name: &str) {
        self.fields.insert("name".to_string(), Value::String(name.to_string()));
    }

    pub fn set_version(&mut self, version: &str) {
        self.fields.insert("version".to_string(), Value::String(version.to_string()));
    }

    pub fn set_private(&mut self, private: bool) {
        self.fields.insert("private".to_string(), Value::Bool(private));
    }

    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Drops the `bin` and `files` fields; they describe how the tool itself
    /// is packaged and are meaningless in a generated project.
    pub fn remove_packaging_fields(&mut self) {
        self.fields.remove("bin");
        self.fields.remove("files");
    }

    /// Removes named entries from the `scripts` map. Absent entries are
    /// ignored; an empty map is left in place as-is.
    pub fn remove_scripts(&mut self, names: &[&str]) {
        if let Some(Value::Object(scripts)) = self.fields.get_mut("scripts") {
            for name in names {
                scripts.remove(*name);
            }
        }
    }

    /// Removes named entries from the `devDependencies` map.
    pub fn remove_dev_dependencies(&mut self, names: &[&str]) {
        if let Some(Value::Object(deps)) = self.fields.get_mut("devDependencies") {
            for name in names {
                deps.remove(*name);
            }
        }
    }
}
