//! Persisted user-defined categorization rules.
//!
//! This module provides support for loading, editing and saving the set of
//! user-defined extension→folder rules. Rules are persisted as a JSON array
//! so the document stays hand-editable:
//!
//! ```json
//! [
//!   {
//!     "extension": "txt",
//!     "folder": "Notes"
//!   }
//! ]
//! ```
//!
//! The store is written back after every mutation. Writes go through a
//! sibling temp file followed by a rename, so a failed write leaves the
//! previously persisted document intact.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Errors that can occur while loading or persisting the rule store.
#[derive(Debug)]
pub enum StoreError {
    /// A rule was rejected before it reached the store.
    InvalidRule(String),
    /// The persisted document exists but is not valid JSON of the expected shape.
    ParseFailed { path: PathBuf, reason: String },
    /// IO error while reading the persisted document.
    ReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },
    /// IO error while writing the persisted document.
    WriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::InvalidRule(reason) => write!(f, "Invalid rule: {}", reason),
            StoreError::ParseFailed { path, reason } => {
                write!(f, "Invalid rules file {}: {}", path.display(), reason)
            }
            StoreError::ReadFailed { path, source } => {
                write!(f, "Failed to read rules file {}: {}", path.display(), source)
            }
            StoreError::WriteFailed { path, source } => {
                write!(
                    f,
                    "Failed to write rules file {}: {}",
                    path.display(),
                    source
                )
            }
        }
    }
}

impl std::error::Error for StoreError {}

/// A single user-defined categorization rule.
///
/// Maps one file extension (lowercase, no leading dot) to the name of the
/// subfolder its files should be moved into. Custom rules take precedence
/// over the built-in default table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRule {
    /// The file extension this rule applies to.
    pub extension: String,
    /// The destination folder name for matching files.
    pub folder: String,
}

/// The set of user-defined rules, keyed by extension.
///
/// The store owns the path of its persisted document and writes the full
/// rule set back after every mutation. At most one rule exists per
/// extension; keys are kept lowercase and without a leading dot.
#[derive(Debug, Clone)]
pub struct CategoryStore {
    path: PathBuf,
    rules: BTreeMap<String, String>,
}

impl CategoryStore {
    /// Creates an empty store that will persist to `path`.
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            rules: BTreeMap::new(),
        }
    }

    /// Loads the store from its persisted document.
    ///
    /// A missing document is not an error: it yields an empty store. A
    /// document that exists but cannot be read or parsed yields an error;
    /// callers are expected to report it and continue with
    /// [`CategoryStore::empty`] rather than abort.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use dirsort::category_store::CategoryStore;
    ///
    /// let store = match CategoryStore::load("categories.json") {
    ///     Ok(store) => store,
    ///     Err(e) => {
    ///         eprintln!("{}", e);
    ///         CategoryStore::empty("categories.json")
    ///     }
    /// };
    /// println!("{} custom rules", store.len());
    /// ```
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();

        if !path.exists() {
            return Ok(Self::empty(path));
        }

        let content = fs::read_to_string(&path).map_err(|e| StoreError::ReadFailed {
            path: path.clone(),
            source: e,
        })?;

        let parsed: Vec<CategoryRule> =
            serde_json::from_str(&content).map_err(|e| StoreError::ParseFailed {
                path: path.clone(),
                reason: e.to_string(),
            })?;

        let rules = parsed
            .into_iter()
            .map(|rule| (normalize_extension(&rule.extension), rule.folder))
            .filter(|(extension, _)| !extension.is_empty())
            .collect();

        Ok(Self { path, rules })
    }

    /// Returns the folder a custom rule maps `extension` to, if any.
    pub fn folder_for(&self, extension: &str) -> Option<&str> {
        self.rules
            .get(&normalize_extension(extension))
            .map(String::as_str)
    }

    /// Returns all rules, ordered by extension.
    pub fn rules(&self) -> Vec<CategoryRule> {
        self.rules
            .iter()
            .map(|(extension, folder)| CategoryRule {
                extension: extension.clone(),
                folder: folder.clone(),
            })
            .collect()
    }

    /// Returns the number of rules in the store.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if the store holds no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Inserts or overwrites the rule for `extension` and persists the store.
    ///
    /// The extension is lowercased and stripped of any leading dot. Empty
    /// extensions or folder names are rejected.
    pub fn add(&mut self, extension: &str, folder: &str) -> Result<(), StoreError> {
        let extension = normalize_extension(extension);
        let folder = folder.trim();

        if extension.is_empty() {
            return Err(StoreError::InvalidRule(
                "extension must not be empty".to_string(),
            ));
        }
        if folder.is_empty() {
            return Err(StoreError::InvalidRule(
                "folder name must not be empty".to_string(),
            ));
        }

        self.rules.insert(extension, folder.to_string());
        self.persist()
    }

    /// Overwrites the folder of an existing rule and persists the store.
    ///
    /// Returns `Ok(false)` without touching disk if no rule exists for
    /// `extension`.
    pub fn edit(&mut self, extension: &str, new_folder: &str) -> Result<bool, StoreError> {
        let extension = normalize_extension(extension);
        let new_folder = new_folder.trim();

        if new_folder.is_empty() {
            return Err(StoreError::InvalidRule(
                "folder name must not be empty".to_string(),
            ));
        }

        match self.rules.get_mut(&extension) {
            Some(folder) => {
                *folder = new_folder.to_string();
                self.persist()?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Removes the rule for `extension`, if present, and persists the store.
    ///
    /// Returns `Ok(false)` without touching disk if no such rule exists.
    pub fn remove(&mut self, extension: &str) -> Result<bool, StoreError> {
        let extension = normalize_extension(extension);

        if self.rules.remove(&extension).is_some() {
            self.persist()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Writes the full rule set to the persisted document.
    ///
    /// The document is indented JSON. The write goes to a temp file next to
    /// the target which is then renamed over it, so the previous document
    /// survives a failed write.
    pub fn persist(&self) -> Result<(), StoreError> {
        let json =
            serde_json::to_string_pretty(&self.rules()).map_err(|e| StoreError::WriteFailed {
                path: self.path.clone(),
                source: std::io::Error::new(
                    std::io::ErrorKind::InvalidData,
                    format!("JSON serialization failed: {}", e),
                ),
            })?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, json).map_err(|e| StoreError::WriteFailed {
            path: tmp_path.clone(),
            source: e,
        })?;

        fs::rename(&tmp_path, &self.path).map_err(|e| StoreError::WriteFailed {
            path: self.path.clone(),
            source: e,
        })
    }

    /// Returns the path of the persisted document.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Lowercases an extension and strips surrounding whitespace and leading dots.
fn normalize_extension(extension: &str) -> String {
    extension.trim().trim_start_matches('.').to_lowercase()
}
