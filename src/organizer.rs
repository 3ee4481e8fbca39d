/// Directory organization: classify and move every file of one directory.
///
/// This module ties the classifier and the mover together. One call to
/// [`Organizer::organize`] takes a snapshot of a directory's immediate
/// regular files, resolves a destination folder for each and moves the ones
/// that matched a rule, accumulating one [`MoveOutcome`] per file.
use crate::category_store::CategoryStore;
use crate::classifier::{DEFAULT_CATEGORIES, classify};
use crate::mover::{MoveOutcome, move_file};
use std::fs;
use std::path::{Path, PathBuf};

/// Errors that abort a scan before any file is touched.
#[derive(Debug)]
pub enum OrganizeError {
    /// The directory path was empty.
    EmptyPath,
    /// The path exists but is not a directory, or does not exist at all.
    NotADirectory(PathBuf),
    /// The directory could not be listed.
    ReadDirFailed {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl std::fmt::Display for OrganizeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrganizeError::EmptyPath => write!(f, "No directory given"),
            OrganizeError::NotADirectory(path) => {
                write!(f, "Not a directory: {}", path.display())
            }
            OrganizeError::ReadDirFailed { path, source } => {
                write!(f, "Failed to read directory {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for OrganizeError {}

/// The ordered outcomes of one scan over one directory.
///
/// Ephemeral: built for display, discarded afterwards. Order follows the
/// directory listing, which is platform-dependent.
#[derive(Debug, Default)]
pub struct ScanResult {
    pub outcomes: Vec<MoveOutcome>,
}

impl ScanResult {
    /// Number of files moved to a category folder.
    pub fn moved(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, MoveOutcome::Moved { .. }))
            .count()
    }

    /// Number of files no rule matched.
    pub fn skipped(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, MoveOutcome::Skipped { .. }))
            .count()
    }

    /// Number of files whose move failed.
    pub fn failed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, MoveOutcome::Failed { .. }))
            .count()
    }

    /// True if the directory held no files to process.
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}

/// Runs the classify-and-move pass over a directory.
///
/// Borrows the rule store; the built-in default table is process-wide and
/// immutable, so the organizer carries no state of its own beyond the
/// borrow.
pub struct Organizer<'a> {
    store: &'a CategoryStore,
}

impl<'a> Organizer<'a> {
    /// Creates an organizer that classifies against `store` and the built-in
    /// default table.
    pub fn new(store: &'a CategoryStore) -> Self {
        Self { store }
    }

    /// Organizes the immediate files of `dir_path` into category subfolders.
    ///
    /// Validates the path first: an empty path and a path that is not an
    /// existing directory are distinct errors, and either aborts the scan
    /// before any file is touched. Subdirectories are never entered or
    /// moved. A single file's move failure is recorded in its outcome and
    /// the scan continues, so the result always covers every file found.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use dirsort::category_store::CategoryStore;
    /// use dirsort::organizer::Organizer;
    /// use std::path::Path;
    ///
    /// let store = CategoryStore::empty("categories.json");
    /// let result = Organizer::new(&store).organize(Path::new("/home/user/Downloads"))?;
    /// for outcome in &result.outcomes {
    ///     println!("{}", outcome.log_line());
    /// }
    /// # Ok::<(), dirsort::organizer::OrganizeError>(())
    /// ```
    pub fn organize(&self, dir_path: &Path) -> Result<ScanResult, OrganizeError> {
        if dir_path.as_os_str().is_empty() {
            return Err(OrganizeError::EmptyPath);
        }
        if !dir_path.is_dir() {
            return Err(OrganizeError::NotADirectory(dir_path.to_path_buf()));
        }

        let entries = fs::read_dir(dir_path).map_err(|e| OrganizeError::ReadDirFailed {
            path: dir_path.to_path_buf(),
            source: e,
        })?;

        // Snapshot the listing before moving anything, so the category
        // folders created along the way never feed back into the scan.
        let mut files: Vec<(String, PathBuf)> = Vec::new();
        for entry in entries.flatten() {
            if let Ok(file_type) = entry.file_type()
                && file_type.is_file()
            {
                let name = entry.file_name().to_string_lossy().into_owned();
                files.push((name, entry.path()));
            }
        }

        let mut result = ScanResult::default();
        for (file_name, file_path) in files {
            let outcome = match classify(&file_name, self.store, DEFAULT_CATEGORIES) {
                Some(folder) => move_file(&file_path, folder, dir_path),
                None => MoveOutcome::Skipped { file_name },
            };
            result.outcomes.push(outcome);
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn empty_store() -> CategoryStore {
        CategoryStore::empty("categories.json")
    }

    #[test]
    fn test_organize_empty_path_is_a_validation_error() {
        let store = empty_store();
        let result = Organizer::new(&store).organize(Path::new(""));
        assert!(matches!(result, Err(OrganizeError::EmptyPath)));
    }

    #[test]
    fn test_organize_file_path_is_a_validation_error() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let file_path = temp_dir.path().join("a.txt");
        fs::write(&file_path, "content").expect("Failed to write test file");

        let store = empty_store();
        let result = Organizer::new(&store).organize(&file_path);

        assert!(matches!(result, Err(OrganizeError::NotADirectory(_))));
        // Validation failed before any file was touched
        assert!(file_path.exists());
    }

    #[test]
    fn test_organize_missing_directory_is_a_validation_error() {
        let store = empty_store();
        let result = Organizer::new(&store).organize(Path::new("/no/such/directory"));
        assert!(matches!(result, Err(OrganizeError::NotADirectory(_))));
    }

    #[test]
    fn test_organize_moves_matched_files_and_skips_the_rest() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base_path = temp_dir.path();
        fs::write(base_path.join("a.txt"), "a").expect("Failed to write test file");
        fs::write(base_path.join("b.png"), "b").expect("Failed to write test file");
        fs::write(base_path.join("c.xyz"), "c").expect("Failed to write test file");

        let store = empty_store();
        let result = Organizer::new(&store)
            .organize(base_path)
            .expect("organize failed");

        assert_eq!(result.moved(), 2);
        assert_eq!(result.skipped(), 1);
        assert_eq!(result.failed(), 0);
        assert!(base_path.join("Documents").join("a.txt").exists());
        assert!(base_path.join("Images").join("b.png").exists());
        assert!(base_path.join("c.xyz").exists());
    }

    #[test]
    fn test_organize_prefers_custom_rules() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base_path = temp_dir.path();
        fs::write(base_path.join("a.txt"), "a").expect("Failed to write test file");

        let mut store = CategoryStore::empty(base_path.join("categories.json"));
        store.add("txt", "Notes").expect("add failed");
        // The rules file itself matched no rule and must stay put
        let result = Organizer::new(&store)
            .organize(base_path)
            .expect("organize failed");

        assert!(base_path.join("Notes").join("a.txt").exists());
        assert!(!base_path.join("Documents").exists());
        assert!(base_path.join("categories.json").exists());
        assert_eq!(result.moved(), 1);
    }

    #[test]
    fn test_organize_skips_subdirectories() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base_path = temp_dir.path();
        fs::create_dir(base_path.join("nested")).expect("Failed to create subdirectory");
        fs::write(base_path.join("nested").join("a.txt"), "a").expect("Failed to write test file");

        let store = empty_store();
        let result = Organizer::new(&store)
            .organize(base_path)
            .expect("organize failed");

        assert!(result.is_empty());
        assert!(base_path.join("nested").join("a.txt").exists());
    }

    #[test]
    fn test_organize_continues_past_a_failed_move() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base_path = temp_dir.path();
        fs::write(base_path.join("a.txt"), "a").expect("Failed to write test file");
        fs::write(base_path.join("b.png"), "b").expect("Failed to write test file");
        // A directory squatting the destination path makes a.txt's move fail
        fs::create_dir_all(base_path.join("Documents").join("a.txt"))
            .expect("Failed to create blocking directory");

        let store = empty_store();
        let result = Organizer::new(&store)
            .organize(base_path)
            .expect("organize failed");

        assert_eq!(result.outcomes.len(), 2);
        assert_eq!(result.failed(), 1);
        assert_eq!(result.moved(), 1);
        assert!(base_path.join("a.txt").exists());
        assert!(base_path.join("Images").join("b.png").exists());
    }

    #[test]
    fn test_organize_empty_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let store = empty_store();
        let result = Organizer::new(&store)
            .organize(temp_dir.path())
            .expect("organize failed");
        assert!(result.is_empty());
    }
}
