/// File relocation into category subfolders.
///
/// This module moves a single file into a destination folder under a base
/// directory, creating the folder as needed. A same-named file already at
/// the destination is replaced — no rename-with-suffix, no skip. Callers
/// that need a different conflict policy must handle it before moving.
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// The result of attempting to classify and move one file.
///
/// Outcomes exist to build the user-facing log of a scan; they are never
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The file was moved to its category folder.
    Moved {
        file_name: String,
        /// The final path of the file after the move.
        destination: PathBuf,
    },
    /// No custom or default rule matched; the file was left untouched.
    Skipped { file_name: String },
    /// The move was attempted and failed.
    Failed { file_name: String, reason: String },
}

impl MoveOutcome {
    /// The name of the file this outcome describes.
    pub fn file_name(&self) -> &str {
        match self {
            MoveOutcome::Moved { file_name, .. }
            | MoveOutcome::Skipped { file_name }
            | MoveOutcome::Failed { file_name, .. } => file_name,
        }
    }

    /// Renders the outcome as one log line.
    ///
    /// # Examples
    ///
    /// ```
    /// use dirsort::mover::MoveOutcome;
    /// use std::path::PathBuf;
    ///
    /// let outcome = MoveOutcome::Moved {
    ///     file_name: "a.txt".to_string(),
    ///     destination: PathBuf::from("/tmp/Documents/a.txt"),
    /// };
    /// assert_eq!(outcome.log_line(), "Moved a.txt → /tmp/Documents/a.txt");
    /// ```
    pub fn log_line(&self) -> String {
        match self {
            MoveOutcome::Moved {
                file_name,
                destination,
            } => format!("Moved {} → {}", file_name, destination.display()),
            MoveOutcome::Skipped { file_name } => {
                format!("No rule for {}, skipped", file_name)
            }
            MoveOutcome::Failed { file_name, reason } => {
                format!("Error moving {}: {}", file_name, reason)
            }
        }
    }
}

/// Moves `file_path` into the `folder` subdirectory of `base_dir`.
///
/// The destination directory is created if missing, including intermediate
/// segments. An existing file of the same name at the destination is
/// replaced. Failures never propagate: every error is folded into a
/// [`MoveOutcome::Failed`] carrying a human-readable reason, so one bad file
/// cannot abort a scan.
pub fn move_file(file_path: &Path, folder: &str, base_dir: &Path) -> MoveOutcome {
    let file_name = match file_path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => {
            return MoveOutcome::Failed {
                file_name: file_path.display().to_string(),
                reason: "file has no name component".to_string(),
            };
        }
    };

    let target_dir = base_dir.join(folder);
    if let Err(e) = fs::create_dir_all(&target_dir) {
        return MoveOutcome::Failed {
            file_name,
            reason: format!("could not create {}: {}", target_dir.display(), e),
        };
    }

    let destination = target_dir.join(&file_name);
    match relocate(file_path, &destination) {
        Ok(()) => MoveOutcome::Moved {
            file_name,
            destination,
        },
        Err(e) => MoveOutcome::Failed {
            file_name,
            reason: e.to_string(),
        },
    }
}

/// Moves a file, replacing any existing file at `to`.
///
/// `fs::rename` refuses an existing destination on some platforms, so the
/// destination is removed first. Rename also fails across filesystems, in
/// which case the move degrades to copy + delete. If the copy lands but the
/// delete then fails, the error is reported with the file present at both
/// paths; a re-run converges, since the source copy is moved again and
/// overwrites the one at the destination.
fn relocate(from: &Path, to: &Path) -> io::Result<()> {
    if to.exists() {
        fs::remove_file(to)?;
    }

    if fs::rename(from, to).is_ok() {
        return Ok(());
    }

    fs::copy(from, to)?;
    fs::remove_file(from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_move_file_creates_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base_path = temp_dir.path();

        let file_path = base_path.join("test.txt");
        fs::write(&file_path, "test content").expect("Failed to write test file");

        let outcome = move_file(&file_path, "Documents", base_path);

        let category_dir = base_path.join("Documents");
        assert!(category_dir.is_dir());
        assert!(!file_path.exists());
        assert_eq!(
            outcome,
            MoveOutcome::Moved {
                file_name: "test.txt".to_string(),
                destination: category_dir.join("test.txt"),
            }
        );
    }

    #[test]
    fn test_move_file_uses_existing_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base_path = temp_dir.path();

        let category_dir = base_path.join("Images");
        fs::create_dir(&category_dir).expect("Failed to create category directory");

        let file_path = base_path.join("test.png");
        fs::write(&file_path, "test content").expect("Failed to write test file");

        let outcome = move_file(&file_path, "Images", base_path);

        assert!(matches!(outcome, MoveOutcome::Moved { .. }));
        assert!(category_dir.join("test.png").exists());
    }

    #[test]
    fn test_move_file_replaces_existing_destination() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base_path = temp_dir.path();

        let category_dir = base_path.join("Documents");
        fs::create_dir(&category_dir).expect("Failed to create category directory");
        fs::write(category_dir.join("test.txt"), "old content")
            .expect("Failed to write destination file");

        let file_path = base_path.join("test.txt");
        fs::write(&file_path, "new content").expect("Failed to write test file");

        let outcome = move_file(&file_path, "Documents", base_path);

        assert!(matches!(outcome, MoveOutcome::Moved { .. }));
        let content = fs::read_to_string(category_dir.join("test.txt"))
            .expect("Failed to read moved file");
        assert_eq!(content, "new content");
    }

    #[test]
    fn test_move_file_missing_source_is_a_failed_outcome() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base_path = temp_dir.path();

        let outcome = move_file(&base_path.join("vanished.txt"), "Documents", base_path);

        match outcome {
            MoveOutcome::Failed { file_name, reason } => {
                assert_eq!(file_name, "vanished.txt");
                assert!(!reason.is_empty());
            }
            other => panic!("Expected a failed outcome, got {:?}", other),
        }
    }

    #[test]
    fn test_log_lines() {
        let moved = MoveOutcome::Moved {
            file_name: "a.txt".to_string(),
            destination: PathBuf::from("base/Documents/a.txt"),
        };
        assert!(moved.log_line().starts_with("Moved a.txt → "));

        let skipped = MoveOutcome::Skipped {
            file_name: "c.xyz".to_string(),
        };
        assert_eq!(skipped.log_line(), "No rule for c.xyz, skipped");

        let failed = MoveOutcome::Failed {
            file_name: "b.png".to_string(),
            reason: "permission denied".to_string(),
        };
        assert_eq!(failed.log_line(), "Error moving b.png: permission denied");
    }
}
