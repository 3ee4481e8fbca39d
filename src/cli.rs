//! Command-line interface module for dirsort.
//!
//! This module is the thin presentation layer over the core: it parses the
//! command line, loads the rule store, and maps each subcommand directly
//! onto one of the store's or the organizer's public operations. All
//! user-visible output goes through [`OutputFormatter`].

use crate::category_store::CategoryStore;
use crate::mover::MoveOutcome;
use crate::organizer::Organizer;
use crate::output::OutputFormatter;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

/// Sort the files of a directory into category subfolders by extension.
#[derive(Debug, Parser)]
#[command(name = "dirsort", version)]
pub struct Cli {
    /// Path of the JSON document holding the user-defined rules.
    #[arg(long, global = true, default_value = "categories.json")]
    pub rules_file: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

/// The available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sort the immediate files of a directory into category subfolders.
    Sort {
        /// The directory to sort. Subdirectories are left untouched.
        dir: PathBuf,
    },
    /// View or edit the user-defined categorization rules.
    #[command(subcommand)]
    Rules(RulesAction),
}

/// Editing actions on the rule store.
#[derive(Debug, Subcommand)]
pub enum RulesAction {
    /// List all user-defined rules.
    List,
    /// Add a rule, or overwrite the existing rule for the extension.
    Add {
        /// File extension, with or without a leading dot.
        extension: String,
        /// Destination folder name for matching files.
        folder: String,
    },
    /// Change the folder of an existing rule.
    Edit {
        /// File extension of the rule to change.
        extension: String,
        /// New destination folder name.
        folder: String,
    },
    /// Remove the rule for an extension.
    Remove {
        /// File extension of the rule to remove.
        extension: String,
    },
}

/// Runs the CLI application with parsed arguments.
///
/// This is the main entry point for CLI operations. A malformed or
/// unreadable rules file is reported as a warning and the run continues
/// with an empty rule set; only validation and persistence errors bubble up
/// as `Err`.
///
/// # Examples
///
/// ```no_run
/// use clap::Parser;
/// use dirsort::cli::{Cli, run_cli};
///
/// let cli = Cli::parse();
/// if let Err(e) = run_cli(cli) {
///     eprintln!("Error: {}", e);
/// }
/// ```
pub fn run_cli(cli: Cli) -> Result<(), String> {
    let store = load_store(&cli.rules_file);

    match cli.command {
        Command::Sort { dir } => sort_directory(&dir, &store),
        Command::Rules(action) => edit_rules(action, store),
    }
}

/// Loads the rule store, falling back to an empty one on error.
///
/// The fallback keeps startup alive when the persisted document is
/// malformed; the user sees a warning instead of a crash.
fn load_store(rules_file: &Path) -> CategoryStore {
    match CategoryStore::load(rules_file) {
        Ok(store) => store,
        Err(e) => {
            OutputFormatter::warning(&format!("{}; continuing with an empty rule set", e));
            CategoryStore::empty(rules_file)
        }
    }
}

/// Runs one scan over `dir` and prints one log line per outcome.
///
/// The scan runs before any output, so a validation failure produces its
/// error line and nothing else.
fn sort_directory(dir: &Path, store: &CategoryStore) -> Result<(), String> {
    let result = Organizer::new(store)
        .organize(dir)
        .map_err(|e| e.to_string())?;

    OutputFormatter::info(&format!("Sorting contents of: {}", dir.display()));

    if result.is_empty() {
        OutputFormatter::plain("No files found to sort.");
        return Ok(());
    }

    for outcome in &result.outcomes {
        match outcome {
            MoveOutcome::Moved { .. } => OutputFormatter::success(&outcome.log_line()),
            MoveOutcome::Skipped { .. } => OutputFormatter::plain(&outcome.log_line()),
            MoveOutcome::Failed { .. } => OutputFormatter::error(&outcome.log_line()),
        }
    }

    OutputFormatter::scan_summary(result.moved(), result.skipped(), result.failed());

    if result.failed() > 0 {
        OutputFormatter::warning("Some files could not be moved. Re-run to retry them.");
    }

    Ok(())
}

/// Applies one rule-editing action to the store.
fn edit_rules(action: RulesAction, mut store: CategoryStore) -> Result<(), String> {
    match action {
        RulesAction::List => {
            if store.is_empty() {
                OutputFormatter::plain("No custom rules defined.");
            } else {
                for rule in store.rules() {
                    OutputFormatter::plain(&format!(".{} → {}", rule.extension, rule.folder));
                }
            }
            Ok(())
        }
        RulesAction::Add { extension, folder } => {
            store.add(&extension, &folder).map_err(|e| e.to_string())?;
            OutputFormatter::success(&format!("Rule saved: .{} → {}", extension, folder));
            Ok(())
        }
        RulesAction::Edit { extension, folder } => {
            match store.edit(&extension, &folder).map_err(|e| e.to_string())? {
                true => OutputFormatter::success(&format!(
                    "Rule updated: .{} → {}",
                    extension, folder
                )),
                false => OutputFormatter::warning(&format!("No rule for .{}", extension)),
            }
            Ok(())
        }
        RulesAction::Remove { extension } => {
            match store.remove(&extension).map_err(|e| e.to_string())? {
                true => OutputFormatter::success(&format!("Rule removed: .{}", extension)),
                false => OutputFormatter::warning(&format!("No rule for .{}", extension)),
            }
            Ok(())
        }
    }
}
