//! dirsort - a rule-based file sorting utility
//!
//! This library provides utilities for categorizing files by extension,
//! maintaining a persisted set of user-defined categorization rules, and
//! moving the files of a directory into category subfolders.

pub mod category_store;
pub mod classifier;
pub mod cli;
pub mod mover;
pub mod organizer;
pub mod output;

pub use category_store::{CategoryRule, CategoryStore, StoreError};
pub use classifier::{DEFAULT_CATEGORIES, classify, extract_extension};
pub use mover::{MoveOutcome, move_file};
pub use organizer::{OrganizeError, Organizer, ScanResult};

pub use cli::{Cli, Command, run_cli};
