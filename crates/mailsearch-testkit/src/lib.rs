//! Test utilities for mailsearch
//!
//! This crate provides shared testing utilities used across the mailsearch workspace.

pub mod env;
pub mod fixtures;

pub use env::{ENV_LOCK, isolate_command, with_isolated_env};
pub use fixtures::{ECHO_ARGS_BODY, write_fake_script, write_plain_file};

use tempfile::TempDir;

/// Creates a temporary directory within `.tmp/` at the current directory
///
/// Keeps test files in one gitignored place that is easy to clean up by hand.
///
/// # Panics
///
/// Panics if the current directory is unknown or `.tmp/` cannot be created.
///
/// # Examples
///
/// ```rust
/// use mailsearch_testkit::temp_dir_in_workspace;
///
/// let temp = temp_dir_in_workspace();
/// let file_path = temp.path().join("test.txt");
/// std::fs::write(&file_path, "test data").unwrap();
/// // Cleanup happens automatically when temp is dropped
/// ```
pub fn temp_dir_in_workspace() -> TempDir {
    let workspace_root = std::env::current_dir().expect("Failed to get current directory");
    let tmp_base = workspace_root.join(".tmp");
    std::fs::create_dir_all(&tmp_base).expect("Failed to create .tmp directory");
    TempDir::new_in(&tmp_base).expect("Failed to create temporary directory in .tmp/")
}
