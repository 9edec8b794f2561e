//! Fake read_emails.py scripts
//!
//! The fakes are POSIX shell scripts, so tests using them are
//! `#[cfg(unix)]`.

use std::path::{Path, PathBuf};

/// Script body that prints each argument on its own line as `arg:<value>`
pub const ECHO_ARGS_BODY: &str = r#"for a in "$@"; do printf 'arg:%s\n' "$a"; done"#;

/// Write an executable `#!/bin/sh` script at `path`
///
/// Parent directories are created as needed.
///
/// # Panics
///
/// Panics if the file cannot be written or made executable.
pub fn write_fake_script(path: &Path, body: &str) -> PathBuf {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create script directory");
    }
    std::fs::write(path, format!("#!/bin/sh\n{}\n", body)).expect("Failed to write fake script");

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = std::fs::metadata(path)
            .expect("Failed to get metadata")
            .permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(path, perms).expect("Failed to set permissions");
    }

    path.to_path_buf()
}

/// Write a non-executable file at `path`
pub fn write_plain_file(path: &Path) -> PathBuf {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create directory");
    }
    std::fs::write(path, "print('not executable')\n").expect("Failed to write file");

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = std::fs::metadata(path)
            .expect("Failed to get metadata")
            .permissions();
        perms.set_mode(0o644);
        std::fs::set_permissions(path, perms).expect("Failed to set permissions");
    }

    path.to_path_buf()
}
