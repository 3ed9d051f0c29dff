//! Executable discovery on PATH and well-known install prefixes.
//!
//! Rust's `Command::new()` spawns a non-interactive, non-login process, so a
//! Homebrew installed under its default prefix is often missing from PATH
//! even though it works in the user's terminal. The search path built here
//! appends those prefixes after the system PATH.
//!
//! # Example
//!
//! ```no_run
//! use align_bootstrap::requirements::probe::{resolve_tool_path, search_path};
//!
//! if let Some(brew) = resolve_tool_path("brew", &search_path()) {
//!     println!("brew at {}", brew.display());
//! }
//! ```

use std::path::{Path, PathBuf};

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// Returns the first match that exists and is executable. Does NOT use
/// the `which` command: `which` behavior varies across systems and
/// is sometimes a shell builtin with inconsistent error handling.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    // Already a path: check it directly
    if tool.contains(std::path::MAIN_SEPARATOR) {
        let candidate = PathBuf::from(tool);
        return (candidate.is_file() && is_executable(&candidate)).then_some(candidate);
    }

    for dir in path_entries {
        let candidate = dir.join(tool);
        if candidate.is_file() && is_executable(&candidate) {
            return Some(candidate);
        }
    }
    None
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

/// Default Homebrew prefix paths to check (absolute, not relative to home).
pub fn homebrew_default_prefixes() -> Vec<PathBuf> {
    let mut prefixes = Vec::new();
    if cfg!(target_os = "macos") {
        if cfg!(target_arch = "aarch64") {
            prefixes.push(PathBuf::from("/opt/homebrew"));
        } else {
            prefixes.push(PathBuf::from("/usr/local"));
        }
    } else if cfg!(target_os = "linux") {
        prefixes.push(PathBuf::from("/home/linuxbrew/.linuxbrew"));
    }
    prefixes
}

/// Append `bin` directories of the given prefixes that are not already listed.
pub fn with_prefixes(mut entries: Vec<PathBuf>, prefixes: &[PathBuf]) -> Vec<PathBuf> {
    for prefix in prefixes {
        let bin = prefix.join("bin");
        if bin.is_dir() && !entries.contains(&bin) {
            entries.push(bin);
        }
    }
    entries
}

/// The system PATH followed by any Homebrew prefix not already on it.
pub fn search_path() -> Vec<PathBuf> {
    with_prefixes(parse_system_path(), &homebrew_default_prefixes())
}
