//! File Utilities

use std::fs;
use std::path::{Path, PathBuf};

/// Returns the absolute form of a path without requiring it to exist.
///
/// * `path` - The path.
pub fn absolute_path(path: &Path) -> Result<PathBuf, String> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .map_err(|e| format!("Unable to resolve '{}'. {e}", path.display()))
    }
}

/// Reads the whole file into a string.
///
/// * `path` - The path.
pub fn file_to_string(path: &Path) -> Result<String, String> {
    fs::read_to_string(path).map_err(|e| format!("Error reading file '{}'. {e}", path.display()))
}

/// Returns the file name without directory and extension.
///
/// * `path` - The path.
pub fn file_stem(path: &str) -> String {
    Path::new(path)
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default()
}

/// Returns true if the path has one of the given extensions (case
/// insensitive, without the dot).
///
/// * `path`       - The path.
/// * `extensions` - Accepted extensions.
pub fn has_extension(path: &str, extensions: &[&str]) -> bool {
    Path::new(path)
        .extension()
        .map(|e| {
            let e = e.to_string_lossy().to_lowercase();
            extensions.iter().any(|x| *x == e)
        })
        .unwrap_or(false)
}

/// Turns a host node name or DAG path into a file name component.
///
/// * `name` - Node name.
pub fn sanitize_name(name: &str) -> String {
    name.trim_start_matches('|')
        .chars()
        .map(|c| match c {
            '|' | ':' | '/' | '\\' | ' ' => '_',
            c => c,
        })
        .collect()
}

/// Creates a directory and its parents if they don't exist.
///
/// * `dir` - The directory.
pub fn ensure_dir(dir: &Path) -> Result<(), String> {
    fs::create_dir_all(dir)
        .map_err(|e| format!("Unable to create directory '{}'. {e}", dir.display()))
}

/// Removes files, logging the ones that cannot be removed.
///
/// * `paths` - The files.
pub fn remove_files(paths: &[PathBuf]) {
    for path in paths {
        match fs::remove_file(path) {
            Ok(()) => debug!("Removed '{}'", path.display()),
            Err(e) => warn!("Unable to remove '{}'. {e}", path.display()),
        }
    }
}
