use std::path::{Path, PathBuf};

use crate::errors::DepgraphError;

/// Walk up from `start` looking for a file named `filename`.
/// Returns the path to the directory containing the file, or `None`.
pub fn find_ancestor_with(start: &Path, filename: &str) -> Option<PathBuf> {
    let mut current = start;
    loop {
        let candidate = current.join(filename);
        if candidate.is_file() {
            return Some(current.to_path_buf());
        }
        current = current.parent()?;
    }
}

/// Ensure a directory exists, creating it and any parents if needed.
pub fn ensure_dir(path: &Path) -> std::io::Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Write a rendered graph to `path`, creating parent directories.
///
/// Failures are reported as [`DepgraphError::Output`] so callers can tell
/// them apart from graph construction errors.
pub fn write_graph_file(path: &Path, contents: &str) -> Result<(), DepgraphError> {
    let to_output_error = |source| DepgraphError::Output {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_dir(parent).map_err(to_output_error)?;
        }
    }
    std::fs::write(path, contents).map_err(to_output_error)
}
