use crate::error::{CompressionError, Result};
use glob::glob;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Collect input files from a path or glob pattern.
///
/// Accepts a single file, a directory (walked to depth 1, or fully with
/// `recursive`), or a glob expression. Hidden entries are skipped. The
/// result is sorted so runs are deterministic regardless of filesystem
/// iteration order.
pub fn collect_input_files(input: &str, recursive: bool) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let input_path = Path::new(input);

    if input_path.is_file() {
        files.push(input_path.to_path_buf());
    } else if input_path.is_dir() {
        let walker = if recursive {
            WalkDir::new(input_path).into_iter()
        } else {
            WalkDir::new(input_path).max_depth(1).into_iter()
        };

        // The root itself is exempt from the hidden check so explicitly
        // named dot-directories still work as inputs.
        for entry in walker.filter_entry(|e| e.depth() == 0 || !is_hidden(e.path())) {
            let entry = entry?;
            if entry.path().is_file() {
                files.push(entry.path().to_path_buf());
            }
        }
    } else if let Ok(pattern) = glob(input) {
        for entry in pattern.flatten() {
            if entry.is_file() && !is_hidden(&entry) {
                files.push(entry);
            }
        }
    }

    if files.is_empty() {
        return Err(CompressionError::NoInputFilesFound(input.to_string()));
    }

    files.sort();
    Ok(files)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.starts_with('.'))
        .unwrap_or(false)
}
