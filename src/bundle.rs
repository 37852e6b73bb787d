//! Result aggregation: the combined ZIP download and savings totals.
//!
//! Failed files are excluded from both the bundle and the statistics.

use crate::constants::{BUNDLE_DEFLATE_LEVEL, BUNDLE_ENTRY_PREFIX, BUNDLE_FILE_NAME};
use crate::error::{CompressionError, Result};
use crate::types::ProcessingResult;
use std::collections::HashSet;
use std::fs;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Aggregate savings over the successful results of one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SavingsReport {
    pub files_compressed: usize,
    pub total_original_bytes: u64,
    pub total_compressed_bytes: u64,
}

impl SavingsReport {
    pub fn from_results(results: &[ProcessingResult]) -> Self {
        let mut report = SavingsReport {
            files_compressed: 0,
            total_original_bytes: 0,
            total_compressed_bytes: 0,
        };

        for result in results {
            if let Some(artifact) = result.artifact() {
                report.files_compressed += 1;
                report.total_original_bytes += result.original.size();
                report.total_compressed_bytes += artifact.size();
            }
        }

        report
    }

    pub fn saved_bytes(&self) -> i64 {
        self.total_original_bytes as i64 - self.total_compressed_bytes as i64
    }

    /// Percentage saved; 0 when nothing was compressed.
    pub fn percent_saved(&self) -> f64 {
        if self.total_original_bytes == 0 {
            return 0.0;
        }
        (self.saved_bytes() as f64 / self.total_original_bytes as f64) * 100.0
    }
}

/// Bundle every successful artifact into one ZIP buffer. Entries are
/// named `compressed_<name>`; duplicate names get a numeric suffix so
/// the archive never rejects an entry.
pub fn bundle_results(results: &[ProcessingResult]) -> Result<Vec<u8>> {
    let artifacts: Vec<_> = results.iter().filter_map(|r| r.artifact()).collect();
    if artifacts.is_empty() {
        return Err(CompressionError::EmptyBundle);
    }

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = FileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .compression_level(Some(BUNDLE_DEFLATE_LEVEL));

    let mut used_names = HashSet::new();
    for artifact in artifacts {
        let entry = unique_entry_name(&artifact.name, &mut used_names);
        zip.start_file(entry, options)?;
        zip.write_all(&artifact.data)?;
    }

    let cursor = zip.finish()?;
    Ok(cursor.into_inner())
}

/// Write the combined ZIP into `dir` under the standard bundle name.
pub fn write_bundle(results: &[ProcessingResult], dir: &Path) -> Result<PathBuf> {
    let data = bundle_results(results)?;
    fs::create_dir_all(dir)
        .map_err(|_| CompressionError::DirectoryCreationFailed(dir.to_path_buf()))?;
    let path = dir.join(BUNDLE_FILE_NAME);
    fs::write(&path, data)?;
    Ok(path)
}

fn unique_entry_name(name: &str, used: &mut HashSet<String>) -> String {
    let base = format!("{}{}", BUNDLE_ENTRY_PREFIX, name);
    if used.insert(base.clone()) {
        return base;
    }

    let (stem, ext) = match base.rsplit_once('.') {
        Some((stem, ext)) => (stem.to_string(), format!(".{}", ext)),
        None => (base.clone(), String::new()),
    };

    let mut counter = 1;
    loop {
        let candidate = format!("{}_{}{}", stem, counter, ext);
        if used.insert(candidate.clone()) {
            return candidate;
        }
        counter += 1;
    }
}
