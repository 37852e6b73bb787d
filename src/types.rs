use crate::classify::{self, FileType};
use crate::constants::MAX_FILE_SIZE;
use crate::error::{CompressionError, Result};
use crate::utils::calculate_compression_ratio;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// One user-selected input file, held fully in memory for the duration
/// of a run. Immutable once constructed.
#[derive(Debug, Clone)]
pub struct SelectedFile {
    pub name: String,
    pub mime: String,
    pub data: Vec<u8>,
}

impl SelectedFile {
    pub fn from_parts(name: impl Into<String>, mime: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            data,
        }
    }

    /// Load a file from disk, guessing the MIME type from the extension.
    /// Rejects missing files and inputs over the size limit before any
    /// bytes are read.
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CompressionError::FileNotFound(path.to_path_buf()));
        }

        let file_size = fs::metadata(path)?.len();
        if file_size > MAX_FILE_SIZE {
            return Err(CompressionError::FileTooLarge(file_size, MAX_FILE_SIZE));
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        let mime = classify::mime_for_path(path).to_string();
        let data = fs::read(path)?;

        Ok(Self { name, mime, data })
    }

    pub fn size(&self) -> u64 {
        self.data.len() as u64
    }

    pub fn file_type(&self) -> FileType {
        classify::classify(&self.mime)
    }
}

/// A compressed or substituted output produced by an adapter.
#[derive(Debug, Clone)]
pub struct Artifact {
    pub name: String,
    pub mime: String,
    pub data: Vec<u8>,
    pub modified: SystemTime,
}

impl Artifact {
    pub fn new(name: impl Into<String>, mime: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            data,
            modified: SystemTime::now(),
        }
    }

    pub fn size(&self) -> u64 {
        self.data.len() as u64
    }

    /// Write the artifact under its own name into `dir`, creating the
    /// directory if needed. Returns the path written.
    pub fn write_to_dir(&self, dir: &Path) -> Result<PathBuf> {
        fs::create_dir_all(dir)
            .map_err(|_| CompressionError::DirectoryCreationFailed(dir.to_path_buf()))?;
        let path = dir.join(&self.name);
        fs::write(&path, &self.data)?;
        Ok(path)
    }
}

/// Outcome of processing one file. Exactly one of artifact or error, by
/// construction.
#[derive(Debug, Clone)]
pub enum FileOutcome {
    Compressed { artifact: Artifact, ratio: f64 },
    Failed { message: String },
}

/// The per-file record the pipeline appends for every input, success or
/// not. N inputs always produce N results in input order.
#[derive(Debug, Clone)]
pub struct ProcessingResult {
    pub original: SelectedFile,
    pub file_type: FileType,
    pub outcome: FileOutcome,
}

impl ProcessingResult {
    pub fn compressed(original: SelectedFile, file_type: FileType, artifact: Artifact) -> Self {
        let ratio = calculate_compression_ratio(original.size(), artifact.size());
        Self {
            original,
            file_type,
            outcome: FileOutcome::Compressed { artifact, ratio },
        }
    }

    pub fn failed(
        original: SelectedFile,
        file_type: FileType,
        message: impl Into<String>,
    ) -> Self {
        Self {
            original,
            file_type,
            outcome: FileOutcome::Failed {
                message: message.into(),
            },
        }
    }

    pub fn is_compressed(&self) -> bool {
        matches!(self.outcome, FileOutcome::Compressed { .. })
    }

    pub fn artifact(&self) -> Option<&Artifact> {
        match &self.outcome {
            FileOutcome::Compressed { artifact, .. } => Some(artifact),
            FileOutcome::Failed { .. } => None,
        }
    }

    /// Size reduction percentage; only meaningful for successes.
    pub fn ratio(&self) -> Option<f64> {
        match &self.outcome {
            FileOutcome::Compressed { ratio, .. } => Some(*ratio),
            FileOutcome::Failed { .. } => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.outcome {
            FileOutcome::Compressed { .. } => None,
            FileOutcome::Failed { message } => Some(message),
        }
    }
}

/// Lifecycle of one processing run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Running,
    Done,
}
