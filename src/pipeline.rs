//! Sequential processing pipeline.
//!
//! One run walks the selected files in input order: classify, hand the
//! file to the matching adapter, record the result. Per-file failures
//! are captured in the result list and never abort the run. File *i*
//! always completes before file *i+1* starts; there is no cancellation
//! and no adapter timeout.

use crate::adapters::{self, Compressor};
use crate::classify;
use crate::constants::{PROGRESS_DONE, PROGRESS_START};
use crate::error::CompressionError;
use crate::settings::CompressionSettings;
use crate::types::{ProcessingResult, RunState, SelectedFile};
use std::collections::HashMap;
use std::path::PathBuf;

/// Per-file progress, keyed by input index, 0-100.
#[derive(Debug, Default)]
pub struct ProgressMap {
    inner: HashMap<usize, u8>,
}

impl ProgressMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, index: usize, percent: u8) {
        self.inner.insert(index, percent.min(PROGRESS_DONE));
    }

    pub fn get(&self, index: usize) -> Option<u8> {
        self.inner.get(&index).copied()
    }

    /// Average progress across the whole run. Files the run has not
    /// reached yet count as 0.
    pub fn overall_percent(&self, total_files: usize) -> u8 {
        if total_files == 0 {
            return 0;
        }
        let sum: u64 = self.inner.values().map(|&p| p as u64).sum();
        (sum / total_files as u64) as u8
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }
}

pub struct Pipeline {
    settings: CompressionSettings,
    adapters: Vec<Box<dyn Compressor>>,
    progress: ProgressMap,
    state: RunState,
}

impl Pipeline {
    pub fn new(settings: CompressionSettings) -> Self {
        Self::with_adapters(settings, adapters::default_adapters())
    }

    /// Inject a custom adapter set, e.g. a real transcoder in place of
    /// the media placeholder.
    pub fn with_adapters(
        settings: CompressionSettings,
        adapters: Vec<Box<dyn Compressor>>,
    ) -> Self {
        Self {
            settings,
            adapters,
            progress: ProgressMap::new(),
            state: RunState::Idle,
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn progress(&self) -> &ProgressMap {
        &self.progress
    }

    pub fn settings(&self) -> &CompressionSettings {
        &self.settings
    }

    /// Process every file, strictly in input order. Returns one result
    /// per input, success or failure. `on_progress` fires on every
    /// per-file progress change with (index, percent).
    pub async fn run<F>(
        &mut self,
        files: Vec<SelectedFile>,
        mut on_progress: F,
    ) -> Vec<ProcessingResult>
    where
        F: FnMut(usize, u8),
    {
        self.state = RunState::Running;
        self.progress.clear();

        let mut results = Vec::with_capacity(files.len());
        for (index, file) in files.into_iter().enumerate() {
            results.push(self.process_one(index, file, &mut on_progress).await);
        }

        self.state = RunState::Done;
        results
    }

    /// Like [`run`](Self::run), but loads each file from disk as the run
    /// reaches it. A file that cannot be read becomes a failed result
    /// for that file alone; the run continues.
    pub async fn run_paths<F>(
        &mut self,
        paths: Vec<PathBuf>,
        mut on_progress: F,
    ) -> Vec<ProcessingResult>
    where
        F: FnMut(usize, u8),
    {
        self.state = RunState::Running;
        self.progress.clear();

        let mut results = Vec::with_capacity(paths.len());
        for (index, path) in paths.into_iter().enumerate() {
            let result = match SelectedFile::from_path(&path) {
                Ok(file) => self.process_one(index, file, &mut on_progress).await,
                Err(e) => {
                    let name = path
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_else(|| path.to_string_lossy().into_owned());
                    let mime = classify::mime_for_path(&path).to_string();
                    let file_type = classify::classify(&mime);
                    let placeholder = SelectedFile::from_parts(name, mime, Vec::new());
                    ProcessingResult::failed(placeholder, file_type, e.to_string())
                }
            };
            results.push(result);
        }

        self.state = RunState::Done;
        results
    }

    async fn process_one<F>(
        &mut self,
        index: usize,
        file: SelectedFile,
        on_progress: &mut F,
    ) -> ProcessingResult
    where
        F: FnMut(usize, u8),
    {
        self.progress.set(index, PROGRESS_START);
        on_progress(index, PROGRESS_START);

        let file_type = classify::classify(&file.mime);

        match adapters::adapter_for(&self.adapters, file_type) {
            Some(adapter) => match adapter.compress(&file, &self.settings).await {
                Ok(artifact) => {
                    self.progress.set(index, PROGRESS_DONE);
                    on_progress(index, PROGRESS_DONE);
                    ProcessingResult::compressed(file, file_type, artifact)
                }
                Err(e) => ProcessingResult::failed(file, file_type, e.to_string()),
            },
            None => {
                let message = CompressionError::UnsupportedFileType(file.mime.clone()).to_string();
                ProcessingResult::failed(file, file_type, message)
            }
        }
    }
}
