//! Placeholder video/audio adapter.
//!
//! Real transcoding needs an external encoder and is out of scope; this
//! adapter simulates the work with a fixed delay and returns the bytes
//! unchanged. Video keeps its name and MIME (ratio 0%). Audio keeps its
//! bytes and name but is relabeled `audio/mpeg`, which is a container
//! label change, not compression.

use super::Compressor;
use crate::classify::FileType;
use crate::constants::{AUDIO_RELABEL_MIME, SIMULATED_TRANSCODE_DELAY_MS};
use crate::error::Result;
use crate::settings::CompressionSettings;
use crate::types::{Artifact, SelectedFile};
use async_trait::async_trait;
use std::time::Duration;
use tokio::time;

pub struct MediaAdapter;

#[async_trait]
impl Compressor for MediaAdapter {
    fn name(&self) -> &'static str {
        "media"
    }

    fn handles(&self, file_type: FileType) -> bool {
        matches!(file_type, FileType::Video | FileType::Audio)
    }

    async fn compress(
        &self,
        file: &SelectedFile,
        _settings: &CompressionSettings,
    ) -> Result<Artifact> {
        time::sleep(Duration::from_millis(SIMULATED_TRANSCODE_DELAY_MS)).await;

        let mime = match file.file_type() {
            FileType::Audio => AUDIO_RELABEL_MIME.to_string(),
            _ => file.mime.clone(),
        };

        Ok(Artifact::new(file.name.clone(), mime, file.data.clone()))
    }
}
