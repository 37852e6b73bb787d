//! Archive adapter: a generic whole-buffer gzip pass.
//!
//! Already-packed containers (zip, rar, 7z, tar) are not unpacked; the
//! buffer goes through deflate as-is at the configured level and comes
//! back as `<name>.gz`.

use super::Compressor;
use crate::classify::FileType;
use crate::constants::{GZIP_EXTENSION, GZIP_MIME};
use crate::error::{CompressionError, Result};
use crate::settings::CompressionSettings;
use crate::types::{Artifact, SelectedFile};
use async_trait::async_trait;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::Write;
use tokio::task;

pub struct ArchiveAdapter;

#[async_trait]
impl Compressor for ArchiveAdapter {
    fn name(&self) -> &'static str {
        "archive"
    }

    fn handles(&self, file_type: FileType) -> bool {
        file_type == FileType::Archive
    }

    async fn compress(
        &self,
        file: &SelectedFile,
        settings: &CompressionSettings,
    ) -> Result<Artifact> {
        let data = file.data.clone();
        let name = format!("{}.{}", file.name, GZIP_EXTENSION);
        let level = settings.compression_level;

        let compressed = task::spawn_blocking(move || -> Result<Vec<u8>> {
            let mut encoder = GzEncoder::new(Vec::new(), Compression::new(level));
            encoder.write_all(&data)?;
            Ok(encoder.finish()?)
        })
        .await
        .map_err(|e| CompressionError::TaskJoin(e.to_string()))??;

        Ok(Artifact::new(name, GZIP_MIME, compressed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::read::GzDecoder;
    use std::io::Read;

    #[tokio::test]
    async fn test_gzip_naming_and_mime() {
        let file = SelectedFile::from_parts(
            "bundle.zip",
            "application/zip",
            b"some archive payload".to_vec(),
        );
        let settings = CompressionSettings::default();

        let artifact = ArchiveAdapter.compress(&file, &settings).await.unwrap();
        assert_eq!(artifact.name, "bundle.zip.gz");
        assert_eq!(artifact.mime, "application/gzip");
    }

    #[tokio::test]
    async fn test_gzip_round_trips() {
        let payload: Vec<u8> = b"abcd".iter().cycle().take(500).copied().collect();
        let file = SelectedFile::from_parts("data.tar", "application/x-tar", payload.clone());
        let settings =
            CompressionSettings::new(None, None, None, Some(9), None).unwrap();

        let artifact = ArchiveAdapter.compress(&file, &settings).await.unwrap();

        let mut decoder = GzDecoder::new(artifact.data.as_slice());
        let mut restored = Vec::new();
        decoder.read_to_end(&mut restored).unwrap();
        assert_eq!(restored, payload);
    }

    #[tokio::test]
    async fn test_gzip_shrinks_repetitive_input() {
        let payload = vec![b'a'; 10_000];
        let original_size = payload.len() as u64;
        let file = SelectedFile::from_parts("log.tar", "application/x-tar", payload);
        let settings = CompressionSettings::default();

        let artifact = ArchiveAdapter.compress(&file, &settings).await.unwrap();
        assert!(artifact.size() < original_size);
    }

    #[tokio::test]
    async fn test_gzip_empty_input() {
        let file = SelectedFile::from_parts("empty.zip", "application/zip", Vec::new());
        let settings = CompressionSettings::default();

        let artifact = ArchiveAdapter.compress(&file, &settings).await.unwrap();
        // gzip header + trailer, no payload
        assert!(artifact.size() > 0);
    }
}
