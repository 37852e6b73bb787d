//! Per-type compression adapters.
//!
//! Each adapter delegates the actual compression work to an external
//! library; none of them implement a compression algorithm themselves.
//! Adapters are handed to the pipeline at construction, so swapping one
//! out (e.g. a real transcoder for the media placeholder) is a matter of
//! passing a different set.

pub mod archive;
pub mod image;
pub mod media;

use crate::classify::FileType;
use crate::error::Result;
use crate::settings::CompressionSettings;
use crate::types::{Artifact, SelectedFile};
use async_trait::async_trait;

pub use archive::ArchiveAdapter;
pub use image::ImageAdapter;
pub use media::MediaAdapter;

/// Common interface for all compression adapters.
#[async_trait]
pub trait Compressor: Send + Sync {
    /// Adapter name, for diagnostics and the `info` command.
    fn name(&self) -> &'static str;

    /// Whether this adapter handles files of the given category.
    fn handles(&self, file_type: FileType) -> bool;

    /// Produce a compressed (or substituted) artifact for one file.
    async fn compress(
        &self,
        file: &SelectedFile,
        settings: &CompressionSettings,
    ) -> Result<Artifact>;
}

/// The default adapter set, in dispatch order.
pub fn default_adapters() -> Vec<Box<dyn Compressor>> {
    vec![
        Box::new(ImageAdapter),
        Box::new(ArchiveAdapter),
        Box::new(MediaAdapter),
    ]
}

/// First adapter claiming the given file category, if any. `Other` files
/// match nothing and fail upstream with an unsupported-type error.
pub fn adapter_for(
    adapters: &[Box<dyn Compressor>],
    file_type: FileType,
) -> Option<&dyn Compressor> {
    adapters
        .iter()
        .find(|a| a.handles(file_type))
        .map(|a| a.as_ref())
}
