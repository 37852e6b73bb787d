pub const DEFAULT_QUALITY: f32 = 0.8;
pub const MAX_QUALITY: f32 = 1.0;

pub const DEFAULT_COMPRESSION_LEVEL: u32 = 6;
pub const MIN_COMPRESSION_LEVEL: u32 = 1;
pub const MAX_COMPRESSION_LEVEL: u32 = 9;

pub const DEFAULT_MAX_DIMENSION: u32 = 1920;
pub const DEFAULT_MAX_SIZE_MB: f64 = 1.0;

/// Inputs larger than this are rejected before they reach an adapter.
pub const MAX_FILE_SIZE: u64 = 512 * 1024 * 1024;

/// Fixed delay for the placeholder video/audio adapters.
pub const SIMULATED_TRANSCODE_DELAY_MS: u64 = 2000;

// JPEG size targeting: step quality down until the artifact fits maxSizeMB.
pub const JPEG_QUALITY_STEP: u8 = 10;
pub const JPEG_QUALITY_FLOOR: u8 = 10;

// oxipng deflater selection by quality.
pub const ZOPFLI_QUALITY_THRESHOLD: f32 = 0.9;
pub const HIGH_DEFLATE_QUALITY_THRESHOLD: f32 = 0.7;
pub const ZOPFLI_ITERATIONS: u8 = 15;
pub const LIBDEFLATER_HIGH_LEVEL: u8 = 12;
pub const LIBDEFLATER_LOW_LEVEL: u8 = 8;

pub const PROGRESS_START: u8 = 0;
pub const PROGRESS_DONE: u8 = 100;

pub const BUNDLE_FILE_NAME: &str = "compressed_files.zip";
pub const BUNDLE_ENTRY_PREFIX: &str = "compressed_";
pub const BUNDLE_DEFLATE_LEVEL: i32 = 9;

pub const GZIP_EXTENSION: &str = "gz";
pub const GZIP_MIME: &str = "application/gzip";
pub const AUDIO_RELABEL_MIME: &str = "audio/mpeg";

pub const PROGRESS_SPINNER_TEMPLATE: &str = "{spinner:.green} {msg}";
pub const PROGRESS_BAR_TEMPLATE: &str =
    "{bar:40.cyan/blue} {percent:>3}% {msg}";
