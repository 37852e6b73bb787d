//! Image adapter: decode, bounded resize, re-encode.
//!
//! JPEG output walks the quality down until the artifact fits the
//! configured size target. PNG output gets an in-memory oxipng pass with
//! the deflater picked from the quality setting. WebP output is a single
//! lossless encode.

use super::Compressor;
use crate::classify::FileType;
use crate::constants::{
    HIGH_DEFLATE_QUALITY_THRESHOLD, JPEG_QUALITY_FLOOR, JPEG_QUALITY_STEP,
    LIBDEFLATER_HIGH_LEVEL, LIBDEFLATER_LOW_LEVEL, ZOPFLI_ITERATIONS,
    ZOPFLI_QUALITY_THRESHOLD,
};
use crate::error::{CompressionError, Result};
use crate::settings::{CompressionSettings, OutputFormat};
use crate::types::{Artifact, SelectedFile};
use async_trait::async_trait;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder};
use image::imageops::FilterType;
use image::{DynamicImage, ImageEncoder, ImageFormat};
use oxipng::{Deflaters, Options};
use std::io::Cursor;
use std::num::NonZeroU8;
use std::path::Path;
use tokio::task;

pub struct ImageAdapter;

#[async_trait]
impl Compressor for ImageAdapter {
    fn name(&self) -> &'static str {
        "image"
    }

    fn handles(&self, file_type: FileType) -> bool {
        file_type == FileType::Image
    }

    async fn compress(
        &self,
        file: &SelectedFile,
        settings: &CompressionSettings,
    ) -> Result<Artifact> {
        let data = file.data.clone();
        let name = file.name.clone();
        let settings = settings.clone();

        task::spawn_blocking(move || -> Result<Artifact> {
            let mut img = image::load_from_memory(&data)?;
            resize_to_fit(&mut img, settings.max_dimension);

            let encoded = encode_image(&img, &settings)?;
            let out_name = derive_name(&name, settings.output_format);

            Ok(Artifact::new(
                out_name,
                settings.output_format.mime_type(),
                encoded,
            ))
        })
        .await
        .map_err(|e| CompressionError::TaskJoin(e.to_string()))?
    }
}

/// Downscale so the longest side is at most `max_dimension`, preserving
/// aspect ratio. Never upscales.
fn resize_to_fit(img: &mut DynamicImage, max_dimension: u32) {
    if img.width().max(img.height()) > max_dimension {
        *img = img.resize(max_dimension, max_dimension, FilterType::Lanczos3);
    }
}

fn encode_image(img: &DynamicImage, settings: &CompressionSettings) -> Result<Vec<u8>> {
    match settings.output_format {
        OutputFormat::Jpeg => encode_jpeg_with_target(img, settings),
        OutputFormat::Png => encode_png(img, settings.quality),
        OutputFormat::WebP => encode_webp(img),
    }
}

/// Quality-ladder JPEG encoding: start at the configured quality and
/// step down until the output fits the size target or the floor is hit.
fn encode_jpeg_with_target(img: &DynamicImage, settings: &CompressionSettings) -> Result<Vec<u8>> {
    let max_bytes = settings.max_size_bytes();
    let mut quality = settings.quality_percent();
    let mut buf = encode_jpeg(img, quality)?;

    while buf.len() as u64 > max_bytes && quality > JPEG_QUALITY_FLOOR {
        quality = quality.saturating_sub(JPEG_QUALITY_STEP).max(JPEG_QUALITY_FLOOR);
        buf = encode_jpeg(img, quality)?;
    }

    Ok(buf)
}

fn encode_jpeg(img: &DynamicImage, quality: u8) -> Result<Vec<u8>> {
    // JPEG has no alpha channel; flatten before encoding.
    let rgb = img.to_rgb8();
    let mut buf = Vec::new();
    let mut encoder = JpegEncoder::new_with_quality(&mut buf, quality);
    encoder.encode_image(&rgb)?;
    Ok(buf)
}

fn encode_png(img: &DynamicImage, quality: f32) -> Result<Vec<u8>> {
    let rgba = img.to_rgba8();
    let mut buf = Vec::new();
    let encoder =
        PngEncoder::new_with_quality(&mut buf, CompressionType::Best, PngFilterType::Adaptive);
    encoder.write_image(
        &rgba,
        rgba.width(),
        rgba.height(),
        image::ExtendedColorType::Rgba8,
    )?;

    let mut options = Options::from_preset(4);
    options.deflate = deflater_for_quality(quality);

    oxipng::optimize_from_memory(&buf, &options)
        .map_err(|e| CompressionError::PngOptimization(e.to_string()))
}

fn encode_webp(img: &DynamicImage) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), ImageFormat::WebP)?;
    Ok(buf)
}

/// Higher quality buys a more expensive deflater.
fn deflater_for_quality(quality: f32) -> Deflaters {
    if quality >= ZOPFLI_QUALITY_THRESHOLD {
        Deflaters::Zopfli {
            iterations: NonZeroU8::new(ZOPFLI_ITERATIONS).expect("nonzero iterations"),
        }
    } else if quality >= HIGH_DEFLATE_QUALITY_THRESHOLD {
        Deflaters::Libdeflater {
            compression: LIBDEFLATER_HIGH_LEVEL,
        }
    } else {
        Deflaters::Libdeflater {
            compression: LIBDEFLATER_LOW_LEVEL,
        }
    }
}

/// Keep the original stem, swap in the output format's extension.
fn derive_name(original: &str, format: OutputFormat) -> String {
    let stem = Path::new(original)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(original);
    format!("{}.{}", stem, format.extension())
}
