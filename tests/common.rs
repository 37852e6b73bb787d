use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// A real, decodable JPEG with enough texture to be worth compressing.
pub fn create_test_jpeg(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let img = gradient_image(width, height);
    let path = dir.join(name);
    img.save_with_format(&path, ImageFormat::Jpeg).unwrap();
    path
}

pub fn create_test_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let img = gradient_image(width, height);
    let path = dir.join(name);
    img.save_with_format(&path, ImageFormat::Png).unwrap();
    path
}

/// A text payload saved under an archive extension, as a user might
/// hand the tool a mislabeled file.
pub fn create_archive_payload(dir: &Path, name: &str, size: usize) -> PathBuf {
    let path = dir.join(name);
    let payload: Vec<u8> = b"lorem ipsum ".iter().cycle().take(size).copied().collect();
    File::create(&path).unwrap().write_all(&payload).unwrap();
    path
}

pub fn create_unknown_file(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    File::create(&path)
        .unwrap()
        .write_all(b"mystery payload")
        .unwrap();
    path
}

fn gradient_image(width: u32, height: u32) -> DynamicImage {
    let mut img = RgbImage::new(width, height);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        *pixel = Rgb([
            (x % 256) as u8,
            (y % 256) as u8,
            ((x + y) % 256) as u8,
        ]);
    }
    DynamicImage::ImageRgb8(img)
}
