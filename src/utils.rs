use crate::constants::{PROGRESS_BAR_TEMPLATE, PROGRESS_SPINNER_TEMPLATE};
use indicatif::{ProgressBar, ProgressStyle};

/// Format file size in human-readable form (e.g. "1.2 MB", "512 B").
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    const THRESHOLD: f64 = 1024.0;

    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= THRESHOLD && unit_index < UNITS.len() - 1 {
        size /= THRESHOLD;
        unit_index += 1;
    }

    if unit_index == 0 {
        format!("{} {}", bytes, UNITS[unit_index])
    } else {
        format!("{:.1} {}", size, UNITS[unit_index])
    }
}

/// Compression ratio as a percentage. Positive means the output shrank,
/// negative means it grew. Zero when the original size is zero.
pub fn calculate_compression_ratio(original_size: u64, compressed_size: u64) -> f64 {
    if original_size == 0 {
        return 0.0;
    }
    ((original_size as f64 - compressed_size as f64) / original_size as f64) * 100.0
}

pub fn create_progress_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template(PROGRESS_SPINNER_TEMPLATE)
            .expect("Invalid progress template"),
    );
    pb.set_message(message.to_string());
    pb
}

/// Overall run progress bar: length is total files x 100 so per-file
/// percentages sum directly into the bar position.
pub fn create_run_progress_bar(total_files: usize) -> ProgressBar {
    let pb = ProgressBar::new(total_files as u64 * 100);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(PROGRESS_BAR_TEMPLATE)
            .expect("Invalid progress template"),
    );
    pb
}
