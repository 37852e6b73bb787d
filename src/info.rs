use crate::adapters;
use crate::classify::{self, FileType};
use crate::error::{CompressionError, Result};
use crate::utils::format_file_size;
use std::fs;
use std::path::Path;

/// Print classification and size details for one file, plus a note on
/// how the pipeline would treat it.
pub fn print_file_info(input_path: &Path) -> Result<()> {
    if !input_path.exists() {
        return Err(CompressionError::FileNotFound(input_path.to_path_buf()));
    }

    let metadata = fs::metadata(input_path)?;
    let mime = classify::mime_for_path(input_path);
    let file_type = classify::classify(mime);

    println!("📊 Analyzing file: {:?}", input_path);
    println!("📋 Basic Information:");
    println!("  📁 File: {:?}", input_path);
    println!(
        "  📦 Size: {} bytes ({})",
        metadata.len(),
        format_file_size(metadata.len())
    );
    println!("  🎭 MIME type: {}", mime);
    println!("  {} Category: {}", file_type.icon(), file_type);

    let adapter_set = adapters::default_adapters();
    match adapters::adapter_for(&adapter_set, file_type) {
        Some(adapter) => println!("  ⚙️  Handled by: {} adapter", adapter.name()),
        None => println!("  ⚙️  Handled by: none (would fail as unsupported)"),
    }

    println!("\n💡 What to expect:");
    match file_type {
        FileType::Image => {
            println!("  🎯 Re-encoded at the configured quality; resized if larger than the dimension cap");
        }
        FileType::Archive => {
            println!("  🎯 Whole file deflated with gzip; output is named <name>.gz");
        }
        FileType::Video => {
            println!("  🎯 No real transcoding: returned unchanged after a simulated pass");
        }
        FileType::Audio => {
            println!("  🎯 No real transcoding: relabeled audio/mpeg after a simulated pass");
        }
        FileType::Other => {
            println!("  🎯 Unsupported: the run records a per-file error for this input");
        }
    }

    Ok(())
}
