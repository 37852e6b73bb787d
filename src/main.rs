use clap::Parser;
use file_squeeze::bundle::{write_bundle, SavingsReport};
use file_squeeze::cli::{Args, Commands};
use file_squeeze::ingest::collect_input_files;
use file_squeeze::logger::{self, Verbosity};
use file_squeeze::pipeline::Pipeline;
use file_squeeze::settings::{CompressionSettings, OutputFormat};
use file_squeeze::types::{FileOutcome, ProcessingResult, SelectedFile};
use file_squeeze::utils::{create_progress_spinner, create_run_progress_bar, format_file_size};
use file_squeeze::{error, info, verbose, warn};
use std::path::PathBuf;
use std::time::Instant;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let verbosity = if args.quiet {
        Verbosity::Quiet
    } else if args.verbose {
        Verbosity::Verbose
    } else {
        Verbosity::Normal
    };
    logger::set_verbosity(verbosity);

    match args.command {
        Commands::Compress {
            input,
            output,
            quality,
            format,
            max_dimension,
            max_size_mb,
            level,
        } => {
            let settings = build_settings(quality, max_size_mb, format, level, max_dimension)?;
            run_compress(input, output, settings).await?;
        }
        Commands::Batch {
            input,
            output,
            quality,
            format,
            max_dimension,
            max_size_mb,
            level,
            recursive,
            bundle,
        } => {
            let settings = build_settings(quality, max_size_mb, format, level, max_dimension)?;
            run_batch(input, output, settings, recursive, bundle).await?;
        }
        Commands::Info { input } => {
            file_squeeze::info::print_file_info(&input)?;
        }
    }

    Ok(())
}

fn build_settings(
    quality: Option<f32>,
    max_size_mb: Option<f64>,
    format: Option<String>,
    level: Option<u32>,
    max_dimension: Option<u32>,
) -> anyhow::Result<CompressionSettings> {
    let output_format = format
        .as_deref()
        .map(str::parse::<OutputFormat>)
        .transpose()?;
    Ok(CompressionSettings::new(
        quality,
        max_size_mb,
        output_format,
        level,
        max_dimension,
    )?)
}

async fn run_compress(
    input: PathBuf,
    output: PathBuf,
    settings: CompressionSettings,
) -> anyhow::Result<()> {
    info!("🗜️  Compressing file: {:?}", input);
    info!("📁 Output: {:?}", output);

    let spinner = create_progress_spinner("Loading file...");
    let file = SelectedFile::from_path(&input)?;
    spinner.finish_with_message("✅ File loaded");

    let original_size = file.size();
    info!(
        "📊 Original size: {} bytes ({})",
        original_size,
        format_file_size(original_size)
    );
    verbose!("MIME type: {}, category: {}", file.mime, file.file_type());

    let mut pipeline = Pipeline::new(settings);
    let mut results = pipeline.run(vec![file], |_, _| {}).await;
    let result = results.remove(0);

    match result.outcome {
        FileOutcome::Compressed { artifact, ratio } => {
            let path = artifact.write_to_dir(&output)?;
            info!(
                "📈 Compressed size: {} bytes ({})",
                artifact.size(),
                format_file_size(artifact.size())
            );
            info!("🎯 Compression ratio: {:.1}%", ratio);
            if ratio > 0.0 {
                info!("✅ Successfully reduced file size by {:.1}%", ratio);
            } else {
                warn!("File size did not shrink ({:.1}%)", ratio.abs());
            }
            info!("💾 Saved to: {:?}", path);
            Ok(())
        }
        FileOutcome::Failed { message } => {
            anyhow::bail!("{}", message)
        }
    }
}

async fn run_batch(
    input: String,
    output: PathBuf,
    settings: CompressionSettings,
    recursive: bool,
    bundle: bool,
) -> anyhow::Result<()> {
    info!("🚀 Starting batch compression...");
    info!("📁 Input: {}", input);
    info!("📁 Output: {:?}", output);

    let start_time = Instant::now();

    let paths = collect_input_files(&input, recursive)?;
    let total_files = paths.len();
    info!("📊 Found {} files to process", total_files);

    let progress = create_run_progress_bar(total_files);
    let mut per_file = vec![0u64; total_files];

    let mut pipeline = Pipeline::new(settings);
    let results = pipeline
        .run_paths(paths, |index, percent| {
            per_file[index] = percent as u64;
            progress.set_position(per_file.iter().sum());
        })
        .await;
    progress.finish_and_clear();

    for result in &results {
        match &result.outcome {
            FileOutcome::Compressed { artifact, ratio } => {
                let path = artifact.write_to_dir(&output)?;
                verbose!(
                    "{} {} -> {:?} ({:.1}%)",
                    result.file_type.icon(),
                    result.original.name,
                    path,
                    ratio
                );
            }
            FileOutcome::Failed { message } => {
                error!("Failed to process {}: {}", result.original.name, message);
            }
        }
    }

    if bundle {
        match write_bundle(&results, &output) {
            Ok(path) => info!("📦 Bundled compressed files into {:?}", path),
            Err(e) => warn!("Skipping bundle: {}", e),
        }
    }

    print_summary(&results, start_time.elapsed());
    Ok(())
}

fn print_summary(results: &[ProcessingResult], elapsed: std::time::Duration) {
    let report = SavingsReport::from_results(results);
    let failed_count = results.len() - report.files_compressed;

    info!("\n📊 Batch Compression Summary:");
    info!(
        "  📁 Files compressed: {}/{}",
        report.files_compressed,
        results.len()
    );
    info!(
        "  📊 Total original size: {} bytes ({})",
        report.total_original_bytes,
        format_file_size(report.total_original_bytes)
    );
    info!(
        "  📊 Total compressed size: {} bytes ({})",
        report.total_compressed_bytes,
        format_file_size(report.total_compressed_bytes)
    );
    info!(
        "  🎯 Space saved: {} bytes ({:.1}%)",
        report.saved_bytes(),
        report.percent_saved()
    );
    info!("  ⏱️  Total time: {:?}", elapsed);

    if failed_count > 0 {
        warn!("Failed files: {}", failed_count);
    }
}
