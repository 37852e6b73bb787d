use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "file-squeeze",
    about = "A local multi-format file compression tool",
    long_about = "file-squeeze compresses images, videos, audio files and archives on your own \
                  machine. Images are re-encoded with quality, size and format controls; archives \
                  get a gzip pass; video and audio are passed through a simulated placeholder \
                  stage. Nothing ever leaves the machine.",
    version = "0.1.0",
    after_help = "EXAMPLES:\n  \
    file-squeeze compress photo.jpg ./out -q 0.8 -f webp\n  \
    file-squeeze batch \"./downloads/*.zip\" ./out -l 9 --bundle\n  \
    file-squeeze batch ./media ./out -r\n  \
    file-squeeze info clip.mp4"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, help = "Suppress all non-error output")]
    pub quiet: bool,

    #[arg(long, global = true, help = "Print extra diagnostics")]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(
        about = "Compress a single file",
        long_about = "Run one file through the compression pipeline and write the resulting \
                      artifact into the output directory. The artifact name is derived from the \
                      input: images get the output format's extension, archives get a .gz suffix."
    )]
    Compress {
        #[arg(help = "Input file path")]
        input: PathBuf,

        #[arg(default_value = ".", help = "Output directory (default: current directory)")]
        output: PathBuf,

        #[arg(
            short = 'q',
            long,
            help = "Image quality, 0-1 (default: 0.8)",
            long_help = "Image quality from just above 0 (smallest) to 1 (best). Also selects \
                         how hard the PNG optimizer works."
        )]
        quality: Option<f32>,

        #[arg(
            short = 'f',
            long,
            help = "Output image format (jpeg, png, webp)",
            long_help = "Force the output format for images regardless of the input format. \
                         Non-image files ignore this setting."
        )]
        format: Option<String>,

        #[arg(
            short = 'd',
            long,
            help = "Maximum image dimension in pixels (default: 1920)",
            long_help = "Downscale images whose longest side exceeds this bound. Aspect ratio \
                         is preserved; images are never upscaled."
        )]
        max_dimension: Option<u32>,

        #[arg(
            short = 's',
            long,
            help = "Target maximum image size in MB (default: 1.0)",
            long_help = "JPEG output steps its quality down until the artifact fits this size \
                         or the quality floor is reached."
        )]
        max_size_mb: Option<f64>,

        #[arg(
            short = 'l',
            long,
            help = "Gzip level for archives, 1-9 (default: 6)",
            long_help = "Deflate level for the archive pass, from 1 (fastest) to 9 (best \
                         compression)."
        )]
        level: Option<u32>,
    },

    #[command(
        about = "Compress many files sequentially",
        long_about = "Collect files from a path, directory or glob pattern and run them through \
                      the pipeline one at a time, in order. Failures are reported per file and \
                      never stop the run. A summary with total savings is printed at the end."
    )]
    Batch {
        #[arg(
            help = "Input file, directory, or glob pattern",
            long_help = "Examples: './downloads', 'photo.jpg', './media/*.{mp4,zip}'"
        )]
        input: String,

        #[arg(help = "Output directory path")]
        output: PathBuf,

        #[arg(short = 'q', long, help = "Image quality, 0-1 (default: 0.8)")]
        quality: Option<f32>,

        #[arg(short = 'f', long, help = "Output image format (jpeg, png, webp)")]
        format: Option<String>,

        #[arg(short = 'd', long, help = "Maximum image dimension in pixels (default: 1920)")]
        max_dimension: Option<u32>,

        #[arg(short = 's', long, help = "Target maximum image size in MB (default: 1.0)")]
        max_size_mb: Option<f64>,

        #[arg(short = 'l', long, help = "Gzip level for archives, 1-9 (default: 6)")]
        level: Option<u32>,

        #[arg(short = 'r', long, help = "Process subdirectories recursively")]
        recursive: bool,

        #[arg(
            long,
            help = "Also bundle all compressed files into a single ZIP",
            long_help = "After the run, write every successful artifact into a single \
                         compressed_files.zip in the output directory. Failed files are \
                         excluded."
        )]
        bundle: bool,
    },

    #[command(
        about = "Show how a file would be classified and processed",
        long_about = "Display a file's detected MIME type, its category (image, video, audio, \
                      archive, other), the adapter responsible for it, and what the pipeline \
                      would do with it."
    )]
    Info {
        #[arg(help = "File path to analyze")]
        input: PathBuf,
    },
}
