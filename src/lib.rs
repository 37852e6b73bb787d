pub mod adapters;
pub mod bundle;
pub mod classify;
pub mod cli;
pub mod constants;
pub mod error;
pub mod info;
pub mod ingest;
pub mod logger;
pub mod pipeline;
pub mod settings;
pub mod types;
pub mod utils;

pub use adapters::{default_adapters, ArchiveAdapter, Compressor, ImageAdapter, MediaAdapter};
pub use bundle::{bundle_results, write_bundle, SavingsReport};
pub use classify::{classify, mime_for_path, FileType};
pub use error::{CompressionError, Result};
pub use info::print_file_info;
pub use ingest::collect_input_files;
pub use pipeline::{Pipeline, ProgressMap};
pub use settings::{CompressionSettings, OutputFormat};
pub use types::{Artifact, FileOutcome, ProcessingResult, RunState, SelectedFile};
pub use utils::{calculate_compression_ratio, format_file_size};
