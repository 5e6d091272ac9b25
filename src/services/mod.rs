pub mod colorize_pipeline;

pub use colorize_pipeline::{compare_files, compare_images, ColorizePipeline, RunSummary};
