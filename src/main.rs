use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use luma_transfer::{Colorizer, PerceptualSpace, SamplingMethod, SwatchPair, SwatchSet};
use recolor::models::{parse_swatch_pair, RunConfig};
use recolor::services::{compare_files, ColorizePipeline};

#[derive(Parser)]
#[command(name = "recolor")]
#[command(about = "Colorize a grayscale image from a color reference image")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Transfer color from a reference image onto a grayscale image
    Transfer {
        /// Color reference image (PNG)
        #[arg(short, long)]
        color: PathBuf,

        /// Grayscale image to colorize (PNG)
        #[arg(short, long)]
        gray: PathBuf,

        /// Output PNG file path
        #[arg(short, long, default_value = "./a.png")]
        dest: PathBuf,

        /// Neighborhood window size
        #[arg(short, long)]
        window_size: Option<usize>,

        /// Number of source samples
        #[arg(long)]
        samples: Option<usize>,

        /// Sampling method: "jittered" or "brute-force"
        #[arg(long)]
        sampling: Option<SamplingMethod>,

        /// Weight of the mean in the match cost (0..1)
        #[arg(long)]
        mean_weight: Option<f32>,

        /// Seed for jittered sampling
        #[arg(long)]
        seed: Option<u64>,

        /// Perceptual color space: "oklab" or "cielab"
        #[arg(long)]
        color_space: Option<PerceptualSpace>,

        /// Swatch pair "x,y,w,h:x,y,w,h" (source rectangle, then target rectangle); repeatable
        #[arg(long = "swatch", value_parser = parse_swatch_arg)]
        swatches: Vec<SwatchPair>,

        /// Write an image marking the sampled source pixels
        #[arg(short, long)]
        show_samples: bool,

        /// Trace every pixel's match
        #[arg(short, long)]
        verbose: bool,

        /// YAML run configuration
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Print the PSNR (dB) of a candidate image against a reference
    Psnr {
        /// Reference image (PNG)
        reference: PathBuf,

        /// Image to score (PNG)
        candidate: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Transfer {
            color,
            gray,
            dest,
            window_size,
            samples,
            sampling,
            mean_weight,
            seed,
            color_space,
            swatches,
            show_samples,
            verbose,
            config,
        } => {
            let mut file_config = match &config {
                Some(path) => RunConfig::load(path)?,
                None => RunConfig::default(),
            };
            // command line overrides the file
            if let Some(v) = window_size {
                file_config.window_size = v;
            }
            if let Some(v) = samples {
                file_config.samples = v;
            }
            if let Some(v) = mean_weight {
                file_config.mean_weight = v;
            }
            if let Some(v) = seed {
                file_config.seed = v;
            }
            if let Some(v) = sampling {
                file_config.sampling = v;
            }
            if let Some(v) = color_space {
                file_config.color_space = v;
            }
            file_config.show_samples |= show_samples;
            file_config.verbose |= verbose;

            init_logging(file_config.verbose);

            let options = file_config.transfer_options();
            let space = file_config.color_space;
            let pairs = if swatches.is_empty() {
                file_config.swatch_pairs()
            } else {
                swatches
            };
            run_transfer_command(&color, &gray, &dest, options, space, pairs)
        }
        Commands::Psnr {
            reference,
            candidate,
        } => {
            init_logging(false);
            let db = compare_files(&reference, &candidate)?;
            println!("{db:.4}");
            Ok(())
        }
    }
}

fn run_transfer_command(
    color: &Path,
    gray: &Path,
    dest: &Path,
    options: luma_transfer::TransferOptions,
    space: PerceptualSpace,
    pairs: Vec<SwatchPair>,
) -> anyhow::Result<()> {
    let swatches = if pairs.is_empty() {
        None
    } else {
        Some(SwatchSet::from_pairs(pairs)?)
    };
    let colorizer = Colorizer::new().options(options).color_space(space);
    let summary = ColorizePipeline::new(colorizer, swatches).run(color, gray, dest)?;

    println!(
        "Colorized {}x{} image -> {}",
        summary.width,
        summary.height,
        summary.destination.display()
    );
    if let Some(overlay) = &summary.overlay {
        println!("Sample overlay -> {}", overlay.display());
    }
    Ok(())
}

fn parse_swatch_arg(s: &str) -> Result<SwatchPair, String> {
    parse_swatch_pair(s).map_err(|e| e.to_string())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        tracing_subscriber::EnvFilter::new("recolor=trace,luma_transfer=trace")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "recolor=info,luma_transfer=info".into())
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().without_time().with_writer(std::io::stderr))
        .init();
}
