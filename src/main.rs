use clap::{Parser, Subcommand};
use deborder::{config, inputs, output, process};
use std::path::PathBuf;

/// Shared arguments for commands that run the pipeline.
#[derive(clap::Args, Clone)]
struct RunArgs {
    /// Image files and/or directories to process (directories are walked
    /// recursively)
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Detection strategy override
    #[arg(long, value_enum)]
    strategy: Option<StrategyArg>,

    /// Minimum border width (in pixels) worth cropping
    #[arg(long)]
    min_border: Option<u32>,

    /// Write the full result list as JSON to this path
    #[arg(long)]
    report: Option<PathBuf>,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum StrategyArg {
    /// Adaptive binarization + contour extraction
    Contour,
    /// Row/column scans inward from each edge
    Scan,
}

impl From<StrategyArg> for config::Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Contour => config::Strategy::Contour,
            StrategyArg::Scan => config::Strategy::Scan,
        }
    }
}

#[derive(Parser)]
#[command(name = "deborder")]
#[command(about = "Remove uniform white borders from images")]
#[command(long_about = "\
Remove uniform white borders from images

Each input image is analyzed for a near-white margin around its content.
Images with a meaningful margin get a cropped copy written next to the
original (photo.png -> photo_cropped.png); the original is never touched.
Images that are already tightly framed, or contain no content at all, are
skipped. Unreadable files are reported as errors without stopping the rest
of the batch.

Supported formats: png, jpg, jpeg, bmp, webp (selected by extension).

Run 'deborder gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Path to a config.toml (defaults apply when omitted)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Detect borders and write cropped copies
    Crop(RunArgs),
    /// Classify inputs without writing anything
    Check(RunArgs),
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Crop(args) => run(cli.config.as_deref(), args, process::WriteMode::Apply),
        Command::Check(args) => run(cli.config.as_deref(), args, process::WriteMode::DryRun),
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
            Ok(())
        }
    }
}

fn run(
    config_path: Option<&std::path::Path>,
    args: RunArgs,
    mode: process::WriteMode,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = match config_path {
        Some(path) => config::Config::load(path)?,
        None => config::Config::default(),
    };
    if let Some(strategy) = args.strategy {
        config.detector.strategy = strategy.into();
    }
    if let Some(min_border) = args.min_border {
        config.policy.min_border_width = min_border;
    }
    config.validate()?;

    init_thread_pool(&config.processing);

    let images = inputs::collect_images(&args.paths);
    if images.is_empty() {
        println!("No images found");
        return Ok(());
    }

    let results = process::process_batch(&images, &config, mode);
    output::print_results(&results);

    if let Some(report_path) = args.report {
        let json = serde_json::to_string_pretty(&results)?;
        std::fs::write(&report_path, json)?;
        println!("Report: {}", report_path.display());
    }

    Ok(())
}

/// Initialize the rayon thread pool based on processing config.
///
/// Capped at the number of available CPU cores; users can constrain down,
/// not up.
fn init_thread_pool(processing: &config::ProcessingConfig) {
    let threads = config::effective_threads(processing);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .ok();
}
