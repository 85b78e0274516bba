use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueHint};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use trailseg_core::{Coordinate, PathSegmenter, SegmenterConfig};
use trailseg_cli::{load_trail, to_json, TrailStats};

#[derive(Parser, Debug)]
#[command(version, about = "Split recorded GPS trails into drawable segments", long_about = None)]
struct Cli {
    #[command(flatten)]
    verbose: Verbosity<InfoLevel>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Split a trail into segments and print them as JSON
    Segment {
        /// JSON trail file (`-` for stdin)
        #[arg(value_hint = ValueHint::FilePath)]
        input: PathBuf,

        /// Maximum distance in meters between connected points
        #[arg(short, long)]
        threshold: f64,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Print the great-circle distance between two points in meters
    Distance {
        #[arg(allow_negative_numbers = true)]
        lat1: f64,
        #[arg(allow_negative_numbers = true)]
        lng1: f64,
        #[arg(allow_negative_numbers = true)]
        lat2: f64,
        #[arg(allow_negative_numbers = true)]
        lng2: f64,
    },
    /// Print segmentation statistics for a trail as JSON
    Stats {
        /// JSON trail file (`-` for stdin)
        #[arg(value_hint = ValueHint::FilePath)]
        input: PathBuf,

        /// Maximum distance in meters between connected points
        #[arg(short, long)]
        threshold: f64,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
}

fn segmenter(threshold: f64) -> Result<PathSegmenter> {
    let config = SegmenterConfig::new(threshold)?;
    Ok(PathSegmenter::new(config))
}

fn main() -> Result<()> {
    let args = Cli::parse();

    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    match args.command {
        Command::Segment {
            input,
            threshold,
            pretty,
        } => {
            let segmenter = segmenter(threshold)?;
            let trail = load_trail(&input)?;
            let segments = segmenter.segment(&trail);
            println!("{}", to_json(&segments, pretty)?);
        }
        Command::Distance {
            lat1,
            lng1,
            lat2,
            lng2,
        } => {
            let a = Coordinate::new(lat1, lng1);
            let b = Coordinate::new(lat2, lng2);
            println!("{:.3}", trailseg_core::distance(&a, &b));
        }
        Command::Stats {
            input,
            threshold,
            pretty,
        } => {
            let segmenter = segmenter(threshold)?;
            let trail = load_trail(&input)?;
            let stats = TrailStats::new(&segmenter, &trail);
            log::info!(
                "{} points, {} segments, {} dropped",
                stats.points,
                stats.segments,
                stats.dropped_points
            );
            println!("{}", to_json(&stats, pretty)?);
        }
    }

    Ok(())
}
