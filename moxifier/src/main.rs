//! Moxifier - converts Dragon Shield exports into Moxfield imports.

use clap::Parser;
use moxifier::{convert, ConvertOptions, OutputMode, ParseOptions};
use std::path::PathBuf;

/// Convert Dragon Shield card exports into Moxfield decklists and collections
#[derive(Parser, Debug)]
#[command(name = "moxifier")]
#[command(version, about, long_about = None)]
struct Args {
    /// Dragon Shield CSV exports to convert
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Which Moxfield files to write
    #[arg(short, long, value_enum, default_value_t = OutputMode::Both)]
    mode: OutputMode,

    /// Directory the converted files are written to
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Deck size the card count is checked against
    #[arg(long, default_value_t = 100)]
    deck_size: u64,

    /// Keep rows with an empty quantity instead of skipping them
    #[arg(long, default_value_t = false)]
    keep_empty_quantity: bool,
}

impl Args {
    fn options(&self) -> ConvertOptions {
        ConvertOptions {
            mode: self.mode,
            output_dir: self.output_dir.clone(),
            deck_size: self.deck_size,
            parse: ParseOptions {
                skip_empty_quantity: !self.keep_empty_quantity,
            },
        }
    }
}

fn main() {
    // Set RUST_LOG to control log level, e.g. RUST_LOG=debug
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let options = args.options();
    let mut failures = 0usize;

    for input in &args.inputs {
        match convert(input, &options) {
            Ok(report) => {
                println!("\n{}", report.summary.headline());
                println!("{}", report.summary.assessment.message());
                for path in report.written() {
                    println!("Wrote {}", path.display());
                }
            }
            Err(e) => {
                log::error!("Failed to convert {}: {}", input.display(), e);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        log::error!("{} of {} files failed", failures, args.inputs.len());
        std::process::exit(1);
    }
}
