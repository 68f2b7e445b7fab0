//! CLI entry point for the seam blending tool

use clap::Parser;
use seamblend::io::cli::{Cli, FileProcessor};

fn main() -> seamblend::Result<()> {
    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()?.into_result()
}
