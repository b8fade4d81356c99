use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use day8::CLIArgs;
use tracing::info;

fn main() -> Result<()> {
    day8::init_logging();
    let args = CLIArgs::parse();
    let start = Instant::now();
    let points = day8::read_points(&args.input_path).with_context(|| {
        format!(
            "Failed to read junction box positions from given file({}).",
            args.input_path.display()
        )
    })?;

    let product = day8::connecting_coordinate_product(&points)
        .context("Failed to connect all junction boxes into one circuit.")?;
    println!(
        "The product of X coordinates of the last two junction boxes connected into one circuit is {}.",
        product
    );
    info!("Completed in {:?}.", start.elapsed());

    Ok(())
}
