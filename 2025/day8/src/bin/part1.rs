use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use day8::Part1CLIArgs;
use tracing::info;

fn main() -> Result<()> {
    day8::init_logging();
    let args = Part1CLIArgs::parse();
    let start = Instant::now();
    let points = day8::read_points(&args.input_path).with_context(|| {
        format!(
            "Failed to read junction box positions from given file({}).",
            args.input_path.display()
        )
    })?;

    let product = day8::largest_clusters_product(&points, args.pair_n, args.top_n)
        .with_context(|| {
            format!(
                "Failed to find the {} largest circuit(s) after connecting {} closest pair(s).",
                args.top_n, args.pair_n
            )
        })?;
    println!(
        "The product of sizes of the {} largest circuit(s) after connecting {} closest pair(s) is {}.",
        args.top_n, args.pair_n, product
    );
    info!("Completed in {:?}.", start.elapsed());

    Ok(())
}
