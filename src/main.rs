//! kmeans-plots: chart a K-Means evaluation sweep from the command line
//!
//! This is the main entrypoint that orchestrates argument parsing, metrics
//! loading, chart rendering and the viewer hand-off.

use anyhow::Result;
use clap::Parser;
use kmeans_plots::{viz, Args, MetricsTable};

fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();
    let output_path = args.output_path()?;

    // Step 1: load the metrics table
    let table = MetricsTable::from_csv(&args.input)?;
    println!("Data read successfully. Here's a preview:");
    print!("{}", table.preview(5));

    // Step 2: render the three metric charts and save the figure
    viz::render_metric_charts(&table, &output_path)?;
    println!("\n✓ Figure saved to: {}", output_path.display());

    // Step 3: hand the figure to the system image viewer
    viz::display_figure(&output_path)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_main_compiles() {
        // Basic compilation test
        assert!(true);
    }
}
