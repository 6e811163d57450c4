//! Command-line interface definitions and output-path resolution

use std::path::{Path, PathBuf};

use clap::Parser;

/// Directory the rendered figure is written into, relative to the working
/// directory. The pipeline expects it to exist already and never creates it.
pub const OUTPUT_DIR: &str = "result_data/kmeans/plots";

/// Chart K-Means evaluation metrics (Silhouette Score, WCSS, BCSS) against k
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the CSV metrics file, one row per candidate cluster count
    pub input: PathBuf,
}

impl Args {
    /// Resolve where the figure will be saved: `OUTPUT_DIR/<input stem>.png`.
    ///
    /// The stem is the input's base name with exactly its extension removed,
    /// so internal dots survive (`run.final.csv` becomes `run.final.png`).
    pub fn output_path(&self) -> crate::Result<PathBuf> {
        let stem = output_stem(&self.input)?;
        Ok(Path::new(OUTPUT_DIR).join(format!("{}.png", stem)))
    }
}

fn output_stem(input: &Path) -> crate::Result<&str> {
    input
        .file_stem()
        .and_then(|stem| stem.to_str())
        .ok_or_else(|| anyhow::anyhow!("Cannot derive an output name from {}", input.display()))
}
