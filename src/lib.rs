//! kmeans-plots: a Rust CLI application for charting K-Means evaluation metrics
//!
//! This library reads a CSV sweep of clustering evaluation metrics (one row per
//! candidate cluster count `k`) and renders Silhouette Score, WCSS and BCSS as
//! side-by-side line charts in a single PNG figure.

pub mod cli;
pub mod data;
pub mod viz;

// Re-export public items for easier access
pub use cli::{Args, OUTPUT_DIR};
pub use data::{Metric, MetricsRow, MetricsTable};
pub use viz::{display_figure, render_metric_charts};

/// Common result type used throughout the application
pub type Result<T> = anyhow::Result<T>;
