//! Metrics table loading and validation

use std::fmt;
use std::path::Path;

use anyhow::{bail, Context};
use serde::de::{self, Deserializer};
use serde::Deserialize;

/// Column headers the input file must provide.
pub const REQUIRED_COLUMNS: [&str; 4] = ["k", "Silhouette Score", "WCSS", "BCSS"];

/// The charted metrics, in the fixed left-to-right panel order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Silhouette,
    Wcss,
    Bcss,
}

impl Metric {
    /// Panel order of the composite figure
    pub const ALL: [Metric; 3] = [Metric::Silhouette, Metric::Wcss, Metric::Bcss];

    /// Column header, subplot title and y-axis label for this metric
    pub fn name(self) -> &'static str {
        match self {
            Metric::Silhouette => "Silhouette Score",
            Metric::Wcss => "WCSS",
            Metric::Bcss => "BCSS",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One row of the evaluation sweep: the metrics recorded for one candidate `k`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MetricsRow {
    /// Candidate cluster count
    #[serde(deserialize_with = "int_coerced")]
    pub k: i32,
    /// Mean silhouette coefficient over all points
    #[serde(rename = "Silhouette Score")]
    pub silhouette: f64,
    /// Within-cluster sum of squares
    #[serde(rename = "WCSS")]
    pub wcss: f64,
    /// Between-cluster sum of squares
    #[serde(rename = "BCSS")]
    pub bcss: f64,
}

/// Accept `k` cells written either as integers or as float literals; sweep
/// files sometimes carry `4.0` for a count of 4. Floats truncate toward zero.
fn int_coerced<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    let cell = raw.trim();
    if let Ok(value) = cell.parse::<i32>() {
        return Ok(value);
    }
    match cell.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value as i32),
        _ => Err(de::Error::custom(format!(
            "cannot convert {:?} to an integer cluster count",
            raw
        ))),
    }
}

/// Ordered metrics table, one `MetricsRow` per data line of the input file.
///
/// The table is read once, never mutated after load, and dropped at process
/// exit; repeated `k` values are kept as-is (deduplication only happens for
/// the x-axis ticks).
#[derive(Debug, Clone, Default)]
pub struct MetricsTable {
    pub rows: Vec<MetricsRow>,
}

impl MetricsTable {
    /// Read a comma-separated metrics file into a table.
    ///
    /// The header row must contain all of [`REQUIRED_COLUMNS`]; column order
    /// is irrelevant and extra columns are ignored. Fails with a message
    /// naming the path when the file is missing, and with the csv crate's
    /// record/line description for any malformed row.
    pub fn from_csv<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            bail!("File not found: {}", path.display());
        }

        let mut reader = csv::Reader::from_path(path)
            .with_context(|| format!("Failed to open {}", path.display()))?;

        let headers = reader
            .headers()
            .with_context(|| format!("Failed to read the header row of {}", path.display()))?
            .clone();
        if headers.is_empty() {
            bail!("No columns to parse from {}", path.display());
        }
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|header| header == column) {
                bail!("Missing required column {:?} in {}", column, path.display());
            }
        }

        let mut rows = Vec::new();
        for record in reader.deserialize() {
            let row: MetricsRow =
                record.with_context(|| format!("Failed to parse {}", path.display()))?;
            rows.push(row);
        }

        Ok(Self { rows })
    }

    /// Number of rows in the table
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// `k` values in row order, duplicates included
    pub fn ks(&self) -> Vec<i32> {
        self.rows.iter().map(|row| row.k).collect()
    }

    /// Distinct `k` values in first-appearance order; the x-axis tick set
    pub fn distinct_ks(&self) -> Vec<i32> {
        let mut distinct: Vec<i32> = Vec::new();
        for row in &self.rows {
            if !distinct.contains(&row.k) {
                distinct.push(row.k);
            }
        }
        distinct
    }

    /// One metric's column in row order
    pub fn metric_values(&self, metric: Metric) -> Vec<f64> {
        self.rows
            .iter()
            .map(|row| match metric {
                Metric::Silhouette => row.silhouette,
                Metric::Wcss => row.wcss,
                Metric::Bcss => row.bcss,
            })
            .collect()
    }

    /// Aligned text table of the first `n` rows, for console diagnostics
    pub fn preview(&self, n: usize) -> String {
        let mut out = String::new();
        out.push_str("     k | Silhouette Score |         WCSS |         BCSS\n");
        out.push_str("  -----|------------------|--------------|-------------\n");
        for row in self.rows.iter().take(n) {
            out.push_str(&format!(
                "  {:>4} | {:>16.6} | {:>12.4} | {:>12.4}\n",
                row.k, row.silhouette, row.wcss, row.bcss
            ));
        }
        out
    }
}
