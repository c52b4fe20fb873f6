//! Per-feature standardization with statistics frozen from training data.
//!
//! The scaler is fitted exactly once, on the training partition only, and
//! then applied read-only to any partition. Test data must never re-fit:
//! the frozen statistics are the leakage boundary for this stage.

use crate::data::table::Table;
use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;
use std::fmt;

/// Frozen statistics for one feature column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureStats {
    /// Normalized feature name
    pub name: String,
    /// Training-partition mean
    pub mean: f64,
    /// Divisor applied after centering; 1.0 for a constant column
    pub scale: f64,
}

/// Errors raised while fitting or applying the scaler.
#[derive(Debug)]
pub enum ScaleError {
    /// A configured feature name matches no column
    UnknownFeature(String),
    /// Statistics over zero rows are undefined
    EmptyPartition,
}

impl fmt::Display for ScaleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScaleError::UnknownFeature(name) => write!(f, "unknown feature column: {name}"),
            ScaleError::EmptyPartition => write!(f, "cannot fit a scaler on an empty partition"),
        }
    }
}

impl std::error::Error for ScaleError {}

/// Mean/variance normalizer fitted once on the training partition.
///
/// `transform` uses only the frozen statistics and never recomputes them
/// from its input. Fit once and transform each partition exactly once:
/// a second transform would z-score already z-scored data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    stats: Vec<FeatureStats>,
}

impl StandardScaler {
    /// Compute per-feature mean and standard deviation from `train` only.
    ///
    /// The standard deviation uses the sample (n-1) denominator. A column
    /// with zero variance (or a single row) is treated as constant: it is
    /// centered but left unscaled, so no NaN or Inf can escape this stage.
    pub fn fit(train: &Table, feature_names: &[String]) -> Result<Self, ScaleError> {
        if train.is_empty() {
            return Err(ScaleError::EmptyPartition);
        }

        let mut stats = Vec::with_capacity(feature_names.len());
        for name in feature_names {
            let mut values = Vec::with_capacity(train.len());
            for row in train.rows() {
                values.push(
                    row.feature(name)
                        .ok_or_else(|| ScaleError::UnknownFeature(name.clone()))?,
                );
            }

            let mean = values.iter().mean();
            let std_dev = values.iter().std_dev();
            let scale = if std_dev.is_finite() && std_dev > 0.0 {
                std_dev
            } else {
                1.0
            };
            stats.push(FeatureStats {
                name: name.clone(),
                mean,
                scale,
            });
        }

        Ok(Self { stats })
    }

    /// The frozen per-feature statistics, in fit order.
    pub fn stats(&self) -> &[FeatureStats] {
        &self.stats
    }

    /// Rewrite each fitted feature column as `(value - mean) / scale`.
    ///
    /// Applies only the frozen statistics; the input partition's own
    /// distribution is never consulted. An empty table passes through
    /// as an empty table.
    pub fn transform(&self, table: &Table) -> Result<Table, ScaleError> {
        let mut out = table.clone();
        for row in out.rows_mut() {
            for stat in &self.stats {
                let value = row
                    .feature(&stat.name)
                    .ok_or_else(|| ScaleError::UnknownFeature(stat.name.clone()))?;
                row.set_feature(&stat.name, (value - stat.mean) / stat.scale);
            }
        }
        Ok(out)
    }
}
