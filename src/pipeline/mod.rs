//! Core pipeline stages: scaling, windowing, and class balancing.
//!
//! Stage order matters for leakage: the table is split by collection
//! first, the scaler is fitted on the training partition only, both
//! partitions are transformed with the frozen statistics, each partition
//! is windowed independently, and class weights come from the training
//! labels alone.

pub mod balance;
pub mod classifier;
pub mod scaler;
pub mod windowing;

// Re-export commonly used types
pub use balance::{class_weights, ClassWeights};
pub use classifier::SequenceClassifier;
pub use scaler::{FeatureStats, ScaleError, StandardScaler};
pub use windowing::{majority_label, Window, WindowError, WindowSequencer, WindowedDataset};

use crate::config::PipelineConfig;
use crate::data::features::add_magnitude;
use crate::data::split::{split_by_collection, SplitError};
use crate::data::table::Table;
use crate::report::ReportSink;
use std::fmt;

/// Everything the downstream learner needs, produced in one pass.
#[derive(Debug, Clone)]
pub struct PreparedData {
    /// Windowed training examples
    pub train: WindowedDataset,
    /// Windowed held-out examples
    pub test: WindowedDataset,
    /// Inverse-frequency weights from the training labels, absent when
    /// the training labels hold a single class
    pub weights: Option<ClassWeights>,
    /// The frozen scaler, for transforming any future partition; absent
    /// when the training partition held no rows
    pub scaler: Option<StandardScaler>,
}

impl PreparedData {
    fn empty() -> Self {
        Self {
            train: WindowedDataset::default(),
            test: WindowedDataset::default(),
            weights: None,
            scaler: None,
        }
    }
}

/// Errors raised by the preparation pipeline.
#[derive(Debug)]
pub enum PipelineError {
    /// Partitioning failed
    Split(SplitError),
    /// Fitting or applying the scaler failed
    Scale(ScaleError),
    /// Configuring or running the window sequencer failed
    Window(WindowError),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::Split(e) => write!(f, "split: {e}"),
            PipelineError::Scale(e) => write!(f, "scale: {e}"),
            PipelineError::Window(e) => write!(f, "window: {e}"),
        }
    }
}

impl std::error::Error for PipelineError {}

impl From<SplitError> for PipelineError {
    fn from(e: SplitError) -> Self {
        PipelineError::Split(e)
    }
}

impl From<ScaleError> for PipelineError {
    fn from(e: ScaleError) -> Self {
        PipelineError::Scale(e)
    }
}

impl From<WindowError> for PipelineError {
    fn from(e: WindowError) -> Self {
        PipelineError::Window(e)
    }
}

/// Run the full preparation pipeline over a loaded table.
///
/// Derives the magnitude feature, splits by collection, standardizes with
/// train-only statistics, windows each partition, and computes class
/// weights. An empty training partition short-circuits to an empty
/// [`PreparedData`] (reported through the sink) instead of fitting
/// statistics over zero rows; callers must treat an empty training
/// dataset as "no data produced" before invoking any learner.
pub fn prepare(
    table: &Table,
    config: &PipelineConfig,
    sink: &mut dyn ReportSink,
) -> Result<PreparedData, PipelineError> {
    let table = add_magnitude(table);

    let (train, test) = split_by_collection(&table, &config.train_ids, &config.test_ids)?;
    sink.partition_summary("train", &config.train_ids, train.len());
    sink.partition_summary("test", &config.test_ids, test.len());

    if train.is_empty() {
        sink.note("no training rows matched, nothing to prepare");
        return Ok(PreparedData::empty());
    }

    let scaler = StandardScaler::fit(&train, &config.feature_names)?;
    let train_scaled = scaler.transform(&train)?;
    let test_scaled = scaler.transform(&test)?;

    let sequencer = WindowSequencer::new(
        config.window_size,
        config.step,
        config.feature_names.clone(),
        config.target_column.clone(),
    )?;
    let train_windows = sequencer.sequence(&train_scaled)?;
    let test_windows = sequencer.sequence(&test_scaled)?;
    sink.dataset_summary("train", &train_windows);
    sink.dataset_summary("test", &test_windows);

    let weights = class_weights(&train_windows.labels());
    match &weights {
        Some(weights) => sink.class_weights(weights),
        None => sink.note("single class in training labels, no weights computed"),
    }

    if train_windows.is_empty() {
        sink.note("no training windows produced, check window_size against collection lengths");
    }

    Ok(PreparedData {
        train: train_windows,
        test: test_windows,
        weights,
        scaler: Some(scaler),
    })
}
