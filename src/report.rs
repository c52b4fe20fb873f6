//! Reporting sinks for pipeline progress.
//!
//! The pipeline stages are pure transformations over tabular data;
//! anything shown to a human goes through a [`ReportSink`] so that
//! presentation stays strictly downstream and replaceable.

use crate::pipeline::balance::ClassWeights;
use crate::pipeline::windowing::WindowedDataset;

/// Receiver for pipeline progress and diagnostics.
pub trait ReportSink {
    /// A partition was produced from the source table.
    fn partition_summary(&mut self, name: &str, ids: &[i64], rows: usize);

    /// A windowed dataset was produced for one partition.
    fn dataset_summary(&mut self, name: &str, dataset: &WindowedDataset);

    /// Class weights were computed from the training labels.
    fn class_weights(&mut self, weights: &ClassWeights);

    /// Free-form diagnostic note.
    fn note(&mut self, message: &str);
}

/// Writes reports to stdout.
#[derive(Debug, Default)]
pub struct ConsoleReport;

impl ReportSink for ConsoleReport {
    fn partition_summary(&mut self, name: &str, ids: &[i64], rows: usize) {
        println!("{name} collections: {ids:?} ({rows} rows)");
    }

    fn dataset_summary(&mut self, name: &str, dataset: &WindowedDataset) {
        let (n, window_size, features) = dataset.shape();
        println!("{name} windows: {n} (shape [{n}, {window_size}, {features}])");
    }

    fn class_weights(&mut self, weights: &ClassWeights) {
        let pairs: Vec<String> = weights
            .iter()
            .map(|(label, weight)| format!("{label}: {weight:.4}"))
            .collect();
        println!("class weights: {{{}}}", pairs.join(", "));
    }

    fn note(&mut self, message: &str) {
        println!("{message}");
    }
}

/// Discards every report. Useful for tests and library embedding.
#[derive(Debug, Default)]
pub struct NullReport;

impl ReportSink for NullReport {
    fn partition_summary(&mut self, _name: &str, _ids: &[i64], _rows: usize) {}

    fn dataset_summary(&mut self, _name: &str, _dataset: &WindowedDataset) {}

    fn class_weights(&mut self, _weights: &ClassWeights) {}

    fn note(&mut self, _message: &str) {}
}
