//! Sliding-window sequence extraction with majority-vote labels.
//!
//! Windows are cut from each collection independently so that no window
//! ever spans two recording sessions. Every `window_size` consecutive
//! rows become one example; the window's label is the majority value of
//! the binary flag across those rows.

use crate::data::table::Table;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One fixed-length slice of a collection's scaled feature rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Window {
    /// `window_size` rows, each holding the feature values in the order
    /// the sequencer was configured with
    pub features: Vec<Vec<f64>>,
    /// Majority value of the flag column across the window's rows
    pub label: u8,
}

/// An ordered set of windows: collection iteration order first, then
/// start-index order within each collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WindowedDataset {
    /// The windows, in extraction order
    pub windows: Vec<Window>,
}

impl WindowedDataset {
    /// Number of windows.
    pub fn len(&self) -> usize {
        self.windows.len()
    }

    /// Whether no windows were produced. Callers must check this before
    /// handing the dataset to a learner.
    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Labels index-aligned with the windows.
    pub fn labels(&self) -> Vec<u8> {
        self.windows.iter().map(|w| w.label).collect()
    }

    /// Tensor shape `[windows, window_size, features]`; zeros when empty.
    pub fn shape(&self) -> (usize, usize, usize) {
        match self.windows.first() {
            Some(first) => (
                self.windows.len(),
                first.features.len(),
                first.features.first().map_or(0, |row| row.len()),
            ),
            None => (0, 0, 0),
        }
    }
}

/// Errors raised while configuring or running the sequencer.
#[derive(Debug)]
pub enum WindowError {
    /// `window_size` must be a positive number of rows
    ZeroWindowSize,
    /// `step` must be a positive row advance
    ZeroStep,
    /// A configured feature name matches no column
    UnknownFeature(String),
    /// The configured flag column matches no column
    UnknownTarget(String),
}

impl fmt::Display for WindowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WindowError::ZeroWindowSize => write!(f, "window_size must be at least 1"),
            WindowError::ZeroStep => write!(f, "step must be at least 1"),
            WindowError::UnknownFeature(name) => write!(f, "unknown feature column: {name}"),
            WindowError::UnknownTarget(name) => write!(f, "unknown flag column: {name}"),
        }
    }
}

impl std::error::Error for WindowError {}

/// Cuts fixed-size, fixed-stride windows out of each collection.
#[derive(Debug, Clone)]
pub struct WindowSequencer {
    window_size: usize,
    step: usize,
    feature_names: Vec<String>,
    target_column: String,
}

impl WindowSequencer {
    /// Configure a sequencer. Both `window_size` and `step` must be
    /// positive.
    pub fn new(
        window_size: usize,
        step: usize,
        feature_names: Vec<String>,
        target_column: String,
    ) -> Result<Self, WindowError> {
        if window_size == 0 {
            return Err(WindowError::ZeroWindowSize);
        }
        if step == 0 {
            return Err(WindowError::ZeroStep);
        }
        Ok(Self {
            window_size,
            step,
            feature_names,
            target_column,
        })
    }

    /// Convert a (scaled) partition into a windowed dataset.
    ///
    /// Collections are visited in order of first appearance; within one
    /// collection, window starts advance by `step` while a full window
    /// still fits, so a collection of length `L >= W` yields exactly
    /// `(L - W) / S + 1` windows. A collection shorter than the window
    /// contributes nothing, and an empty partition yields an empty
    /// dataset; neither is an error. Windows that would run past the end
    /// of a collection are dropped, never zero-padded.
    pub fn sequence(&self, table: &Table) -> Result<WindowedDataset, WindowError> {
        let mut windows = Vec::new();

        for id in table.collection_ids() {
            let rows = table.collection(id);
            let mut start = 0;
            while start + self.window_size <= rows.len() {
                let slice = &rows[start..start + self.window_size];

                let mut features = Vec::with_capacity(self.window_size);
                let mut flags = Vec::with_capacity(self.window_size);
                for row in slice {
                    let mut values = Vec::with_capacity(self.feature_names.len());
                    for name in &self.feature_names {
                        values.push(
                            row.feature(name)
                                .ok_or_else(|| WindowError::UnknownFeature(name.clone()))?,
                        );
                    }
                    features.push(values);
                    flags.push(
                        row.flag(&self.target_column)
                            .ok_or_else(|| WindowError::UnknownTarget(self.target_column.clone()))?,
                    );
                }

                windows.push(Window {
                    features,
                    label: majority_label(&flags),
                });
                start += self.step;
            }
        }

        Ok(WindowedDataset { windows })
    }
}

/// Majority value of a sequence of binary flags.
///
/// An exact 50/50 split resolves to 0: the lower value wins on ties, so a
/// window straddling a tremor onset is labeled as still calm.
pub fn majority_label(flags: &[u8]) -> u8 {
    let ones = flags.iter().filter(|&&flag| flag != 0).count();
    if ones * 2 > flags.len() {
        1
    } else {
        0
    }
}
