//! Contract for the downstream sequence classifier.
//!
//! The learner itself lives outside this crate. The pipeline hands it the
//! windowed datasets of [`super::windowing`] and the optional weights of
//! [`super::balance`]; it hands back per-window probabilities that an
//! external thresholding step turns into decisions.

use crate::pipeline::balance::ClassWeights;
use crate::pipeline::windowing::WindowedDataset;

/// A binary sequence classifier consuming `[window_size, features]`
/// tensors.
pub trait SequenceClassifier {
    /// Learner-specific failure type.
    type Error;

    /// Fit on a windowed dataset, optionally with per-class loss weights.
    fn fit(
        &mut self,
        dataset: &WindowedDataset,
        class_weights: Option<&ClassWeights>,
    ) -> Result<(), Self::Error>;

    /// Probability that one window shows tremor.
    fn predict(&self, window: &[Vec<f64>]) -> f64;
}
