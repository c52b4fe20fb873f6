//! Inverse-frequency class weights for imbalanced training labels.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-class weights for the external learner's weighted loss.
///
/// Each observed label value maps to `total / (classes * count)`, so the
/// product of weight and count is the same for every class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassWeights {
    weights: BTreeMap<u8, f64>,
}

impl ClassWeights {
    /// Weight for one label value, if it was observed.
    pub fn get(&self, label: u8) -> Option<f64> {
        self.weights.get(&label).copied()
    }

    /// Iterate over `(label, weight)` pairs in label order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, f64)> + '_ {
        self.weights.iter().map(|(&label, &weight)| (label, weight))
    }

    /// Number of observed classes.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Whether no classes were observed.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

/// Compute balanced class weights from the training labels.
///
/// Returns `None` when fewer than two distinct label values are present:
/// balancing a single class is undefined, and signalling "no weights" beats
/// dividing by a synthetic zero count.
pub fn class_weights(labels: &[u8]) -> Option<ClassWeights> {
    let mut counts: BTreeMap<u8, usize> = BTreeMap::new();
    for &label in labels {
        *counts.entry(label).or_insert(0) += 1;
    }

    if counts.len() < 2 {
        return None;
    }

    let total = labels.len() as f64;
    let classes = counts.len() as f64;
    let weights = counts
        .into_iter()
        .map(|(label, count)| (label, total / (classes * count as f64)))
        .collect();

    Some(ClassWeights { weights })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inverse_frequency_weights() {
        // 900 of class 0 and 100 of class 1: N / (2 * count).
        let mut labels = vec![0u8; 900];
        labels.extend(vec![1u8; 100]);

        let weights = class_weights(&labels).expect("weights");
        assert!((weights.get(0).unwrap() - 1000.0 / 1800.0).abs() < 1e-9);
        assert!((weights.get(1).unwrap() - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_weight_times_count_is_equal_across_classes() {
        let mut labels = vec![0u8; 30];
        labels.extend(vec![1u8; 70]);

        let weights = class_weights(&labels).expect("weights");
        let product_0 = weights.get(0).unwrap() * 30.0;
        let product_1 = weights.get(1).unwrap() * 70.0;
        assert!((product_0 - product_1).abs() < 1e-9);
    }

    #[test]
    fn test_single_class_yields_no_weights() {
        assert!(class_weights(&[0, 0, 0]).is_none());
        assert!(class_weights(&[1]).is_none());
    }

    #[test]
    fn test_empty_labels_yield_no_weights() {
        assert!(class_weights(&[]).is_none());
    }
}
