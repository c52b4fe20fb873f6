//! Demo: prepare windowed datasets from a small in-memory table and feed
//! them to a toy classifier through the contract trait.
//!
//! Run with: cargo run --example pipeline_demo

use tremor_seq::{
    prepare, ClassWeights, ConsoleReport, PipelineConfig, Record, SequenceClassifier, Table,
    WindowedDataset,
};

/// Toy learner: predicts the prevalence of tremor windows seen in training.
struct PrevalenceClassifier {
    positive_rate: f64,
}

impl SequenceClassifier for PrevalenceClassifier {
    type Error = String;

    fn fit(
        &mut self,
        dataset: &WindowedDataset,
        _class_weights: Option<&ClassWeights>,
    ) -> Result<(), Self::Error> {
        if dataset.is_empty() {
            return Err("empty training dataset".to_string());
        }
        let labels = dataset.labels();
        let positives = labels.iter().filter(|&&l| l == 1).count();
        self.positive_rate = positives as f64 / labels.len() as f64;
        Ok(())
    }

    fn predict(&self, _window: &[Vec<f64>]) -> f64 {
        self.positive_rate
    }
}

fn synthetic_collection(id: i64, rows: usize, tremor_from: usize) -> Vec<Record> {
    (0..rows)
        .map(|i| {
            let phase = i as f64 * 0.4;
            Record {
                collection_id: id,
                time_s: i as f64 / 10.0,
                roll: phase.sin() * 8.0,
                pitch: phase.cos() * 5.0,
                yaw: (phase * 0.5).sin() * 3.0,
                magnitude: 0.0,
                tremor: u8::from(i >= tremor_from),
            }
        })
        .collect()
}

fn main() {
    let mut rows = synthetic_collection(1, 200, 80);
    rows.extend(synthetic_collection(2, 120, 60));

    let config = PipelineConfig {
        window_size: 50,
        step: 10,
        feature_names: vec![
            "roll".to_string(),
            "pitch".to_string(),
            "yaw".to_string(),
            "magnitude".to_string(),
        ],
        target_column: "tremor".to_string(),
        train_ids: vec![1],
        test_ids: vec![2],
    };

    let prepared = match prepare(&Table::new(rows), &config, &mut ConsoleReport) {
        Ok(prepared) => prepared,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let mut model = PrevalenceClassifier { positive_rate: 0.0 };
    if let Err(e) = model.fit(&prepared.train, prepared.weights.as_ref()) {
        eprintln!("Error fitting classifier: {e}");
        std::process::exit(1);
    }

    println!();
    for (i, window) in prepared.test.windows.iter().enumerate() {
        let probability = model.predict(&window.features);
        println!(
            "test window {i}: p(tremor) = {probability:.3}, actual label = {}",
            window.label
        );
    }
}
