//! End-to-end tests for the preparation pipeline, from CSV to windows.

use std::path::PathBuf;
use tremor_seq::{prepare, LoadError, NullReport, PipelineConfig, Record, Table};

fn two_collection_config() -> PipelineConfig {
    PipelineConfig {
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
    }
}

/// Two collections (120 and 80 rows) with a short tremor burst in the
/// first, written out as CSV and pulled through the whole pipeline.
fn write_scenario_csv(name: &str) -> PathBuf {
    let mut content =
        String::from("ID_Coleta,Roll (x),Pitch (y),Yaw (z),Time (s),Tremor\n");
    for i in 0..120 {
        let tremor = u8::from((60..70).contains(&i));
        content.push_str(&format!(
            "1,{:.3},{:.3},{:.3},{:.1},{tremor}\n",
            (i as f64 * 0.37).sin() * 12.0,
            (i as f64 * 0.21).cos() * 7.0,
            (i % 11) as f64,
            i as f64 / 10.0,
        ));
    }
    for i in 0..80 {
        content.push_str(&format!(
            "2,{:.3},{:.3},{:.3},{:.1},0\n",
            (i as f64 * 0.51).sin() * 9.0,
            (i % 7) as f64,
            (i % 5) as f64,
            i as f64 / 10.0,
        ));
    }

    let path = std::env::temp_dir().join(name);
    std::fs::write(&path, content).expect("write scenario csv");
    path
}

#[test]
fn test_end_to_end_window_counts_and_labels() {
    let path = write_scenario_csv("tremor-seq-e2e.csv");
    let table = tremor_seq::load_csv(&path).expect("load");
    assert_eq!(table.len(), 200);

    let prepared = prepare(&table, &two_collection_config(), &mut NullReport).expect("prepare");

    // (120 - 50) / 10 + 1 = 8 train windows, (80 - 50) / 10 + 1 = 4 test windows.
    assert_eq!(prepared.train.len(), 8);
    assert_eq!(prepared.test.len(), 4);
    assert_eq!(prepared.train.shape(), (8, 50, 4));

    // A 10-row burst can never reach majority inside a 50-row window, so
    // every label stays 0 - and with one class, no weights are computed.
    assert!(prepared.train.labels().iter().all(|&l| l == 0));
    assert!(prepared.test.labels().iter().all(|&l| l == 0));
    assert!(prepared.weights.is_none());
    assert!(prepared.scaler.is_some());

    std::fs::remove_file(path).ok();
}

#[test]
fn test_sustained_tremor_flips_window_labels() {
    // Tremor over rows [40, 110): a window is labeled 1 exactly when more
    // than 25 of its 50 rows fall inside the burst.
    let rows: Vec<Record> = (0..120)
        .map(|i| Record {
            collection_id: 1,
            time_s: i as f64 / 10.0,
            roll: (i % 13) as f64,
            pitch: (i % 7) as f64,
            yaw: (i % 3) as f64,
            magnitude: 0.0,
            tremor: u8::from((40..110).contains(&i)),
        })
        .collect();

    let mut config = two_collection_config();
    config.test_ids = Vec::new();

    let prepared = prepare(&Table::new(rows), &config, &mut NullReport).expect("prepare");
    assert_eq!(prepared.train.labels(), vec![0, 0, 1, 1, 1, 1, 1, 1]);

    let weights = prepared.weights.expect("both classes present");
    // 2 windows of class 0, 6 of class 1: 8/(2*2) and 8/(2*6).
    assert!((weights.get(0).unwrap() - 2.0).abs() < 1e-9);
    assert!((weights.get(1).unwrap() - 8.0 / 12.0).abs() < 1e-9);
}

#[test]
fn test_missing_input_reports_not_found() {
    let path = std::env::temp_dir().join("tremor-seq-e2e-missing.csv");
    match tremor_seq::load_csv(&path) {
        Err(LoadError::NotFound(_)) => {}
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn test_overlapping_split_is_refused_end_to_end() {
    let path = write_scenario_csv("tremor-seq-e2e-overlap.csv");
    let table = tremor_seq::load_csv(&path).expect("load");

    let mut config = two_collection_config();
    config.train_ids = vec![1, 2];

    assert!(prepare(&table, &config, &mut NullReport).is_err());

    std::fs::remove_file(path).ok();
}

#[test]
fn test_train_statistics_freeze_before_test_transform() {
    // Train and test collections with very different ranges: after the
    // pipeline, train windows are standardized while test windows keep the
    // offset induced by the frozen train statistics.
    let mut rows: Vec<Record> = Vec::new();
    for i in 0..60 {
        rows.push(Record {
            collection_id: 1,
            time_s: i as f64 / 10.0,
            roll: (i % 10) as f64,
            pitch: 1.0,
            yaw: 1.0,
            magnitude: 0.0,
            tremor: 0,
        });
    }
    for i in 0..60 {
        rows.push(Record {
            collection_id: 2,
            time_s: i as f64 / 10.0,
            roll: 100.0 + (i % 10) as f64,
            pitch: 1.0,
            yaw: 1.0,
            magnitude: 0.0,
            tremor: 0,
        });
    }

    let mut config = two_collection_config();
    config.feature_names = vec!["roll".to_string()];

    let prepared = prepare(&Table::new(rows), &config, &mut NullReport).expect("prepare");

    let train_values: Vec<f64> = prepared
        .train
        .windows
        .iter()
        .flat_map(|w| w.features.iter().map(|row| row[0]))
        .collect();
    let test_values: Vec<f64> = prepared
        .test
        .windows
        .iter()
        .flat_map(|w| w.features.iter().map(|row| row[0]))
        .collect();

    let train_max = train_values.iter().cloned().fold(f64::MIN, f64::max);
    let test_min = test_values.iter().cloned().fold(f64::MAX, f64::min);

    // Standardized train values stay small; the test collection, scaled
    // with the frozen train statistics, sits far above them.
    assert!(train_max < 3.0);
    assert!(test_min > 10.0);
}
