//! Tremor Sequence Pipeline - windowed sequence labeling for tremor research.
//!
//! This library turns recorded, flag-annotated orientation data into
//! fixed-size overlapping windows with majority-vote labels, ready for a
//! binary sequence classifier, while keeping every fitted statistic on
//! the training side of the train/test boundary.
//!
//! # Leakage discipline
//!
//! - **Split by collection**: a recording session is never divided
//!   between train and test
//! - **Fit on train only**: scaler statistics come from the training
//!   partition and are frozen before touching test data
//! - **Window per collection**: no window ever spans two sessions
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                   Tremor Sequence Pipeline                   │
//! ├──────────────────────────────────────────────────────────────┤
//! │  ┌────────┐   ┌───────────┐   ┌─────────────┐               │
//! │  │ Loader │──▶│ Magnitude │──▶│   Splitter  │               │
//! │  │ (CSV)  │   │ (derive)  │   │ (by coll.)  │               │
//! │  └────────┘   └───────────┘   └──────┬──────┘               │
//! │                                train │ test                  │
//! │                               ┌──────▼──────┐                │
//! │                               │   Scaler    │ fit on train   │
//! │                               │  (frozen)   │ apply to both  │
//! │                               └──────┬──────┘                │
//! │                 ┌─────────────┐      │      ┌─────────────┐  │
//! │                 │   Windows   │◀─────┴─────▶│   Windows   │  │
//! │                 │   (train)   │             │   (test)    │  │
//! │                 └──────┬──────┘             └─────────────┘  │
//! │                        ▼                                     │
//! │                 ┌─────────────┐                              │
//! │                 │   Class     │ train labels only            │
//! │                 │   weights   │                              │
//! │                 └─────────────┘                              │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use tremor_seq::{prepare, NullReport, PipelineConfig, Record, Table};
//!
//! let rows: Vec<Record> = (0..120)
//!     .map(|i| Record {
//!         collection_id: 1,
//!         time_s: i as f64 / 10.0,
//!         roll: (i % 13) as f64,
//!         pitch: (i % 5) as f64,
//!         yaw: 1.0,
//!         magnitude: 0.0,
//!         tremor: 0,
//!     })
//!     .collect();
//!
//! let mut config = PipelineConfig::default();
//! config.train_ids = vec![1];
//! config.test_ids = Vec::new();
//!
//! let prepared = prepare(&Table::new(rows), &config, &mut NullReport).unwrap();
//! assert_eq!(prepared.train.len(), 8); // (120 - 50) / 10 + 1
//! ```

pub mod config;
pub mod data;
pub mod pipeline;
pub mod report;

// Re-export key types at crate root for convenience
pub use config::{parse_id_list, ConfigError, PipelineConfig};
pub use data::{
    add_magnitude, load_csv, split_by_collection, LoadError, Record, SplitError, Table,
};
pub use pipeline::{
    class_weights, majority_label, prepare, ClassWeights, FeatureStats, PipelineError,
    PreparedData, ScaleError, SequenceClassifier, StandardScaler, Window, WindowError,
    WindowSequencer, WindowedDataset,
};
pub use report::{ConsoleReport, NullReport, ReportSink};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
