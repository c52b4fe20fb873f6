//! Tabular model for recorded sensor sessions.
//!
//! A [`Table`] is an ordered sequence of [`Record`]s, one per sampled
//! instant. Rows of the same collection keep their original order; nothing
//! requires time ordering across different collections.

use serde::{Deserialize, Serialize};

/// One sampled instant of orientation data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Identifier of the recording session this row belongs to
    pub collection_id: i64,
    /// Seconds since the start of the session
    pub time_s: f64,
    /// Roll angle in degrees
    pub roll: f64,
    /// Pitch angle in degrees
    pub pitch: f64,
    /// Yaw angle in degrees
    pub yaw: f64,
    /// Euclidean norm of the three axes, filled in by
    /// [`add_magnitude`](crate::data::features::add_magnitude)
    pub magnitude: f64,
    /// Ground-truth tremor flag (0 or 1)
    pub tremor: u8,
}

impl Record {
    /// Read a feature column by its normalized name.
    pub fn feature(&self, name: &str) -> Option<f64> {
        match name {
            "time_s" => Some(self.time_s),
            "roll" => Some(self.roll),
            "pitch" => Some(self.pitch),
            "yaw" => Some(self.yaw),
            "magnitude" => Some(self.magnitude),
            _ => None,
        }
    }

    /// Write a feature column by its normalized name.
    ///
    /// Returns `false` when the name matches no feature column.
    pub fn set_feature(&mut self, name: &str, value: f64) -> bool {
        match name {
            "time_s" => self.time_s = value,
            "roll" => self.roll = value,
            "pitch" => self.pitch = value,
            "yaw" => self.yaw = value,
            "magnitude" => self.magnitude = value,
            _ => return false,
        }
        true
    }

    /// Read a binary flag column by its normalized name.
    pub fn flag(&self, name: &str) -> Option<u8> {
        match name {
            "tremor" => Some(self.tremor),
            _ => None,
        }
    }
}

/// An ordered sequence of records, possibly spanning several collections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    rows: Vec<Record>,
}

impl Table {
    /// Create a table from an ordered sequence of rows.
    pub fn new(rows: Vec<Record>) -> Self {
        Self { rows }
    }

    /// All rows in order.
    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    /// Mutable access to the rows, for in-place column rewrites.
    pub fn rows_mut(&mut self) -> &mut [Record] {
        &mut self.rows
    }

    /// Append a row at the end.
    pub fn push(&mut self, record: Record) {
        self.rows.push(record);
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table holds no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distinct collection ids in order of first appearance.
    pub fn collection_ids(&self) -> Vec<i64> {
        let mut ids = Vec::new();
        for row in &self.rows {
            if !ids.contains(&row.collection_id) {
                ids.push(row.collection_id);
            }
        }
        ids
    }

    /// All rows of one collection, preserving their original order.
    pub fn collection(&self, id: i64) -> Vec<&Record> {
        self.rows.iter().filter(|r| r.collection_id == id).collect()
    }
}
