//! Train/test partitioning by collection identifier.
//!
//! Splitting by collection rather than by row index keeps every recording
//! session entirely on one side of the train/test boundary, which is the
//! leakage boundary for every fitted statistic downstream.

use crate::data::table::Table;
use std::collections::HashSet;
use std::fmt;

/// Errors raised while partitioning.
#[derive(Debug)]
pub enum SplitError {
    /// The same collection ids were assigned to both partitions.
    OverlappingIds(Vec<i64>),
}

impl fmt::Display for SplitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SplitError::OverlappingIds(ids) => {
                write!(f, "collection ids assigned to both train and test: {ids:?}")
            }
        }
    }
}

impl std::error::Error for SplitError {}

/// Partition a table into train and test tables by collection id.
///
/// Overlapping id sets fail fast instead of silently duplicating rows
/// across the leakage boundary. Rows whose collection id appears in
/// neither list are dropped. An id matching zero rows contributes
/// nothing; an empty partition is valid output, not a fault. The source
/// table is left untouched and the partitions are independent copies.
pub fn split_by_collection(
    table: &Table,
    train_ids: &[i64],
    test_ids: &[i64],
) -> Result<(Table, Table), SplitError> {
    let train_set: HashSet<i64> = train_ids.iter().copied().collect();
    let test_set: HashSet<i64> = test_ids.iter().copied().collect();

    let mut overlap: Vec<i64> = train_set.intersection(&test_set).copied().collect();
    if !overlap.is_empty() {
        overlap.sort_unstable();
        return Err(SplitError::OverlappingIds(overlap));
    }

    let mut train = Table::default();
    let mut test = Table::default();
    for row in table.rows() {
        if train_set.contains(&row.collection_id) {
            train.push(row.clone());
        } else if test_set.contains(&row.collection_id) {
            test.push(row.clone());
        }
    }

    Ok((train, test))
}
