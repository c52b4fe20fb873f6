//! CSV ingestion for recorded sensor sessions.
//!
//! The input is a flat delimited file with a header row. Column labels are
//! matched after whitespace trimming and mapped onto the normalized names
//! used everywhere else in the pipeline.

use crate::data::table::{Record, Table};
use std::fmt;
use std::path::{Path, PathBuf};

/// Column labels recognized in the input file, before normalization.
const COL_COLLECTION: &str = "ID_Coleta";
const COL_TIME: &str = "Time (s)";
const COL_ROLL: &str = "Roll (x)";
const COL_PITCH: &str = "Pitch (y)";
const COL_YAW: &str = "Yaw (z)";
const COL_TREMOR: &str = "Tremor";

/// Errors raised while loading the input file.
#[derive(Debug)]
pub enum LoadError {
    /// The input file does not exist
    NotFound(PathBuf),
    /// Any other I/O or CSV-level failure while reading
    Io(String),
    /// An expected column is absent after trimming header whitespace
    MissingColumn(String),
    /// A cell failed to parse as its expected type
    BadValue {
        row: usize,
        column: String,
        message: String,
    },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::NotFound(path) => write!(f, "input file not found: {}", path.display()),
            LoadError::Io(e) => write!(f, "read error: {e}"),
            LoadError::MissingColumn(name) => write!(f, "missing column: {name}"),
            LoadError::BadValue {
                row,
                column,
                message,
            } => write!(f, "bad value in column {column}, row {row}: {message}"),
        }
    }
}

impl std::error::Error for LoadError {}

/// Load a recorded session file into a [`Table`].
///
/// A missing file is reported as [`LoadError::NotFound`] so the caller can
/// decide whether to abort; an absent column fails fast naming the column.
/// The `magnitude` field is left at zero and is filled in later by
/// [`add_magnitude`](crate::data::features::add_magnitude).
pub fn load_csv(path: &Path) -> Result<Table, LoadError> {
    if !path.exists() {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| LoadError::Io(e.to_string()))?;

    let headers = reader
        .headers()
        .map_err(|e| LoadError::Io(e.to_string()))?
        .clone();
    let column = |label: &str| -> Result<usize, LoadError> {
        headers
            .iter()
            .position(|h| h == label)
            .ok_or_else(|| LoadError::MissingColumn(label.to_string()))
    };

    let col_collection = column(COL_COLLECTION)?;
    let col_time = column(COL_TIME)?;
    let col_roll = column(COL_ROLL)?;
    let col_pitch = column(COL_PITCH)?;
    let col_yaw = column(COL_YAW)?;
    let col_tremor = column(COL_TREMOR)?;

    let mut rows = Vec::new();
    for (index, result) in reader.records().enumerate() {
        // Header is row 1 in the file, so data rows start at 2.
        let row = index + 2;
        let record = result.map_err(|e| LoadError::Io(e.to_string()))?;

        rows.push(Record {
            collection_id: parse_int(
                cell(&record, col_collection, row, COL_COLLECTION)?,
                row,
                COL_COLLECTION,
            )?,
            time_s: parse_real(cell(&record, col_time, row, COL_TIME)?, row, COL_TIME)?,
            roll: parse_real(cell(&record, col_roll, row, COL_ROLL)?, row, COL_ROLL)?,
            pitch: parse_real(cell(&record, col_pitch, row, COL_PITCH)?, row, COL_PITCH)?,
            yaw: parse_real(cell(&record, col_yaw, row, COL_YAW)?, row, COL_YAW)?,
            magnitude: 0.0,
            tremor: parse_flag(cell(&record, col_tremor, row, COL_TREMOR)?, row, COL_TREMOR)?,
        });
    }

    Ok(Table::new(rows))
}

fn cell<'a>(
    record: &'a csv::StringRecord,
    col: usize,
    row: usize,
    column: &str,
) -> Result<&'a str, LoadError> {
    record.get(col).ok_or_else(|| LoadError::BadValue {
        row,
        column: column.to_string(),
        message: "field missing".to_string(),
    })
}

fn parse_int(raw: &str, row: usize, column: &str) -> Result<i64, LoadError> {
    raw.parse().map_err(|_| LoadError::BadValue {
        row,
        column: column.to_string(),
        message: format!("expected an integer, got {raw:?}"),
    })
}

fn parse_real(raw: &str, row: usize, column: &str) -> Result<f64, LoadError> {
    raw.parse().map_err(|_| LoadError::BadValue {
        row,
        column: column.to_string(),
        message: format!("expected a number, got {raw:?}"),
    })
}

fn parse_flag(raw: &str, row: usize, column: &str) -> Result<u8, LoadError> {
    match raw {
        "0" => Ok(0),
        "1" => Ok(1),
        other => Err(LoadError::BadValue {
            row,
            column: column.to_string(),
            message: format!("expected 0 or 1, got {other:?}"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write_temp(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(name);
        std::fs::write(&path, content).expect("write temp csv");
        path
    }

    #[test]
    fn test_load_trims_headers() {
        let path = write_temp(
            "tremor-seq-loader-trim.csv",
            "ID_Coleta, Roll (x) ,Pitch (y),Yaw (z),Time (s),Tremor\n\
             1,1.5,-0.5,2.0,0.0,0\n\
             1,2.5,0.5,1.0,0.1,1\n",
        );

        let table = load_csv(&path).expect("load");
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows()[0].collection_id, 1);
        assert_eq!(table.rows()[0].roll, 1.5);
        assert_eq!(table.rows()[1].tremor, 1);

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_missing_file_is_distinct() {
        let path = std::env::temp_dir().join("tremor-seq-does-not-exist.csv");
        match load_csv(&path) {
            Err(LoadError::NotFound(p)) => assert_eq!(p, path),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_column_named() {
        let path = write_temp(
            "tremor-seq-loader-nocol.csv",
            "ID_Coleta,Roll (x),Pitch (y),Yaw (z),Time (s)\n1,0,0,0,0\n",
        );

        match load_csv(&path) {
            Err(LoadError::MissingColumn(name)) => assert_eq!(name, "Tremor"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_bad_flag_value_rejected() {
        let path = write_temp(
            "tremor-seq-loader-badflag.csv",
            "ID_Coleta,Roll (x),Pitch (y),Yaw (z),Time (s),Tremor\n1,0,0,0,0,2\n",
        );

        match load_csv(&path) {
            Err(LoadError::BadValue { row, column, .. }) => {
                assert_eq!(row, 2);
                assert_eq!(column, "Tremor");
            }
            other => panic!("expected BadValue, got {other:?}"),
        }

        std::fs::remove_file(path).ok();
    }
}
