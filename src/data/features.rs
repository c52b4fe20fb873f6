//! Derived features appended after loading.

use crate::data::table::Table;

/// Fill in the `magnitude` column: the Euclidean norm of the three axes.
///
/// Stateless; recomputes from the axis columns every time, so reapplying
/// it yields the same table. Safe on any partition, train or test.
pub fn add_magnitude(table: &Table) -> Table {
    let mut out = table.clone();
    for row in out.rows_mut() {
        row.magnitude = (row.roll * row.roll + row.pitch * row.pitch + row.yaw * row.yaw).sqrt();
    }
    out
}
