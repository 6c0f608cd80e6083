use std::cmp::Ordering;

use timeliner_fs::{FileRecord, TimeField, Timestamps};

/// Compare two records on one timestamp field.
///
/// Epoch values compare numerically with [`f64::total_cmp`], formatted
/// values compare as strings (the fixed layout sorts chronologically). A
/// run never mixes the two; if it did, epoch records order first.
pub fn compare_by(field: TimeField) -> impl Fn(&FileRecord, &FileRecord) -> Ordering {
    move |a, b| match (&a.times, &b.times) {
        (Timestamps::Epoch(x), Timestamps::Epoch(y)) => x.get(field).total_cmp(y.get(field)),
        (Timestamps::Formatted(x), Timestamps::Formatted(y)) => x.get(field).cmp(y.get(field)),
        (Timestamps::Epoch(_), Timestamps::Formatted(_)) => Ordering::Less,
        (Timestamps::Formatted(_), Timestamps::Epoch(_)) => Ordering::Greater,
    }
}

/// Order records ascending on `field`. Stable: records with equal keys keep
/// their incoming (traversal) order.
pub fn sort_records(mut records: Vec<FileRecord>, field: TimeField) -> Vec<FileRecord> {
    records.sort_by(compare_by(field));
    records
}

#[cfg(test)]
#[path = "sort_tests.rs"]
mod tests;
