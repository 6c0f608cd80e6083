use std::{
    fs::File,
    io::Write,
    path::Path,
};

use anyhow::{Context, Result};
use csv::WriterBuilder;
use log::debug;
use timeliner_fs::{FileRecord, TimeField};

pub const DELIMITER: u8 = b'|';

/// Header row of every timeline, in column order.
pub const TIMELINE_HEADERS: [&str; 5] = [
    "Path",
    "Size",
    TimeField::Created.label(),
    TimeField::Modified.label(),
    TimeField::Accessed.label(),
];

fn record_fields(record: &FileRecord) -> [String; 5] {
    [
        record.path.to_string_lossy().into_owned(),
        record.size.to_string(),
        record.times.display(TimeField::Created),
        record.times.display(TimeField::Modified),
        record.times.display(TimeField::Accessed),
    ]
}

/// Write the header and one row per record to `out`.
///
/// Fields holding the delimiter, a quote or a line break are quoted.
/// Returns the number of data rows written.
pub fn write_records<W: Write>(out: W, records: &[FileRecord]) -> Result<usize> {
    let mut wtr = WriterBuilder::new().delimiter(DELIMITER).from_writer(out);

    wtr.write_record(TIMELINE_HEADERS)
        .context("failed to write timeline header")?;

    let mut count = 0;
    for record in records {
        wtr.write_record(record_fields(record))
            .with_context(|| format!("failed to write row for {}", record.path.display()))?;
        count += 1;
    }

    wtr.flush().context("failed to flush timeline")?;

    Ok(count)
}

/// Create (or truncate) `path` and write the timeline into it.
///
/// The caller decides beforehand whether replacing an existing file is
/// allowed.
pub fn write_timeline(path: &Path, records: &[FileRecord]) -> Result<usize> {
    let file = File::create(path)
        .with_context(|| format!("failed to create timeline at {}", path.display()))?;

    let count = write_records(file, records)
        .with_context(|| format!("failed to write timeline to {}", path.display()))?;

    debug!("[writer] {count} rows written to {:?}", path);

    Ok(count)
}

#[cfg(test)]
#[path = "writer_tests.rs"]
mod tests;
