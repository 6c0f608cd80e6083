use std::{
    fs::{self, Metadata},
    io,
    path::Path,
    time::{SystemTime, UNIX_EPOCH},
};

use chrono::{DateTime, Utc};
use log::{Level, Log, Metadata as LogMetadata, Record};

use crate::{
    config::HUMAN_TIME_FORMAT,
    record::{FileRecord, TimeFormat, TimeTriple, Timestamps},
};

/// Turns paths into [`FileRecord`]s, one stat snapshot each.
///
/// Failures never escape: they are reported to the injected logger and the
/// entry is skipped, so one unreadable file cannot abort a scan.
pub struct StatExtractor<'a> {
    format: TimeFormat,
    logger: &'a dyn Log,
}

impl<'a> StatExtractor<'a> {
    pub fn new(format: TimeFormat, logger: &'a dyn Log) -> Self {
        Self { format, logger }
    }

    pub fn format(&self) -> TimeFormat {
        self.format
    }

    /// Stat `path` without following symlinks.
    ///
    /// Returns `None` when the metadata cannot be read.
    pub fn extract(&self, path: &Path) -> Option<FileRecord> {
        match self.try_extract(path) {
            Ok(record) => Some(record),
            Err(e) => {
                self.report_failure(path, &e);
                None
            }
        }
    }

    fn try_extract(&self, path: &Path) -> io::Result<FileRecord> {
        let metadata = fs::symlink_metadata(path)?;
        let raw = read_times(&metadata)?;

        let times = match self.format {
            TimeFormat::Epoch => Timestamps::Epoch(raw.map(to_epoch_secs)),
            TimeFormat::HumanReadable => Timestamps::Formatted(raw.map(format_utc)),
        };

        Ok(FileRecord {
            path: path.to_path_buf(),
            size: metadata.len(),
            times,
        })
    }

    fn report_failure(&self, path: &Path, err: &io::Error) {
        let metadata = LogMetadata::builder()
            .level(Level::Error)
            .target(module_path!())
            .build();

        if self.logger.enabled(&metadata) {
            self.logger.log(
                &Record::builder()
                    .metadata(metadata)
                    .args(format_args!(
                        "Error getting stat information from {}: {err}",
                        path.display()
                    ))
                    .module_path(Some(module_path!()))
                    .file(Some(file!()))
                    .line(Some(line!()))
                    .build(),
            );
        }
    }
}

fn read_times(metadata: &Metadata) -> io::Result<TimeTriple<SystemTime>> {
    Ok(TimeTriple {
        created: created_time(metadata)?,
        modified: metadata.modified()?,
        accessed: metadata.accessed()?,
    })
}

/// Birth time where the platform records one, otherwise the change time.
fn created_time(metadata: &Metadata) -> io::Result<SystemTime> {
    match metadata.created() {
        Ok(t) => Ok(t),
        Err(_) => change_time(metadata),
    }
}

#[cfg(unix)]
fn change_time(metadata: &Metadata) -> io::Result<SystemTime> {
    use std::os::unix::fs::MetadataExt;
    use std::time::Duration;

    let secs = metadata.ctime();
    let nanos = metadata.ctime_nsec().clamp(0, 999_999_999) as u64;

    let whole = if secs >= 0 {
        UNIX_EPOCH.checked_add(Duration::from_secs(secs as u64))
    } else {
        UNIX_EPOCH.checked_sub(Duration::from_secs(secs.unsigned_abs()))
    };

    whole
        .and_then(|t| t.checked_add(Duration::from_nanos(nanos)))
        .ok_or_else(|| io::Error::other("change time out of range"))
}

#[cfg(not(unix))]
fn change_time(metadata: &Metadata) -> io::Result<SystemTime> {
    metadata.modified()
}

/// Seconds since the epoch, negative before it.
pub(crate) fn to_epoch_secs(t: SystemTime) -> f64 {
    match t.duration_since(UNIX_EPOCH) {
        Ok(d) => d.as_secs_f64(),
        Err(e) => -e.duration().as_secs_f64(),
    }
}

pub(crate) fn format_utc(t: SystemTime) -> String {
    DateTime::<Utc>::from(t).format(HUMAN_TIME_FORMAT).to_string()
}

#[cfg(test)]
#[path = "stat_tests.rs"]
mod tests;
