use std::{fmt, path::PathBuf};

/// Which timestamp of a record sorting and charting operate on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TimeField {
    Created,
    Modified,
    #[default]
    Accessed,
}

impl TimeField {
    /// Column order of the timestamps in every timeline.
    pub const ALL: [TimeField; 3] = [
        TimeField::Created,
        TimeField::Modified,
        TimeField::Accessed,
    ];

    /// Column label, shared by the timeline header and chart axis.
    pub const fn label(self) -> &'static str {
        match self {
            TimeField::Created => "Created Time",
            TimeField::Modified => "Modified Time",
            TimeField::Accessed => "Access Time",
        }
    }
}

impl fmt::Display for TimeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Representation chosen once per run for every timestamp.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TimeFormat {
    /// Fractional seconds since the Unix epoch.
    #[default]
    Epoch,
    /// `YYYY-MM-DD HH:MM:SS` in UTC.
    HumanReadable,
}

impl TimeFormat {
    pub fn from_human_readable(human_readable: bool) -> Self {
        if human_readable {
            TimeFormat::HumanReadable
        } else {
            TimeFormat::Epoch
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimeTriple<T> {
    pub created: T,
    pub modified: T,
    pub accessed: T,
}

impl<T> TimeTriple<T> {
    pub fn get(&self, field: TimeField) -> &T {
        match field {
            TimeField::Created => &self.created,
            TimeField::Modified => &self.modified,
            TimeField::Accessed => &self.accessed,
        }
    }

    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> TimeTriple<U> {
        TimeTriple {
            created: f(self.created),
            modified: f(self.modified),
            accessed: f(self.accessed),
        }
    }
}

/// All three timestamps of a record, sharing one representation.
#[derive(Debug, Clone, PartialEq)]
pub enum Timestamps {
    Epoch(TimeTriple<f64>),
    Formatted(TimeTriple<String>),
}

impl Timestamps {
    pub fn format(&self) -> TimeFormat {
        match self {
            Timestamps::Epoch(_) => TimeFormat::Epoch,
            Timestamps::Formatted(_) => TimeFormat::HumanReadable,
        }
    }

    /// Textual value of one field, as written to the timeline.
    pub fn display(&self, field: TimeField) -> String {
        match self {
            Timestamps::Epoch(t) => t.get(field).to_string(),
            Timestamps::Formatted(t) => t.get(field).clone(),
        }
    }
}

/// Metadata of one file, taken from a single stat snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct FileRecord {
    pub path: PathBuf,
    /// Size in bytes
    pub size: u64,
    pub times: Timestamps,
}
