use std::{
    fs,
    io::{Error, ErrorKind, Result},
    path::Path,
};

use log::{Log, debug};

use crate::{
    record::{FileRecord, TimeFormat},
    stat::StatExtractor,
    walker::{ExtensionFilter, MaxDepth, traverse},
};

/// Everything that shapes one scan.
#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    pub max_depth: MaxDepth,
    pub extension: ExtensionFilter,
    pub format: TimeFormat,
}

/// Records gathered by one scan, in traversal order.
#[derive(Debug, Default)]
pub struct Collection {
    pub records: Vec<FileRecord>,
    /// Entries the walk found but that could not be stat'd.
    pub failed: usize,
}

impl Collection {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}

/// Walk `root` and stat every file found.
///
/// `root` must be an existing directory. Entries that fail to stat are
/// reported through `logger` and left out; an empty result is returned as
/// such and left for the caller to treat as "no files found".
pub fn collect(root: &Path, opts: &ScanOptions, logger: &dyn Log) -> Result<Collection> {
    let meta = fs::metadata(root)?;
    if !meta.is_dir() {
        return Err(Error::new(
            ErrorKind::NotADirectory,
            format!("not a directory: {}", root.display()),
        ));
    }

    let extractor = StatExtractor::new(opts.format, logger);
    let mut collection = Collection::default();

    for path in traverse(root, opts.max_depth, opts.extension.clone())? {
        match extractor.extract(&path) {
            Some(record) => collection.records.push(record),
            None => collection.failed += 1,
        }
    }

    debug!(
        "[collect] {} records from {:?} ({} failed)",
        collection.records.len(),
        root,
        collection.failed
    );

    Ok(collection)
}

#[cfg(test)]
#[path = "collector_tests.rs"]
mod tests;
