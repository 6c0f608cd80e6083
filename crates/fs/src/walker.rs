use std::{
    ffi::OsStr,
    fmt,
    fs::{self, DirEntry, ReadDir, read_dir},
    io::Result,
    path::{Path, PathBuf},
};

use log::{debug, warn};

/// How far below the root the walk may descend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MaxDepth {
    #[default]
    Unlimited,
    /// `Limited(0)` lists only the direct children of the root.
    Limited(usize),
}

impl MaxDepth {
    /// CLI value meaning "no limit".
    pub const UNLIMITED_ARG: i64 = -1;

    /// Depth budget left inside a subdirectory, or `None` when the
    /// subdirectory must not be entered.
    pub fn descend(self) -> Option<MaxDepth> {
        match self {
            MaxDepth::Unlimited => Some(MaxDepth::Unlimited),
            MaxDepth::Limited(0) => None,
            MaxDepth::Limited(n) => Some(MaxDepth::Limited(n - 1)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidDepth(pub i64);

impl fmt::Display for InvalidDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid max depth {}, expected {} (unlimited) or a non-negative integer",
            self.0,
            MaxDepth::UNLIMITED_ARG
        )
    }
}

impl std::error::Error for InvalidDepth {}

impl TryFrom<i64> for MaxDepth {
    type Error = InvalidDepth;

    fn try_from(value: i64) -> std::result::Result<Self, Self::Error> {
        match value {
            MaxDepth::UNLIMITED_ARG => Ok(MaxDepth::Unlimited),
            n if n >= 0 => usize::try_from(n)
                .map(MaxDepth::Limited)
                .map_err(|_| InvalidDepth(n)),
            n => Err(InvalidDepth(n)),
        }
    }
}

/// Exact file-name suffix filter. Directories are never filtered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionFilter {
    suffix: Option<String>,
}

impl ExtensionFilter {
    pub fn new(suffix: Option<&str>) -> Self {
        Self {
            suffix: suffix.filter(|s| !s.is_empty()).map(str::to_owned),
        }
    }

    pub fn suffix(&self) -> Option<&str> {
        self.suffix.as_deref()
    }

    pub fn matches(&self, file_name: &OsStr) -> bool {
        match &self.suffix {
            None => true,
            Some(suffix) => file_name
                .as_encoded_bytes()
                .ends_with(suffix.as_bytes()),
        }
    }
}

/// Lazy depth-first walk yielding file paths under a root directory.
///
/// Each open directory sits on an explicit stack together with the depth
/// budget left for its subdirectories; one path is produced per `next()`.
/// The walk cannot be restarted. Order follows the platform's directory
/// order.
pub struct Traverser {
    stack: Vec<(ReadDir, MaxDepth)>,
    filter: ExtensionFilter,
}

impl Traverser {
    pub fn new(root: &Path, max_depth: MaxDepth, filter: ExtensionFilter) -> Result<Self> {
        let rd = read_dir(root)?;

        debug!(
            "[walk] starting at {:?} (max_depth={:?}, filter={:?})",
            root,
            max_depth,
            filter.suffix()
        );

        Ok(Self {
            stack: vec![(rd, max_depth)],
            filter,
        })
    }
}

/// Start a lazy walk of `root`. See [`Traverser`].
pub fn traverse(root: &Path, max_depth: MaxDepth, filter: ExtensionFilter) -> Result<Traverser> {
    Traverser::new(root, max_depth, filter)
}

impl Iterator for Traverser {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        loop {
            let (dir, depth) = self.stack.last_mut()?;
            let depth = *depth;

            let entry = match dir.next() {
                None => {
                    self.stack.pop();
                    continue;
                }
                Some(Err(e)) => {
                    warn!("[walk] error reading directory entry: {e}");
                    continue;
                }
                Some(Ok(entry)) => entry,
            };

            match classify(&entry) {
                Some(EntryKind::Dir) => {
                    let Some(child_depth) = depth.descend() else {
                        continue;
                    };
                    let path = entry.path();
                    match read_dir(&path) {
                        Ok(rd) => self.stack.push((rd, child_depth)),
                        Err(e) => warn!("[walk] read_dir({:?}) failed: {e}", path),
                    }
                }
                Some(EntryKind::File) => {
                    if self.filter.matches(&entry.file_name()) {
                        return Some(entry.path());
                    }
                }
                None => {}
            }
        }
    }
}

enum EntryKind {
    Dir,
    File,
}

/// Real directories are walked; symlinked directories are not. Symlinks
/// count as files when they resolve to a regular file.
fn classify(entry: &DirEntry) -> Option<EntryKind> {
    let file_type = match entry.file_type() {
        Ok(ft) => ft,
        Err(e) => {
            warn!("[walk] file_type({:?}) failed: {e}", entry.path());
            return None;
        }
    };

    if file_type.is_dir() {
        Some(EntryKind::Dir)
    } else if file_type.is_file() {
        Some(EntryKind::File)
    } else if file_type.is_symlink() {
        fs::metadata(entry.path())
            .ok()
            .filter(|m| m.is_file())
            .map(|_| EntryKind::File)
    } else {
        None
    }
}

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;
