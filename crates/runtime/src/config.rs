use std::path::{Path, PathBuf};

pub const PROGRAM_NAME: &str = "file-timeliner";
pub const PROGRAM_LOG_LEVEL: &str = "TIMELINER_LOG_LEVEL";
pub const DEFAULT_OUTPUT_FILE_NAME: &str = "filetimeline.csv";
/// Literal `--output` value that asks for the default location.
pub const DEFAULT_OUTPUT_KEYWORD: &str = "default";

/// Directory holding the running executable, or the current directory
/// when that cannot be determined.
pub fn program_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

/// Default timeline location, next to the program itself.
pub fn default_output_path() -> PathBuf {
    program_dir().join(DEFAULT_OUTPUT_FILE_NAME)
}

/// Resolve the user supplied `--output` value.
///
/// `None` and the literal `default` both map to [`default_output_path`].
pub fn resolve_output_path(requested: Option<&Path>) -> PathBuf {
    match requested {
        Some(p) if p != Path::new(DEFAULT_OUTPUT_KEYWORD) => p.to_path_buf(),
        _ => default_output_path(),
    }
}
