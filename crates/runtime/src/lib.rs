mod config;
pub mod logging;

pub use config::{
    DEFAULT_OUTPUT_FILE_NAME, DEFAULT_OUTPUT_KEYWORD, PROGRAM_LOG_LEVEL, PROGRAM_NAME,
    default_output_path, program_dir, resolve_output_path,
};

pub use logging::{Logger, init};
