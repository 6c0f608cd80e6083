mod collector;
mod config;
mod record;
mod stat;
mod walker;

pub use collector::{Collection, ScanOptions, collect};
pub use config::HUMAN_TIME_FORMAT;
pub use record::{FileRecord, TimeField, TimeFormat, TimeTriple, Timestamps};
pub use stat::StatExtractor;
pub use walker::{ExtensionFilter, InvalidDepth, MaxDepth, Traverser, traverse};
