pub mod chart;
mod sort;
mod writer;

pub use chart::render_chart;
pub use sort::{compare_by, sort_records};
pub use writer::{DELIMITER, TIMELINE_HEADERS, write_records, write_timeline};
