/// Layout for human-readable timestamps. Lexicographic order on strings in
/// this layout matches chronological order.
pub const HUMAN_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
