use std::{
    io::{self, BufRead, Write},
    path::Path,
};

/// Ask whether `path` may be overwritten.
///
/// Only `y` or `yes` (any case) confirm; an empty answer or end of input
/// declines.
pub fn confirm_overwrite<R: BufRead, W: Write>(
    path: &Path,
    input: &mut R,
    out: &mut W,
) -> io::Result<bool> {
    write!(out, "{} already exists. Overwrite? [y/N] ", path.display())?;
    out.flush()?;

    let mut answer = String::new();
    if input.read_line(&mut answer)? == 0 {
        writeln!(out)?;
        return Ok(false);
    }

    Ok(is_yes(&answer))
}

fn is_yes(answer: &str) -> bool {
    let answer = answer.trim();
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}
