//! Line-level helpers for heading recognition.

/// Deepest heading level surfaced in the table of contents.
pub const MAX_TOC_LEVEL: usize = 3;

/// Extract the heading level from a line of markdown text.
///
/// Returns `Some(level)` if the line starts (at column 0) with 1-3 `#`
/// followed by whitespace, or `None` otherwise.
///
/// # Examples
///
/// ```
/// # use blogtoc::parser::utils::get_heading_level;
/// assert_eq!(get_heading_level("# Title"), Some(1));
/// assert_eq!(get_heading_level("### Section"), Some(3));
/// assert_eq!(get_heading_level("#### Too Deep"), None);
/// assert_eq!(get_heading_level("#NoSpace"), None);
/// ```
pub fn get_heading_level(line: &str) -> Option<usize> {
    let mut level = 0;

    for ch in line.chars() {
        if ch == '#' {
            level += 1;
        } else if ch.is_whitespace() {
            return if level > 0 && level <= MAX_TOC_LEVEL {
                Some(level)
            } else {
                None
            };
        } else {
            break;
        }
    }

    None
}

/// Split a heading line into its level and trimmed text.
///
/// Lines whose text is empty after trimming are not headings.
pub fn parse_heading_line(line: &str) -> Option<(usize, &str)> {
    let level = get_heading_level(line)?;
    // The marker is pure ASCII, so `level` is also its byte length.
    let text = line[level..].trim();
    if text.is_empty() {
        None
    } else {
        Some((level, text))
    }
}
