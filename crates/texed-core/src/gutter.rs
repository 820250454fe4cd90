//! Line number labels for the gutter.
//!
//! Pure functions of the drawn line and the cursor row; the renderer decides
//! where and how to draw them.

use crate::config::LineNumberConfig;

/// Returns the number shown next to `line`.
///
/// Relative numbering shows the distance from `cursor_row` (0 on the cursor
/// row itself). Absolute numbering is 1-based unless `zero_indexing` is set.
pub fn line_number_label(options: &LineNumberConfig, line: usize, cursor_row: usize) -> usize {
    if options.relative {
        line.abs_diff(cursor_row)
    } else if options.zero_indexing {
        line
    } else {
        line + 1
    }
}

/// Width in digits the gutter needs for a buffer of `line_count` lines.
pub fn gutter_digits(line_count: usize) -> usize {
    line_count.max(1).ilog10() as usize + 1
}

/// Formats a right-aligned gutter label followed by one space.
pub fn format_label(label: usize, digits: usize) -> String {
    format!("{:>width$} ", label, width = digits)
}
