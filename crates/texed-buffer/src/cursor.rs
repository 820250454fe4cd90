//! Cursor position and movement.
//!
//! ## Sticky column
//!
//! Moving up or down through lines of different lengths should not lose the
//! horizontal position the user chose. The cursor therefore keeps a
//! `remembered_column`, set by horizontal movement only, and every vertical
//! move lands on `min(remembered_column, line length)`.
//!
//! ```text
//! hello world      column 5 (remembered 5)
//! ab               column 2 (remembered 5)
//! another line     column 5 (remembered 5)
//! ```

use crate::LineBuffer;

/// A single-step movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns true for left/right movement.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }
}

/// How far right horizontal movement may go on a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnLimit {
    /// Stop on the last character (`column < length`).
    #[default]
    LastChar,
    /// Allow the append position just past the last character.
    AppendPosition,
}

impl ColumnLimit {
    /// Largest column reachable on a line of `line_len` characters.
    pub fn max_column(self, line_len: usize) -> usize {
        match self {
            ColumnLimit::LastChar => line_len.saturating_sub(1),
            ColumnLimit::AppendPosition => line_len,
        }
    }
}

/// Logical cursor position within a [`LineBuffer`].
///
/// # Invariant
///
/// `row < buffer.len_lines()` and `column <= buffer.line_len(row)`. Every
/// method that takes the buffer re-establishes this, so the fields are
/// private.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cursor {
    column: usize,
    row: usize,
    remembered_column: usize,
}

impl Cursor {
    /// Creates a cursor at `(row, column)` remembering `column`.
    pub fn new(row: usize, column: usize) -> Self {
        Self {
            column,
            row,
            remembered_column: column,
        }
    }

    /// Zero-based line index.
    #[inline]
    pub fn row(&self) -> usize {
        self.row
    }

    /// Zero-based character index within the line.
    #[inline]
    pub fn column(&self) -> usize {
        self.column
    }

    /// Column restored by vertical movement.
    #[inline]
    pub fn remembered_column(&self) -> usize {
        self.remembered_column
    }

    /// Returns true at the very start of the buffer.
    pub fn is_origin(&self) -> bool {
        self.row == 0 && self.column == 0
    }

    /// Moves to `(row, column)`, clamped into the buffer, and remembers the
    /// resulting column. Used after edits that reposition the cursor.
    pub fn place(&mut self, row: usize, column: usize, buffer: &LineBuffer) {
        self.row = row.min(buffer.last_row());
        self.column = column.min(buffer.line_len(self.row));
        self.remembered_column = self.column;
    }

    /// Pulls the cursor back inside the buffer after lines were removed or
    /// shortened. The remembered column is left alone.
    pub fn clamp(&mut self, buffer: &LineBuffer) {
        self.row = self.row.min(buffer.last_row());
        self.column = self.column.min(buffer.line_len(self.row));
    }

    /// Pulls the column back to the last one `limit` allows on this line.
    ///
    /// Returns `true` if the cursor moved. The remembered column is left
    /// alone.
    pub fn clamp_to(&mut self, buffer: &LineBuffer, limit: ColumnLimit) -> bool {
        let max = limit.max_column(buffer.line_len(self.row));
        if self.column > max {
            self.column = max;
            true
        } else {
            false
        }
    }

    /// Moves one unit, stopping on the last character of a line.
    ///
    /// Returns `false` if the cursor was already at the boundary.
    pub fn move_in(&mut self, direction: Direction, buffer: &LineBuffer) -> bool {
        self.move_with_limit(direction, buffer, ColumnLimit::LastChar)
    }

    /// Moves one unit with an explicit right-hand limit.
    ///
    /// Horizontal movement never wraps onto a neighbouring line.
    pub fn move_with_limit(
        &mut self,
        direction: Direction,
        buffer: &LineBuffer,
        limit: ColumnLimit,
    ) -> bool {
        match direction {
            Direction::Up => {
                if self.row == 0 {
                    return false;
                }
                self.row -= 1;
                self.column = self.remembered_column.min(buffer.line_len(self.row));
            }
            Direction::Down => {
                if self.row >= buffer.last_row() {
                    return false;
                }
                self.row += 1;
                self.column = self.remembered_column.min(buffer.line_len(self.row));
            }
            Direction::Left => {
                if self.column == 0 {
                    return false;
                }
                self.column -= 1;
                self.remembered_column = self.column;
            }
            Direction::Right => {
                let max = limit.max_column(buffer.line_len(self.row));
                if self.column >= max {
                    return false;
                }
                self.column += 1;
                self.remembered_column = self.column;
            }
        }
        true
    }

    /// Jumps to column 0.
    pub fn to_line_start(&mut self) -> bool {
        let moved = self.column != 0;
        self.column = 0;
        self.remembered_column = 0;
        moved
    }

    /// Jumps to the last reachable column of the current line.
    pub fn to_line_end(&mut self, buffer: &LineBuffer, limit: ColumnLimit) -> bool {
        let end = limit.max_column(buffer.line_len(self.row));
        let moved = self.column != end;
        self.column = end;
        self.remembered_column = end;
        moved
    }

    /// Moves to the end of the current or next word on this line.
    ///
    /// A whitespace character under the cursor is stepped over first, then
    /// the cursor runs until the next whitespace or the limit.
    pub fn word_forward(&mut self, buffer: &LineBuffer, limit: ColumnLimit) -> bool {
        let chars: Vec<char> = buffer.line(self.row).unwrap_or_default().chars().collect();
        let max = limit.max_column(chars.len());
        let is_space = |idx: usize| chars.get(idx).is_some_and(|c| c.is_whitespace());

        let mut column = self.column;
        if column >= max {
            return false;
        }
        if is_space(column) {
            column += 1;
        }
        while column < max && !is_space(column) {
            column += 1;
        }

        self.set_column(column)
    }

    /// Moves to the start of the current or previous word on this line.
    pub fn word_backward(&mut self, buffer: &LineBuffer) -> bool {
        let chars: Vec<char> = buffer.line(self.row).unwrap_or_default().chars().collect();
        let is_space = |idx: usize| chars.get(idx).is_some_and(|c| c.is_whitespace());

        let mut column = self.column.min(chars.len());
        if column == 0 {
            return false;
        }
        if is_space(column - 1) {
            column -= 1;
        }
        while column > 0 && !is_space(column - 1) {
            column -= 1;
        }

        self.set_column(column)
    }

    fn set_column(&mut self, column: usize) -> bool {
        let moved = self.column != column;
        self.column = column;
        self.remembered_column = column;
        moved
    }
}

impl std::fmt::Display for Cursor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // 1-indexed for user-facing output
        write!(f, "{}:{}", self.row + 1, self.column + 1)
    }
}
