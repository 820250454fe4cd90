//! Vertical scrolling and cursor-to-screen mapping.

use std::ops::Range;

use unicode_width::UnicodeWidthChar;

use crate::Cursor;

/// Size of one monospace character cell in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellSize {
    pub width: f32,
    pub height: f32,
}

impl CellSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Pixel offset relative to the top-left corner of the text area.
///
/// `y` is negative when the cursor row is scrolled above the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenPosition {
    pub x: f32,
    pub y: f32,
}

/// The window of buffer lines eligible for rendering.
///
/// # Invariant
///
/// `scroll_offset < line_count` for the buffer it is used with. Callers pass
/// the current line count into every mutation so the offset is re-clamped
/// whenever the buffer shrinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    /// First buffer line considered for rendering
    scroll_offset: usize,

    /// Last line the renderer actually drew, once it has drawn anything
    last_rendered_line: Option<usize>,
}

impl Viewport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the first visible line.
    #[inline]
    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Last line recorded by [`Viewport::record_rendered`].
    #[inline]
    pub fn last_rendered_line(&self) -> Option<usize> {
        self.last_rendered_line
    }

    /// Scrolls by `delta` lines, clamped to `[0, line_count - 1]`.
    ///
    /// The cursor is not touched; this models the mouse wheel.
    pub fn scroll(&mut self, delta: isize, line_count: usize) -> bool {
        let max = line_count.saturating_sub(1);
        let target = self.scroll_offset.saturating_add_signed(delta).min(max);
        self.shift_to(target)
    }

    /// Re-clamps the offset after the buffer lost lines.
    pub fn clamp(&mut self, line_count: usize) -> bool {
        let max = line_count.saturating_sub(1);
        if self.scroll_offset > max {
            self.shift_to(max)
        } else {
            false
        }
    }

    /// Line indices from the offset to `min(offset + height, line_count) - 1`.
    ///
    /// A `Range` is lazy and can be cloned to iterate it again.
    pub fn visible_range(&self, height: usize, line_count: usize) -> Range<usize> {
        let start = self.scroll_offset.min(line_count);
        let end = self.scroll_offset.saturating_add(height).min(line_count);
        start..end.max(start)
    }

    /// Remembers the last line of a range the renderer just drew.
    pub fn record_rendered(&mut self, drawn: &Range<usize>) {
        self.last_rendered_line = drawn.end.checked_sub(1).filter(|&last| last >= drawn.start);
    }

    /// Scrolls just enough to bring `row` back into the last rendered window.
    ///
    /// Does nothing before the first frame has been recorded.
    pub fn reveal(&mut self, row: usize) -> bool {
        let Some(last) = self.last_rendered_line else {
            return false;
        };

        if row < self.scroll_offset {
            self.shift_to(row)
        } else if row > last {
            self.shift_to(self.scroll_offset + (row - last))
        } else {
            false
        }
    }

    /// Pixel position of `cursor` given the text of its line.
    ///
    /// Wide characters occupy two cells. Rows above the scroll offset are not
    /// drawn, so the vertical cell index is `row - scroll_offset`.
    pub fn screen_position(&self, cursor: &Cursor, line: &str, cell: CellSize) -> ScreenPosition {
        let in_line = line.chars().take(cursor.column());
        let drawn_chars = line.chars().count().min(cursor.column());
        let cells: usize = in_line.map(|c| c.width().unwrap_or(1)).sum::<usize>()
            + (cursor.column() - drawn_chars);

        ScreenPosition {
            x: cells as f32 * cell.width,
            y: (cursor.row() as f32 - self.scroll_offset as f32) * cell.height,
        }
    }

    /// Moves the offset, carrying the rendered window along with it.
    fn shift_to(&mut self, target: usize) -> bool {
        if target == self.scroll_offset {
            return false;
        }

        if let Some(last) = self.last_rendered_line {
            self.last_rendered_line = Some(if target > self.scroll_offset {
                last + (target - self.scroll_offset)
            } else {
                last.saturating_sub(self.scroll_offset - target)
            });
        }
        self.scroll_offset = target;
        true
    }
}
