//! The editor session: one open file and everything needed to edit it.
//!
//! ## Learning: Composition over Inheritance
//!
//! `Session` composes a [`LineBuffer`], a [`Cursor`], a [`Viewport`] and an
//! [`EditorMode`]. Each part knows nothing of the others; the session is the
//! one place where an edit to the buffer is followed by the matching cursor
//! and viewport update.
//!
//! There is no global instance. The host owns a `Session` value for as long
//! as the file is open and lends it to the [`Interpreter`](crate::Interpreter)
//! one event at a time.

use std::ops::Range;
use std::path::Path;

use texed_buffer::{CellSize, ColumnLimit, Cursor, Direction, LineBuffer, ScreenPosition, Viewport};

use crate::command::{Command, CommandKind};
use crate::mode::EditorMode;
use crate::CoreResult;

/// Buffer, cursor, viewport and mode for one open file.
#[derive(Debug, Clone)]
pub struct Session {
    buffer: LineBuffer,
    cursor: Cursor,
    viewport: Viewport,
    mode: EditorMode,
}

impl Session {
    /// Creates a session by reading the file at `path`.
    ///
    /// The file must exist; creating a placeholder for a new file is the
    /// host's decision.
    pub fn open(path: impl AsRef<Path>) -> CoreResult<Self> {
        let buffer = LineBuffer::load(path)?;
        tracing::debug!(
            "Opened {} ({} lines)",
            buffer.source_name().display(),
            buffer.len_lines()
        );
        Ok(Self::from_buffer(buffer))
    }

    /// Creates a session over an existing buffer, in Normal mode at `(0, 0)`.
    pub fn from_buffer(buffer: LineBuffer) -> Self {
        Self {
            buffer,
            cursor: Cursor::default(),
            viewport: Viewport::new(),
            mode: EditorMode::default(),
        }
    }

    // ==================== Queries ====================

    pub fn buffer(&self) -> &LineBuffer {
        &self.buffer
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Returns the current editor mode.
    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    /// Returns the path the buffer was loaded from.
    pub fn source_name(&self) -> &Path {
        self.buffer.source_name()
    }

    /// Line indices to draw in a viewport `height` lines tall.
    pub fn visible_range(&self, height: usize) -> Range<usize> {
        self.viewport.visible_range(height, self.buffer.len_lines())
    }

    /// Visible lines paired with their buffer index.
    pub fn visible_lines(&self, height: usize) -> impl Iterator<Item = (usize, &str)> {
        let range = self.visible_range(height);
        self.buffer.lines()[range.clone()]
            .iter()
            .zip(range)
            .map(|(line, idx)| (idx, line.as_str()))
    }

    /// Cursor position in pixels relative to the top-left of the text area.
    pub fn cursor_screen_position(&self, cell: CellSize) -> ScreenPosition {
        let line = self.buffer.line(self.cursor.row()).unwrap_or_default();
        self.viewport.screen_position(&self.cursor, line, cell)
    }

    // ==================== Host bookkeeping ====================

    /// Records which lines the renderer drew in the last frame.
    pub fn record_rendered(&mut self, drawn: &Range<usize>) {
        self.viewport.record_rendered(drawn);
    }

    /// Scrolls the viewport without moving the cursor.
    pub fn scroll(&mut self, delta: isize) -> bool {
        self.viewport.scroll(delta, self.buffer.len_lines())
    }

    /// Places the cursor, clamped into the buffer (e.g. for a mouse click).
    pub fn move_cursor_to(&mut self, row: usize, column: usize) -> bool {
        let before = self.cursor;
        self.cursor.place(row, column, &self.buffer);
        self.settle();
        before != self.cursor
    }

    // ==================== Interpreter operations ====================

    /// Inserts committed text before the cursor and advances past it.
    ///
    /// Ignored outside Insert mode. Control characters are dropped; line
    /// breaks are made with [`Command::Newline`].
    pub(crate) fn insert_text(&mut self, text: &str) -> bool {
        if self.mode != EditorMode::Insert {
            return false;
        }

        let text: String = text.chars().filter(|c| !c.is_control()).collect();
        let (row, column) = (self.cursor.row(), self.cursor.column());
        if !self.buffer.insert_text(row, column, &text) {
            return false;
        }

        self.cursor.place(row, column + text.chars().count(), &self.buffer);
        self.settle();
        true
    }

    /// Applies one command and reports whether visible state changed.
    pub(crate) fn execute(&mut self, command: Command) -> bool {
        let limit = self.column_limit();

        let changed = match command {
            Command::MoveLeft => self.step(Direction::Left, limit),
            Command::MoveRight => self.step(Direction::Right, limit),
            Command::MoveUp => self.step(Direction::Up, limit),
            Command::MoveDown => self.step(Direction::Down, limit),
            Command::WordForward => self.cursor.word_forward(&self.buffer, limit),
            Command::WordBackward => self.cursor.word_backward(&self.buffer),
            Command::LineStart => self.cursor.to_line_start(),
            Command::LineEnd => self.cursor.to_line_end(&self.buffer, limit),

            Command::EnterInsert => self.set_mode(EditorMode::Insert),
            Command::EnterNormal => self.set_mode(EditorMode::Normal),
            Command::EnterVisual => self.set_mode(EditorMode::Visual),
            Command::EnterCommand => self.set_mode(EditorMode::Command),

            Command::Newline => self.newline(),
            Command::DeleteBackward => self.delete_backward(),
            Command::DeleteWordBackward => self.delete_word_backward(),
            Command::DeleteForward => self.delete_forward(),
            Command::JoinLine => self.buffer.join_line(self.cursor.row()),
        };

        if changed && command.kind() != CommandKind::ModeChange {
            if command.kind() == CommandKind::Edit {
                self.cursor.clamp_to(&self.buffer, limit);
            }
            self.settle();
        }
        changed
    }

    // ==================== Internals ====================

    /// Insert mode may move onto the append position; other modes stop on
    /// the last character.
    fn column_limit(&self) -> ColumnLimit {
        match self.mode {
            EditorMode::Insert => ColumnLimit::AppendPosition,
            _ => ColumnLimit::LastChar,
        }
    }

    fn step(&mut self, direction: Direction, limit: ColumnLimit) -> bool {
        self.cursor.move_with_limit(direction, &self.buffer, limit)
    }

    fn set_mode(&mut self, mode: EditorMode) -> bool {
        if self.mode == mode {
            return false;
        }
        tracing::debug!("Mode {} -> {}", self.mode, mode);
        self.mode = mode;
        // Leaving Insert may strand the cursor on the append position
        self.cursor.clamp_to(&self.buffer, self.column_limit());
        true
    }

    fn newline(&mut self) -> bool {
        let row = self.cursor.row();
        if !self.buffer.split_line(row, self.cursor.column()) {
            return false;
        }
        self.cursor.place(row + 1, 0, &self.buffer);
        true
    }

    /// Backspace: removes the character before the cursor, or joins with the
    /// previous line at column 0.
    fn delete_backward(&mut self) -> bool {
        let (row, column) = (self.cursor.row(), self.cursor.column());

        if column > 0 {
            if self.buffer.delete_char(row, column - 1).is_none() {
                return false;
            }
            self.cursor.place(row, column - 1, &self.buffer);
            true
        } else if row > 0 {
            let joint = self.buffer.line_len(row - 1);
            self.buffer.join_line(row - 1);
            self.cursor.place(row - 1, joint, &self.buffer);
            true
        } else {
            false
        }
    }

    /// Removes the whitespace before the cursor, then the word before that.
    fn delete_word_backward(&mut self) -> bool {
        let (row, column) = (self.cursor.row(), self.cursor.column());
        if column == 0 {
            return self.delete_backward();
        }

        let chars: Vec<char> = self.buffer.line(row).unwrap_or_default().chars().collect();
        let mut start = column.min(chars.len());
        while start > 0 && chars[start - 1].is_whitespace() {
            start -= 1;
        }
        while start > 0 && !chars[start - 1].is_whitespace() {
            start -= 1;
        }

        for _ in start..column {
            self.buffer.delete_char(row, start);
        }
        self.cursor.place(row, start, &self.buffer);
        true
    }

    /// Removes the character under the cursor. In Insert mode, at the end of
    /// a line, pulls the next line up instead.
    fn delete_forward(&mut self) -> bool {
        let (row, column) = (self.cursor.row(), self.cursor.column());
        if self.buffer.delete_char(row, column).is_some() {
            return true;
        }
        self.mode == EditorMode::Insert && self.buffer.join_line(row)
    }

    /// Re-establishes cursor/viewport invariants after an edit or motion and
    /// keeps the cursor inside the last rendered window.
    fn settle(&mut self) {
        self.cursor.clamp(&self.buffer);
        self.viewport.clamp(self.buffer.len_lines());
        self.viewport.reveal(self.cursor.row());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(text: &str) -> Session {
        Session::from_buffer(LineBuffer::from_text("test.txt", text))
    }

    fn lines(session: &Session) -> Vec<&str> {
        session.buffer().lines().iter().map(String::as_str).collect()
    }

    fn position(session: &Session) -> (usize, usize) {
        (session.cursor().row(), session.cursor().column())
    }

    #[test]
    fn test_new_session_defaults() {
        let session = session("abc");
        assert_eq!(session.mode(), EditorMode::Normal);
        assert_eq!(position(&session), (0, 0));
        assert_eq!(session.viewport().scroll_offset(), 0);
    }

    #[test]
    fn test_text_ignored_outside_insert() {
        let mut session = session("abc");
        assert!(!session.insert_text("x"));
        assert_eq!(lines(&session), ["abc"]);
    }

    #[test]
    fn test_insert_text_advances_cursor() {
        let mut session = session("abc\nde");
        session.move_cursor_to(0, 3);
        session.execute(Command::EnterInsert);

        assert!(session.insert_text("XY"));
        assert_eq!(lines(&session), ["abcXY", "de"]);
        assert_eq!(position(&session), (0, 5));
    }

    #[test]
    fn test_control_characters_dropped() {
        let mut session = session("");
        session.execute(Command::EnterInsert);
        assert!(!session.insert_text("\u{1b}"));
        assert!(session.insert_text("a\tb"));
        assert_eq!(lines(&session), ["ab"]);
    }

    #[test]
    fn test_newline_splits_and_moves() {
        let mut session = session("hello world");
        session.move_cursor_to(0, 5);
        assert!(session.execute(Command::Newline));
        assert_eq!(lines(&session), ["hello", " world"]);
        assert_eq!(position(&session), (1, 0));
    }

    #[test]
    fn test_backspace_joins_lines() {
        let mut session = session("foo\nbar");
        session.execute(Command::EnterInsert);
        session.move_cursor_to(1, 0);

        assert!(session.execute(Command::DeleteBackward));
        assert_eq!(lines(&session), ["foobar"]);
        assert_eq!(position(&session), (0, 3));

        assert!(session.execute(Command::DeleteBackward));
        assert_eq!(lines(&session), ["fobar"]);
        assert_eq!(position(&session), (0, 2));
    }

    #[test]
    fn test_backspace_at_origin_is_noop() {
        let mut session = session("abc");
        assert!(!session.execute(Command::DeleteBackward));
        assert_eq!(lines(&session), ["abc"]);
    }

    #[test]
    fn test_delete_word_backward() {
        let mut session = session("let value =   ");
        session.execute(Command::EnterInsert);
        session.move_cursor_to(0, 14);

        assert!(session.execute(Command::DeleteWordBackward));
        assert_eq!(lines(&session), ["let value "]);
        assert_eq!(position(&session), (0, 10));

        assert!(session.execute(Command::DeleteWordBackward));
        assert_eq!(lines(&session), ["let "]);
    }

    #[test]
    fn test_delete_forward_joins_only_in_insert() {
        let mut session = session("ab\ncd");
        session.move_cursor_to(0, 1);
        assert!(session.execute(Command::DeleteForward));
        assert_eq!(lines(&session), ["a", "cd"]);
        assert_eq!(position(&session), (0, 0));
        assert!(session.execute(Command::DeleteForward));
        assert_eq!(lines(&session), ["", "cd"]);
        assert!(!session.execute(Command::DeleteForward));

        session.execute(Command::EnterInsert);
        assert!(session.execute(Command::DeleteForward));
        assert_eq!(lines(&session), ["cd"]);
    }

    #[test]
    fn test_repeated_delete_forward_in_normal() {
        let mut session = session("abc");
        session.execute(Command::LineEnd);
        for expected in ["ab", "a", ""] {
            assert!(session.execute(Command::DeleteForward));
            assert_eq!(lines(&session), [expected]);
            assert!(session.cursor().column() <= session.buffer().line_len(0).saturating_sub(1));
        }
    }

    #[test]
    fn test_leaving_insert_clamps_to_last_char() {
        let mut session = session("abc");
        session.execute(Command::EnterInsert);
        session.execute(Command::LineEnd);
        assert_eq!(position(&session), (0, 3));

        assert!(session.execute(Command::EnterNormal));
        assert_eq!(position(&session), (0, 2));
    }

    #[test]
    fn test_join_line_keeps_cursor() {
        let mut session = session("one\ntwo");
        assert!(session.execute(Command::JoinLine));
        assert_eq!(lines(&session), ["onetwo"]);
        assert_eq!(position(&session), (0, 0));
        assert!(!session.execute(Command::JoinLine));
    }

    #[test]
    fn test_right_limit_depends_on_mode() {
        let mut session = session("ab");
        session.execute(Command::LineEnd);
        assert_eq!(position(&session), (0, 1));

        session.execute(Command::EnterInsert);
        assert!(session.execute(Command::MoveRight));
        assert_eq!(position(&session), (0, 2));
    }

    #[test]
    fn test_mode_change_to_same_mode_is_noop() {
        let mut session = session("");
        assert!(!session.execute(Command::EnterNormal));
        assert!(session.execute(Command::EnterVisual));
        assert_eq!(session.mode(), EditorMode::Visual);
    }

    #[test]
    fn test_scroll_does_not_move_cursor() {
        let mut session = session("1\n2\n3\n4");
        assert!(session.scroll(2));
        assert_eq!(session.viewport().scroll_offset(), 2);
        assert_eq!(position(&session), (0, 0));
        assert!(session.scroll(10));
        assert_eq!(session.viewport().scroll_offset(), 3);
    }

    #[test]
    fn test_cursor_follow_after_render() {
        let text = (0..20).map(|i| i.to_string()).collect::<Vec<_>>().join("\n");
        let mut session = session(&text);
        let drawn = session.visible_range(5);
        session.record_rendered(&drawn);

        for _ in 0..6 {
            session.execute(Command::MoveDown);
        }
        assert_eq!(session.cursor().row(), 6);
        assert_eq!(session.visible_range(5), 2..7);
    }

    #[test]
    fn test_join_clamps_scroll_offset() {
        let mut session = session("a\nb");
        session.scroll(1);
        assert!(session.execute(Command::JoinLine));
        assert_eq!(session.viewport().scroll_offset(), 0);
    }

    #[test]
    fn test_visible_lines_and_screen_position() {
        let mut session = session("zero\none\ntwo\nthree");
        session.scroll(1);
        let visible: Vec<_> = session.visible_lines(2).collect();
        assert_eq!(visible, [(1, "one"), (2, "two")]);

        session.move_cursor_to(2, 2);
        let pos = session.cursor_screen_position(CellSize::new(8.0, 16.0));
        assert_eq!(pos, ScreenPosition { x: 16.0, y: 16.0 });
    }

    #[test]
    fn test_open_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = Session::open(dir.path().join("absent.txt"));
        assert!(matches!(result, Err(crate::CoreError::Buffer(_))));
    }
}
