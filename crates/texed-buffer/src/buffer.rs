//! Line-oriented text storage.
//!
//! ## Why a `Vec<String>`?
//!
//! Every operation the editor performs addresses a `(row, column)` pair:
//! typing, splitting a line on enter, joining lines on backspace. Keeping one
//! `String` per line makes each of those a local edit of a single line (or a
//! single `Vec` insert/remove), and lets the renderer borrow a line as `&str`
//! without any conversion.
//!
//! Columns are measured in `char`s, never bytes, so multi-byte text such as
//! `"héllo"` can be addressed without splitting a UTF-8 sequence.

use std::path::{Path, PathBuf};

use crate::{BufferError, BufferResult};

/// The text of one open file as an ordered list of lines.
///
/// # Invariant
///
/// `lines` is never empty. A brand new or empty file is represented by a
/// single empty line, so row `0` is always addressable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineBuffer {
    /// One entry per line, without line terminators
    lines: Vec<String>,

    /// Path (or display name) the text was read from
    source_name: PathBuf,
}

impl LineBuffer {
    /// Creates a buffer holding a single empty line.
    ///
    /// # Example
    /// ```
    /// use texed_buffer::LineBuffer;
    ///
    /// let buffer = LineBuffer::new("untitled");
    /// assert_eq!(buffer.len_lines(), 1);
    /// ```
    pub fn new(source_name: impl Into<PathBuf>) -> Self {
        Self {
            lines: vec![String::new()],
            source_name: source_name.into(),
        }
    }

    /// Creates a buffer from in-memory text, splitting on `\n` and `\r\n`.
    pub fn from_text(source_name: impl Into<PathBuf>, text: &str) -> Self {
        let mut lines: Vec<String> = text.lines().map(String::from).collect();
        if lines.is_empty() {
            lines.push(String::new());
        }

        Self {
            lines,
            source_name: source_name.into(),
        }
    }

    /// Reads a file into a new buffer.
    ///
    /// The whole file is read with one blocking call; a failure leaves no
    /// partially-built buffer behind.
    pub fn load(path: impl AsRef<Path>) -> BufferResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| BufferError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self::from_text(path, &content))
    }

    // ==================== Text Access ====================

    /// Returns the path or name the buffer was created from.
    pub fn source_name(&self) -> &Path {
        &self.source_name
    }

    /// Returns a line by row, or `None` past the end of the buffer.
    pub fn line(&self, row: usize) -> Option<&str> {
        self.lines.get(row).map(String::as_str)
    }

    /// Returns all lines in file order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Returns the character at `(row, column)`.
    pub fn char_at(&self, row: usize, column: usize) -> Option<char> {
        self.line(row)?.chars().nth(column)
    }

    /// Returns the number of lines. Always at least 1.
    #[inline]
    pub fn len_lines(&self) -> usize {
        self.lines.len()
    }

    /// Returns the last addressable row.
    #[inline]
    pub fn last_row(&self) -> usize {
        self.lines.len() - 1
    }

    /// Returns the length of a line in characters, or 0 for a missing row.
    pub fn line_len(&self, row: usize) -> usize {
        self.line(row).map_or(0, |line| line.chars().count())
    }

    // ==================== Mutations ====================

    /// Inserts `text` into line `row` before character `column`.
    ///
    /// `column` may equal the line length (appending). Returns `false`, and
    /// leaves the buffer untouched, if the position is out of range or `text`
    /// is empty. Moving the cursor past the inserted text is the caller's job.
    pub fn insert_text(&mut self, row: usize, column: usize, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }
        let Some(line) = self.lines.get_mut(row) else {
            return false;
        };
        let Some(byte_idx) = byte_index(line, column) else {
            return false;
        };

        line.insert_str(byte_idx, text);
        true
    }

    /// Splits line `row` at `column`; the tail becomes a new line below it.
    ///
    /// Splitting at the end of a line inserts an empty line.
    pub fn split_line(&mut self, row: usize, column: usize) -> bool {
        let Some(line) = self.lines.get_mut(row) else {
            return false;
        };
        let Some(byte_idx) = byte_index(line, column) else {
            return false;
        };

        let tail = line.split_off(byte_idx);
        self.lines.insert(row + 1, tail);
        true
    }

    /// Appends line `row + 1` onto line `row` and removes it.
    ///
    /// No-op on the last line.
    pub fn join_line(&mut self, row: usize) -> bool {
        if row + 1 >= self.lines.len() {
            return false;
        }

        let next = self.lines.remove(row + 1);
        self.lines[row].push_str(&next);
        true
    }

    /// Removes the character at `(row, column)` and returns it.
    ///
    /// Returns `None` when there is no character at that position, including
    /// the append position at the end of a line.
    pub fn delete_char(&mut self, row: usize, column: usize) -> Option<char> {
        let line = self.lines.get_mut(row)?;
        let (byte_idx, _) = line.char_indices().nth(column)?;
        Some(line.remove(byte_idx))
    }
}

/// Converts a character column into a byte offset, allowing the position
/// just past the last character.
fn byte_index(line: &str, column: usize) -> Option<usize> {
    line.char_indices()
        .map(|(idx, _)| idx)
        .chain(std::iter::once(line.len()))
        .nth(column)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_has_one_line() {
        let buffer = LineBuffer::from_text("empty.txt", "");
        assert_eq!(buffer.lines(), &[String::new()]);
    }

    #[test]
    fn test_crlf_lines() {
        let buffer = LineBuffer::from_text("dos.txt", "one\r\ntwo\r\n");
        assert_eq!(buffer.lines(), &["one".to_string(), "two".to_string()]);
    }

    #[test]
    fn test_insert_text_multibyte() {
        let mut buffer = LineBuffer::from_text("utf8.txt", "héllo");
        assert!(buffer.insert_text(0, 2, "_"));
        assert_eq!(buffer.line(0), Some("hé_llo"));
        assert_eq!(buffer.line_len(0), 6);
    }

    #[test]
    fn test_insert_out_of_range_is_noop() {
        let mut buffer = LineBuffer::from_text("a.txt", "abc");
        assert!(!buffer.insert_text(0, 4, "x"));
        assert!(!buffer.insert_text(1, 0, "x"));
        assert!(!buffer.insert_text(0, 0, ""));
        assert_eq!(buffer.line(0), Some("abc"));
    }

    #[test]
    fn test_split_line_at_end() {
        let mut buffer = LineBuffer::from_text("a.txt", "abcX\nde");
        assert!(buffer.split_line(0, 4));
        assert_eq!(buffer.lines(), &["abcX", "", "de"]);
    }

    #[test]
    fn test_split_line_middle() {
        let mut buffer = LineBuffer::from_text("a.txt", "hello world");
        assert!(buffer.split_line(0, 5));
        assert_eq!(buffer.lines(), &["hello", " world"]);
        assert!(!buffer.split_line(0, 6));
    }

    #[test]
    fn test_join_line() {
        let mut buffer = LineBuffer::from_text("a.txt", "foo\nbar\nbaz");
        assert!(buffer.join_line(0));
        assert_eq!(buffer.lines(), &["foobar", "baz"]);
        assert!(!buffer.join_line(1));
        assert_eq!(buffer.len_lines(), 2);
    }

    #[test]
    fn test_delete_char() {
        let mut buffer = LineBuffer::from_text("a.txt", "abc");
        assert_eq!(buffer.delete_char(0, 1), Some('b'));
        assert_eq!(buffer.line(0), Some("ac"));
        assert_eq!(buffer.delete_char(0, 2), None);
        assert_eq!(buffer.delete_char(3, 0), None);
    }

    #[test]
    fn test_char_at() {
        let buffer = LineBuffer::from_text("a.txt", "xyz\nq");
        assert_eq!(buffer.char_at(0, 2), Some('z'));
        assert_eq!(buffer.char_at(1, 1), None);
    }

    #[test]
    fn test_load_keeps_source_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.txt");
        std::fs::write(&path, "first\nsecond\n").unwrap();

        let buffer = LineBuffer::load(&path).unwrap();
        assert_eq!(buffer.source_name(), path.as_path());
        assert_eq!(buffer.lines(), &["first", "second"]);
    }
}
