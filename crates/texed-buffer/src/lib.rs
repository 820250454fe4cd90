//! # Texed Buffer
//!
//! The in-memory model of one open file: its lines, the cursor moving over
//! them and the viewport scrolling across them.
//!
//! ## Key Concepts
//!
//! ### Ownership & Borrowing
//! - `LineBuffer` owns every line as a `String`
//! - `Cursor` and `Viewport` are plain `Copy` values that *borrow* the buffer
//!   only for the duration of a movement or query
//! - Mutations require `&mut self`, so a cursor can never observe a
//!   half-applied edit
//!
//! ### Out-of-range requests
//! Editing and movement never fail. A request that addresses a row or column
//! outside the buffer is a no-op and reports `false`; only loading a file
//! returns an error.

mod buffer;
mod cursor;
mod viewport;

pub use buffer::LineBuffer;
pub use cursor::{ColumnLimit, Cursor, Direction};
pub use viewport::{CellSize, ScreenPosition, Viewport};

use std::path::PathBuf;

/// Result type for buffer operations
pub type BufferResult<T> = Result<T, BufferError>;

/// Errors that can occur while creating a buffer
#[derive(Debug, thiserror::Error)]
pub enum BufferError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
