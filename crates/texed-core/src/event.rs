//! Input events delivered by the host.
//!
//! ## Learning: Enum Variants
//!
//! Each variant carries exactly the data its handler needs. The host
//! decodes platform input into these shapes; nothing platform-specific
//! crosses into the core.

use crate::keymap::KeyPress;

/// One decoded input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Committed text from the input method. Only meaningful in Insert mode.
    Text(String),

    /// A key press, interpreted through the current mode's bindings.
    Key(KeyPress),

    /// Mouse wheel notches; positive scrolls towards the top of the file.
    Scroll { lines: isize },

    /// Window resized, exposed or focus changed: nothing to mutate, but the
    /// host should draw again.
    Redraw,
}

impl From<KeyPress> for InputEvent {
    fn from(key: KeyPress) -> Self {
        InputEvent::Key(key)
    }
}
