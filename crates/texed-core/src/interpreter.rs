//! Turns input events into session changes.
//!
//! ## Learning: Table-Driven Dispatch
//!
//! Instead of a `match` on mode wrapped around a `match` on key, a key press
//! is resolved through the [`Keymap`] to a [`Command`], and the session
//! executes the command. The table can be inspected, extended from config and
//! tested one mode at a time; `Session::execute` stays one exhaustive match.

use crate::command::Command;
use crate::config::Config;
use crate::event::InputEvent;
use crate::keymap::{KeyPress, Keymap};
use crate::session::Session;

/// Dispatches input events to a [`Session`].
#[derive(Debug, Clone)]
pub struct Interpreter {
    keymap: Keymap,
    /// Lines scrolled per wheel notch
    scroll_lines: usize,
}

impl Interpreter {
    /// Creates an interpreter with the given keymap.
    pub fn new(keymap: Keymap) -> Self {
        Self {
            keymap,
            scroll_lines: 1,
        }
    }

    /// Creates an interpreter from the user's configuration.
    pub fn from_config(config: &Config) -> Self {
        Self {
            keymap: Keymap::from_config(&config.keyboard),
            scroll_lines: config.editor.scroll_lines.max(1),
        }
    }

    pub fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    /// Resolves a key press against the session's current mode.
    pub fn resolve(&self, session: &Session, key: &KeyPress) -> Option<Command> {
        self.keymap.lookup(session.mode(), key)
    }

    /// Applies one event and reports whether the host should redraw.
    ///
    /// At most one edit, movement or mode transition happens per event.
    /// Unbound keys and edits at buffer boundaries are no-ops.
    pub fn handle(&self, event: &InputEvent, session: &mut Session) -> bool {
        match event {
            InputEvent::Text(text) => session.insert_text(text),
            InputEvent::Key(key) => match self.resolve(session, key) {
                Some(command) => {
                    tracing::trace!("{} [{}] -> {}", key, session.mode(), command.name());
                    session.execute(command)
                }
                None => false,
            },
            InputEvent::Scroll { lines } => {
                let step = isize::try_from(self.scroll_lines).unwrap_or(isize::MAX);
                session.scroll(lines.saturating_mul(step).saturating_neg())
            }
            InputEvent::Redraw => true,
        }
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new(Keymap::new())
    }
}
