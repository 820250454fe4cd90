//! # Texed Core
//!
//! The modal editing state machine.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────────┐   InputEvent   ┌─────────────────────────────────────┐
//! │  host / UI   │ ─────────────▶ │ Interpreter                         │
//! │ (rendering,  │                │   Keymap: (mode, key) ─▶ Command     │
//! │  input)      │ ◀───────────── │                                     │
//! └──────────────┘  changed:bool  │ Session                             │
//!        │                        │   LineBuffer  Cursor  Viewport Mode │
//!        └──── read-only queries ▶└─────────────────────────────────────┘
//! ```
//!
//! The host delivers one event at a time, asks whether anything changed,
//! and then queries the session for what to draw. Nothing in this crate
//! draws, spawns work, or holds global state.

pub mod command;
pub mod config;
pub mod event;
pub mod gutter;
pub mod interpreter;
pub mod keymap;
pub mod mode;
pub mod session;

pub use command::Command;
pub use config::{Config, ConfigError};
pub use event::InputEvent;
pub use interpreter::Interpreter;
pub use keymap::{Key, KeyPress, Keymap, Modifiers};
pub use mode::EditorMode;
pub use session::Session;

/// Result type for core operations
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur in core operations
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error(transparent)]
    Buffer(#[from] texed_buffer::BufferError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Invalid key binding: {0}")]
    InvalidBinding(String),
}
