//! # Texed UI
//!
//! The window around the editing core, built with iced.
//!
//! ## Architecture
//!
//! The UI follows the Elm architecture (TEA):
//! - **Model**: [`App`] owns the [`Session`](texed_core::Session)
//! - **Message**: raw window events (keys, wheel, resize, focus)
//! - **Update**: translate a message into an
//!   [`InputEvent`](texed_core::InputEvent) and hand it to the interpreter
//! - **View**: read the session and draw it; never mutate it
//!
//! ## Learning: Keep the Translation Pure
//!
//! Everything between an iced event and a core event lives in [`input`] as
//! plain functions. They are unit tested without opening a window.

pub mod app;
pub mod input;
pub mod theme;

pub use app::{run, App, Flags};
pub use theme::{CursorShape, Metrics, Palette};
