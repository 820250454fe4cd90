//! Editor commands.
//!
//! ## Learning: The Command Pattern
//!
//! Key bindings do not call functions directly; they map to a `Command`
//! value. Commands are plain data:
//! - the keymap is a table of values that can be built, overridden from
//!   config, and inspected in tests
//! - `Session::execute` has one exhaustive
//!   `match`, so adding a variant without handling it is a compile error

use std::str::FromStr;

use crate::CoreError;

/// Built-in editor commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    // Cursor movement
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    WordForward,
    WordBackward,
    LineStart,
    LineEnd,

    // Mode
    EnterInsert,
    EnterNormal,
    EnterVisual,
    EnterCommand,

    // Edit
    Newline,
    DeleteBackward,
    DeleteWordBackward,
    DeleteForward,
    JoinLine,
}

/// Which part of the session a command touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Motion,
    ModeChange,
    Edit,
}

impl Command {
    /// Every command, in declaration order.
    pub const ALL: [Command; 17] = [
        Command::MoveLeft,
        Command::MoveRight,
        Command::MoveUp,
        Command::MoveDown,
        Command::WordForward,
        Command::WordBackward,
        Command::LineStart,
        Command::LineEnd,
        Command::EnterInsert,
        Command::EnterNormal,
        Command::EnterVisual,
        Command::EnterCommand,
        Command::Newline,
        Command::DeleteBackward,
        Command::DeleteWordBackward,
        Command::DeleteForward,
        Command::JoinLine,
    ];

    /// Stable snake_case name used in config bindings.
    pub fn name(&self) -> &'static str {
        match self {
            Command::MoveLeft => "move_left",
            Command::MoveRight => "move_right",
            Command::MoveUp => "move_up",
            Command::MoveDown => "move_down",
            Command::WordForward => "word_forward",
            Command::WordBackward => "word_backward",
            Command::LineStart => "line_start",
            Command::LineEnd => "line_end",
            Command::EnterInsert => "enter_insert",
            Command::EnterNormal => "enter_normal",
            Command::EnterVisual => "enter_visual",
            Command::EnterCommand => "enter_command",
            Command::Newline => "newline",
            Command::DeleteBackward => "delete_backward",
            Command::DeleteWordBackward => "delete_word_backward",
            Command::DeleteForward => "delete_forward",
            Command::JoinLine => "join_line",
        }
    }

    /// Returns the command's display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Command::MoveLeft => "Move Left",
            Command::MoveRight => "Move Right",
            Command::MoveUp => "Move Up",
            Command::MoveDown => "Move Down",
            Command::WordForward => "Word Forward",
            Command::WordBackward => "Word Backward",
            Command::LineStart => "Move to Line Start",
            Command::LineEnd => "Move to Line End",
            Command::EnterInsert => "Enter Insert Mode",
            Command::EnterNormal => "Enter Normal Mode",
            Command::EnterVisual => "Enter Visual Mode",
            Command::EnterCommand => "Enter Command Mode",
            Command::Newline => "Newline",
            Command::DeleteBackward => "Delete Backward",
            Command::DeleteWordBackward => "Delete Word Backward",
            Command::DeleteForward => "Delete Forward",
            Command::JoinLine => "Join Line",
        }
    }

    pub fn kind(&self) -> CommandKind {
        match self {
            Command::MoveLeft
            | Command::MoveRight
            | Command::MoveUp
            | Command::MoveDown
            | Command::WordForward
            | Command::WordBackward
            | Command::LineStart
            | Command::LineEnd => CommandKind::Motion,
            Command::EnterInsert
            | Command::EnterNormal
            | Command::EnterVisual
            | Command::EnterCommand => CommandKind::ModeChange,
            Command::Newline
            | Command::DeleteBackward
            | Command::DeleteWordBackward
            | Command::DeleteForward
            | Command::JoinLine => CommandKind::Edit,
        }
    }
}

impl FromStr for Command {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Command::ALL
            .into_iter()
            .find(|cmd| cmd.name() == s)
            .ok_or_else(|| CoreError::UnknownCommand(s.to_string()))
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_display_name() {
        assert_eq!(Command::JoinLine.display_name(), "Join Line");
        assert_eq!(Command::EnterInsert.to_string(), "Enter Insert Mode");
    }

    #[test]
    fn test_names_parse_back() {
        for cmd in Command::ALL {
            assert_eq!(cmd.name().parse::<Command>().unwrap(), cmd);
        }
    }

    #[test]
    fn test_unknown_name() {
        let err = "save".parse::<Command>().unwrap_err();
        assert!(matches!(err, CoreError::UnknownCommand(name) if name == "save"));
    }

    #[test]
    fn test_kinds() {
        assert_eq!(Command::WordForward.kind(), CommandKind::Motion);
        assert_eq!(Command::EnterVisual.kind(), CommandKind::ModeChange);
        assert_eq!(Command::Newline.kind(), CommandKind::Edit);
    }
}
