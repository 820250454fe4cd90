//! Editing modes.

use serde::{Deserialize, Serialize};

/// The active editing mode (inspired by Vim).
///
/// Exactly one mode is active per session. Only the
/// [`Interpreter`](crate::Interpreter) changes it, and the only thing a mode
/// selects is which key table is consulted. How a mode *looks* (cursor shape,
/// status text colour) is left to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditorMode {
    /// Navigation and line commands
    #[default]
    Normal,
    /// Typing text
    Insert,
    /// Selecting text
    Visual,
    /// Entering commands
    Command,
}

impl EditorMode {
    /// Every mode, in a stable order.
    pub const ALL: [EditorMode; 4] = [
        EditorMode::Normal,
        EditorMode::Insert,
        EditorMode::Visual,
        EditorMode::Command,
    ];

    /// Lowercase name, as used in config files.
    pub fn name(self) -> &'static str {
        match self {
            EditorMode::Normal => "normal",
            EditorMode::Insert => "insert",
            EditorMode::Visual => "visual",
            EditorMode::Command => "command",
        }
    }

    /// Parses a mode name, ignoring case.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(s))
    }
}

impl std::fmt::Display for EditorMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name().to_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_mode_is_normal() {
        assert_eq!(EditorMode::default(), EditorMode::Normal);
    }

    #[test]
    fn test_parse_round_trips_names() {
        for mode in EditorMode::ALL {
            assert_eq!(EditorMode::parse(mode.name()), Some(mode));
        }
        assert_eq!(EditorMode::parse("INSERT"), Some(EditorMode::Insert));
        assert_eq!(EditorMode::parse("replace"), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(EditorMode::Visual.to_string(), "VISUAL");
    }
}
