//! Keyboard model and the per-mode binding table.
//!
//! ## Learning: Tables over Branches
//!
//! Rather than a nested `match mode { .. match key { .. } }`, bindings live
//! in a `HashMap<(EditorMode, KeyPress), Command>`. Each mode's behaviour is
//! then data: it can be listed, overridden from the config file, and tested
//! one mode at a time.

use crate::command::Command;
use crate::config::KeyboardConfig;
use crate::mode::EditorMode;
use crate::{CoreError, CoreResult};
use std::collections::HashMap;

/// Keyboard modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool, // Cmd on macOS, Win on Windows
}

impl Modifiers {
    /// No modifiers pressed.
    pub const NONE: Modifiers = Modifiers {
        ctrl: false,
        alt: false,
        shift: false,
        meta: false,
    };

    /// Ctrl modifier.
    pub const CTRL: Modifiers = Modifiers {
        ctrl: true,
        alt: false,
        shift: false,
        meta: false,
    };

    /// Shift modifier.
    pub const SHIFT: Modifiers = Modifiers {
        ctrl: false,
        alt: false,
        shift: true,
        meta: false,
    };

    /// Returns true if no modifiers are pressed.
    pub fn is_empty(&self) -> bool {
        !self.ctrl && !self.alt && !self.shift && !self.meta
    }

    /// Returns true if a modifier that turns a key into a chord is held.
    pub fn is_chord(&self) -> bool {
        self.ctrl || self.alt || self.meta
    }

    /// Parses modifiers from a string like "ctrl+shift".
    pub fn parse(s: &str) -> Self {
        let mut mods = Modifiers::NONE;
        let lower = s.to_lowercase();
        if lower.contains("ctrl") || lower.contains("control") {
            mods.ctrl = true;
        }
        if lower.contains("alt") || lower.contains("option") {
            mods.alt = true;
        }
        if lower.contains("shift") {
            mods.shift = true;
        }
        if lower.contains("meta") || lower.contains("cmd") || lower.contains("win") {
            mods.meta = true;
        }
        mods
    }
}

impl std::fmt::Display for Modifiers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut parts = Vec::new();
        if self.ctrl {
            parts.push("Ctrl");
        }
        if self.alt {
            parts.push("Alt");
        }
        if self.shift {
            parts.push("Shift");
        }
        if self.meta {
            parts.push("Meta");
        }
        write!(f, "{}", parts.join("+"))
    }
}

/// A key code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Tab,
    Backspace,
    Delete,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    Insert,
}

impl Key {
    /// Parses a key from a string.
    pub fn parse(s: &str) -> Option<Self> {
        let lower = s.to_lowercase();
        match lower.as_str() {
            "enter" | "return" => Some(Key::Enter),
            "tab" => Some(Key::Tab),
            "backspace" | "bs" => Some(Key::Backspace),
            "delete" | "del" => Some(Key::Delete),
            "escape" | "esc" => Some(Key::Escape),
            "up" => Some(Key::Up),
            "down" => Some(Key::Down),
            "left" => Some(Key::Left),
            "right" => Some(Key::Right),
            "home" => Some(Key::Home),
            "end" => Some(Key::End),
            "insert" | "ins" => Some(Key::Insert),
            "space" => Some(Key::Char(' ')),
            _ => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Some(Key::Char(c)),
                    _ => None,
                }
            }
        }
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Key::Char(' ') => write!(f, "Space"),
            Key::Char(c) => write!(f, "{}", c),
            Key::Enter => write!(f, "Enter"),
            Key::Tab => write!(f, "Tab"),
            Key::Backspace => write!(f, "Backspace"),
            Key::Delete => write!(f, "Delete"),
            Key::Escape => write!(f, "Escape"),
            Key::Up => write!(f, "Up"),
            Key::Down => write!(f, "Down"),
            Key::Left => write!(f, "Left"),
            Key::Right => write!(f, "Right"),
            Key::Home => write!(f, "Home"),
            Key::End => write!(f, "End"),
            Key::Insert => write!(f, "Insert"),
        }
    }
}

/// A key press event.
///
/// Shift is folded into character keys: `shift+j` and `J` are the same
/// press, so bindings can be written either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyPress {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyPress {
    /// Creates a new key press.
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        let mut press = Self { key, modifiers };
        if let Key::Char(c) = press.key {
            if press.modifiers.shift {
                press.key = Key::Char(upper(c));
                press.modifiers.shift = false;
            }
        }
        press
    }

    /// A key press without modifiers.
    pub fn plain(key: Key) -> Self {
        Self::new(key, Modifiers::NONE)
    }

    /// Parses a key string like "ctrl+left" or "J".
    pub fn parse(s: &str) -> Option<Self> {
        // "+" on its own, or as the last part of "ctrl++"
        let (mod_str, key_str) = match s.strip_suffix("++") {
            Some(mods) => (mods, "+"),
            None if s == "+" => ("", "+"),
            None => match s.rsplit_once('+') {
                Some((mods, key)) => (mods, key),
                None => ("", s),
            },
        };

        let key = Key::parse(key_str)?;
        Some(Self::new(key, Modifiers::parse(mod_str)))
    }
}

fn upper(c: char) -> char {
    let mut up = c.to_uppercase();
    match (up.next(), up.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

impl std::fmt::Display for KeyPress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.modifiers.is_empty() {
            write!(f, "{}", self.key)
        } else {
            write!(f, "{}+{}", self.modifiers, self.key)
        }
    }
}

/// Mode-conditioned key bindings.
#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: HashMap<(EditorMode, KeyPress), Command>,
}

impl Keymap {
    /// Creates a keymap with default bindings.
    pub fn new() -> Self {
        let mut keymap = Self::empty();
        keymap.add_default_bindings();
        keymap
    }

    /// Creates a keymap with no bindings at all.
    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Creates the default keymap plus the user's bindings.
    ///
    /// Invalid entries are logged and skipped so that one typo does not
    /// prevent the editor from starting.
    pub fn from_config(config: &KeyboardConfig) -> Self {
        let mut keymap = Self::new();

        for (binding, cmd_str) in &config.bindings {
            let parsed = Self::parse_binding(binding)
                .and_then(|(mode, key)| Ok((mode, key, cmd_str.parse::<Command>()?)));
            match parsed {
                Ok((mode, key, cmd)) => {
                    tracing::debug!("Binding {} {} to {}", mode.name(), key, cmd.name());
                    keymap.bind(mode, key, cmd);
                }
                Err(e) => tracing::warn!("Ignoring key binding {:?}: {}", binding, e),
            }
        }

        keymap
    }

    /// Parses a binding string like "normal ctrl+d".
    pub fn parse_binding(s: &str) -> CoreResult<(EditorMode, KeyPress)> {
        let invalid = || CoreError::InvalidBinding(s.to_string());
        let (mode_str, key_str) = s.trim().split_once(char::is_whitespace).ok_or_else(invalid)?;
        let mode = EditorMode::parse(mode_str).ok_or_else(invalid)?;
        let key = KeyPress::parse(key_str.trim()).ok_or_else(invalid)?;
        Ok((mode, key))
    }

    fn add_default_bindings(&mut self) {
        use crate::command::Command::*;
        use EditorMode::{Command as CommandMode, Insert, Normal, Visual};

        let plain = KeyPress::plain;
        let ctrl = |key| KeyPress::new(key, Modifiers::CTRL);

        let motions = [
            (plain(Key::Char('h')), MoveLeft),
            (plain(Key::Left), MoveLeft),
            (plain(Key::Char('l')), MoveRight),
            (plain(Key::Right), MoveRight),
            (plain(Key::Char('k')), MoveUp),
            (plain(Key::Up), MoveUp),
            (plain(Key::Char('j')), MoveDown),
            (plain(Key::Down), MoveDown),
            (plain(Key::Char('w')), WordForward),
            (ctrl(Key::Right), WordForward),
            (plain(Key::Char('b')), WordBackward),
            (ctrl(Key::Left), WordBackward),
            (plain(Key::Char('0')), LineStart),
            (plain(Key::Home), LineStart),
            (plain(Key::Char('$')), LineEnd),
            (plain(Key::End), LineEnd),
        ];
        for (key, cmd) in motions {
            self.bind(Normal, key, cmd);
            self.bind(Visual, key, cmd);
        }

        let bindings = [
            // Normal mode
            (Normal, plain(Key::Char('i')), EnterInsert),
            (Normal, plain(Key::Insert), EnterInsert),
            (Normal, plain(Key::Char('v')), EnterVisual),
            (Normal, plain(Key::Char(':')), EnterCommand),
            (Normal, plain(Key::Char('x')), DeleteForward),
            (Normal, plain(Key::Delete), DeleteForward),
            (Normal, plain(Key::Char('J')), JoinLine),
            // Visual mode
            (Visual, plain(Key::Escape), EnterNormal),
            (Visual, plain(Key::Char('v')), EnterNormal),
            // Command mode
            (CommandMode, plain(Key::Escape), EnterNormal),
            // Insert mode: control keys only, printable keys arrive as text
            (Insert, plain(Key::Escape), EnterNormal),
            (Insert, plain(Key::Enter), Newline),
            (Insert, plain(Key::Backspace), DeleteBackward),
            (Insert, ctrl(Key::Backspace), DeleteWordBackward),
            (Insert, plain(Key::Delete), DeleteForward),
            (Insert, plain(Key::Left), MoveLeft),
            (Insert, plain(Key::Right), MoveRight),
            (Insert, plain(Key::Up), MoveUp),
            (Insert, plain(Key::Down), MoveDown),
            (Insert, ctrl(Key::Right), WordForward),
            (Insert, ctrl(Key::Left), WordBackward),
            (Insert, plain(Key::Home), LineStart),
            (Insert, plain(Key::End), LineEnd),
        ];
        for (mode, key, cmd) in bindings {
            self.bind(mode, key, cmd);
        }
    }

    /// Binds a key in one mode, returning the command it replaced.
    pub fn bind(&mut self, mode: EditorMode, key: KeyPress, command: Command) -> Option<Command> {
        self.bindings.insert((mode, key), command)
    }

    /// Removes a binding.
    pub fn unbind(&mut self, mode: EditorMode, key: &KeyPress) -> Option<Command> {
        self.bindings.remove(&(mode, *key))
    }

    /// Looks up the command bound to a key in a mode.
    pub fn lookup(&self, mode: EditorMode, key: &KeyPress) -> Option<Command> {
        self.bindings.get(&(mode, *key)).copied()
    }

    /// Iterates over the bindings of one mode.
    pub fn bindings(&self, mode: EditorMode) -> impl Iterator<Item = (&KeyPress, Command)> {
        self.bindings
            .iter()
            .filter(move |((m, _), _)| *m == mode)
            .map(|((_, key), cmd)| (key, *cmd))
    }
}

impl Default for Keymap {
    fn default() -> Self {
        Self::new()
    }
}
