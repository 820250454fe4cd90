//! Translation from iced input to core events.
//!
//! iced reports a key press as a logical key plus the text it produced. In
//! Insert mode a printable press becomes an [`InputEvent::Text`], including
//! chords whose platform text is printable (AltGr layers). In every other
//! mode, and for named keys and control chords, it becomes an
//! [`InputEvent::Key`] for the binding table. A press is never both.

use iced::keyboard::{self, key::Named};
use iced::mouse::ScrollDelta;
use texed_core::{EditorMode, InputEvent, Key, KeyPress, Modifiers};

/// Converts iced modifier flags.
pub fn modifiers(mods: keyboard::Modifiers) -> Modifiers {
    Modifiers {
        ctrl: mods.control(),
        alt: mods.alt(),
        shift: mods.shift(),
        meta: mods.logo(),
    }
}

/// Maps an iced logical key onto the core key model.
///
/// Keys the editor has no use for (function keys, media keys, ...) map to
/// `None`.
pub fn key(key: &keyboard::Key) -> Option<Key> {
    match key.as_ref() {
        keyboard::Key::Character(c) => {
            let mut chars = c.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => Some(Key::Char(ch)),
                _ => None,
            }
        }
        keyboard::Key::Named(named) => named_key(named),
        keyboard::Key::Unidentified => None,
    }
}

fn named_key(named: Named) -> Option<Key> {
    let key = match named {
        Named::Enter => Key::Enter,
        Named::Tab => Key::Tab,
        Named::Backspace => Key::Backspace,
        Named::Delete => Key::Delete,
        Named::Escape => Key::Escape,
        Named::ArrowUp => Key::Up,
        Named::ArrowDown => Key::Down,
        Named::ArrowLeft => Key::Left,
        Named::ArrowRight => Key::Right,
        Named::Home => Key::Home,
        Named::End => Key::End,
        Named::Insert => Key::Insert,
        Named::Space => Key::Char(' '),
        _ => return None,
    };
    Some(key)
}

/// Builds the core event for one key press in the given mode.
///
/// `text` is what the platform says the press typed, if anything; it wins
/// over the logical key so that dead keys and layouts compose correctly.
pub fn key_event(
    pressed: &keyboard::Key,
    mods: keyboard::Modifiers,
    text: Option<&str>,
    mode: EditorMode,
) -> Option<InputEvent> {
    let press = KeyPress::new(key(pressed)?, modifiers(mods));

    if mode == EditorMode::Insert {
        if let Key::Char(c) = press.key {
            // AltGr and Option layers arrive as chords that still type text
            let typed = text.filter(|t| !t.is_empty() && !t.chars().any(char::is_control));
            match typed {
                Some(t) => return Some(InputEvent::Text(t.to_owned())),
                None if !press.modifiers.is_chord() => {
                    return Some(InputEvent::Text(c.to_string()));
                }
                None => {}
            }
        }
    }

    Some(InputEvent::Key(press))
}

/// Converts a wheel delta into whole notches; positive is towards the top.
///
/// Pixel deltas (touchpads) are divided by the line height.
pub fn wheel_lines(delta: ScrollDelta, line_height: f32) -> isize {
    let lines = match delta {
        ScrollDelta::Lines { y, .. } => y,
        ScrollDelta::Pixels { y, .. } => y / line_height.max(1.0),
    };
    lines.round() as isize
}

#[cfg(test)]
mod tests {
    use super::*;

    fn character(s: &str) -> keyboard::Key {
        keyboard::Key::Character(s.into())
    }

    #[test]
    fn test_named_keys() {
        assert_eq!(key(&keyboard::Key::Named(Named::Escape)), Some(Key::Escape));
        assert_eq!(key(&keyboard::Key::Named(Named::ArrowLeft)), Some(Key::Left));
        assert_eq!(key(&keyboard::Key::Named(Named::Space)), Some(Key::Char(' ')));
        assert_eq!(key(&keyboard::Key::Named(Named::F5)), None);
        assert_eq!(key(&keyboard::Key::Unidentified), None);
    }

    #[test]
    fn test_printable_in_normal_is_a_key() {
        let event = key_event(&character("j"), keyboard::Modifiers::empty(), Some("j"), EditorMode::Normal);
        assert_eq!(event, Some(InputEvent::Key(KeyPress::plain(Key::Char('j')))));
    }

    #[test]
    fn test_shifted_char_folds_modifier() {
        let event = key_event(&character("J"), keyboard::Modifiers::SHIFT, Some("J"), EditorMode::Normal);
        assert_eq!(event, Some(InputEvent::Key(KeyPress::plain(Key::Char('J')))));
    }

    #[test]
    fn test_printable_in_insert_is_text() {
        let event = key_event(&character("j"), keyboard::Modifiers::empty(), Some("j"), EditorMode::Insert);
        assert_eq!(event, Some(InputEvent::Text("j".into())));

        let space = key_event(&keyboard::Key::Named(Named::Space), keyboard::Modifiers::empty(), None, EditorMode::Insert);
        assert_eq!(space, Some(InputEvent::Text(" ".into())));
    }

    #[test]
    fn test_chords_in_insert_stay_keys() {
        let event = key_event(
            &keyboard::Key::Named(Named::Backspace),
            keyboard::Modifiers::CTRL,
            None,
            EditorMode::Insert,
        );
        assert_eq!(
            event,
            Some(InputEvent::Key(KeyPress::new(Key::Backspace, Modifiers::CTRL)))
        );

        let ctrl_a = key_event(&character("a"), keyboard::Modifiers::CTRL, Some("\u{1}"), EditorMode::Insert);
        assert_eq!(ctrl_a, Some(InputEvent::Key(KeyPress::new(Key::Char('a'), Modifiers::CTRL))));
    }

    #[test]
    fn test_altgr_text_in_insert_is_typed() {
        let altgr = keyboard::Modifiers::CTRL | keyboard::Modifiers::ALT;
        let event = key_event(&character("@"), altgr, Some("@"), EditorMode::Insert);
        assert_eq!(event, Some(InputEvent::Text("@".into())));

        let option = key_event(&character("a"), keyboard::Modifiers::ALT, Some("å"), EditorMode::Insert);
        assert_eq!(option, Some(InputEvent::Text("å".into())));

        let chord = KeyPress::new(Key::Char('@'), Modifiers { ctrl: true, alt: true, ..Modifiers::NONE });
        let normal = key_event(&character("@"), altgr, Some("@"), EditorMode::Normal);
        assert_eq!(normal, Some(InputEvent::Key(chord)));
    }

    #[test]
    fn test_escape_in_insert_is_a_key() {
        let event = key_event(
            &keyboard::Key::Named(Named::Escape),
            keyboard::Modifiers::empty(),
            Some("\u{1b}"),
            EditorMode::Insert,
        );
        assert_eq!(event, Some(InputEvent::Key(KeyPress::plain(Key::Escape))));
    }

    #[test]
    fn test_wheel_lines() {
        assert_eq!(wheel_lines(ScrollDelta::Lines { x: 0.0, y: 1.0 }, 20.0), 1);
        assert_eq!(wheel_lines(ScrollDelta::Lines { x: 0.0, y: -2.0 }, 20.0), -2);
        assert_eq!(wheel_lines(ScrollDelta::Pixels { x: 0.0, y: -60.0 }, 20.0), -3);
        assert_eq!(wheel_lines(ScrollDelta::Pixels { x: 0.0, y: 4.0 }, 20.0), 0);
        assert_eq!(wheel_lines(ScrollDelta::Lines { x: 0.0, y: f32::NEG_INFINITY }, 20.0), isize::MIN);
        assert_eq!(wheel_lines(ScrollDelta::Pixels { x: 0.0, y: f32::MAX }, 0.0), isize::MAX);
    }
}
