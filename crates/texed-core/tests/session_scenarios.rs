//! Whole-session scenarios driven through the public API only.

use std::io::Write;

use texed_core::{EditorMode, InputEvent, Interpreter, Key, KeyPress, Modifiers, Session};

fn open(contents: &str) -> (tempfile::NamedTempFile, Session) {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    let session = Session::open(file.path()).unwrap();
    (file, session)
}

fn press(key: Key) -> InputEvent {
    InputEvent::Key(KeyPress::plain(key))
}

fn feed(interpreter: &Interpreter, session: &mut Session, events: &[InputEvent]) {
    for event in events {
        interpreter.handle(event, session);
    }
}

#[test]
fn open_reads_lines_from_disk() {
    let (file, session) = open("first\nsecond\n");
    assert_eq!(session.buffer().lines(), ["first", "second"]);
    assert_eq!(session.source_name(), file.path());
    assert_eq!(session.mode(), EditorMode::Normal);
}

#[test]
fn open_empty_file_has_one_line() {
    let (_file, session) = open("");
    assert_eq!(session.buffer().len_lines(), 1);
    assert_eq!(session.buffer().line(0), Some(""));
}

#[test]
fn open_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Session::open(dir.path().join("missing.txt")).unwrap_err();
    assert!(err.to_string().contains("missing.txt"));
}

#[test]
fn typing_a_paragraph() {
    let interpreter = Interpreter::default();
    let (_file, mut session) = open("");

    feed(
        &interpreter,
        &mut session,
        &[
            InputEvent::Key(KeyPress::plain(Key::Char('i'))),
            InputEvent::Text("hello".into()),
            press(Key::Enter),
            InputEvent::Text("wrold".into()),
            press(Key::Left),
            press(Key::Left),
            press(Key::Left),
            press(Key::Backspace),
            press(Key::Right),
            InputEvent::Text("r".into()),
            press(Key::Escape),
        ],
    );

    assert_eq!(session.buffer().lines(), ["hello", "world"]);
    assert_eq!(session.mode(), EditorMode::Normal);
    assert_eq!((session.cursor().row(), session.cursor().column()), (1, 3));
}

#[test]
fn sticky_column_through_short_line() {
    let interpreter = Interpreter::default();
    let (_file, mut session) = open("long line here\nab\nanother long line");

    for _ in 0..5 {
        interpreter.handle(&InputEvent::Key(KeyPress::plain(Key::Char('l'))), &mut session);
    }
    assert_eq!(session.cursor().column(), 5);

    interpreter.handle(&press(Key::Down), &mut session);
    assert_eq!(session.cursor().column(), 2);
    interpreter.handle(&press(Key::Down), &mut session);
    assert_eq!(session.cursor().column(), 5);
}

#[test]
fn word_deletion_and_line_joining() {
    let interpreter = Interpreter::default();
    let (_file, mut session) = open("fn main\n() {}");
    let ctrl_backspace = InputEvent::Key(KeyPress::new(Key::Backspace, Modifiers::CTRL));

    feed(
        &interpreter,
        &mut session,
        &[press(Key::Down), InputEvent::Key(KeyPress::plain(Key::Char('i')))],
    );
    assert!(interpreter.handle(&ctrl_backspace, &mut session));
    assert_eq!(session.buffer().lines(), ["fn main() {}"]);

    interpreter.handle(&ctrl_backspace, &mut session);
    assert_eq!(session.buffer().lines(), ["fn () {}"]);
    assert_eq!(session.cursor().column(), 3);
}

#[test]
fn edits_at_boundaries_are_noops() {
    let interpreter = Interpreter::default();
    let (_file, mut session) = open("x");
    let before = session.buffer().clone();

    for event in [
        press(Key::Up),
        press(Key::Left),
        press(Key::Down),
        InputEvent::Key(KeyPress::plain(Key::Char('J'))),
    ] {
        assert!(!interpreter.handle(&event, &mut session));
    }
    assert_eq!(session.buffer(), &before);
}
