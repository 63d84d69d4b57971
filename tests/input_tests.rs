//! Input mapping tests through the facade crate

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use blockfall::input::{should_quit, KeyBindings};
use blockfall::types::Command;

#[test]
fn test_default_bindings_cover_every_command() {
    let keys = KeyBindings::default();
    for command in Command::ALL {
        assert!(
            !keys.keys_for(command).is_empty(),
            "{:?} has no key",
            command
        );
    }
}

#[test]
fn test_bindings_load_from_json() {
    let json = r#"{"bindings":[
        {"key":"x","command":"Rotate"},
        {"key":"Space","command":"HardDrop"},
        {"key":"Tab","command":"Hold"}
    ]}"#;
    let keys: KeyBindings = serde_json::from_str(json).unwrap();

    assert_eq!(
        keys.command_for(KeyEvent::from(KeyCode::Char('X'))),
        Some(Command::Rotate)
    );
    assert_eq!(
        keys.command_for(KeyEvent::from(KeyCode::Tab)),
        Some(Command::Hold)
    );
    assert_eq!(keys.command_for(KeyEvent::from(KeyCode::Left)), None);
}

#[test]
fn test_quit_is_not_a_command() {
    let keys = KeyBindings::default();
    let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert!(should_quit(ctrl_c));
    assert_eq!(keys.command_for(ctrl_c), None);
    assert_eq!(keys.command_for(KeyEvent::from(KeyCode::Char('q'))), None);
}
