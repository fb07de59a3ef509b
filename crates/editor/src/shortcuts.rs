// Chunk: docs/chunks/editor_commands - Keyboard shortcut resolution
//!
//! Keyboard shortcut resolution.
//!
//! Maps Ctrl-modified key events to [`Command`] identifiers. The bindings
//! mirror the menu entries to their conventional modifier-key combinations:
//! Ctrl+Z/Y for undo/redo, Ctrl+X/C/V for clipboard, Ctrl+A for select-all,
//! Ctrl+N/O/S for the file commands.
//!
//! # Design
//!
//! Resolution is a pure function of the key event; executing the resolved
//! command is the session's job. This decouples key recognition from state
//! mutation.

use crate::command::Command;
use crate::input::{Key, KeyEvent};

/// Resolves a key event to an editor command.
///
/// Returns `Some(command)` if the event is a recognized Ctrl+key binding,
/// `None` otherwise. Events with Alt held are never commands.
pub fn resolve_command(event: &KeyEvent) -> Option<Command> {
    // Only handle Ctrl+key shortcuts (without Alt)
    if !event.modifiers.control || event.modifiers.alt {
        return None;
    }

    match &event.key {
        Key::Char('z') => Some(Command::Undo),
        Key::Char('y') => Some(Command::Redo),
        Key::Char('x') => Some(Command::Cut),
        Key::Char('c') => Some(Command::Copy),
        Key::Char('v') => Some(Command::Paste),
        Key::Char('a') => Some(Command::SelectAll),
        Key::Char('n') => Some(Command::New),
        Key::Char('o') => Some(Command::Open),
        Key::Char('s') => Some(Command::Save),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Modifiers;

    fn ctrl_key(ch: char) -> KeyEvent {
        KeyEvent::ctrl(ch)
    }

    fn plain_key(ch: char) -> KeyEvent {
        KeyEvent::char(ch)
    }

    #[test]
    fn test_resolves_ctrl_z_to_undo() {
        assert_eq!(resolve_command(&ctrl_key('z')), Some(Command::Undo));
    }

    #[test]
    fn test_resolves_ctrl_y_to_redo() {
        assert_eq!(resolve_command(&ctrl_key('y')), Some(Command::Redo));
    }

    #[test]
    fn test_resolves_clipboard_bindings() {
        assert_eq!(resolve_command(&ctrl_key('x')), Some(Command::Cut));
        assert_eq!(resolve_command(&ctrl_key('c')), Some(Command::Copy));
        assert_eq!(resolve_command(&ctrl_key('v')), Some(Command::Paste));
        assert_eq!(resolve_command(&ctrl_key('a')), Some(Command::SelectAll));
    }

    #[test]
    fn test_resolves_file_bindings() {
        assert_eq!(resolve_command(&ctrl_key('n')), Some(Command::New));
        assert_eq!(resolve_command(&ctrl_key('o')), Some(Command::Open));
        assert_eq!(resolve_command(&ctrl_key('s')), Some(Command::Save));
    }

    #[test]
    fn test_ignores_plain_keys() {
        assert_eq!(resolve_command(&plain_key('z')), None);
        assert_eq!(resolve_command(&plain_key('a')), None);
    }

    #[test]
    fn test_ignores_unbound_ctrl_keys() {
        assert_eq!(resolve_command(&ctrl_key('q')), None);
    }

    #[test]
    fn test_ignores_ctrl_alt_chords() {
        let event = KeyEvent::new(
            Key::Char('z'),
            Modifiers {
                control: true,
                alt: true,
                ..Default::default()
            },
        );
        assert_eq!(resolve_command(&event), None);
    }
}
