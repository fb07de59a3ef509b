// Chunk: docs/chunks/editor_session - Editor session and keystroke routing
// Chunk: docs/chunks/file_commands - New/Open/Save flows with host dialogs
//!
//! The editor session: the single owner of buffer, history, and font.
//!
//! [`EditorSession`] is the state-transition core of the editor. The host
//! delivers key events to [`EditorSession::handle_key`] and menu selections
//! to [`EditorSession::execute`]; both mutate the buffer/history pair and
//! republish the word-count status through the [`EditorHost`] surface.
//!
//! # Keystroke contract
//!
//! Every keystroke routed to the buffer (edits and movement alike) first
//! records a snapshot of the content as it was before the keystroke, then
//! applies its effect, then refreshes the word count. Movement-only
//! keystrokes therefore record snapshots equal to the content; undo's
//! equality check consumes those entries silently.
//!
//! # Error handling
//!
//! Dialog cancellation aborts the in-progress command with no side effects.
//! File-system failures are recovered and reported through an error alert;
//! the session state is left as it was (a failed open keeps the old buffer,
//! a failed save keeps the unsaved-changes marker).

use std::fs;

use plain_edit_buffer::TextBuffer;

use crate::command::Command;
use crate::font::FontSpec;
use crate::history::History;
use crate::host::{EditorHost, SaveChoice};
use crate::input::{Key, KeyEvent};
use crate::shortcuts::resolve_command;
use crate::status;

/// Result of handling an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    /// The event was consumed; the host must suppress its default handling
    Yes,
    /// The event was not handled (should propagate or be ignored)
    No,
}

/// The editor session owning all document state.
///
/// One session per window. Command handlers take the host surface as an
/// explicit parameter so the session itself stays free of platform
/// dependencies and is trivially testable with a scripted host.
#[derive(Debug, Default)]
pub struct EditorSession {
    /// The document content
    buffer: TextBuffer,
    /// Undo/redo snapshot stacks
    history: History,
    /// The current global font
    font: FontSpec,
}

impl EditorSession {
    /// Creates a session with an empty document and the default font.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the document buffer.
    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    /// Returns the document content.
    pub fn content(&self) -> &str {
        self.buffer.content()
    }

    /// Returns the undo/redo history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Returns the current font specification.
    pub fn font(&self) -> &FontSpec {
        &self.font
    }

    /// Returns true if the document has edits recorded since the last save.
    pub fn has_unsaved_changes(&self) -> bool {
        self.history.has_unsaved_changes()
    }

    /// Republishes the word-count status line.
    ///
    /// Called after every mutation; hosts also call it once at startup to
    /// seed the status bar.
    pub fn refresh_status(&self, host: &mut dyn EditorHost) {
        host.set_status(&status::status_line(self.buffer.content()));
    }

    // ==================== Keystroke Routing ====================

    /// Handles a keyboard event from the host.
    ///
    /// Resolution order:
    /// 1. Ctrl+key bindings resolve to commands and execute.
    /// 2. Edit keys (printable characters, Return, Tab, Backspace, Delete)
    ///    record a snapshot and mutate the buffer.
    /// 3. Movement keys (arrows, Home, End) record a snapshot and move the
    ///    cursor; Shift extends the selection.
    /// 4. Anything else is reported unhandled.
    ///
    /// Returns [`Handled::Yes`] for consumed events so the host suppresses
    /// its default handling (the select-all contract relies on this).
    pub fn handle_key(&mut self, event: KeyEvent, host: &mut dyn EditorHost) -> Handled {
        if let Some(command) = resolve_command(&event) {
            self.execute(command, host);
            return Handled::Yes;
        }

        // Unrecognized chords are not keystrokes for the buffer
        if event.modifiers.control || event.modifiers.alt {
            return Handled::No;
        }

        match &event.key {
            Key::Char(ch) => {
                self.record_snapshot();
                self.buffer.insert_char(*ch);
            }
            Key::Return => {
                self.record_snapshot();
                self.buffer.insert_char('\n');
            }
            Key::Tab => {
                self.record_snapshot();
                self.buffer.insert_char('\t');
            }
            Key::Backspace => {
                self.record_snapshot();
                self.buffer.delete_backward();
            }
            Key::Delete => {
                self.record_snapshot();
                self.buffer.delete_forward();
            }
            key @ (Key::Left | Key::Right | Key::Up | Key::Down | Key::Home | Key::End) => {
                self.record_snapshot();
                self.apply_movement(key, event.modifiers.shift);
            }
            Key::Escape => return Handled::No,
        }

        self.refresh_status(host);
        Handled::Yes
    }

    /// Records a pre-keystroke snapshot of the current content.
    fn record_snapshot(&mut self) {
        self.history.record(self.buffer.content().to_owned());
    }

    /// Moves the cursor for a movement key, extending the selection when
    /// Shift is held.
    fn apply_movement(&mut self, key: &Key, extend: bool) {
        let target = match key {
            Key::Left => self.buffer.prev_boundary(),
            Key::Right => self.buffer.next_boundary(),
            Key::Up => self.buffer.offset_above(),
            Key::Down => self.buffer.offset_below(),
            Key::Home => 0,
            Key::End => self.buffer.len(),
            _ => self.buffer.cursor(),
        };
        if extend {
            if self.buffer.selection_anchor().is_none() {
                self.buffer.set_selection_anchor_at_cursor();
            }
            self.buffer.move_cursor_preserving_selection(target);
        } else {
            self.buffer.set_cursor(target);
        }
    }

    // ==================== Command Dispatch ====================

    /// Executes a command by identifier.
    ///
    /// This is the entry point for menu selections; key bindings arrive here
    /// through [`EditorSession::handle_key`].
    pub fn execute(&mut self, command: Command, host: &mut dyn EditorHost) {
        match command {
            Command::New => self.new_file(host),
            Command::Open => self.open_file(host),
            Command::Save => self.save_file(host),
            Command::Undo => self.undo(host),
            Command::Redo => self.redo(host),
            Command::Cut => self.cut(host),
            Command::Copy => self.copy(host),
            Command::Paste => self.paste(host),
            Command::SelectAll => self.select_all(),
            Command::ChangeFont => self.change_font(host),
        }
    }

    // ==================== File Commands ====================

    /// Resolves unsaved changes before a destructive command.
    ///
    /// Returns true if the command should proceed. Choosing "save" runs the
    /// Save command first and proceeds regardless of whether the save dialog
    /// was cancelled.
    fn resolve_unsaved_changes(&mut self, message: &str, host: &mut dyn EditorHost) -> bool {
        if !self.history.has_unsaved_changes() {
            return true;
        }
        match host.confirm_unsaved_changes(message) {
            SaveChoice::Cancel => false,
            SaveChoice::Discard => true,
            SaveChoice::Save => {
                self.save_file(host);
                true
            }
        }
    }

    /// File > New: clears the document after resolving unsaved changes.
    fn new_file(&mut self, host: &mut dyn EditorHost) {
        let proceed =
            self.resolve_unsaved_changes("Do you want to save changes before creating a new file?", host);
        if !proceed {
            return;
        }
        self.buffer.replace_content("");
        self.history.clear();
        self.refresh_status(host);
    }

    /// File > Open: loads a chosen file after resolving unsaved changes.
    fn open_file(&mut self, host: &mut dyn EditorHost) {
        let proceed =
            self.resolve_unsaved_changes("Do you want to save changes before opening a file?", host);
        if !proceed {
            return;
        }

        let path = match host.pick_open_file() {
            Some(path) => path,
            None => return, // dialog cancelled - state untouched
        };

        match fs::read_to_string(&path) {
            Ok(content) => {
                self.buffer.replace_content(&content);
                self.history.clear();
                self.refresh_status(host);
            }
            Err(err) => {
                host.show_error(&format!("Could not open {}: {}", path.display(), err));
            }
        }
    }

    /// File > Save: writes the document to a chosen path.
    ///
    /// A successful save clears the undo stack, resetting the editor's
    /// notion of "unsaved changes". A failed write keeps it.
    fn save_file(&mut self, host: &mut dyn EditorHost) {
        let path = match host.pick_save_file() {
            Some(path) => path,
            None => return, // dialog cancelled - no write, unsaved state kept
        };

        match fs::write(&path, self.buffer.content()) {
            Ok(()) => {
                host.show_info("File saved successfully.");
                self.history.clear_undo_stack();
            }
            Err(err) => {
                host.show_error(&format!("Could not save {}: {}", path.display(), err));
            }
        }
    }

    // ==================== Edit Commands ====================

    /// Edit > Undo: rolls the buffer back to the previous snapshot.
    fn undo(&mut self, host: &mut dyn EditorHost) {
        if let Some(snapshot) = self.history.undo(self.buffer.content()) {
            self.buffer.replace_content(&snapshot);
            self.refresh_status(host);
        }
    }

    /// Edit > Redo: reapplies the most recently undone snapshot.
    fn redo(&mut self, host: &mut dyn EditorHost) {
        if let Some(snapshot) = self.history.redo(self.buffer.content()) {
            self.buffer.replace_content(&snapshot);
            self.refresh_status(host);
        }
    }

    /// Edit > Cut: moves the selection to the clipboard.
    fn cut(&mut self, host: &mut dyn EditorHost) {
        let selected = match self.buffer.selected_text() {
            Some(text) => text.to_owned(),
            None => return,
        };
        host.set_clipboard(&selected);
        self.record_snapshot();
        self.buffer.delete_selection();
        self.refresh_status(host);
    }

    /// Edit > Copy: copies the selection to the clipboard.
    ///
    /// No history effect and no status refresh; the content is unchanged.
    fn copy(&mut self, host: &mut dyn EditorHost) {
        if let Some(text) = self.buffer.selected_text() {
            host.set_clipboard(text);
        }
    }

    /// Edit > Paste: inserts clipboard text at the cursor, replacing any
    /// selection.
    fn paste(&mut self, host: &mut dyn EditorHost) {
        let text = match host.clipboard_text() {
            Some(text) => text,
            None => return, // clipboard holds no text
        };
        self.record_snapshot();
        self.buffer.insert_str(&text);
        self.refresh_status(host);
    }

    /// Edit > Select All: selects the whole document with the insertion
    /// cursor at the start.
    fn select_all(&mut self) {
        self.buffer.select_all();
    }

    // ==================== Format Commands ====================

    /// Format > Font: prompts for a "FamilyName Size" specification.
    ///
    /// The prompt is pre-filled with the current font. A malformed reply is
    /// reported and leaves the font unchanged; cancellation is a no-op.
    fn change_font(&mut self, host: &mut dyn EditorHost) {
        let initial = self.font.to_string();
        let reply = match host.prompt_string("Enter font (e.g. Helvetica 12):", &initial) {
            Some(reply) => reply,
            None => return,
        };
        match reply.parse::<FontSpec>() {
            Ok(font) => {
                self.font = font;
                host.apply_font(&self.font);
            }
            Err(_) => {
                host.show_error("Invalid font format. Please use 'FontName Size' format.");
            }
        }
    }
}
