// Chunk: docs/chunks/host_surface - External collaborator surface
//!
//! The host toolkit surface the editor session drives.
//!
//! The session's commands need dialogs (file pickers, confirmation prompts,
//! alerts), clipboard transport, and somewhere to render the font and the
//! status line. All of that is owned by the host GUI toolkit; the core sees
//! it as the [`EditorHost`] trait and stays free of platform dependencies.
//!
//! # Design
//!
//! Every dialog method is a blocking call returning the user's choice.
//! Cancellation is modeled in the return type (`None`, or
//! [`SaveChoice::Cancel`]) rather than as an error: a dismissed dialog is a
//! benign no-op that aborts the in-progress command without side effects.
//!
//! Tests implement this trait with scripted in-process doubles, so no test
//! ever opens a real dialog.

use std::path::PathBuf;

use crate::font::FontSpec;

/// The user's answer to the unsaved-changes prompt.
///
/// Shown by New and Open when the document has unsaved edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveChoice {
    /// Save the document, then continue with the command
    Save,
    /// Discard the edits and continue with the command
    Discard,
    /// Abort the command; the document is untouched
    Cancel,
}

/// The host toolkit as seen by the editor session.
///
/// One implementor per front end: a real GUI toolkit in production, a
/// scripted double in tests.
pub trait EditorHost {
    /// Opens a file-selection dialog filtered to plain-text files.
    ///
    /// Returns the chosen path, or `None` if the user cancelled.
    fn pick_open_file(&mut self) -> Option<PathBuf>;

    /// Opens a save-file dialog with a ".txt" default extension and filter.
    ///
    /// Returns the chosen path, or `None` if the user cancelled.
    fn pick_save_file(&mut self) -> Option<PathBuf>;

    /// Presents the three-way unsaved-changes prompt with the given message.
    fn confirm_unsaved_changes(&mut self, message: &str) -> SaveChoice;

    /// Presents a single-line text prompt pre-filled with `initial`.
    ///
    /// Returns the entered string, or `None` if the user cancelled.
    fn prompt_string(&mut self, message: &str, initial: &str) -> Option<String>;

    /// Shows an informational alert.
    fn show_info(&mut self, message: &str);

    /// Shows an error alert.
    fn show_error(&mut self, message: &str);

    /// Places text on the host clipboard, replacing its contents.
    fn set_clipboard(&mut self, text: &str);

    /// Returns the host clipboard's text contents, or `None` if it holds
    /// no text.
    fn clipboard_text(&mut self) -> Option<String>;

    /// Applies a font to the host's text display.
    fn apply_font(&mut self, font: &FontSpec);

    /// Updates the host's status line (the word-count display).
    fn set_status(&mut self, text: &str);
}
