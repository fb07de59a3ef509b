// Chunk: docs/chunks/editor_commands - Menu command identifiers
//!
//! The closed set of editor commands.
//!
//! Each command is a discrete action invoked by a menu entry or a key
//! binding. The host menu invokes commands by identifier through
//! [`EditorSession::execute`](crate::session::EditorSession::execute); key
//! bindings resolve to the same identifiers via
//! [`resolve_command`](crate::shortcuts::resolve_command). This keeps the
//! key recognition decoupled from the state mutation.
//!
//! The File menu's Exit entry is not a command: it closes the host window
//! directly and never reaches the session.

/// A user-invocable editor action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// File > New (Ctrl+N): clear the document, prompting for unsaved changes
    New,
    /// File > Open (Ctrl+O): load a file, prompting for unsaved changes
    Open,
    /// File > Save (Ctrl+S): write the document to a chosen path
    Save,
    /// Edit > Undo (Ctrl+Z): roll back to the previous snapshot
    Undo,
    /// Edit > Redo (Ctrl+Y): reapply an undone snapshot
    Redo,
    /// Edit > Cut (Ctrl+X): move the selection to the clipboard
    Cut,
    /// Edit > Copy (Ctrl+C): copy the selection to the clipboard
    Copy,
    /// Edit > Paste (Ctrl+V): insert clipboard text at the cursor
    Paste,
    /// Edit > Select All (Ctrl+A): select the whole document
    SelectAll,
    /// Format > Font: prompt for a "Family Size" font specification
    ChangeFont,
}

impl Command {
    /// Returns the menu label for this command.
    pub fn label(&self) -> &'static str {
        match self {
            Command::New => "New",
            Command::Open => "Open",
            Command::Save => "Save",
            Command::Undo => "Undo",
            Command::Redo => "Redo",
            Command::Cut => "Cut",
            Command::Copy => "Copy",
            Command::Paste => "Paste",
            Command::SelectAll => "Select All",
            Command::ChangeFont => "Font",
        }
    }
}
