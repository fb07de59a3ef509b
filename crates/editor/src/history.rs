// Chunk: docs/chunks/snapshot_history - Whole-content undo/redo snapshot stacks
//!
//! Undo/redo history as two stacks of full-content snapshots.
//!
//! Every keystroke the session routes to the buffer records a snapshot of
//! the content as it was before the keystroke. Undo pops that stack; redo
//! pops the snapshots undo set aside. Snapshots are whole-document copies:
//! the editor replaces content wholesale rather than replaying deltas, which
//! keeps the model trivial at the cost of memory proportional to history
//! depth. Documents here are small.
//!
//! # Design
//!
//! Recording a fresh snapshot clears the redo stack, so redo can never
//! reapply a snapshot from a superseded timeline. Undo and redo both consume
//! their stack entry even when it equals the current content (a no-op
//! keystroke recorded an unchanged snapshot); in that case nothing is pushed
//! to the opposite stack and the content is untouched.
//!
//! The undo stack doubles as the "unsaved changes" indicator: the editor
//! treats the document as unsaved exactly when the stack is non-empty, and
//! a successful save clears it.

/// Undo/redo history of full-content snapshots.
#[derive(Debug, Clone, Default)]
pub struct History {
    /// Snapshots taken before each recorded keystroke, most recent last
    undo_stack: Vec<String>,
    /// Snapshots set aside by undo, most recent last
    redo_stack: Vec<String>,
}

impl History {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a snapshot of the content as it is before an edit.
    ///
    /// Clears the redo stack: a fresh edit supersedes any undone timeline.
    pub fn record(&mut self, snapshot: String) {
        self.undo_stack.push(snapshot);
        self.redo_stack.clear();
    }

    /// Pops the most recent undo snapshot.
    ///
    /// If the snapshot differs from `current`, the current content is pushed
    /// onto the redo stack and the snapshot is returned for the caller to
    /// apply. If it equals `current` (the recorded keystroke changed
    /// nothing), the entry is consumed silently and `None` is returned.
    /// An empty undo stack also returns `None`.
    pub fn undo(&mut self, current: &str) -> Option<String> {
        let snapshot = self.undo_stack.pop()?;
        if snapshot == current {
            return None;
        }
        self.redo_stack.push(current.to_owned());
        Some(snapshot)
    }

    /// Pops the most recent redo snapshot. Symmetric to [`History::undo`]:
    /// on a real change the current content moves to the undo stack and the
    /// snapshot is returned; an equal or missing snapshot is a silent no-op.
    pub fn redo(&mut self, current: &str) -> Option<String> {
        let snapshot = self.redo_stack.pop()?;
        if snapshot == current {
            return None;
        }
        self.undo_stack.push(current.to_owned());
        Some(snapshot)
    }

    /// Returns true if the document has edits recorded since the last save
    /// (or since load). This is the editor's whole definition of "unsaved".
    pub fn has_unsaved_changes(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Clears the undo stack, marking the document as saved.
    ///
    /// The redo stack is kept: saving does not invalidate undone edits.
    pub fn clear_undo_stack(&mut self) {
        self.undo_stack.clear();
    }

    /// Clears both stacks. Used when the document is replaced (new/open).
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    /// Number of snapshots available to undo.
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    /// Number of snapshots available to redo.
    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }
}
