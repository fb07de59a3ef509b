// Chunk: docs/chunks/text_buffer - Text buffer with plain string backing

//! String-backed text buffer with cursor and selection tracking.
//!
//! The buffer holds the full document content as a single `String`. The
//! cursor is a byte offset that always lies on a char boundary; the optional
//! selection anchor is a second offset, and the selection is the span
//! between the two in document order.

use crate::grapheme;

/// A text buffer holding the full document content.
///
/// Mutations either edit at the cursor (insert, delete) or replace the
/// content wholesale (load, undo, redo). Insertion and deletion operate on
/// the active selection first, matching host text-widget behavior.
#[derive(Debug, Clone, Default)]
pub struct TextBuffer {
    /// The document content
    content: String,
    /// Cursor position as a byte offset, always on a char boundary
    cursor: usize,
    /// Selection anchor as a byte offset, if a selection is active
    selection_anchor: Option<usize>,
}

impl TextBuffer {
    /// Creates a new empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a buffer with the given initial content.
    ///
    /// The cursor is placed at the end of the content.
    pub fn from_str(content: &str) -> Self {
        Self {
            content: content.to_owned(),
            cursor: content.len(),
            selection_anchor: None,
        }
    }

    /// Returns the entire buffer content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the content length in bytes.
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Returns true if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Returns the cursor position as a byte offset.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Moves the cursor to the given byte offset, clearing any selection.
    ///
    /// The offset is clamped to the content length and snapped down to the
    /// nearest char boundary.
    pub fn set_cursor(&mut self, offset: usize) {
        self.selection_anchor = None;
        self.cursor = self.snap_to_boundary(offset);
    }

    /// Moves the cursor without touching the selection anchor.
    ///
    /// This is the extension primitive for shift+movement: the host sets an
    /// anchor at the cursor, then moves the cursor with this method.
    pub fn move_cursor_preserving_selection(&mut self, offset: usize) {
        self.cursor = self.snap_to_boundary(offset);
    }

    /// Clamps an offset to the content length and snaps it down to a char
    /// boundary.
    fn snap_to_boundary(&self, offset: usize) -> usize {
        let mut offset = offset.min(self.content.len());
        while !self.content.is_char_boundary(offset) {
            offset -= 1;
        }
        offset
    }

    // ==================== Selection ====================

    /// Sets the selection anchor to the current cursor position.
    pub fn set_selection_anchor_at_cursor(&mut self) {
        self.selection_anchor = Some(self.cursor);
    }

    /// Clears the selection anchor (no selection).
    pub fn clear_selection(&mut self) {
        self.selection_anchor = None;
    }

    /// Returns the selection anchor offset, if any.
    pub fn selection_anchor(&self) -> Option<usize> {
        self.selection_anchor
    }

    /// Returns true if there is an active selection (anchor set and
    /// differing from the cursor).
    pub fn has_selection(&self) -> bool {
        match self.selection_anchor {
            Some(anchor) => anchor != self.cursor,
            None => false,
        }
    }

    /// Returns the selection range as (start, end) byte offsets in document
    /// order, or `None` if there is no active selection.
    pub fn selection_range(&self) -> Option<(usize, usize)> {
        let anchor = self.selection_anchor?;
        if anchor == self.cursor {
            return None;
        }
        if anchor < self.cursor {
            Some((anchor, self.cursor))
        } else {
            Some((self.cursor, anchor))
        }
    }

    /// Returns the text within the selection range, or `None` if there is
    /// no active selection.
    pub fn selected_text(&self) -> Option<&str> {
        let (start, end) = self.selection_range()?;
        Some(&self.content[start..end])
    }

    /// Selects all text in the buffer.
    ///
    /// The anchor is set to the end of the buffer and the cursor moves to
    /// the start, so the insertion point sits at the top of the document.
    pub fn select_all(&mut self) {
        self.selection_anchor = Some(self.content.len());
        self.cursor = 0;
    }

    // ==================== Editing ====================

    /// Inserts a character at the cursor, replacing the selection if one is
    /// active.
    pub fn insert_char(&mut self, ch: char) {
        let mut tmp = [0u8; 4];
        self.insert_str(ch.encode_utf8(&mut tmp));
    }

    /// Inserts a string at the cursor, replacing the selection if one is
    /// active. The cursor ends up after the inserted text.
    pub fn insert_str(&mut self, s: &str) {
        self.delete_selection();
        self.content.insert_str(self.cursor, s);
        self.cursor += s.len();
    }

    /// Deletes the selected text, placing the cursor at the start of the
    /// former selection.
    ///
    /// Returns true if a selection was deleted.
    pub fn delete_selection(&mut self) -> bool {
        let (start, end) = match self.selection_range() {
            Some(range) => range,
            None => {
                self.selection_anchor = None;
                return false;
            }
        };
        self.content.replace_range(start..end, "");
        self.cursor = start;
        self.selection_anchor = None;
        true
    }

    /// Deletes backward from the cursor: the selection if one is active,
    /// otherwise one grapheme cluster to the left.
    ///
    /// Returns true if content changed.
    pub fn delete_backward(&mut self) -> bool {
        if self.has_selection() {
            return self.delete_selection();
        }
        self.selection_anchor = None;
        if self.cursor == 0 {
            return false;
        }
        let start = grapheme::boundary_left(&self.content, self.cursor);
        self.content.replace_range(start..self.cursor, "");
        self.cursor = start;
        true
    }

    /// Deletes forward from the cursor: the selection if one is active,
    /// otherwise one grapheme cluster to the right.
    ///
    /// Returns true if content changed.
    pub fn delete_forward(&mut self) -> bool {
        if self.has_selection() {
            return self.delete_selection();
        }
        self.selection_anchor = None;
        if self.cursor >= self.content.len() {
            return false;
        }
        let end = grapheme::boundary_right(&self.content, self.cursor);
        self.content.replace_range(self.cursor..end, "");
        true
    }

    /// Replaces the entire content.
    ///
    /// Used for load, undo, and redo, which swap the document wholesale.
    /// The cursor moves to the end of the new content and any selection is
    /// cleared.
    pub fn replace_content(&mut self, text: &str) {
        self.content.clear();
        self.content.push_str(text);
        self.cursor = self.content.len();
        self.selection_anchor = None;
    }

    // ==================== Cursor Movement ====================

    /// Returns the offset one grapheme cluster to the left of the cursor.
    pub fn prev_boundary(&self) -> usize {
        grapheme::boundary_left(&self.content, self.cursor)
    }

    /// Returns the offset one grapheme cluster to the right of the cursor.
    pub fn next_boundary(&self) -> usize {
        grapheme::boundary_right(&self.content, self.cursor)
    }

    /// Moves the cursor left by one grapheme cluster, clearing any
    /// selection. At the start of the buffer this only clears the selection.
    pub fn move_left(&mut self) {
        self.selection_anchor = None;
        self.cursor = self.prev_boundary();
    }

    /// Moves the cursor right by one grapheme cluster, clearing any
    /// selection. At the end of the buffer this only clears the selection.
    pub fn move_right(&mut self) {
        self.selection_anchor = None;
        self.cursor = self.next_boundary();
    }

    /// Moves the cursor to the start of the buffer, clearing any selection.
    pub fn move_to_buffer_start(&mut self) {
        self.selection_anchor = None;
        self.cursor = 0;
    }

    /// Moves the cursor to the end of the buffer, clearing any selection.
    pub fn move_to_buffer_end(&mut self) {
        self.selection_anchor = None;
        self.cursor = self.content.len();
    }

    // ==================== Vertical Movement ====================
    //
    // The column is tracked in bytes and clamped to the target line, then
    // snapped to a char boundary. Exact for ASCII; an approximation for
    // multibyte lines, which is acceptable for a plain-text editor without
    // display geometry.

    /// Returns the byte offset of the start of the line containing `offset`.
    fn line_start(&self, offset: usize) -> usize {
        match self.content[..offset].rfind('\n') {
            Some(newline) => newline + 1,
            None => 0,
        }
    }

    /// Returns the byte offset of the end of the line containing `offset`
    /// (the position of its newline, or the end of the buffer).
    fn line_end(&self, offset: usize) -> usize {
        match self.content[offset..].find('\n') {
            Some(newline) => offset + newline,
            None => self.content.len(),
        }
    }

    /// Returns the offset one line above the cursor, column preserved.
    ///
    /// On the first line this returns the cursor position unchanged.
    pub fn offset_above(&self) -> usize {
        let line_start = self.line_start(self.cursor);
        if line_start == 0 {
            return self.cursor;
        }
        let col = self.cursor - line_start;
        let prev_start = self.line_start(line_start - 1);
        let prev_end = line_start - 1;
        self.snap_to_boundary((prev_start + col).min(prev_end))
    }

    /// Returns the offset one line below the cursor, column preserved.
    ///
    /// On the last line this returns the cursor position unchanged.
    pub fn offset_below(&self) -> usize {
        let line_end = self.line_end(self.cursor);
        if line_end == self.content.len() {
            return self.cursor;
        }
        let col = self.cursor - self.line_start(self.cursor);
        let next_start = line_end + 1;
        let next_end = self.line_end(next_start);
        self.snap_to_boundary((next_start + col).min(next_end))
    }

    /// Moves the cursor up one line, clearing any selection.
    pub fn move_up(&mut self) {
        self.selection_anchor = None;
        self.cursor = self.offset_above();
    }

    /// Moves the cursor down one line, clearing any selection.
    pub fn move_down(&mut self) {
        self.selection_anchor = None;
        self.cursor = self.offset_below();
    }
}
