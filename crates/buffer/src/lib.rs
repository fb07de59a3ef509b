// Chunk: docs/chunks/text_buffer - Text buffer with plain string backing

//! plain-edit-buffer: A text buffer implementation for the plain-edit editor.
//!
//! This crate provides a string-backed text buffer with cursor and selection
//! tracking. The editor it serves replaces buffer content wholesale on
//! load, undo, and redo, and its documents are small, so the backing store
//! is a plain `String` rather than an incremental structure.
//!
//! # Overview
//!
//! The main type is [`TextBuffer`], which provides:
//! - Character and string insertion at the cursor position
//! - Selection tracking with an anchor/cursor model
//! - Grapheme-cluster-aware cursor movement and deletion
//! - Wholesale content replacement for load/undo/redo
//!
//! # Example
//!
//! ```
//! use plain_edit_buffer::TextBuffer;
//!
//! let mut buffer = TextBuffer::new();
//!
//! // Insert some text
//! buffer.insert_str("Hello, world!");
//! assert_eq!(buffer.content(), "Hello, world!");
//!
//! // Select everything and replace it by typing
//! buffer.select_all();
//! buffer.insert_char('x');
//! assert_eq!(buffer.content(), "x");
//! ```
//!
//! # Cursor and Selection Model
//!
//! The cursor is a byte offset into the content, always on a `char`
//! boundary. A selection is the span between an optional anchor offset and
//! the cursor; movement methods collapse it, while
//! [`TextBuffer::move_cursor_preserving_selection`] extends it (shift+arrow
//! behavior in the host).

mod grapheme;
mod text_buffer;

pub use text_buffer::TextBuffer;
