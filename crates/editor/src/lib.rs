// Chunk: docs/chunks/editor_session - Editor session, command set, history
//!
//! plain-edit library interface.
//!
//! This crate implements the state-transition core of a single-window
//! plain-text editor: the buffer/history pair, the menu command set, font
//! selection, and word-count status reporting. The host GUI toolkit owns the
//! window, menus, dialogs, and clipboard transport, and drives this crate
//! through [`EditorSession`] and the [`EditorHost`] trait.

pub mod command;
pub mod font;
pub mod history;
pub mod host;
// Re-export the input module so hosts depend on one crate
pub mod input;
pub mod session;
pub mod shortcuts;
pub mod status;

pub use command::Command;
pub use font::{FontSpec, FontSpecError};
pub use history::History;
pub use host::{EditorHost, SaveChoice};
pub use session::{EditorSession, Handled};

pub use plain_edit_buffer::TextBuffer;
