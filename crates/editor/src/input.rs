// Chunk: docs/chunks/input_events - Shared input types
//!
//! Input types are in the `plain-edit-input` crate and re-exported here so
//! hosts and tests can reach them through the main crate.

pub use plain_edit_input::*;
