// Chunk: docs/chunks/word_count_status - Word count status reporting
//!
//! Word-count status reporting.
//!
//! The status line shows the number of whitespace-separated tokens in the
//! current buffer content. The session republishes it through
//! [`EditorHost::set_status`](crate::host::EditorHost::set_status) after
//! every mutation.

/// Counts the whitespace-separated tokens in `content`.
///
/// An empty (or all-whitespace) buffer counts 0 words.
pub fn word_count(content: &str) -> usize {
    content.split_whitespace().count()
}

/// Formats the status line for the given buffer content.
pub fn status_line(content: &str) -> String {
    format!("Word Count: {}", word_count(content))
}
