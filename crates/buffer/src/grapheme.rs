// Chunk: docs/chunks/grapheme_cluster_awareness - Grapheme cluster boundary helpers

//! Grapheme cluster boundary detection for proper Unicode text editing.
//!
//! This module provides helper functions for detecting grapheme cluster
//! boundaries around a byte offset. A grapheme cluster is what users
//! perceive as a single "character". This includes:
//!
//! - ZWJ emoji sequences (several codepoints joined by ZWJ)
//! - Combining character sequences: é (e + combining acute)
//! - Regional indicator pairs (flag emoji)
//! - CRLF line endings ("\r\n" is a single cluster)
//!
//! The buffer stores UTF-8 bytes, but cursor movement and deletion should
//! operate on grapheme clusters, not individual chars.

use unicode_segmentation::GraphemeCursor;

/// Returns the byte offset of the grapheme cluster boundary immediately
/// before `offset`.
///
/// If `offset` is 0, returns 0. `offset` must itself lie on a grapheme
/// boundary, which the buffer's cursor invariant guarantees.
pub fn boundary_left(text: &str, offset: usize) -> usize {
    if offset == 0 {
        return 0;
    }

    let offset = offset.min(text.len());

    // Fast path: an ASCII byte other than '\n' always ends a single-byte
    // grapheme. '\n' is excluded because "\r\n" forms one cluster.
    let prev = text.as_bytes()[offset - 1];
    if prev.is_ascii() && prev != b'\n' {
        return offset - 1;
    }

    let mut cursor = GraphemeCursor::new(offset, text.len(), true);
    match cursor.prev_boundary(text, 0) {
        Ok(Some(boundary)) => boundary,
        _ => 0,
    }
}

/// Returns the byte offset of the grapheme cluster boundary immediately
/// after `offset`.
///
/// If `offset` is at or past the end of `text`, returns `text.len()`.
pub fn boundary_right(text: &str, offset: usize) -> usize {
    if offset >= text.len() {
        return text.len();
    }

    // Fast path: an ASCII byte other than '\r' starts a single-byte
    // grapheme. '\r' is excluded because "\r\n" forms one cluster.
    let next = text.as_bytes()[offset];
    if next.is_ascii() && next != b'\r' {
        return offset + 1;
    }

    let mut cursor = GraphemeCursor::new(offset, text.len(), true);
    match cursor.next_boundary(text, 0) {
        Ok(Some(boundary)) => boundary,
        _ => text.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_boundaries() {
        let text = "hello";
        assert_eq!(boundary_left(text, 5), 4);
        assert_eq!(boundary_left(text, 1), 0);
        assert_eq!(boundary_left(text, 0), 0);
        assert_eq!(boundary_right(text, 0), 1);
        assert_eq!(boundary_right(text, 4), 5);
        assert_eq!(boundary_right(text, 5), 5);
    }

    #[test]
    fn test_combining_sequence_is_one_cluster() {
        // "e" + U+0301 COMBINING ACUTE ACCENT
        let text = "e\u{301}x";
        let cluster_len = "e\u{301}".len();
        assert_eq!(boundary_right(text, 0), cluster_len);
        assert_eq!(boundary_left(text, cluster_len), 0);
    }

    #[test]
    fn test_zwj_emoji_is_one_cluster() {
        // Family emoji: four codepoints joined by three ZWJs
        let text = "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}\u{200D}\u{1F466}";
        assert_eq!(boundary_right(text, 0), text.len());
        assert_eq!(boundary_left(text, text.len()), 0);
    }

    #[test]
    fn test_crlf_is_one_cluster() {
        let text = "a\r\nb";
        // Moving left from after the "\r\n" lands before the '\r'
        assert_eq!(boundary_left(text, 3), 1);
        // Moving right from before the "\r\n" lands after the '\n'
        assert_eq!(boundary_right(text, 1), 3);
    }

    #[test]
    fn test_lone_newline_is_one_cluster() {
        let text = "a\nb";
        assert_eq!(boundary_left(text, 2), 1);
        assert_eq!(boundary_right(text, 1), 2);
    }

    #[test]
    fn test_offset_clamped_to_len() {
        let text = "hi";
        assert_eq!(boundary_left(text, 10), 1);
        assert_eq!(boundary_right(text, 10), 2);
    }
}
