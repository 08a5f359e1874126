//! Byte-level scanners shared by the rewrite passes.
//!
//! The passes never build a parse tree; where a regex is not enough they
//! fall back to short cursor scans over the raw bytes. Every delimiter of
//! interest is ASCII, so offsets produced here always fall on char
//! boundaries.

/// Walks backward from `from` (exclusive) to the `open` delimiter enclosing
/// that position.
///
/// The counter starts at 1: the construct at `from` sits inside one group
/// that is still open. Each `close` byte deepens the nesting, each `open`
/// byte unwinds it, and the position where the counter reaches 0 is the
/// match. Returns `None` when the scan runs off the start of the text.
pub fn matching_open(text: &str, from: usize, open: u8, close: u8) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut depth = 1usize;
    let mut pos = from;
    while pos > 0 {
        pos -= 1;
        if bytes[pos] == open {
            depth -= 1;
            if depth == 0 {
                return Some(pos);
            }
        } else if bytes[pos] == close {
            depth += 1;
        }
    }
    None
}

/// Forward mirror of [`matching_open`]: walks from `from` (inclusive) to the
/// `close` delimiter that ends the group, counter started at 1.
pub fn matching_close(text: &str, from: usize, open: u8, close: u8) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut depth = 1usize;
    let mut pos = from;
    while pos < bytes.len() {
        if bytes[pos] == close {
            depth -= 1;
            if depth == 0 {
                return Some(pos);
            }
        } else if bytes[pos] == open {
            depth += 1;
        }
        pos += 1;
    }
    None
}

/// Whether the byte at `pos` is escaped, i.e. preceded by an odd run of
/// consecutive backslashes. An even run (zero included) leaves it active.
pub fn is_escaped(text: &str, pos: usize) -> bool {
    let bytes = text.as_bytes();
    let mut run = 0;
    while run < pos && bytes[pos - run - 1] == b'\\' {
        run += 1;
    }
    run % 2 == 1
}

/// A short context window around `at`, for diagnostics.
///
/// Clamped to the text and snapped to char boundaries, so slicing never
/// panics even when the neighborhood holds multibyte characters.
pub fn excerpt(text: &str, at: usize) -> &str {
    let lo = floor_boundary(text, at.saturating_sub(20));
    let hi = floor_boundary(text, (at + 24).min(text.len()));
    &text[lo..hi]
}

fn floor_boundary(text: &str, mut pos: usize) -> usize {
    while pos > 0 && !text.is_char_boundary(pos) {
        pos -= 1;
    }
    pos
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_the_enclosing_brace() {
        //        0123456789
        let s = "{a {b} c X}";
        assert_eq!(matching_open(s, 9, b'{', b'}'), Some(0));
    }

    #[test]
    fn finds_the_closing_brace_past_nested_groups() {
        let s = "a {b} c} tail";
        assert_eq!(matching_close(s, 0, b'{', b'}'), Some(7));
    }

    #[test]
    fn unbalanced_scans_return_none() {
        assert_eq!(matching_open("a b c", 4, b'{', b'}'), None);
        assert_eq!(matching_close("a {b", 0, b'{', b'}'), None);
        assert_eq!(matching_open("x", 0, b'(', b')'), None);
    }

    #[test]
    fn escape_parity() {
        assert!(!is_escaped("$", 0));
        assert!(is_escaped("\\$", 1));
        assert!(!is_escaped("\\\\$", 2));
        assert!(is_escaped("\\\\\\$", 3));
    }

    #[test]
    fn excerpt_clamps_to_the_text() {
        assert_eq!(excerpt("short", 2), "short");
        let long = "x".repeat(100);
        assert_eq!(excerpt(&long, 50).len(), 44);
    }

    #[test]
    fn excerpt_respects_char_boundaries() {
        let s = "αααααααααααααααααααααααα";
        let cut = excerpt(s, 21);
        assert!(s.contains(cut));
    }
}
