//! Comment stripping.

/// Strips TeX comments from `text`.
///
/// Lines that hold nothing but a comment are deleted outright. Inline
/// comments are cut from the first unescaped `%` onward, together with the
/// spaces and tabs directly before it; the newline stays. Two things
/// survive on purpose: `\%` is literal text, and a bare `%` at the end of a
/// line is the TeX newline-suppression idiom, not a comment.
pub fn strip_comments(text: &str) -> String {
    let kept: Vec<&str> = text
        .split('\n')
        .filter(|line| !line.trim_start().starts_with('%'))
        .collect();
    let text = kept.join("\n");

    let mut out = String::with_capacity(text.len());
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
        }
        match inline_comment_start(line) {
            Some(cut) => out.push_str(line[..cut].trim_end_matches([' ', '\t'])),
            None => out.push_str(line),
        }
    }
    out
}

/// Byte offset of the first `%` that opens an inline comment on `line`: it
/// must be unescaped and have at least one character after it.
fn inline_comment_start(line: &str) -> Option<usize> {
    let bytes = line.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if b == b'%' && i + 1 < bytes.len() && (i == 0 || bytes[i - 1] != b'\\') {
            return Some(i);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_comment_only_lines() {
        assert_eq!(strip_comments("% top\nbody\n  % indented\nmore"), "body\nmore");
    }

    #[test]
    fn cuts_inline_comments_with_leading_spacing() {
        assert_eq!(strip_comments("lorem  %some comment"), "lorem");
        assert_eq!(strip_comments("a\t%x\nb"), "a\nb");
    }

    #[test]
    fn escaped_percent_is_text() {
        assert_eq!(strip_comments("rate is 10 \\% here"), "rate is 10 \\% here");
        assert_eq!(strip_comments("a \\%b %c"), "a \\%b");
    }

    #[test]
    fn trailing_bare_percent_survives() {
        assert_eq!(strip_comments("somemacro%\nnext"), "somemacro%\nnext");
    }

    #[test]
    fn double_percent_is_a_comment() {
        assert_eq!(strip_comments("dolor %%\nx"), "dolor\nx");
    }
}
