//! Whitespace and spacing hygiene passes.

use once_cell::sync::Lazy;
use regex::Regex;

/// Strips trailing whitespace from every line.
pub fn trim_trailing_whitespace(text: &str) -> String {
    text.split('\n')
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
}

static SPACE_AFTER_OPEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"([{(])[ \t]+").unwrap());
static SPACE_BEFORE_CLOSE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t]+([})])").unwrap());
static SPACE_BEFORE_RIGHT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t]+\\right\)").unwrap());

/// Drops spacing just inside braces and parentheses, `{ x }` to `{x}`,
/// including before a closing `\right)`.
pub fn trim_space_inside_brackets(text: &str) -> String {
    let text = SPACE_AFTER_OPEN.replace_all(text, "${1}");
    let text = SPACE_BEFORE_CLOSE.replace_all(&text, "${1}");
    SPACE_BEFORE_RIGHT.replace_all(&text, "\\right)").into_owned()
}

static SPACE_BEFORE_PUNCTUATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+([.,;!?])").unwrap());

/// Drops whitespace, line breaks included, before sentence punctuation.
pub fn trim_space_before_punctuation(text: &str) -> String {
    SPACE_BEFORE_PUNCTUATION.replace_all(text, "${1}").into_owned()
}

static SPACE_BEFORE_REFERENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+\\(ref\{|eqref\{|cite)").unwrap());

/// Replaces the whitespace before `\ref`, `\eqref` and `\cite` with a tie,
/// so the reference cannot be orphaned by a line break.
pub fn tie_references(text: &str) -> String {
    SPACE_BEFORE_REFERENCE.replace_all(text, "~\\${1}").into_owned()
}

/// Rewrites the double tie `~~` as `\quad `.
pub fn replace_double_tie(text: &str) -> String {
    text.replace("~~", "\\quad ")
}

/// A tie next to an ordinary space has no effect; drop it.
pub fn drop_tie_beside_space(text: &str) -> String {
    text.replace("~ ", " ").replace(" ~", " ")
}

static EXCESS_NEWLINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{4,}").unwrap());

/// Caps runs of blank lines: four or more newlines collapse to three.
pub fn collapse_blank_lines(text: &str) -> String {
    EXCESS_NEWLINES.replace_all(text, "\n\n\n").into_owned()
}

static EXCESS_SPACES: Lazy<Regex> = Lazy::new(|| Regex::new(r"([^\n ]) {2,}").unwrap());

/// Collapses runs of spaces to one, leaving line indentation alone.
pub fn collapse_spaces(text: &str) -> String {
    EXCESS_SPACES.replace_all(text, "${1} ").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_line_ends_only() {
        assert_eq!(trim_trailing_whitespace("a  \n  b\t\nc"), "a\n  b\nc");
        assert_eq!(trim_trailing_whitespace("keep\n"), "keep\n");
    }

    #[test]
    fn tightens_brackets() {
        assert_eq!(trim_space_inside_brackets("{ a } ( b )"), "{a} (b)");
        assert_eq!(trim_space_inside_brackets("\\left( x \\right)"), "\\left(x\\right)");
    }

    #[test]
    fn pulls_punctuation_back() {
        assert_eq!(trim_space_before_punctuation("word ."), "word.");
        assert_eq!(trim_space_before_punctuation("a\n, b"), "a, b");
    }

    #[test]
    fn ties_references_to_their_text() {
        assert_eq!(tie_references("theorem 1 \\ref{thm}"), "theorem 1~\\ref{thm}");
        assert_eq!(tie_references("see\n\\cite{knuth}"), "see~\\cite{knuth}");
        assert_eq!(tie_references("eq. \\eqref{e1}"), "eq.~\\eqref{e1}");
    }

    #[test]
    fn double_tie_becomes_quad() {
        assert_eq!(replace_double_tie("a~~b"), "a\\quad b");
    }

    #[test]
    fn tie_beside_space_is_dropped() {
        assert_eq!(drop_tie_beside_space("a~ b"), "a b");
        assert_eq!(drop_tie_beside_space("a ~b"), "a b");
    }

    #[test]
    fn caps_blank_lines() {
        assert_eq!(collapse_blank_lines("a\n\n\n\n\n\nb"), "a\n\n\nb");
        assert_eq!(collapse_blank_lines("a\n\n\nb"), "a\n\n\nb");
    }

    #[test]
    fn collapses_spaces_but_not_indentation() {
        assert_eq!(collapse_spaces("a  b   c"), "a b c");
        assert_eq!(collapse_spaces("\n   indented"), "\n   indented");
    }
}
