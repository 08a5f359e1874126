//! Math-mode rewrite passes.
//!
//! The dollar passes are the only ones that can fail: delimiters that
//! cannot be paired up are reported as a [`CleanError`] instead of being
//! silently mis-paired. The scanning passes (`\over`, exponent bases)
//! degrade per occurrence: a group whose brackets cannot be matched is left
//! unchanged with a warning.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::CleanError;
use crate::scan;
use crate::splice::{Edit, apply_edits};

/// Moves sentence punctuation typed inside inline math outside of it, one
/// mark at a time (`,.$` cascades to `$,.`).
pub fn move_punctuation_outside_math(text: &str) -> String {
    text.replace(".$", "$.")
        .replace(",$", "$,")
        .replace(";$", "$;")
        .replace("!$", "$!")
        .replace("?$", "$?")
}

static DOUBLE_DOLLAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$\$").unwrap());

/// Rewrites `$$...$$` display math as `\[...\]`.
pub fn replace_display_dollars(text: &str) -> Result<String, CleanError> {
    let locations: Vec<usize> = DOUBLE_DOLLAR.find_iter(text).map(|m| m.start()).collect();
    if locations.len() % 2 != 0 {
        return Err(CleanError::unpaired("$$", locations[locations.len() - 1], text));
    }
    let edits: Vec<Edit> = locations
        .chunks_exact(2)
        .map(|pair| {
            let inner = &text[pair[0] + 2..pair[1]];
            Edit::replace(pair[0]..pair[1] + 2, format!("\\[{inner}\\]"))
        })
        .collect();
    Ok(apply_edits(text, &edits))
}

/// Rewrites `$...$` inline math as `\(...\)`.
///
/// A dollar only counts as a delimiter when the run of backslashes directly
/// before it has even length; `\$` is literal text.
pub fn replace_inline_dollars(text: &str) -> Result<String, CleanError> {
    let mut boundaries: Vec<usize> = Vec::new();
    for (pos, byte) in text.bytes().enumerate() {
        if byte == b'$' && !scan::is_escaped(text, pos) {
            boundaries.push(pos);
        }
    }
    if boundaries.len() % 2 != 0 {
        return Err(CleanError::unpaired("$", boundaries[boundaries.len() - 1], text));
    }
    let edits: Vec<Edit> = boundaries
        .chunks_exact(2)
        .map(|pair| {
            let inner = &text[pair[0] + 1..pair[1]];
            Edit::replace(pair[0]..pair[1] + 1, format!("\\({inner}\\)"))
        })
        .collect();
    Ok(apply_edits(text, &edits))
}

static BARE_SCRIPT: Lazy<Regex> = Lazy::new(|| Regex::new(r"([_^])([^{\\])([^_^\s$})])").unwrap());

/// Inserts a space after a one-character sub- or superscript when the next
/// character would run into it, `2^ng` to `2^n g`.
pub fn pad_bare_subsuperscript(text: &str) -> String {
    BARE_SCRIPT.replace_all(text, "${1}${2} ${3}").into_owned()
}

/// Replaces literal dot runs with their `\dots` forms.
pub fn canonicalize_ellipsis(text: &str) -> String {
    text.replace("...", "\\dots").replace(",\\cdots,", ",\\dots,")
}

static OVER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\over[^a-z]").unwrap());

/// Rewrites `{a \over b}` groups as `\frac{a}{b}`.
///
/// The group is found by scanning outward from each `\over`. An occurrence
/// whose braces cannot be matched is left alone with a warning, as is a
/// second `\over` claiming an already rewritten group.
pub fn convert_over_to_frac(text: &str) -> String {
    let mut edits: Vec<Edit> = Vec::new();
    let mut claimed = 0usize;
    for m in OVER.find_iter(text) {
        let at = m.start();
        let Some(open) = scan::matching_open(text, at, b'{', b'}') else {
            log::warn!(
                "no opening brace for \\over near `{}`; left unchanged",
                scan::excerpt(text, at)
            );
            continue;
        };
        let Some(close) = scan::matching_close(text, at + 5, b'{', b'}') else {
            log::warn!(
                "no closing brace for \\over near `{}`; left unchanged",
                scan::excerpt(text, at)
            );
            continue;
        };
        if open < claimed {
            log::warn!(
                "nested \\over groups near `{}`; left unchanged",
                scan::excerpt(text, at)
            );
            continue;
        }
        let numerator = text[open + 1..at].trim();
        let denominator = text[at + 5..close].trim();
        edits.push(Edit::replace(
            open..close + 1,
            format!("\\frac{{{numerator}}}{{{denominator}}}"),
        ));
        claimed = close + 1;
    }
    apply_edits(text, &edits)
}

const FUNCTION_NAMES: [&str; 6] = ["max", "min", "log", "sin", "cos", "exp"];

static FUNCTION_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    FUNCTION_NAMES
        .iter()
        .map(|name| Regex::new(&format!("([^A-Za-z]){name}[^A-Za-z]")).unwrap())
        .collect()
});

/// Escapes bare function names, `the log of` to `the \log of`, leaving
/// already escaped ones and words that merely contain a name (`analog`,
/// `login`) alone.
pub fn escape_function_names(text: &str) -> String {
    let mut inserts: Vec<usize> = Vec::new();
    for pattern in FUNCTION_PATTERNS.iter() {
        for caps in pattern.captures_iter(text) {
            if let Some(lead) = caps.get(1) {
                if lead.as_str() != "\\" {
                    inserts.push(lead.end());
                }
            }
        }
    }
    inserts.sort_unstable();
    let edits: Vec<Edit> = inserts.into_iter().map(|at| Edit::insert(at, "\\")).collect();
    apply_edits(text, &edits)
}

static PAREN_EXPONENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\)\^").unwrap());

/// Wraps a parenthesized exponent base in braces: `(a+b)^2` to `{(a+b)}^2`,
/// honoring a leading `\left(`.
pub fn brace_exponentiated_parens(text: &str) -> String {
    let mut inserts: Vec<(usize, &str)> = Vec::new();
    for m in PAREN_EXPONENT.find_iter(text) {
        let close = m.start();
        let Some(mut open) = scan::matching_open(text, close, b'(', b')') else {
            log::warn!(
                "no opening parenthesis for exponent base near `{}`; left unchanged",
                scan::excerpt(text, close)
            );
            continue;
        };
        if open >= 5 && &text.as_bytes()[open - 5..open] == b"\\left" {
            open -= 5;
        }
        inserts.push((open, "{"));
        inserts.push((close + 1, "}"));
    }
    inserts.sort_by_key(|&(at, _)| at);
    let edits: Vec<Edit> = inserts
        .into_iter()
        .map(|(at, brace)| Edit::insert(at, brace))
        .collect();
    apply_edits(text, &edits)
}

static COLON_EQUAL: Lazy<Regex> = Lazy::new(|| Regex::new(r":\s*=").unwrap());
static EQUAL_COLON: Lazy<Regex> = Lazy::new(|| Regex::new(r"=\s*:").unwrap());

/// Replaces `:=` and `=:`, with any spacing in between, by `\coloneqq` and
/// `\eqqcolon`.
pub fn replace_colon_equals(text: &str) -> String {
    let text = COLON_EQUAL.replace_all(text, "\\coloneqq ");
    EQUAL_COLON.replace_all(&text, "\\eqqcolon ").into_owned()
}

static BEFORE_EQUAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"([^\s&])=").unwrap());
static BEFORE_AMP_EQUAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"([^\s])&=").unwrap());
static AFTER_EQUAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"=([^\s&])").unwrap());
static AFTER_EQUAL_AMP: Lazy<Regex> = Lazy::new(|| Regex::new(r"=&([^\s])").unwrap());

/// Pads `=` with spaces on both sides, covering the `&=` and `=&` alignment
/// forms as well.
pub fn pad_equality_signs(text: &str) -> String {
    let text = BEFORE_EQUAL.replace_all(text, "${1} =");
    let text = BEFORE_AMP_EQUAL.replace_all(&text, "${1} &=");
    let text = AFTER_EQUAL.replace_all(&text, "= ${1}");
    AFTER_EQUAL_AMP.replace_all(&text, "=& ${1}").into_owned()
}
