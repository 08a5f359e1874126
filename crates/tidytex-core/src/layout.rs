//! Line-layout passes around environments and display math.

use once_cell::sync::Lazy;
use regex::Regex;

static AFTER_DOUBLE_BACKSLASH: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\\\([^\n])").unwrap());

/// Breaks the line after `\\` when more content follows on the same line.
pub fn newline_after_double_backslash(text: &str) -> String {
    AFTER_DOUBLE_BACKSLASH.replace_all(text, "\\\\\n${1}").into_owned()
}

static ENVIRONMENT_EDGES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"([^\n ]) *(\\begin\{.*?\})",
        r"(\\begin\{.*?\}) *([^\n ])",
        r"([^\n ]) *(\\end\{.*?\})",
        r"(\\end\{.*?\}) *([^\n ])",
        r"([^\n ]) *(\\\[)",
        r"(\\\[) *([^\n ])",
        r"([^\n ]) *(\\\])",
        r"(\\\]) *([^\n ])",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).unwrap())
    .collect()
});

/// Puts `\begin{...}`, `\end{...}`, `\[` and `\]` on their own lines.
pub fn break_around_begin_end(text: &str) -> String {
    let mut out = text.to_owned();
    for pattern in ENVIRONMENT_EDGES.iter() {
        out = pattern.replace_all(&out, "${1}\n${2}").into_owned();
    }
    out
}

static OPTIONS_BELOW: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\\begin\{.*?\})\s*(\[.*?\])\n").unwrap());
static OPTIONS_INLINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\\begin\{.*?\})\s*(\[.*?\])([^\n])").unwrap());

/// Glues an environment's `[...]` options to its `\begin` line, breaking
/// the line after them when content follows.
pub fn inline_environment_options(text: &str) -> String {
    let text = OPTIONS_BELOW.replace_all(text, "${1}${2}");
    OPTIONS_INLINE.replace_all(&text, "${1}${2}\n${3}").into_owned()
}

static ENVIRONMENT_LABEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\\begin\{.*?\})(\[.*?\])?\s+(\\label\{.*?\})(\n)?").unwrap());
static SECTION_LABEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\\section\{.*?\})\s+(\\label\{.*?\})(\n)?").unwrap());
static SUBSECTION_LABEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\\subsection\{.*?\})\s+(\\label\{.*?\})(\n)?").unwrap());

/// Glues `\label{...}` to the `\begin`, `\section` or `\subsection` it
/// belongs to.
pub fn inline_labels(text: &str) -> String {
    let text = ENVIRONMENT_LABEL.replace_all(text, "${1}${2}${3}${4}");
    let text = SECTION_LABEL.replace_all(&text, "${1}${2}${3}");
    SUBSECTION_LABEL.replace_all(&text, "${1}${2}${3}").into_owned()
}

static TABULAR_SPEC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\\begin\{tabular\})\s*(\{.*?\})").unwrap());

/// Glues a tabular's column specification to its `\begin`.
pub fn trim_space_before_column_spec(text: &str) -> String {
    TABULAR_SPEC.replace_all(text, "${1}${2}").into_owned()
}
