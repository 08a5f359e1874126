//! Modernization of deprecated commands and plain-TeX leftovers.

use once_cell::sync::Lazy;
use regex::Regex;

/// Plain-TeX font switch groups and their LaTeX2e macro forms. The group's
/// own closing brace doubles as the macro's.
const FONT_SWITCHES: [(&str, &str); 8] = [
    ("{\\bf ", "\\textbf{"),
    ("{\\it ", "\\textit{"),
    ("{\\rm ", "\\textrm{"),
    ("{\\sc ", "\\textsc{"),
    ("{\\sf ", "\\textsf{"),
    ("{\\sl ", "\\textsl{"),
    ("{\\tt ", "\\texttt{"),
    ("{\\em ", "\\emph{"),
];

/// Rewrites `{\bf ...}` style groups to their macro forms.
pub fn replace_legacy_font_switches(text: &str) -> String {
    let mut out = text.to_owned();
    for (old, new) in FONT_SWITCHES {
        out = out.replace(old, new);
    }
    out
}

static PERCENTAGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([+-]?([0-9]*\.)?[0-9]+)[ \t]*\\%").unwrap());

/// Wraps `25.4 \%` style percentages in `\SI{25.4}{\%}`.
pub fn wrap_percent_in_si(text: &str) -> String {
    PERCENTAGE.replace_all(text, "\\SI{${1}}{\\%}").into_owned()
}

static DEF: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\def(\\[A-Za-z]+)").unwrap());

/// Rewrites `\def\name` as `\newcommand{\name}`.
pub fn convert_def_to_newcommand(text: &str) -> String {
    DEF.replace_all(text, "\\newcommand{${1}}").into_owned()
}

/// Rewrites `\centerline{...}` as a `{\centering ...}` group.
pub fn replace_centerline(text: &str) -> String {
    text.replace("\\centerline{", "{\\centering ")
}

/// Renames `eqnarray` environments, starred forms included, to `align`.
pub fn replace_eqnarray(text: &str) -> String {
    text.replace("eqnarray", "align")
}
