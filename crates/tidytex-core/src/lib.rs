//! Rewrite pipeline that tidies LaTeX source.
//!
//! The engine takes a document (or fragment) as a string and runs a fixed,
//! ordered sequence of rewrite passes over it, each consuming the full text
//! and returning a rewritten copy. The passes fall into a few families:
//!
//! - whitespace hygiene: trailing whitespace, runs of blank lines and
//!   spaces, spacing inside brackets and before punctuation
//! - comment stripping, aware of `\%` escapes and the trailing-`%`
//!   newline-suppression idiom
//! - modernization: `{\bf ...}` to `\textbf{...}`, `{a \over b}` to
//!   `\frac{a}{b}`, `eqnarray` to `align`, `\def` to `\newcommand`,
//!   `$$...$$` to `\[...\]`, `$...$` to `\(...\)`
//! - typographic conventions: ties before `\ref`/`\eqref`/`\cite`, `...`
//!   to `\dots`, spaces around `=`, `:=` to `\coloneqq`, percentages to
//!   `\SI{..}{\%}`
//! - layout: `\begin`/`\end`/`\[`/`\]` on their own lines, environment
//!   options and labels glued to the line they belong to
//!
//! There is no LaTeX parse. Passes are regular expressions plus short
//! byte scans ([`scan`]) for bracket matching and escape detection; passes
//! that rewrite several places at once stage their edits and apply them in
//! one splice ([`splice`]). Every pass is exported on its own, so callers
//! can run any subset; [`clean`] runs them all in order.
//!
//! ```
//! use tidytex_core::{CleanOptions, clean};
//!
//! let cleaned = clean("a+b=c %comment", &CleanOptions::default())?;
//! assert_eq!(cleaned, "a+b = c");
//! # Ok::<(), tidytex_core::CleanError>(())
//! ```
//!
//! The pipeline is deterministic and never panics on arbitrary input. The
//! only hard failure is an unpairable math delimiter ([`CleanError`]);
//! locally malformed constructs, such as an `\over` whose braces cannot be
//! matched, are logged through the [`log`] facade and left unchanged.

pub mod commands;
pub mod comments;
pub mod layout;
pub mod math;
pub mod pipeline;
pub mod scan;
pub mod splice;
pub mod whitespace;

pub use pipeline::{CleanOptions, clean};

use thiserror::Error;

/// Failure raised by the dollar-delimiter passes.
///
/// Everything else in the pipeline either succeeds or degrades to a
/// warning; delimiters are the exception because pairing up an odd set
/// would silently move a math boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CleanError {
    /// An odd number of math delimiters was found.
    #[error("unpaired `{delimiter}` math delimiter at byte {offset}: `{excerpt}`")]
    UnpairedMathDelimiter {
        /// The delimiter that could not be paired, `$` or `$$`.
        delimiter: &'static str,
        /// Byte offset of the last, unpairable occurrence.
        offset: usize,
        /// Context around the offset.
        excerpt: String,
    },
}

impl CleanError {
    pub(crate) fn unpaired(delimiter: &'static str, offset: usize, text: &str) -> Self {
        CleanError::UnpairedMathDelimiter {
            delimiter,
            offset,
            excerpt: scan::excerpt(text, offset).to_string(),
        }
    }
}
