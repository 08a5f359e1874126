//! The ordered rewrite pipeline.

use crate::{CleanError, commands, comments, layout, math, whitespace};

/// Options controlling which passes [`clean`] applies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleanOptions {
    /// Keep comments instead of stripping them.
    pub keep_comments: bool,
    /// Keep inline math as `$...$` instead of rewriting it to `\(...\)`.
    pub keep_dollar_math: bool,
}

/// Runs the full rewrite pipeline over `text`.
///
/// Passes run in a fixed order; each consumes the whole text and hands its
/// output to the next. Two passes are optional, controlled by `options`.
/// The only error condition is a math delimiter that cannot be paired up;
/// locally malformed constructs degrade to a warning and are left alone.
pub fn clean(text: &str, options: &CleanOptions) -> Result<String, CleanError> {
    let mut out = whitespace::trim_trailing_whitespace(text);
    if !options.keep_comments {
        out = comments::strip_comments(&out);
    }
    out = math::move_punctuation_outside_math(&out);
    out = math::replace_display_dollars(&out)?;
    if !options.keep_dollar_math {
        out = math::replace_inline_dollars(&out)?;
    }
    out = commands::replace_legacy_font_switches(&out);
    out = whitespace::trim_space_inside_brackets(&out);
    out = math::pad_bare_subsuperscript(&out);
    out = math::canonicalize_ellipsis(&out);
    out = whitespace::trim_space_before_punctuation(&out);
    out = whitespace::tie_references(&out);
    out = whitespace::replace_double_tie(&out);
    out = whitespace::drop_tie_beside_space(&out);
    out = math::convert_over_to_frac(&out);
    out = commands::wrap_percent_in_si(&out);
    out = layout::newline_after_double_backslash(&out);
    out = math::escape_function_names(&out);
    out = math::brace_exponentiated_parens(&out);
    out = commands::convert_def_to_newcommand(&out);
    out = layout::break_around_begin_end(&out);
    out = commands::replace_centerline(&out);
    out = commands::replace_eqnarray(&out);
    out = layout::inline_environment_options(&out);
    out = layout::inline_labels(&out);
    out = math::replace_colon_equals(&out);
    out = layout::trim_space_before_column_spec(&out);
    out = math::pad_equality_signs(&out);
    out = whitespace::collapse_blank_lines(&out);
    out = whitespace::collapse_spaces(&out);
    Ok(out)
}
