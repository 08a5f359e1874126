use tidytex_core::{CleanOptions, clean};

const BEFORE: &str = include_str!("fixtures/sample_before.tex");
const AFTER: &str = include_str!("fixtures/sample_after.tex");

#[test]
fn cleans_a_whole_article() {
    let cleaned = clean(BEFORE, &CleanOptions::default()).unwrap();
    assert_eq!(cleaned, AFTER);
}

#[test]
fn a_cleaned_article_is_a_fixed_point() {
    let again = clean(AFTER, &CleanOptions::default()).unwrap();
    assert_eq!(again, AFTER);
}

#[test]
fn keep_flags_preserve_comments_and_inline_dollars() {
    let options = CleanOptions {
        keep_comments: true,
        keep_dollar_math: true,
    };
    let cleaned = clean(BEFORE, &options).unwrap();
    assert!(cleaned.contains("% driver settings"));
    assert!(cleaned.contains("$f$"));
    // Display math is still rewritten.
    assert!(cleaned.contains("\\[\nE = m c^2\n\\]"));
}
