// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use crate::acl::token::tokens;

fn options(max_buffer: usize) -> RegexOptions {
    RegexOptions {
        max_buffer,
        ..RegexOptions::default()
    }
}

fn optimize(texts: &[&str]) -> Result<Optimized, OptimizeError> {
    compile_optimized(
        &tokens(texts.iter().copied()),
        &RegexOptions::default(),
        &ParseContext::default(),
    )
}

fn sources(optimized: &Optimized) -> Vec<(&str, bool)> {
    optimized
        .patterns
        .iter()
        .map(|p| (p.source(), p.is_case_insensitive()))
        .collect()
}

#[test]
fn same_case_patterns_merge_into_one_alternation() {
    let optimized = optimize(&["abc", "def"]).unwrap();
    assert_eq!(sources(&optimized), [("(abc)|(def)", false)]);
    assert_eq!(optimized.merged, 2);
}

#[test]
fn case_toggle_splits_alternations() {
    let optimized = optimize(&["abc", "-i", "def"]).unwrap();
    assert_eq!(sources(&optimized), [("(abc)", false), ("(def)", true)]);
}

#[test]
fn leading_toggle_is_harmless() {
    let optimized = optimize(&["-i", "abc", "def"]).unwrap();
    assert_eq!(sources(&optimized), [("(abc)|(def)", true)]);
}

#[test]
fn repeated_toggle_is_merged() {
    let optimized = optimize(&["-i", "abc", "-i", "def", "+i", "ghi", "+i", "jkl"]).unwrap();
    assert_eq!(
        sources(&optimized),
        [("(abc)|(def)", true), ("(ghi)|(jkl)", false)]
    );
}

#[test]
fn redundant_off_toggle_at_start_is_ignored() {
    let optimized = optimize(&["+i", "abc"]).unwrap();
    assert_eq!(sources(&optimized), [("(abc)", false)]);
}

#[test]
fn no_tokens_compiles_nothing() {
    let optimized = optimize(&[]).unwrap();
    assert!(optimized.patterns.is_empty());
    assert_eq!(optimized.merged, 0);
}

#[test]
fn full_buffer_starts_new_alternation() {
    // Limit is 15: "(abc)|(def)" fits, "ghi" would need 11 + 3 + 3.
    let optimized = compile_optimized(
        &tokens(["abc", "def", "ghi"]),
        &options(16),
        &ParseContext::default(),
    )
    .unwrap();
    assert_eq!(
        sources(&optimized),
        [("(abc)|(def)", false), ("(ghi)", false)]
    );
    assert_eq!(optimized.merged, 3);
}

#[test]
fn capacity_boundary_is_exclusive() {
    // 0 + 4 + 3 == 7 is not below max_buffer - 1 == 7.
    let err = compile_optimized(&tokens(["abcd"]), &options(8), &ParseContext::default())
        .unwrap_err();
    assert!(matches!(err, OptimizeError::PatternTooLarge { len: 4, max_buffer: 8 }));

    let ok = compile_optimized(&tokens(["abc"]), &options(8), &ParseContext::default()).unwrap();
    assert_eq!(sources(&ok), [("(abc)", false)]);
}

#[test]
fn oversized_pattern_after_flush_fails() {
    let err = compile_optimized(
        &tokens(["a", "bcdefghij"]),
        &options(12),
        &ParseContext::default(),
    )
    .unwrap_err();
    assert!(matches!(err, OptimizeError::PatternTooLarge { .. }));
}

#[test]
fn invalid_pattern_fails_whole_attempt() {
    let err = optimize(&["abc", "(unclosed", "def"]).unwrap_err();
    assert!(matches!(err, OptimizeError::Compile(PatternError::InvalidRegex(_))));
}

#[test]
fn invalid_pattern_in_earlier_alternation_fails() {
    let err = optimize(&["[", "-i", "def"]).unwrap_err();
    assert!(matches!(err, OptimizeError::Compile(_)));
}

#[test]
fn fragment_that_only_parses_when_grouped_fails() {
    let err = optimize(&["good", "x)|(.*"]).unwrap_err();
    assert!(matches!(err, OptimizeError::Compile(PatternError::InvalidRegex(_))));
}

#[test]
fn lone_closing_paren_fails() {
    let err = optimize(&["(abc", ")"]).unwrap_err();
    assert!(matches!(err, OptimizeError::Compile(_)));
}

#[test]
fn trailing_toggle_fails_on_empty_flush() {
    // The final flush is empty but an alternation was already compiled.
    let err = optimize(&["abc", "-i"]).unwrap_err();
    assert!(matches!(err, OptimizeError::Compile(PatternError::EmptyPattern)));
}

#[test]
fn back_to_back_toggles_fail_on_empty_flush() {
    let err = optimize(&["abc", "-i", "+i", "def"]).unwrap_err();
    assert!(matches!(err, OptimizeError::Compile(PatternError::EmptyPattern)));
}

#[test]
fn merged_patterns_match_like_their_parts() {
    let optimized = optimize(&["^abc$", "d.f", "-i", "ghi"]).unwrap();
    let hit = |word: &str| optimized.patterns.iter().any(|p| p.is_match(word));
    assert!(hit("abc"));
    assert!(!hit("xabc"));
    assert!(hit("dxf"));
    assert!(hit("GHI"));
    assert!(!hit("DXF"));
}

#[test]
fn many_patterns_still_compile() {
    let texts: Vec<String> = (0..150).map(|i| format!("host{}\\.example", i)).collect();
    let optimized = compile_optimized(
        &tokens(texts.iter().map(String::as_str)),
        &RegexOptions {
            parse_only: true,
            ..RegexOptions::default()
        },
        &ParseContext::default(),
    )
    .unwrap();
    assert_eq!(optimized.merged, 150);
    assert!(optimized.patterns.len() < 150);
    assert!(optimized.patterns.iter().all(|p| p.source().len() < 8192));
}
