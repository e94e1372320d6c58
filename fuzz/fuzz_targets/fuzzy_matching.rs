// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for term matching.
//!
//! The subsequence gate and the edit distance must agree with each other:
//! a match never costs more than inserting the missing characters, and
//! Levenshtein stays a metric.

#![no_main]

use arbitrary::Arbitrary;
use folio::fuzzy::{is_subsequence, levenshtein};
use folio::util::normalize::fold;
use folio::FoldedTerm;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct MatchInput {
    term: String,
    word: String,
    other: String,
}

fuzz_target!(|input: MatchInput| {
    // Cap lengths to avoid timeouts in the O(nm) distance
    let term: String = input.term.chars().take(40).collect();
    let word: String = input.word.chars().take(40).collect();
    let other: String = input.other.chars().take(40).collect();

    let folded_term = fold(&term);
    let folded_word = fold(&word);
    let matcher = FoldedTerm::new(&term);

    match matcher.rank(&word) {
        Some(distance) => {
            assert!(is_subsequence(&folded_term, &folded_word));
            let gap = folded_word.chars().count() - folded_term.chars().count();
            assert_eq!(distance, gap, "subsequence match costs exactly the insertions");
        }
        None => assert!(!matcher.matches(&word)),
    }

    // Metric sanity
    assert_eq!(levenshtein(&term, &term), 0);
    assert_eq!(levenshtein(&term, &word), levenshtein(&word, &term));
    assert!(levenshtein(&term, &other) <= levenshtein(&term, &word) + levenshtein(&word, &other));
});
