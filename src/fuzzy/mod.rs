// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy word matching: a subsequence gate, then edit distance to rank.
//!
//! A term matches a word when every character of the folded term appears in
//! the folded word, in order. "qck" matches "quick"; "kcq" does not. Only words
//! that pass the gate pay for the O(nm) Levenshtein computation, and the
//! distance is what callers rank by.
//!
//! The empty term is a subsequence of everything, so it matches every word
//! with a distance equal to the word's length. That falls out of the
//! definition and is deliberately not special-cased.

mod levenshtein;

pub use levenshtein::*;

use crate::util::normalize::fold;

/// A query term folded once and reused against every word in the corpus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoldedTerm {
    folded: String,
}

impl FoldedTerm {
    pub fn new(term: &str) -> Self {
        Self {
            folded: fold(term).into_owned(),
        }
    }

    /// The folded form used for comparison.
    pub fn as_str(&self) -> &str {
        &self.folded
    }

    /// Edit distance to `word` if the term fuzzy-matches it, `None` otherwise.
    pub fn rank(&self, word: &str) -> Option<usize> {
        let target = fold(word);
        if is_subsequence(&self.folded, &target) {
            Some(levenshtein(&self.folded, &target))
        } else {
            None
        }
    }

    /// Does the term fuzzy-match `word`?
    pub fn matches(&self, word: &str) -> bool {
        is_subsequence(&self.folded, &fold(word))
    }
}

/// Does every character of `needle` appear in `haystack`, in order?
pub fn is_subsequence(needle: &str, haystack: &str) -> bool {
    let mut remaining = haystack.chars();
    needle.chars().all(|c| remaining.any(|h| h == c))
}
