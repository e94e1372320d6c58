// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Run one term matcher per query term, in parallel, and join.
//!
//! Every matcher reads the same `&Corpus`; nobody writes to it, so no locking.
//! Each matcher returns its own `TermMatches`, and the only merging happens
//! here, after `collect()` has waited for all of them. Results are indexed by
//! term position regardless of which matcher finished first.
//!
//! If the budget runs out, every matcher sees it at its next checkpoint and
//! the whole call fails. There are no partial results.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::collections::BTreeSet;

use tracing::debug;

use crate::corpus::Corpus;
use crate::error::SearchError;
use crate::types::TermMatches;

use super::matcher::match_term_within;
use super::Budget;

/// Match every term against `corpus`, one worker per term.
#[cfg(feature = "parallel")]
pub fn fan_out(
    terms: &[String],
    corpus: &Corpus,
    budget: &Budget,
) -> Result<Vec<TermMatches>, SearchError> {
    debug!(terms = terms.len(), lines = corpus.len(), "fanning out term matchers");
    terms
        .par_iter()
        .map(|term| match_term_within(term, corpus, budget))
        .collect()
}

/// Sequential fallback when the `parallel` feature is off.
#[cfg(not(feature = "parallel"))]
pub fn fan_out(
    terms: &[String],
    corpus: &Corpus,
    budget: &Budget,
) -> Result<Vec<TermMatches>, SearchError> {
    debug!(terms = terms.len(), lines = corpus.len(), "matching terms sequentially");
    terms
        .iter()
        .map(|term| match_term_within(term, corpus, budget))
        .collect()
}

/// Union of every matcher's matched words. Call only after the join.
pub fn matched_words(results: &[TermMatches]) -> BTreeSet<String> {
    results
        .iter()
        .flat_map(|matches| matches.words.iter().cloned())
        .collect()
}
