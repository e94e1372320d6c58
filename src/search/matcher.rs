// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! One term against every line of the corpus.
//!
//! Each line is split on whitespace and every word is tried. A line with at
//! least one matching word yields exactly one hit, carrying the smallest
//! distance among its matching words. Hits come out in line order; ranking is
//! the merger's job, not this one's.
//!
//! The matcher owns its result outright (hits and matched words). Nothing is
//! shared with other matchers until the coordinator joins them.

use std::collections::BTreeSet;
use std::convert::Infallible;

use crate::corpus::Corpus;
use crate::error::SearchError;
use crate::fuzzy::FoldedTerm;
use crate::types::{MatchHit, TermMatches};

use super::Budget;

/// Match `term` against every line, running to completion.
pub fn match_term(term: &str, corpus: &Corpus) -> TermMatches {
    match scan::<Infallible>(term, corpus, |_| Ok(())) {
        Ok(matches) => matches,
        Err(never) => match never {},
    }
}

/// Match `term` against every line, stopping early when `budget` runs out.
pub fn match_term_within(
    term: &str,
    corpus: &Corpus,
    budget: &Budget,
) -> Result<TermMatches, SearchError> {
    scan(term, corpus, |line| budget.checkpoint(line))
}

fn scan<E>(
    term: &str,
    corpus: &Corpus,
    mut checkpoint: impl FnMut(usize) -> Result<(), E>,
) -> Result<TermMatches, E> {
    let folded = FoldedTerm::new(term);
    let mut hits = Vec::new();
    let mut words = BTreeSet::new();

    for (line_no, line) in corpus.lines().enumerate() {
        checkpoint(line_no)?;

        let mut best: Option<usize> = None;
        for word in line.split_whitespace() {
            let Some(distance) = folded.rank(word) else {
                continue;
            };
            best = Some(best.map_or(distance, |b| b.min(distance)));
            if !words.contains(word) {
                words.insert(word.to_string());
            }
        }

        if let Some(distance) = best {
            hits.push(MatchHit {
                line: line_no,
                distance,
            });
        }
    }

    Ok(TermMatches {
        term: term.to_string(),
        hits,
        words,
    })
}
