// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Rank and deduplicate hits from every term.
//!
//! A line should appear at most once in search results. Sounds obvious, but
//! every term produces its own hit list, and "to be" hits line 2 twice. The
//! merger flattens the per-term lists, orders them, and keeps the first
//! occurrence of each line. What "first" means depends on [`RankOrder`]:
//!
//! - `Quality`: stable sort by ascending distance, so a line's best hit wins
//!   and ties keep term order, then line order.
//! - `TermMajor`: no sort. The first term's lines come first. This is the
//!   legacy behaviour, where a distance sort was computed and then ignored.
//!
//! **Invariant**: each line appears at most once in the merged output.
//!
//! Two different lines can still sit in the same paragraph. `dedupe_windows`
//! collapses those after paragraph expansion.

use std::collections::HashSet;

use crate::config::RankOrder;
use crate::types::{ExcerptWindow, MatchHit, TermMatches};

/// Keeps the first occurrence of each line, in arrival order.
#[derive(Debug, Default)]
pub struct LineMerger {
    seen: HashSet<usize>,
    lines: Vec<usize>,
}

impl LineMerger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            seen: HashSet::with_capacity(capacity),
            lines: Vec::with_capacity(capacity),
        }
    }

    /// Add a line. Returns `false` if it was already present.
    pub fn merge(&mut self, line: usize) -> bool {
        if self.seen.insert(line) {
            self.lines.push(line);
            true
        } else {
            false
        }
    }

    pub fn merge_all(&mut self, lines: impl IntoIterator<Item = usize>) {
        for line in lines {
            self.merge(line);
        }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn contains(&self, line: usize) -> bool {
        self.seen.contains(&line)
    }

    /// Unique lines in first-seen order.
    pub fn into_lines(self) -> Vec<usize> {
        self.lines
    }
}

/// All hits from all terms, in term order then line order.
pub fn flatten(per_term: &[TermMatches]) -> Vec<MatchHit> {
    per_term
        .iter()
        .flat_map(|matches| matches.hits.iter().copied())
        .collect()
}

/// Merge per-term hit lists into unique line indices.
pub fn merge(per_term: &[TermMatches], order: RankOrder) -> Vec<usize> {
    let mut hits = flatten(per_term);
    if order == RankOrder::Quality {
        // sort_by_key is stable: equal distances keep term, then line, order.
        hits.sort_by_key(|hit| hit.distance);
    }

    let mut merger = LineMerger::with_capacity(hits.len());
    merger.merge_all(hits.iter().map(|hit| hit.line));
    merger.into_lines()
}

/// Drop windows covering a paragraph already seen, keeping the first.
pub fn dedupe_windows(windows: Vec<ExcerptWindow>) -> Vec<ExcerptWindow> {
    let mut seen = HashSet::with_capacity(windows.len());
    windows
        .into_iter()
        .filter(|window| seen.insert((window.start, window.end)))
        .collect()
}
