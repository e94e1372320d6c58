//! Shared test utilities and fixtures.

#![allow(dead_code)]

use folio::{Corpus, SearchConfig, Searcher};
use std::sync::Arc;

// ============================================================================
// FIXTURES
// ============================================================================

/// Six lines, three paragraphs, CRLF separated.
///
/// ```text
/// 0  ACT I
/// 1
/// 2  To be or not to be
/// 3  that is the question
/// 4
/// 5  ACT II
/// ```
pub const HAMLET: &[&str] = &[
    "ACT I",
    "",
    "To be or not to be",
    "that is the question",
    "",
    "ACT II",
];

/// Two fuzzy targets with different distances, in separate paragraphs.
pub const QUACK: &[&str] = &[
    "the quick brown fox",
    "",
    "a quack was heard",
    "",
    "quick thinking",
];

/// A longer text with repeated words across paragraphs.
pub const SONNET: &[&str] = &[
    "Shall I compare thee to a summer's day?",
    "Thou art more lovely and more temperate:",
    "",
    "Rough winds do shake the darling buds of May,",
    "And summer's lease hath all too short a date;",
    "",
    "Sometime too hot the eye of heaven shines,",
    "And often is his gold complexion dimm'd;",
    "",
    "So long lives this, and this gives life to thee.",
];

// ============================================================================
// BUILDERS
// ============================================================================

pub fn corpus(lines: &[&str]) -> Arc<Corpus> {
    Arc::new(Corpus::from_lines(lines))
}

pub fn searcher(lines: &[&str]) -> Searcher {
    Searcher::new(corpus(lines), SearchConfig::default())
}

pub fn searcher_with(lines: &[&str], config: SearchConfig) -> Searcher {
    Searcher::new(corpus(lines), config)
}

pub fn hamlet() -> Searcher {
    searcher(HAMLET)
}

/// A corpus of `paragraphs` two-line paragraphs, each line full of words.
pub fn large_corpus(paragraphs: usize) -> Arc<Corpus> {
    let mut lines = Vec::with_capacity(paragraphs * 3);
    for i in 0..paragraphs {
        lines.push(format!("paragraph {} opens with alpha beta gamma delta", i));
        lines.push(format!("and closes with epsilon zeta eta theta {}", i));
        lines.push(String::new());
    }
    Arc::new(Corpus::from_lines(&lines))
}

// ============================================================================
// ASSERTIONS
// ============================================================================

/// Anchors of a result list, in result order.
pub fn anchors(searcher: &Searcher, query: &str) -> Vec<usize> {
    searcher
        .search(query)
        .expect("search failed")
        .iter()
        .map(|excerpt| excerpt.window.anchor)
        .collect()
}
