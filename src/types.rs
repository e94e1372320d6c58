// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Values that flow between the pipeline stages.
//!
//! | Type           | Produced by        | Consumed by          |
//! |----------------|--------------------|----------------------|
//! | `MatchHit`     | term matcher       | rank & dedupe        |
//! | `TermMatches`  | term matcher       | fan-out, dedupe      |
//! | `ExcerptWindow`| paragraph resolver | highlighter          |
//! | `Excerpt`      | highlighter        | caller (CLI, HTTP)   |
//!
//! Everything here is per-call. Nothing is stored on the shared searcher.

use std::collections::BTreeSet;

use serde::Serialize;

/// One term matched one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MatchHit {
    /// 0-based corpus line.
    pub line: usize,
    /// Smallest edit distance among the line's matching words.
    pub distance: usize,
}

/// Everything one term matcher found. Owned by that matcher until the join.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TermMatches {
    pub term: String,
    /// At most one hit per line, in line order.
    pub hits: Vec<MatchHit>,
    /// Corpus words (original spelling) judged a match for this term.
    pub words: BTreeSet<String>,
}

/// The paragraph around a matched line.
///
/// `start..=end` is inclusive and never contains a blank line unless the
/// anchor itself is blank. `anchor` is the line that matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ExcerptWindow {
    pub start: usize,
    pub end: usize,
    pub anchor: usize,
}

impl ExcerptWindow {
    /// Number of lines in the window.
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// Always false: a window holds at least its anchor line.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, line: usize) -> bool {
        (self.start..=self.end).contains(&line)
    }
}

/// A highlighted byte range inside an excerpt's text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HighlightSpan {
    pub start: usize,
    pub end: usize,
    pub word: String,
}

/// A paragraph ready to show: text plus the spans to mark.
///
/// Spans are sorted by `start` and never overlap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Excerpt {
    pub window: ExcerptWindow,
    /// Window lines joined with `separator`.
    pub text: String,
    pub highlights: Vec<HighlightSpan>,
    #[serde(skip)]
    pub separator: String,
}

impl Excerpt {
    /// The highlighted substrings, in text order.
    pub fn highlighted_words(&self) -> Vec<&str> {
        self.highlights
            .iter()
            .map(|span| &self.text[span.start..span.end])
            .collect()
    }
}
