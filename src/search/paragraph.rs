// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Expand a matched line to its enclosing paragraph.
//!
//! A paragraph is a maximal run of non-blank lines. Scan backward from the
//! anchor to the nearest blank line (exclusive) or line 0, and forward to the
//! nearest blank line (exclusive) or the corpus's last line. The forward edge
//! is always derived from the corpus length, never a constant.

use crate::corpus::Corpus;
use crate::types::ExcerptWindow;

/// The paragraph window around `line`.
///
/// `line` must be a valid index into `corpus`; matcher output always is.
/// A blank anchor (only reachable by calling this directly) yields a
/// one-line window on itself.
pub fn expand(line: usize, corpus: &Corpus) -> ExcerptWindow {
    assert!(
        line < corpus.len(),
        "line {} out of range for corpus of {} lines",
        line,
        corpus.len()
    );

    if corpus.is_blank(line) {
        return ExcerptWindow {
            start: line,
            end: line,
            anchor: line,
        };
    }

    let start = (0..line)
        .rev()
        .find(|&i| corpus.is_blank(i))
        .map_or(0, |blank| blank + 1);

    let end = (line + 1..corpus.len())
        .find(|&i| corpus.is_blank(i))
        .map_or(corpus.len() - 1, |blank| blank - 1);

    ExcerptWindow {
        start,
        end,
        anchor: line,
    }
}
