// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Assemble paragraph excerpts and mark matched words.
//!
//! Spans are computed on the plain paragraph text first and markup is applied
//! last, in one pass. Two consequences:
//!
//! - the line-number prefix and the markers are never searched, so a short
//!   word like "i" or "mark" cannot land inside them
//! - spans cannot nest: a word whose first occurrence overlaps a span that is
//!   already claimed is skipped
//!
//! Claim order is longest word first, then lexicographic. "question" claims
//! its span before "quest" gets a chance to split it. Only the first
//! occurrence of each word is marked, and an occurrence must sit inside one
//! line (never across a separator).

use std::collections::BTreeSet;
use std::ops::Range;

use aho_corasick::AhoCorasick;
use tracing::warn;

use crate::corpus::Corpus;
use crate::types::{Excerpt, ExcerptWindow, HighlightSpan};

/// Markers placed around each highlighted word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightOptions {
    pub pre_tag: String,
    pub post_tag: String,
}

impl HighlightOptions {
    pub fn html() -> Self {
        Self::with_tags("<mark>", "</mark>")
    }

    pub fn with_tags(pre: &str, post: &str) -> Self {
        Self {
            pre_tag: pre.to_string(),
            post_tag: post.to_string(),
        }
    }
}

impl Default for HighlightOptions {
    fn default() -> Self {
        Self::html()
    }
}

/// Builds excerpts for one search call.
///
/// Holds the matched words in claim order and, when it can be built, an
/// Aho-Corasick automaton over them so each excerpt is scanned once.
pub struct Highlighter<'a> {
    corpus: &'a Corpus,
    words: Vec<&'a str>,
    automaton: Option<AhoCorasick>,
}

impl<'a> Highlighter<'a> {
    pub fn new(corpus: &'a Corpus, matched: &'a BTreeSet<String>) -> Self {
        let mut words: Vec<&str> = matched
            .iter()
            .map(String::as_str)
            .filter(|word| !word.is_empty())
            .collect();
        words.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

        let automaton = if words.is_empty() {
            None
        } else {
            match AhoCorasick::new(&words) {
                Ok(automaton) => Some(automaton),
                Err(err) => {
                    warn!(words = words.len(), "falling back to substring scan: {}", err);
                    None
                }
            }
        };

        Self {
            corpus,
            words,
            automaton,
        }
    }

    /// Assemble the window's text and claim highlight spans in it.
    pub fn excerpt(&self, window: ExcerptWindow) -> Excerpt {
        let separator = self.corpus.separator();
        let text = self.corpus.span_text(window.start, window.end);

        let mut lines = Vec::with_capacity(window.len());
        let mut offset = 0;
        for index in window.start..=window.end {
            let len = self.corpus.line(index).len();
            lines.push(offset..offset + len);
            offset += len + separator.len();
        }

        let firsts = match &self.automaton {
            Some(automaton) => first_occurrences_automaton(automaton, text, &lines, self.words.len()),
            None => first_occurrences_scan(&self.words, text, &lines),
        };

        Excerpt {
            window,
            text: text.to_string(),
            highlights: claim_spans(&self.words, &firsts),
            separator: separator.to_string(),
        }
    }
}

/// First in-line start offset of each word (by claim-order index).
fn first_occurrences_automaton(
    automaton: &AhoCorasick,
    text: &str,
    lines: &[Range<usize>],
    word_count: usize,
) -> Vec<Option<usize>> {
    let mut firsts = vec![None; word_count];
    for found in automaton.find_overlapping_iter(text) {
        if !within_one_line(lines, found.start(), found.end()) {
            continue;
        }
        let slot = &mut firsts[found.pattern().as_usize()];
        if slot.map_or(true, |start| found.start() < start) {
            *slot = Some(found.start());
        }
    }
    firsts
}

fn first_occurrences_scan(words: &[&str], text: &str, lines: &[Range<usize>]) -> Vec<Option<usize>> {
    words
        .iter()
        .map(|word| {
            lines
                .iter()
                .find_map(|line| text[line.clone()].find(word).map(|pos| line.start + pos))
        })
        .collect()
}

/// `lines` are sorted and disjoint, so the only candidate is the last line
/// starting at or before `start`.
fn within_one_line(lines: &[Range<usize>], start: usize, end: usize) -> bool {
    match lines.partition_point(|line| line.start <= start) {
        0 => false,
        next => end <= lines[next - 1].end,
    }
}

fn claim_spans(words: &[&str], firsts: &[Option<usize>]) -> Vec<HighlightSpan> {
    let mut spans: Vec<HighlightSpan> = Vec::new();
    for (word, first) in words.iter().zip(firsts) {
        let Some(start) = *first else {
            continue;
        };
        let end = start + word.len();
        if spans.iter().any(|span| start < span.end && span.start < end) {
            continue;
        }
        spans.push(HighlightSpan {
            start,
            end,
            word: (*word).to_string(),
        });
    }
    spans.sort_by_key(|span| span.start);
    spans
}

impl Excerpt {
    /// `<i>Line Number: N</i><br>` followed by the paragraph, lines joined
    /// with `<br>`, highlights in `<mark>`. Corpus text is HTML-escaped.
    pub fn to_html(&self) -> String {
        let mut out = format!("<i>Line Number: {}</i><br>", self.window.anchor);
        self.write_marked(&mut out, &HighlightOptions::html(), Some("<br>"), true);
        out
    }

    /// The paragraph with highlights wrapped in `options`' markers.
    /// Line separators are kept as-is and nothing is escaped.
    pub fn render(&self, options: &HighlightOptions) -> String {
        let mut out = String::with_capacity(
            self.text.len() + self.highlights.len() * (options.pre_tag.len() + options.post_tag.len()),
        );
        self.write_marked(&mut out, options, None, false);
        out
    }

    fn write_marked(
        &self,
        out: &mut String,
        options: &HighlightOptions,
        line_break: Option<&str>,
        escape: bool,
    ) {
        let mut pos = 0;
        for span in &self.highlights {
            self.write_text(out, &self.text[pos..span.start], line_break, escape);
            out.push_str(&options.pre_tag);
            self.write_text(out, &self.text[span.start..span.end], line_break, escape);
            out.push_str(&options.post_tag);
            pos = span.end;
        }
        self.write_text(out, &self.text[pos..], line_break, escape);
    }

    fn write_text(&self, out: &mut String, segment: &str, line_break: Option<&str>, escape: bool) {
        match line_break {
            Some(line_break) if !self.separator.is_empty() => {
                for (i, piece) in segment.split(self.separator.as_str()).enumerate() {
                    if i > 0 {
                        out.push_str(line_break);
                    }
                    push_text(out, piece, escape);
                }
            }
            _ => push_text(out, segment, escape),
        }
    }
}

fn push_text(out: &mut String, text: &str, escape: bool) {
    if !escape {
        out.push_str(text);
        return;
    }
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}
