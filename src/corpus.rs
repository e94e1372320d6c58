// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The corpus: one immutable text, split into lines once at load.
//!
//! Lines are stored as byte ranges into the raw text rather than as separate
//! `String`s, so "the line at position i" and "the raw text" can never
//! disagree. Positions are 0-based and contiguous; the count never changes
//! after construction.
//!
//! # Invariants
//!
//! - `lines[i]` is a valid `char`-aligned range of `text`
//! - `lines` are in order and separated by exactly one `separator`
//! - empty text has zero lines; a trailing separator yields a trailing empty line
//!
//! A blank line (exactly empty, not whitespace-only) is the paragraph
//! delimiter used by the resolver.

use std::fs;
use std::ops::Range;
use std::path::Path;

use serde::Serialize;

use crate::error::LoadError;

/// Line terminator of the corpus files this tool was built for.
pub const DEFAULT_SEPARATOR: &str = "\r\n";

/// An immutable, line-addressable text.
#[derive(Debug, Clone)]
pub struct Corpus {
    text: String,
    separator: String,
    lines: Vec<Range<usize>>,
}

/// Summary numbers for `folio inspect`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CorpusStats {
    pub bytes: usize,
    pub lines: usize,
    pub blank_lines: usize,
    pub paragraphs: usize,
    pub words: usize,
}

impl Corpus {
    /// Read a corpus file from disk, splitting on [`DEFAULT_SEPARATOR`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_bytes(bytes)
    }

    /// Decode raw bytes as UTF-8 and split on [`DEFAULT_SEPARATOR`].
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, LoadError> {
        let text = String::from_utf8(bytes)?;
        Ok(Self::from_text(text))
    }

    /// Split already-decoded text on [`DEFAULT_SEPARATOR`].
    pub fn from_text(text: impl Into<String>) -> Self {
        Self::with_separator(text, DEFAULT_SEPARATOR)
    }

    /// Split text on a custom line separator.
    ///
    /// An empty separator leaves the whole text as a single line.
    pub fn with_separator(text: impl Into<String>, separator: &str) -> Self {
        let text = text.into();
        let lines = split_spans(&text, separator);
        Self {
            text,
            separator: separator.to_string(),
            lines,
        }
    }

    /// Build a corpus from individual lines, joined with [`DEFAULT_SEPARATOR`].
    ///
    /// `[""]` joins to empty text and therefore yields an empty corpus.
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Self {
        if lines.is_empty() {
            return Self::from_text(String::new());
        }
        let text = lines
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(DEFAULT_SEPARATOR);
        Self::from_text(text)
    }

    /// Number of lines.
    #[inline]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The line at `index`.
    ///
    /// Panics when `index >= len()`. Callers only pass indices they got from
    /// this corpus, so an out-of-range index is a bug, not bad input.
    #[inline]
    pub fn line(&self, index: usize) -> &str {
        &self.text[self.lines[index].clone()]
    }

    /// The line at `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(|span| &self.text[span.clone()])
    }

    /// Is the line at `index` exactly empty?
    #[inline]
    pub fn is_blank(&self, index: usize) -> bool {
        self.lines[index].is_empty()
    }

    /// Index of the last line, `None` for an empty corpus.
    pub fn last_line(&self) -> Option<usize> {
        self.lines.len().checked_sub(1)
    }

    /// All lines in order.
    pub fn lines(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.lines.iter().map(|span| &self.text[span.clone()])
    }

    /// The raw text the corpus was built from.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The line separator.
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Lines `start..=end` joined with the corpus separator.
    ///
    /// Borrowed straight out of the raw text, since consecutive lines are
    /// already separated by exactly one separator there.
    pub fn span_text(&self, start: usize, end: usize) -> &str {
        &self.text[self.lines[start].start..self.lines[end].end]
    }

    /// Number of maximal runs of non-blank lines.
    pub fn paragraph_count(&self) -> usize {
        let mut count = 0;
        let mut in_paragraph = false;
        for span in &self.lines {
            if span.is_empty() {
                in_paragraph = false;
            } else if !in_paragraph {
                in_paragraph = true;
                count += 1;
            }
        }
        count
    }

    pub fn stats(&self) -> CorpusStats {
        CorpusStats {
            bytes: self.text.len(),
            lines: self.len(),
            blank_lines: self.lines.iter().filter(|span| span.is_empty()).count(),
            paragraphs: self.paragraph_count(),
            words: self.lines().map(|line| line.split_whitespace().count()).sum(),
        }
    }
}

fn split_spans(text: &str, separator: &str) -> Vec<Range<usize>> {
    if text.is_empty() {
        return Vec::new();
    }
    if separator.is_empty() {
        return vec![0..text.len()];
    }

    let mut spans = Vec::new();
    let mut start = 0;
    for (pos, _) in text.match_indices(separator) {
        spans.push(start..pos);
        start = pos + separator.len();
    }
    spans.push(start..text.len());
    spans
}
