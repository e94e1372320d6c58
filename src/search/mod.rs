// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search pipeline.
//!
//! ```text
//! query ─▶ split ─▶ fan_out ──▶ merge ──▶ expand ──▶ dedupe ──▶ highlight
//!                   (per term,   (rank,    (line →    (same       (excerpt +
//!                    parallel)    unique)   paragraph) paragraph)  spans)
//! ```
//!
//! `Searcher` owns nothing per-query. The corpus sits behind an `Arc` and is
//! only ever read; hit lists, matched words and excerpts are locals of the
//! call that made them. One `Searcher` can serve any number of concurrent
//! requests.

pub mod budget;
pub mod dedup;
pub mod fanout;
pub mod highlight;
pub mod matcher;
pub mod paragraph;
pub mod query;

use std::sync::Arc;

use tracing::{debug, info};

pub use budget::Budget;
pub use dedup::{dedupe_windows, merge, LineMerger};
pub use fanout::{fan_out, matched_words};
pub use highlight::{HighlightOptions, Highlighter};
pub use matcher::{match_term, match_term_within};
pub use paragraph::expand;
pub use query::split_query;

use crate::config::{OutputFormat, SearchConfig};
use crate::corpus::Corpus;
use crate::error::SearchError;
use crate::types::{Excerpt, ExcerptWindow};

/// Markers used for [`OutputFormat::Plain`].
pub const PLAIN_MARKERS: (&str, &str) = ("**", "**");

/// Answers queries against one shared corpus.
#[derive(Debug, Clone)]
pub struct Searcher {
    corpus: Arc<Corpus>,
    config: SearchConfig,
}

impl Searcher {
    pub fn new(corpus: Arc<Corpus>, config: SearchConfig) -> Self {
        Self { corpus, config }
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Search with a fresh budget from the config's timeout.
    pub fn search(&self, query: &str) -> Result<Vec<Excerpt>, SearchError> {
        self.search_with_budget(query, &self.config.budget())
    }

    /// Search, giving up when `budget` expires or is cancelled.
    pub fn search_with_budget(
        &self,
        query: &str,
        budget: &Budget,
    ) -> Result<Vec<Excerpt>, SearchError> {
        let terms = split_query(query)?;
        let matches = fan_out(&terms, &self.corpus, budget)?;

        let lines = merge(&matches, self.config.rank_order);
        let words = matched_words(&matches);
        debug!(lines = lines.len(), words = words.len(), "merged term matches");

        let windows = self.windows(&lines);
        let highlighter = Highlighter::new(&self.corpus, &words);
        let excerpts: Vec<Excerpt> = windows
            .into_iter()
            .map(|window| highlighter.excerpt(window))
            .collect();

        info!(query, results = excerpts.len(), "search complete");
        Ok(excerpts)
    }

    /// Ranked unique anchor lines, before paragraph expansion.
    pub fn search_lines(&self, query: &str) -> Result<Vec<usize>, SearchError> {
        let terms = split_query(query)?;
        let matches = fan_out(&terms, &self.corpus, &self.config.budget())?;
        Ok(merge(&matches, self.config.rank_order))
    }

    /// Search and render every excerpt in the configured output format.
    pub fn search_rendered(&self, query: &str) -> Result<Vec<String>, SearchError> {
        let excerpts = self.search(query)?;
        Ok(self.render_all(&excerpts))
    }

    /// Search and render as HTML, whatever the configured format.
    pub fn search_html(&self, query: &str) -> Result<Vec<String>, SearchError> {
        Ok(self.search(query)?.iter().map(Excerpt::to_html).collect())
    }

    fn render_all(&self, excerpts: &[Excerpt]) -> Vec<String> {
        match self.config.format {
            OutputFormat::Html => excerpts.iter().map(Excerpt::to_html).collect(),
            OutputFormat::Plain => {
                let options = HighlightOptions::with_tags(PLAIN_MARKERS.0, PLAIN_MARKERS.1);
                excerpts.iter().map(|e| e.render(&options)).collect()
            }
        }
    }

    fn windows(&self, lines: &[usize]) -> Vec<ExcerptWindow> {
        let windows: Vec<ExcerptWindow> = lines
            .iter()
            .map(|&line| expand(line, &self.corpus))
            .collect();
        if self.config.dedupe_windows {
            dedupe_windows(windows)
        } else {
            windows
        }
    }
}
