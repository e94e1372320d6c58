// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search configuration.
//!
//! One struct, built once from CLI flags (or deserialized) and shared
//! read-only by every query. Per-query state never lives here.

use std::time::Duration;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::search::Budget;

/// How merged hits are ordered before deduplication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum RankOrder {
    /// Best (lowest) edit distance first, ties in term then line order.
    #[default]
    Quality,
    /// First term's hits in line order, then the second term's, and so on.
    /// Distance is ignored. Matches the legacy tool line for line.
    TermMajor,
}

/// How excerpts are rendered to strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Line-number prefix, `<br>` line breaks, `<mark>` highlights.
    #[default]
    Html,
    /// Corpus text as-is with `**` around highlights.
    Plain,
}

/// Settings shared by every search on a [`crate::Searcher`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct SearchConfig {
    pub rank_order: RankOrder,
    /// Per-query time limit in milliseconds. `None` waits for every matcher.
    pub timeout_ms: Option<u64>,
    /// Collapse excerpts that cover the same paragraph.
    pub dedupe_windows: bool,
    pub format: OutputFormat,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            rank_order: RankOrder::Quality,
            timeout_ms: None,
            dedupe_windows: true,
            format: OutputFormat::Html,
        }
    }
}

impl SearchConfig {
    pub fn with_rank_order(mut self, rank_order: RankOrder) -> Self {
        self.rank_order = rank_order;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = Some(timeout.as_millis() as u64);
        self
    }

    pub fn with_dedupe_windows(mut self, dedupe: bool) -> Self {
        self.dedupe_windows = dedupe;
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }

    /// A fresh budget for one query.
    pub fn budget(&self) -> Budget {
        match self.timeout() {
            Some(timeout) => Budget::with_timeout(timeout),
            None => Budget::unlimited(),
        }
    }
}
