// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Concurrent fuzzy paragraph search over a static, line-oriented corpus.
//!
//! A query is split into terms. Every term is matched against every word of
//! every line in parallel; the hits are ranked and merged, each hit line is
//! grown to its surrounding paragraph, and the matched words are highlighted
//! in the excerpt.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────────┐
//! │  corpus.rs  │────▶│  fuzzy/      │────▶│  search/         │
//! │  (Corpus,   │     │ (FoldedTerm, │     │  (Searcher,      │
//! │   lines)    │     │  levenshtein)│     │   fan_out, merge)│
//! └─────────────┘     └──────────────┘     └──────────────────┘
//!        │                                          │
//!        ▼                                          ▼
//! ┌─────────────────────────────────────────────────────┐
//! │            search/paragraph + search/highlight      │
//! │   (ExcerptWindow → Excerpt → HTML / plain text)     │
//! └─────────────────────────────────────────────────────┘
//!                           │
//!                           ▼
//!                ┌─────────────────────┐
//!                │ server.rs (axum)    │
//!                │ GET /search?q=...   │
//!                └─────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use std::sync::Arc;
//! use folio::{Corpus, SearchConfig, Searcher};
//!
//! let corpus = Corpus::from_lines(&["To be or not to be", "that is the question"]);
//! let searcher = Searcher::new(Arc::new(corpus), SearchConfig::default());
//!
//! let html = searcher.search_html("question").unwrap();
//! assert_eq!(
//!     html[0],
//!     "<i>Line Number: 1</i><br>To be or not to be<br>that is the <mark>question</mark>"
//! );
//! ```

pub mod config;
pub mod corpus;
pub mod error;
pub mod fuzzy;
pub mod search;
pub mod types;
pub mod util;

#[cfg(feature = "server")]
pub mod server;

pub use config::{OutputFormat, RankOrder, SearchConfig};
pub use corpus::{Corpus, CorpusStats, DEFAULT_SEPARATOR};
pub use error::{LoadError, SearchError};
pub use fuzzy::{levenshtein, FoldedTerm};
pub use search::{Budget, HighlightOptions, Searcher};
pub use types::{Excerpt, ExcerptWindow, HighlightSpan, MatchHit, TermMatches};
