// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! Two lifetimes, two enums. `LoadError` happens once, at startup, and the
//! process should not start serving without a corpus. `SearchError` is scoped
//! to a single query. Finding nothing is not an error: it is an empty result.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Failure to read or decode the corpus.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read corpus {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("corpus is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// Failure of a single search call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The query string was empty, so there is nothing to match.
    #[error("missing search query")]
    EmptyQuery,

    /// The search budget ran out before every term finished matching.
    #[error("search timed out after {0:?}")]
    TimedOut(Duration),

    /// The caller cancelled the search.
    #[error("search cancelled")]
    Cancelled,
}
