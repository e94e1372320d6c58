// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query splitting.
//!
//! The query is split on single spaces and nothing else: no trimming, no
//! collapsing. "be  question" has three terms, the middle one empty, and the
//! empty term matches every word. That is the legacy behaviour and callers
//! rely on it being observable.

use crate::error::SearchError;

/// Split a query into terms on single spaces.
///
/// Only a completely empty query is rejected.
///
/// # Example
///
/// ```
/// use folio::search::split_query;
///
/// assert_eq!(split_query("to be").unwrap(), vec!["to", "be"]);
/// assert_eq!(split_query("a  b").unwrap(), vec!["a", "", "b"]);
/// assert!(split_query("").is_err());
/// ```
pub fn split_query(query: &str) -> Result<Vec<String>, SearchError> {
    if query.is_empty() {
        return Err(SearchError::EmptyQuery);
    }
    Ok(query.split(' ').map(str::to_string).collect())
}
