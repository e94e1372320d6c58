// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Case and accent folding for fuzzy comparison.
//!
//! Matching is done on folded text so "Romeo", "romeo" and "Roméo" are all the
//! same word to the matcher. Highlighting still uses the original spelling; the
//! folded form never leaves the comparison.

use std::borrow::Cow;

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Fold a string for comparison: strip diacritics and lowercase.
///
/// - "Café" → "cafe"
/// - "NAÏVE" → "naive"
/// - "harīṣh" → "harish"
///
/// Lowercase ASCII is returned borrowed. That is the overwhelmingly common case
/// for an English corpus, and the matcher calls this once per word per term.
///
/// # Algorithm (with unicode-normalization feature)
///
/// 1. NFD normalize (decompose characters into base + combining marks)
/// 2. Drop combining marks
/// 3. Lowercase
///
/// Without the feature (e.g. minimal builds) only step 3 runs.
pub fn fold(value: &str) -> Cow<'_, str> {
    if value.bytes().all(|b| b.is_ascii() && !b.is_ascii_uppercase()) {
        return Cow::Borrowed(value);
    }
    if value.is_ascii() {
        return Cow::Owned(value.to_ascii_lowercase());
    }
    Cow::Owned(fold_unicode(value))
}

#[cfg(feature = "unicode-normalization")]
fn fold_unicode(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

#[cfg(not(feature = "unicode-normalization"))]
fn fold_unicode(value: &str) -> String {
    value.to_lowercase()
}
