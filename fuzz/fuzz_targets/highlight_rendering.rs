// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for excerpt assembly and highlighting.
//!
//! Arbitrary corpus text, arbitrary separator, arbitrary query. Whatever
//! comes in, spans must sit on char boundaries inside one line, never
//! overlap, and the HTML must carry balanced markers.

#![no_main]

use arbitrary::Arbitrary;
use folio::{Corpus, SearchConfig, Searcher};
use libfuzzer_sys::fuzz_target;
use std::sync::Arc;

#[derive(Debug, Arbitrary)]
struct RenderInput {
    text: String,
    use_crlf: bool,
    query: String,
}

fuzz_target!(|input: RenderInput| {
    // Cap sizes to keep each run fast
    let text: String = input.text.chars().take(2_000).collect();
    let query: String = input.query.chars().take(40).collect();

    let corpus = if input.use_crlf {
        Corpus::from_text(text)
    } else {
        Corpus::with_separator(text, "\n")
    };
    let separator = corpus.separator().to_string();
    let searcher = Searcher::new(Arc::new(corpus), SearchConfig::default());

    let Ok(excerpts) = searcher.search(&query) else {
        assert!(query.is_empty());
        return;
    };

    for excerpt in &excerpts {
        let mut previous_end = 0;
        for span in &excerpt.highlights {
            assert!(span.start >= previous_end, "overlapping highlights");
            assert!(excerpt.text.is_char_boundary(span.start));
            assert!(excerpt.text.is_char_boundary(span.end));
            assert!(!excerpt.text[span.start..span.end].contains(separator.as_str()));
            previous_end = span.end;
        }

        let html = excerpt.to_html();
        assert!(html.starts_with("<i>Line Number: "));
        assert_eq!(html.matches("<mark>").count(), excerpt.highlights.len());
        assert_eq!(html.matches("</mark>").count(), excerpt.highlights.len());
    }
});
