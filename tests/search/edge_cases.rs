//! Boundaries: empty inputs, corpus edges, odd whitespace.

use super::common::{anchors, hamlet, searcher};
use folio::{Corpus, ExcerptWindow, SearchConfig, SearchError, Searcher};
use std::sync::Arc;

#[test]
fn test_empty_corpus_returns_nothing() {
    let s = Searcher::new(Arc::new(Corpus::from_lines::<&str>(&[])), SearchConfig::default());
    assert!(s.search("anything").unwrap().is_empty());
    assert!(s.search(" ").unwrap().is_empty());
}

#[test]
fn test_empty_text_is_empty_corpus() {
    let s = Searcher::new(Arc::new(Corpus::from_text("")), SearchConfig::default());
    assert!(s.corpus().is_empty());
    assert!(s.search("a").unwrap().is_empty());
}

#[test]
fn test_empty_query_is_rejected() {
    assert_eq!(hamlet().search("").unwrap_err(), SearchError::EmptyQuery);
    assert_eq!(hamlet().search_html("").unwrap_err(), SearchError::EmptyQuery);
    assert_eq!(hamlet().search_lines("").unwrap_err(), SearchError::EmptyQuery);
}

#[test]
fn test_space_only_query_matches_every_word() {
    // " " splits into two empty terms; the empty term matches every word,
    // so every non-blank line is a hit: 0, 2, 3, 5 → three paragraphs.
    let results = hamlet().search(" ").unwrap();
    assert_eq!(results.len(), 3);
}

#[test]
fn test_first_and_last_line_anchors() {
    let results = hamlet().search("act").unwrap();
    assert_eq!(results[0].window, ExcerptWindow { start: 0, end: 0, anchor: 0 });
    assert_eq!(results[1].window, ExcerptWindow { start: 5, end: 5, anchor: 5 });
}

#[test]
fn test_corpus_without_blank_lines_is_one_paragraph() {
    let s = searcher(&["alpha", "beta", "gamma"]);
    let results = s.search("gamma").unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].window, ExcerptWindow { start: 0, end: 2, anchor: 2 });
}

#[test]
fn test_trailing_separator_blank_line_closes_paragraph() {
    let s = Searcher::new(Arc::new(Corpus::from_text("one\r\ntwo\r\n")), SearchConfig::default());
    let results = s.search("two").unwrap();
    assert_eq!(results[0].window, ExcerptWindow { start: 0, end: 1, anchor: 1 });
}

#[test]
fn test_whitespace_only_line_is_not_a_paragraph_break() {
    let s = searcher(&["alpha", "   ", "beta"]);
    let results = s.search("beta").unwrap();
    assert_eq!(results[0].window, ExcerptWindow { start: 0, end: 2, anchor: 2 });
}

#[test]
fn test_bare_newlines_are_not_line_breaks() {
    let s = Searcher::new(
        Arc::new(Corpus::from_text("alpha\nbeta\r\n\r\ngamma")),
        SearchConfig::default(),
    );
    assert_eq!(s.corpus().len(), 3);
    assert_eq!(anchors(&s, "beta"), vec![0]);
}

#[test]
fn test_punctuation_stays_attached_to_words() {
    let s = searcher(&["Alas, poor Yorick!"]);
    let results = s.search("yorick").unwrap();
    assert_eq!(results[0].highlighted_words(), vec!["Yorick!"]);
}

#[test]
fn test_multibyte_text_highlights_on_char_boundaries() {
    let s = searcher(&["über straße", "", "naïve résumé"]);
    let results = s.search("straße résumé").unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].window.anchor, 0);
    assert_eq!(results[0].highlighted_words(), vec!["straße"]);
    assert_eq!(results[1].window.anchor, 2);
    assert_eq!(results[1].highlighted_words(), vec!["résumé"]);
    for excerpt in &results {
        for span in &excerpt.highlights {
            assert!(excerpt.text.is_char_boundary(span.start));
            assert!(excerpt.text.is_char_boundary(span.end));
        }
    }
}
