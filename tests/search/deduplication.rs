//! A paragraph appears once, however many terms or lines in it matched.

use super::common::{anchors, hamlet, searcher_with, HAMLET};
use folio::{ExcerptWindow, SearchConfig};
use std::collections::HashSet;

#[test]
fn test_two_terms_same_paragraph_yield_one_window() {
    // "be" anchors at line 2, "question" at line 3. Both expand to [2,3].
    let results = hamlet().search("be question").unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].window, ExcerptWindow { start: 2, end: 3, anchor: 2 });
    assert_eq!(results[0].highlighted_words(), vec!["be", "question"]);
}

#[test]
fn test_duplicate_windows_kept_when_dedupe_disabled() {
    let s = searcher_with(HAMLET, SearchConfig::default().with_dedupe_windows(false));
    let results = s.search("be question").unwrap();
    let windows: Vec<ExcerptWindow> = results.iter().map(|e| e.window).collect();
    assert_eq!(
        windows,
        vec![
            ExcerptWindow { start: 2, end: 3, anchor: 2 },
            ExcerptWindow { start: 2, end: 3, anchor: 3 },
        ]
    );
}

#[test]
fn test_repeated_term_does_not_repeat_line() {
    assert_eq!(anchors(&hamlet(), "be be"), vec![2]);
    assert_eq!(hamlet().search_lines("be be").unwrap(), vec![2]);
}

#[test]
fn test_line_matched_by_many_terms_appears_once() {
    let lines = hamlet().search_lines("to be or not").unwrap();
    let unique: HashSet<_> = lines.iter().collect();
    assert_eq!(lines.len(), unique.len());
}

#[test]
fn test_no_duplicate_anchors() {
    let s = searcher_with(HAMLET, SearchConfig::default().with_dedupe_windows(false));
    for query in ["t", "to be", "the question", "a e i o u"] {
        let found = anchors(&s, query);
        let unique: HashSet<_> = found.iter().collect();
        assert_eq!(found.len(), unique.len(), "query {:?}", query);
    }
}

#[test]
fn test_no_duplicate_windows_by_default() {
    for query in ["t", "to be", "the question", "a e i o u"] {
        let results = hamlet().search(query).unwrap();
        let spans: HashSet<_> = results.iter().map(|e| (e.window.start, e.window.end)).collect();
        assert_eq!(results.len(), spans.len(), "query {:?}", query);
    }
}
