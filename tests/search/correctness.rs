//! End-to-end correctness on small hand-checked corpora.

use super::common::{anchors, hamlet, searcher, HAMLET, QUACK, SONNET};
use folio::ExcerptWindow;

#[test]
fn test_single_term_returns_its_paragraph() {
    let results = hamlet().search("not").unwrap();

    assert_eq!(results.len(), 1);
    let excerpt = &results[0];
    assert_eq!(excerpt.window, ExcerptWindow { start: 2, end: 3, anchor: 2 });
    assert_eq!(excerpt.text, "To be or not to be\r\nthat is the question");
    assert_eq!(excerpt.highlighted_words(), vec!["not"]);
}

#[test]
fn test_anchor_on_second_line_of_paragraph() {
    let results = hamlet().search("question").unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].window, ExcerptWindow { start: 2, end: 3, anchor: 3 });
}

#[test]
fn test_matches_in_separate_paragraphs() {
    let results = hamlet().search("act").unwrap();
    let windows: Vec<ExcerptWindow> = results.iter().map(|e| e.window).collect();
    assert_eq!(
        windows,
        vec![
            ExcerptWindow { start: 0, end: 0, anchor: 0 },
            ExcerptWindow { start: 5, end: 5, anchor: 5 },
        ]
    );
}

#[test]
fn test_matching_ignores_case() {
    assert_eq!(anchors(&hamlet(), "QUESTION"), vec![3]);
    assert_eq!(anchors(&hamlet(), "QuEsTiOn"), vec![3]);
}

#[cfg(feature = "unicode-normalization")]
#[test]
fn test_matching_ignores_diacritics() {
    let s = searcher(&["a café society", "", "plain text"]);
    assert_eq!(anchors(&s, "cafe"), vec![0]);

    let s = searcher(&["a cafe society"]);
    assert_eq!(anchors(&s, "café"), vec![0]);
}

#[test]
fn test_subsequence_fuzzy_match() {
    // "qck" is a subsequence of both "quick" and "quack".
    assert_eq!(anchors(&searcher(QUACK), "qck"), vec![0, 2, 4]);
}

#[test]
fn test_out_of_order_letters_do_not_match() {
    assert!(searcher(QUACK).search("kcq").unwrap().is_empty());
}

#[test]
fn test_no_match_is_empty_not_error() {
    assert!(hamlet().search("zzz").unwrap().is_empty());
}

#[test]
fn test_unmatched_term_does_not_affect_others() {
    assert_eq!(anchors(&hamlet(), "not zzz"), anchors(&hamlet(), "not"));
    assert_eq!(anchors(&hamlet(), "zzz not"), anchors(&hamlet(), "not"));
}

#[test]
fn test_disjoint_terms_union_regardless_of_order() {
    let s = searcher(SONNET);
    let mut forward = s.search_lines("may heaven").unwrap();
    let mut backward = s.search_lines("heaven may").unwrap();
    forward.sort_unstable();
    backward.sort_unstable();
    assert_eq!(forward, vec![3, 6]);
    assert_eq!(backward, forward);
}

#[test]
fn test_excerpt_uses_corpus_separator() {
    let results = hamlet().search("that").unwrap();
    assert_eq!(results.len(), 1);
    assert!(results[0].text.contains("\r\n"));
    assert_eq!(results[0].separator, "\r\n");
}

#[test]
fn test_every_anchor_is_inside_its_window() {
    let s = searcher(HAMLET);
    for query in ["a", "t", "e", "be", "act"] {
        for excerpt in s.search(query).unwrap() {
            assert!(excerpt.window.contains(excerpt.window.anchor), "query {:?}", query);
        }
    }
}
