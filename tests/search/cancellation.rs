//! Deadlines and cancellation abandon the whole search.

use super::common::{large_corpus, HAMLET};
use folio::{Budget, Corpus, SearchConfig, SearchError, Searcher};
use std::sync::{Arc, OnceLock};
use std::thread;
use std::time::{Duration, Instant};

fn large_searcher(config: SearchConfig) -> Searcher {
    Searcher::new(large_corpus(500), config)
}

/// Every term matches every paragraph, so a full scan touches all lines.
const WIDE_QUERY: &str = "alpha delta zeta theta";

/// 600k lines, plus how long an unbounded scan of them takes.
fn huge_searcher() -> &'static (Searcher, Duration) {
    static HUGE: OnceLock<(Searcher, Duration)> = OnceLock::new();
    HUGE.get_or_init(|| {
        let s = Searcher::new(large_corpus(200_000), SearchConfig::default());
        let started = Instant::now();
        let lines = s.search_lines(WIDE_QUERY).unwrap();
        let full_scan = started.elapsed();
        assert_eq!(lines.len(), 400_000);
        (s, full_scan)
    })
}

#[test]
fn test_expired_deadline_times_out() {
    let s = large_searcher(SearchConfig::default());
    let budget = Budget::with_timeout(Duration::ZERO);
    assert_eq!(
        s.search_with_budget("alpha", &budget).unwrap_err(),
        SearchError::TimedOut(Duration::ZERO)
    );
}

#[test]
fn test_config_timeout_applies_to_search() {
    let s = large_searcher(SearchConfig::default().with_timeout(Duration::ZERO));
    assert!(matches!(s.search("alpha beta"), Err(SearchError::TimedOut(_))));
    assert!(matches!(s.search_html("alpha"), Err(SearchError::TimedOut(_))));
}

#[test]
fn test_generous_timeout_completes() {
    let s = large_searcher(SearchConfig::default().with_timeout(Duration::from_secs(60)));
    let results = s.search("alpha").unwrap();
    assert_eq!(results.len(), 500);
}

#[test]
fn test_cancelled_budget_stops_search() {
    let s = large_searcher(SearchConfig::default());
    let budget = Budget::unlimited();
    budget.cancel();
    assert_eq!(
        s.search_with_budget("alpha zeta", &budget).unwrap_err(),
        SearchError::Cancelled
    );
}

#[test]
fn test_cancel_through_clone() {
    let s = Searcher::new(Arc::new(Corpus::from_lines(HAMLET)), SearchConfig::default());
    let budget = Budget::unlimited();
    let handle = budget.clone();
    handle.cancel();
    assert!(budget.is_cancelled());
    assert_eq!(s.search_with_budget("not", &budget).unwrap_err(), SearchError::Cancelled);
}

#[test]
fn test_cancellation_wins_over_timeout() {
    let s = large_searcher(SearchConfig::default());
    let budget = Budget::with_timeout(Duration::ZERO);
    budget.cancel();
    assert_eq!(
        s.search_with_budget("alpha", &budget).unwrap_err(),
        SearchError::Cancelled
    );
}

#[test]
fn test_empty_query_checked_before_budget() {
    let s = large_searcher(SearchConfig::default());
    let budget = Budget::unlimited();
    budget.cancel();
    assert_eq!(s.search_with_budget("", &budget).unwrap_err(), SearchError::EmptyQuery);
}

#[test]
fn test_cancel_from_another_thread_stops_mid_scan() {
    let (s, full_scan) = huge_searcher();
    let budget = Budget::unlimited();
    let handle = budget.clone();

    let (result, elapsed) = thread::scope(|scope| {
        let started = Instant::now();
        scope.spawn(move || {
            thread::sleep(Duration::from_millis(10));
            handle.cancel();
        });
        let result = s.search_with_budget(WIDE_QUERY, &budget);
        (result, started.elapsed())
    });

    assert_eq!(result.unwrap_err(), SearchError::Cancelled);
    assert!(
        elapsed < *full_scan / 2,
        "cancelled after {:?}, full scan takes {:?}",
        elapsed,
        full_scan
    );
}

#[test]
fn test_short_timeout_stops_mid_scan() {
    let (s, full_scan) = huge_searcher();
    let timeout = Duration::from_millis(10);
    let budget = Budget::with_timeout(timeout);

    let started = Instant::now();
    let result = s.search_with_budget(WIDE_QUERY, &budget);
    let elapsed = started.elapsed();

    assert_eq!(result.unwrap_err(), SearchError::TimedOut(timeout));
    assert!(elapsed >= timeout);
    assert!(
        elapsed < *full_scan / 2,
        "timed out after {:?}, full scan takes {:?}",
        elapsed,
        full_scan
    );
}
