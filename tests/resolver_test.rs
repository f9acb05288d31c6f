use std::{collections::HashMap, sync::Mutex};

use symcli::Res;
use symcli::resolver::{CatalogSearch, MatchDecision, TrackResolver, pick_candidate};
use symcli::types::{Resolution, SearchCandidate, TrackDescriptor};

// Helper function to create a search candidate
fn candidate(title: &str, video_id: &str) -> SearchCandidate {
    SearchCandidate {
        title: title.to_string(),
        video_id: video_id.to_string(),
    }
}

fn descriptor(title: &str, artist: &str) -> TrackDescriptor {
    TrackDescriptor {
        title: title.to_string(),
        artist: artist.to_string(),
    }
}

/// Search backend mock: canned responses per query, records every query it
/// receives, and can be told to fail outright.
struct MockSearch {
    responses: HashMap<String, Vec<SearchCandidate>>,
    queries: Mutex<Vec<String>>,
    fail: bool,
}

impl MockSearch {
    fn new() -> Self {
        MockSearch {
            responses: HashMap::new(),
            queries: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    fn with_response(mut self, query: &str, candidates: Vec<SearchCandidate>) -> Self {
        self.responses.insert(query.to_string(), candidates);
        self
    }

    fn failing() -> Self {
        MockSearch {
            responses: HashMap::new(),
            queries: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    fn seen_queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

impl CatalogSearch for MockSearch {
    async fn search(&self, query: &str, _limit: u32) -> Res<Vec<SearchCandidate>> {
        self.queries.lock().unwrap().push(query.to_string());
        if self.fail {
            return Err("search backend unavailable".into());
        }
        Ok(self.responses.get(query).cloned().unwrap_or_default())
    }
}

#[tokio::test]
async fn test_exact_title_beats_relevance_order() {
    // The service ranks a live version first, but an exact-title hit exists
    // further down the candidate list.
    let search = MockSearch::new().with_response(
        "Yesterday The Beatles",
        vec![
            candidate("Yesterday (Live)", "B"),
            candidate("Yesterday", "A"),
        ],
    );
    let resolver = TrackResolver::new(search);

    let result = resolver
        .resolve(&descriptor("Yesterday", "The Beatles"))
        .await;
    assert_eq!(result, Resolution::Resolved("A".to_string()));
}

#[tokio::test]
async fn test_all_titles_below_cutoff_falls_back_to_top_result() {
    // Nothing resembles the source title, so the service's own top
    // relevance hit is trusted.
    let search = MockSearch::new().with_response(
        "Yesterday The Beatles",
        vec![
            candidate("Yesterday - Remastered 2009 Version", "A"),
            candidate("Completely Different Song", "B"),
        ],
    );
    let resolver = TrackResolver::new(search);

    let result = resolver
        .resolve(&descriptor("Yesterday", "The Beatles"))
        .await;
    assert_eq!(result, Resolution::Resolved("A".to_string()));
}

#[tokio::test]
async fn test_combined_query_empty_retries_title_only() {
    let search = MockSearch::new()
        .with_response("Aan Guzarishat Khan", vec![])
        .with_response("Aan Guzarishat", vec![candidate("Aan Guzarishat", "X")]);
    let resolver = TrackResolver::new(&search);

    let result = resolver.resolve(&descriptor("Aan Guzarishat", "Khan")).await;
    assert_eq!(result, Resolution::Resolved("X".to_string()));

    let queries = search.seen_queries();
    assert_eq!(queries, vec!["Aan Guzarishat Khan", "Aan Guzarishat"]);
}

#[tokio::test]
async fn test_both_queries_empty_is_unresolved() {
    let search = MockSearch::new();
    let resolver = TrackResolver::new(&search);

    let result = resolver
        .resolve(&descriptor("Obscure B-Side", "Unknown Artist"))
        .await;
    assert_eq!(result, Resolution::Unresolved);

    // Title-only fallback must have been attempted before giving up
    let queries = search.seen_queries();
    assert_eq!(
        queries,
        vec!["Obscure B-Side Unknown Artist", "Obscure B-Side"]
    );
}

#[tokio::test]
async fn test_search_failure_is_unresolved_not_fatal() {
    let search = MockSearch::failing();
    let resolver = TrackResolver::new(search);

    let result = resolver.resolve(&descriptor("Anything", "Anyone")).await;
    assert_eq!(result, Resolution::Unresolved);
}

#[tokio::test]
async fn test_resolve_returns_exactly_one_outcome() {
    // Terminates with a definite outcome for every well-formed descriptor,
    // with or without candidates.
    let search = MockSearch::new().with_response("Hit Song Artist", vec![candidate("Hit Song", "H")]);
    let resolver = TrackResolver::new(search);

    match resolver.resolve(&descriptor("Hit Song", "Artist")).await {
        Resolution::Resolved(id) => assert_eq!(id, "H"),
        Resolution::Unresolved => panic!("expected a resolved track"),
    }
}

#[tokio::test]
async fn test_stricter_cutoff_prefers_relevance_ranking() {
    // At 0.95 a one-edit near-match no longer clears the cutoff, so the
    // service's top hit wins instead.
    let search = MockSearch::new().with_response(
        "My Song Artist",
        vec![candidate("Top Hit", "top"), candidate("My Songs", "near")],
    );
    let resolver = TrackResolver::new(search).with_cutoff(0.95).with_limit(5);

    let result = resolver.resolve(&descriptor("My Song", "Artist")).await;
    assert_eq!(result, Resolution::Resolved("top".to_string()));
}

#[test]
fn test_pick_candidate_exact_match() {
    let candidates = vec![
        candidate("Some Cover Version", "cover"),
        candidate("My Song", "exact"),
    ];
    assert_eq!(
        pick_candidate("My Song", &candidates, 0.6),
        MatchDecision::FuzzyTitle(1)
    );
}

#[test]
fn test_pick_candidate_tie_breaks_by_result_order() {
    // Two candidates carry the identical winning title; the earlier one in
    // service order must win.
    let candidates = vec![
        candidate("My Song", "first"),
        candidate("My Song", "second"),
    ];
    assert_eq!(
        pick_candidate("My Song", &candidates, 0.6),
        MatchDecision::FuzzyTitle(0)
    );
}

#[test]
fn test_pick_candidate_near_match_clears_cutoff() {
    // One edit away from the source title scores 0.875, comfortably above
    // the 0.6 cutoff.
    let candidates = vec![
        candidate("unrelated entry", "x"),
        candidate("My Songs", "near"),
    ];
    assert_eq!(
        pick_candidate("My Song", &candidates, 0.6),
        MatchDecision::FuzzyTitle(1)
    );
}

#[test]
fn test_pick_candidate_below_cutoff_is_top_result() {
    let candidates = vec![
        candidate("Wwwwwwwwwwwwwwwwww", "top"),
        candidate("Zzzzzzzzzzzzzzzzzz", "other"),
    ];
    assert_eq!(
        pick_candidate("My Song", &candidates, 0.6),
        MatchDecision::TopResult
    );
}

#[test]
fn test_pick_candidate_equal_scores_keep_earlier_candidate() {
    // Both candidates score identically against the source title; the
    // first-scanned one must be kept rather than re-ranked.
    let candidates = vec![candidate("My Sona", "first"), candidate("My Sonb", "second")];
    assert_eq!(
        pick_candidate("My Song", &candidates, 0.6),
        MatchDecision::FuzzyTitle(0)
    );
}
