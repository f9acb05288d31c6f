use std::{sync::Mutex, time::Duration};

use symcli::Res;
use symcli::migrate::{MigrateError, PlaylistSink, migrate};
use symcli::resolver::{CatalogSearch, TrackResolver};
use symcli::types::{PlaylistTrack, PlaylistTrackItem, SearchCandidate, TrackArtist};

// Helper function to create a playlist entry with a well-formed track
fn track_item(title: &str, artist: &str) -> PlaylistTrackItem {
    PlaylistTrackItem {
        track: Some(PlaylistTrack {
            name: Some(title.to_string()),
            artists: vec![TrackArtist {
                name: artist.to_string(),
            }],
        }),
    }
}

/// Search backend mock: any query whose title part starts with "hit"
/// resolves to a candidate carrying an id derived from the title, anything
/// else returns no candidates.
struct TitleSearch;

impl CatalogSearch for TitleSearch {
    async fn search(&self, query: &str, _limit: u32) -> Res<Vec<SearchCandidate>> {
        let title = query.split_whitespace().next().unwrap_or_default();
        if title.starts_with("hit") {
            Ok(vec![SearchCandidate {
                title: title.to_string(),
                video_id: format!("id-{}", title),
            }])
        } else {
            Ok(Vec::new())
        }
    }
}

/// Destination mock recording every call, with switchable failure modes.
struct MockSink {
    create_fails: bool,
    add_fails: bool,
    created: Mutex<Vec<(String, String)>>,
    added: Mutex<Vec<(String, Vec<String>)>>,
}

impl MockSink {
    fn new() -> Self {
        MockSink {
            create_fails: false,
            add_fails: false,
            created: Mutex::new(Vec::new()),
            added: Mutex::new(Vec::new()),
        }
    }

    fn failing_create() -> Self {
        MockSink {
            create_fails: true,
            ..Self::new()
        }
    }

    fn failing_add() -> Self {
        MockSink {
            add_fails: true,
            ..Self::new()
        }
    }

    fn add_calls(&self) -> Vec<(String, Vec<String>)> {
        self.added.lock().unwrap().clone()
    }
}

impl PlaylistSink for MockSink {
    async fn create_playlist(&self, title: &str, description: &str) -> Res<String> {
        if self.create_fails {
            return Err("create rejected".into());
        }
        self.created
            .lock()
            .unwrap()
            .push((title.to_string(), description.to_string()));
        Ok("dest-playlist".to_string())
    }

    async fn add_items(&self, playlist_id: &str, video_ids: &[String]) -> Res<()> {
        if self.add_fails {
            return Err("add rejected".into());
        }
        self.added
            .lock()
            .unwrap()
            .push((playlist_id.to_string(), video_ids.to_vec()));
        Ok(())
    }
}

#[tokio::test]
async fn test_migrate_partitions_in_source_order_with_one_bulk_add() {
    let sink = MockSink::new();
    let resolver = TrackResolver::new(TitleSearch);
    let items = vec![
        track_item("hit-one", "a"),
        track_item("hit-two", "b"),
        track_item("miss", "c"),
        track_item("hit-three", "d"),
    ];

    let report = migrate(&sink, &resolver, "Road Trip", &items, Duration::ZERO)
        .await
        .unwrap();

    assert_eq!(report.playlist_id, "dest-playlist");
    assert_eq!(report.resolved_ids, vec!["id-hit-one", "id-hit-two", "id-hit-three"]);
    assert_eq!(report.unresolved.len(), 1);
    assert_eq!(report.unresolved[0].title, "miss");

    // exactly one bulk call, carrying all resolved ids in source order
    let calls = sink.add_calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "dest-playlist");
    assert_eq!(calls[0].1, vec!["id-hit-one", "id-hit-two", "id-hit-three"]);
}

#[tokio::test]
async fn test_migrate_names_playlist_after_source() {
    let sink = MockSink::new();
    let resolver = TrackResolver::new(TitleSearch);

    migrate(&sink, &resolver, "Workout", &[], Duration::ZERO)
        .await
        .unwrap();

    let created = sink.created.lock().unwrap().clone();
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].0, "Workout");
    assert_eq!(created[0].1, "Copied from Spotify: Workout");
}

#[tokio::test]
async fn test_migrate_drops_malformed_entries_silently() {
    let sink = MockSink::new();
    let resolver = TrackResolver::new(TitleSearch);
    let items = vec![
        PlaylistTrackItem { track: None },
        PlaylistTrackItem {
            track: Some(PlaylistTrack {
                name: None,
                artists: vec![TrackArtist {
                    name: "someone".to_string(),
                }],
            }),
        },
        PlaylistTrackItem {
            track: Some(PlaylistTrack {
                name: Some("no artists".to_string()),
                artists: vec![],
            }),
        },
        track_item("hit-valid", "someone"),
    ];

    let report = migrate(&sink, &resolver, "Mixed", &items, Duration::ZERO)
        .await
        .unwrap();

    // dropped entries appear on neither side of the partition
    assert_eq!(report.resolved_ids, vec!["id-hit-valid"]);
    assert!(report.unresolved.is_empty());
}

#[tokio::test]
async fn test_migrate_skips_bulk_add_when_nothing_resolved() {
    let sink = MockSink::new();
    let resolver = TrackResolver::new(TitleSearch);
    let items = vec![track_item("miss-one", "a"), track_item("miss-two", "b")];

    let report = migrate(&sink, &resolver, "Obscurities", &items, Duration::ZERO)
        .await
        .unwrap();

    assert!(report.resolved_ids.is_empty());
    assert_eq!(report.unresolved.len(), 2);
    assert_eq!(report.unresolved[0].title, "miss-one");
    assert_eq!(report.unresolved[1].title, "miss-two");
    assert!(sink.add_calls().is_empty());
}

#[tokio::test]
async fn test_create_failure_aborts_this_playlist_only() {
    let sink = MockSink::failing_create();
    let resolver = TrackResolver::new(TitleSearch);
    let items = vec![track_item("hit-one", "a")];

    let result = migrate(&sink, &resolver, "Doomed", &items, Duration::ZERO).await;
    assert!(matches!(result, Err(MigrateError::CreateFailed(_))));
}

#[tokio::test]
async fn test_add_items_failure_still_yields_report() {
    // A failed bulk add is reported but must not raise past the playlist
    // boundary; the caller still gets the full report.
    let sink = MockSink::failing_add();
    let resolver = TrackResolver::new(TitleSearch);
    let items = vec![track_item("hit-one", "a"), track_item("hit-two", "b")];

    let report = migrate(&sink, &resolver, "Unlucky", &items, Duration::ZERO)
        .await
        .unwrap();

    assert_eq!(report.resolved_ids.len(), 2);
    assert!(report.unresolved.is_empty());
}
