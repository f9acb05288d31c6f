use symcli::types::{
    Playlist, PlaylistTrack, PlaylistTrackItem, PlaylistTracksRef, TrackArtist, TrackDescriptor,
};
use symcli::utils::*;

// Helper function to create a test playlist
fn create_test_playlist(id: &str, name: &str, total: u64) -> Playlist {
    Playlist {
        id: id.to_string(),
        name: name.to_string(),
        description: None,
        tracks: PlaylistTracksRef { total },
    }
}

fn create_track_item(name: Option<&str>, artists: Vec<&str>) -> PlaylistTrackItem {
    PlaylistTrackItem {
        track: Some(PlaylistTrack {
            name: name.map(|n| n.to_string()),
            artists: artists
                .into_iter()
                .map(|a| TrackArtist {
                    name: a.to_string(),
                })
                .collect(),
        }),
    }
}

#[test]
fn test_generate_code_verifier() {
    let verifier = generate_code_verifier();

    // Should be exactly 128 characters
    assert_eq!(verifier.len(), 128);

    // Should contain only alphanumeric characters
    assert!(verifier.chars().all(|c| c.is_ascii_alphanumeric()));

    // Two generated verifiers should be different
    let verifier2 = generate_code_verifier();
    assert_ne!(verifier, verifier2);
}

#[test]
fn test_generate_code_challenge() {
    let verifier = "test_verifier_123";
    let challenge = generate_code_challenge(verifier);

    // Should not be empty
    assert!(!challenge.is_empty());

    // Should be deterministic - same input produces same output
    let challenge2 = generate_code_challenge(verifier);
    assert_eq!(challenge, challenge2);

    // Different input should produce different output
    let challenge3 = generate_code_challenge("different_verifier");
    assert_ne!(challenge, challenge3);

    // Should be base64-encoded (URL-safe, no padding)
    assert!(
        challenge
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    );
}

#[test]
fn test_playlist_description() {
    assert_eq!(
        playlist_description("Road Trip"),
        "Copied from Spotify: Road Trip"
    );
}

#[test]
fn test_sort_playlists_by_name() {
    let mut playlists = vec![
        create_test_playlist("1", "zebra", 3),
        create_test_playlist("2", "Alpha", 5),
        create_test_playlist("3", "miDDle", 1),
    ];

    sort_playlists_by_name(&mut playlists);

    // Case-insensitive ascending by name
    let names: Vec<&str> = playlists.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Alpha", "miDDle", "zebra"]);
}

#[test]
fn test_filter_playlists() {
    let mut playlists = vec![
        create_test_playlist("1", "Workout Mix", 10),
        create_test_playlist("2", "Chill", 20),
        create_test_playlist("3", "workout 2", 5),
    ];

    filter_playlists(&mut playlists, Some("workout".to_string()));

    // Case-insensitive substring match
    assert_eq!(playlists.len(), 2);
    assert!(playlists.iter().all(|p| p.name.to_lowercase().contains("workout")));

    // None leaves the list untouched
    let mut untouched = vec![create_test_playlist("1", "Anything", 1)];
    filter_playlists(&mut untouched, None);
    assert_eq!(untouched.len(), 1);
}

#[test]
fn test_playlist_table_rows() {
    let playlists = vec![create_test_playlist("1", "Road Trip", 42)];
    let rows = playlist_table_rows(playlists);

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Road Trip");
    assert_eq!(rows[0].tracks, 42);
}

#[test]
fn test_track_descriptor_from_valid_item() {
    let item = create_track_item(Some("Yesterday"), vec!["The Beatles", "Someone Else"]);
    let descriptor = TrackDescriptor::from_item(&item).unwrap();

    assert_eq!(descriptor.title, "Yesterday");
    // Only the primary artist is used for resolution
    assert_eq!(descriptor.artist, "The Beatles");
}

#[test]
fn test_track_descriptor_rejects_incomplete_items() {
    // Removed track (no inner track object)
    assert!(TrackDescriptor::from_item(&PlaylistTrackItem { track: None }).is_none());

    // Missing title
    assert!(TrackDescriptor::from_item(&create_track_item(None, vec!["Artist"])).is_none());

    // Empty artist list
    assert!(TrackDescriptor::from_item(&create_track_item(Some("Song"), vec![])).is_none());

    // Whitespace-only fields
    assert!(TrackDescriptor::from_item(&create_track_item(Some("   "), vec!["Artist"])).is_none());
    assert!(TrackDescriptor::from_item(&create_track_item(Some("Song"), vec!["  "])).is_none());
}

#[test]
fn test_track_descriptor_trims_fields() {
    let item = create_track_item(Some("  Yesterday  "), vec![" The Beatles "]);
    let descriptor = TrackDescriptor::from_item(&item).unwrap();

    assert_eq!(descriptor.title, "Yesterday");
    assert_eq!(descriptor.artist, "The Beatles");
}
