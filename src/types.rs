use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: String,
    pub scope: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

#[derive(Debug, Clone)]
pub struct PkceToken {
    pub code_verifier: String,
    pub token: Option<Token>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPlaylistsResponse {
    pub items: Vec<Playlist>,
    pub next: Option<String>,
    pub total: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub tracks: PlaylistTracksRef,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTracksRef {
    pub total: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTracksResponse {
    pub items: Vec<PlaylistTrackItem>,
    pub next: Option<String>,
}

/// One entry of a playlist's track listing. The inner track is optional
/// because Spotify returns `null` for removed or locally deleted tracks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTrackItem {
    pub track: Option<PlaylistTrack>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTrack {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub artists: Vec<TrackArtist>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackArtist {
    pub name: String,
}

/// Normalized (title, artist) pair used as resolution input.
///
/// Every descriptor reaching the resolver has a non-empty title and a
/// non-empty primary artist; playlist entries that cannot satisfy this are
/// dropped before resolution (see [`TrackDescriptor::from_item`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackDescriptor {
    pub title: String,
    pub artist: String,
}

impl TrackDescriptor {
    /// Builds a descriptor from a raw playlist entry, or `None` if the entry
    /// is missing its track, its title, or its artist list.
    pub fn from_item(item: &PlaylistTrackItem) -> Option<Self> {
        let track = item.track.as_ref()?;
        let title = track.name.as_deref()?.trim();
        let artist = track.artists.first()?.name.trim();
        if title.is_empty() || artist.is_empty() {
            return None;
        }
        Some(TrackDescriptor {
            title: title.to_string(),
            artist: artist.to_string(),
        })
    }
}

/// One ranked result from a destination-catalog search query, in the order
/// the service returned it (relevance order, not alphabetical).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCandidate {
    pub title: String,
    pub video_id: String,
}

/// Outcome of resolving one [`TrackDescriptor`] against the destination
/// catalog. Exactly one of these is produced per descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Resolved(String),
    Unresolved,
}

/// Result of migrating a single playlist. Built incrementally while the
/// playlist is processed, immutable once the migration completes. Both
/// sequences preserve source track order.
#[derive(Debug, Clone)]
pub struct MigrationReport {
    pub playlist_id: String,
    pub resolved_ids: Vec<String>,
    pub unresolved: Vec<TrackDescriptor>,
}

#[derive(Tabled)]
pub struct PlaylistTableRow {
    pub name: String,
    pub tracks: u64,
}

#[derive(Tabled)]
pub struct UnresolvedTableRow {
    pub title: String,
    pub artist: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistResponse {
    #[serde(rename = "playlistId")]
    pub playlist_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditPlaylistResponse {
    #[serde(default)]
    pub status: Option<String>,
}
