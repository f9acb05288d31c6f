use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::{Rng, distr::Alphanumeric};
use sha2::{Digest, Sha256};

use crate::types::{Playlist, PlaylistTableRow};

pub fn generate_code_verifier() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(128)
        .map(char::from)
        .collect()
}

pub fn generate_code_challenge(verifier: &str) -> String {
    let hash = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(hash)
}

/// Description attached to every migrated playlist so its origin stays
/// visible on the destination side.
pub fn playlist_description(source_name: &str) -> String {
    format!("Copied from Spotify: {}", source_name)
}

pub fn sort_playlists_by_name(playlists: &mut Vec<Playlist>) {
    playlists.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
}

pub fn filter_playlists(playlists: &mut Vec<Playlist>, search: Option<String>) {
    if let Some(term) = search {
        let term = term.to_lowercase();
        playlists.retain(|p| p.name.to_lowercase().contains(&term));
    }
}

pub fn playlist_table_rows(playlists: Vec<Playlist>) -> Vec<PlaylistTableRow> {
    playlists
        .into_iter()
        .map(|p| PlaylistTableRow {
            name: p.name,
            tracks: p.tracks.total,
        })
        .collect()
}
