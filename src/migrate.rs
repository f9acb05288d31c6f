//! Per-playlist migration orchestration.
//!
//! Drives one playlist end to end: create the destination playlist, resolve
//! every source track in order, then issue a single bulk add with everything
//! that resolved. Failures stay inside the playlist being migrated; the
//! calling driver continues with the next playlist regardless of what
//! happened here.

use std::time::Duration;

use tokio::time::sleep;

use crate::{
    Res,
    resolver::{CatalogSearch, TrackResolver},
    success,
    types::{MigrationReport, PlaylistTrackItem, Resolution, TrackDescriptor},
    utils, warning,
};

/// Collaborator contract for destination playlist writes.
pub trait PlaylistSink {
    /// Creates an empty private playlist and returns its identifier.
    async fn create_playlist(&self, title: &str, description: &str) -> Res<String>;

    /// Appends the given items to a playlist in the given order.
    async fn add_items(&self, playlist_id: &str, video_ids: &[String]) -> Res<()>;
}

#[derive(Debug)]
pub enum MigrateError {
    CreateFailed(String),
}

impl std::fmt::Display for MigrateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MigrateError::CreateFailed(e) => write!(f, "failed to create playlist: {}", e),
        }
    }
}

impl std::error::Error for MigrateError {}

/// Migrates one source playlist to the destination service.
///
/// The track sequence arrives flat and in source order; pagination has
/// already been handled by the source adapter. Entries missing a title or
/// artist are dropped silently before resolution. Consecutive resolver
/// calls are separated by `throttle` to respect destination rate limits; a
/// blocking pause is acceptable because the whole migration is a
/// foreground, sequential, single-operator task.
///
/// Returns `Err` only when the destination playlist cannot be created; the
/// caller reports that and moves on to the next playlist. A failed bulk add
/// is reported here but still yields a complete report, and the created
/// (now empty) playlist is deliberately not rolled back.
pub async fn migrate<S: CatalogSearch, D: PlaylistSink>(
    sink: &D,
    resolver: &TrackResolver<S>,
    playlist_name: &str,
    items: &[PlaylistTrackItem],
    throttle: Duration,
) -> Result<MigrationReport, MigrateError> {
    let playlist_id = sink
        .create_playlist(playlist_name, &utils::playlist_description(playlist_name))
        .await
        .map_err(|e| MigrateError::CreateFailed(e.to_string()))?;

    let mut resolved_ids: Vec<String> = Vec::new();
    let mut unresolved: Vec<TrackDescriptor> = Vec::new();

    let mut first = true;
    for item in items {
        let Some(track) = TrackDescriptor::from_item(item) else {
            continue;
        };

        if !first {
            sleep(throttle).await;
        }
        first = false;

        match resolver.resolve(&track).await {
            Resolution::Resolved(video_id) => {
                success!("Matched: {} - {}", track.title, track.artist);
                resolved_ids.push(video_id);
            }
            Resolution::Unresolved => {
                warning!("Could not match: {} - {}", track.title, track.artist);
                unresolved.push(track);
            }
        }
    }

    if resolved_ids.is_empty() {
        warning!("No tracks added to {} (no matches found).", playlist_name);
    } else {
        match sink.add_items(&playlist_id, &resolved_ids).await {
            Ok(()) => success!("Added {} tracks to {}.", resolved_ids.len(), playlist_name),
            Err(e) => warning!(
                "Error adding tracks to YouTube Music playlist {}: {}",
                playlist_name,
                e
            ),
        }
    }

    Ok(MigrationReport {
        playlist_id,
        resolved_ids,
        unresolved,
    })
}
