use std::{
    io::{Write, stdin, stdout},
    time::Duration,
};

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    error, info,
    migrate::{self, MigrateError},
    resolver::TrackResolver,
    spotify, success,
    types::{Playlist, PlaylistTrackItem, UnresolvedTableRow},
    warning,
    ytmusic::client::YtMusic,
};

pub async fn migrate(playlist_id: Option<String>, yes: bool, throttle_ms: u64) {
    // Destination credentials are setup: failing here is fatal and happens
    // before any playlist is touched.
    let yt = match YtMusic::connect().await {
        Ok(yt) => yt,
        Err(e) => {
            error!(
                "Failed to load YouTube Music credentials. Check YTMUSIC_AUTH_FILE\n Error: {}",
                e
            );
        }
    };
    let resolver = TrackResolver::new(&yt);
    let throttle = Duration::from_millis(throttle_ms);

    let mut playlists = match fetch_playlists().await {
        Ok(playlists) => playlists,
        Err(e) => {
            warning!("Error fetching Spotify playlists: {}", e);
            Vec::new()
        }
    };

    if let Some(id) = &playlist_id {
        playlists.retain(|p| &p.id == id);
        if playlists.is_empty() {
            warning!("No playlist with id {} found.", id);
            return;
        }
    }

    if playlists.is_empty() {
        warning!("No playlists found. Nothing to do.");
        return;
    }

    info!("Found {} playlists on Spotify.", playlists.len());

    for playlist in playlists {
        // Single confirmation boundary of the run: declining skips the
        // playlist, end of input terminates the whole run cleanly. No
        // playlist is ever left mid-migration.
        if !yes && playlist_id.is_none() {
            match confirm(&playlist) {
                Confirmation::Copy => {}
                Confirmation::Skip => {
                    info!("Skipped: {}", playlist.name);
                    continue;
                }
                Confirmation::Quit => {
                    info!("Run terminated.");
                    return;
                }
            }
        }

        copy_playlist(&yt, &resolver, &playlist, throttle).await;
    }

    info!("Playlist copy process finished.");
}

enum Confirmation {
    Copy,
    Skip,
    Quit,
}

fn confirm(playlist: &Playlist) -> Confirmation {
    print!(
        "Do you want to copy playlist '{}' ({} tracks)? (y/n/q): ",
        playlist.name, playlist.tracks.total
    );
    let _ = stdout().flush();

    let mut line = String::new();
    match stdin().read_line(&mut line) {
        Ok(0) | Err(_) => Confirmation::Quit,
        Ok(_) => match line.trim().to_lowercase().as_str() {
            "y" => Confirmation::Copy,
            "q" => Confirmation::Quit,
            _ => Confirmation::Skip,
        },
    }
}

async fn copy_playlist(
    yt: &YtMusic,
    resolver: &TrackResolver<&YtMusic>,
    playlist: &Playlist,
    throttle: Duration,
) {
    info!("Copying playlist: {}", playlist.name);

    let items = match fetch_tracks(&playlist.id).await {
        Ok(items) => items,
        Err(e) => {
            warning!("Error fetching tracks for playlist {}: {}", playlist.id, e);
            return;
        }
    };

    match migrate::migrate(yt, resolver, &playlist.name, &items, throttle).await {
        Ok(report) => {
            success!(
                "{}: {} matched, {} unmatched.",
                playlist.name,
                report.resolved_ids.len(),
                report.unresolved.len()
            );
            if !report.unresolved.is_empty() {
                warning!("{} tracks could not be matched:", report.unresolved.len());
                let rows: Vec<UnresolvedTableRow> = report
                    .unresolved
                    .iter()
                    .map(|t| UnresolvedTableRow {
                        title: t.title.clone(),
                        artist: t.artist.clone(),
                    })
                    .collect();
                println!("{}", Table::new(rows));
            }
        }
        Err(MigrateError::CreateFailed(e)) => {
            warning!(
                "Failed to create YouTube Music playlist {}: {}",
                playlist.name,
                e
            );
        }
    }
}

async fn fetch_playlists() -> Result<Vec<Playlist>, reqwest::Error> {
    let pb = spinner("Fetching playlists...");
    let result = spotify::playlists::get_user_playlists().await;
    pb.finish_and_clear();
    result
}

async fn fetch_tracks(playlist_id: &str) -> Result<Vec<PlaylistTrackItem>, reqwest::Error> {
    let pb = spinner("Fetching playlist tracks...");
    let result = spotify::playlists::get_playlist_tracks(playlist_id).await;
    pb.finish_and_clear();
    result
}

fn spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}
