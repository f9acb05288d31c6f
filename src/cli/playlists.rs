use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{spotify, utils, warning};

pub async fn list_playlists(search: Option<String>) {
    let pb = ProgressBar::new_spinner();
    pb.set_message("Fetching playlists...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let playlists = spotify::playlists::get_user_playlists().await;
    pb.finish_and_clear();

    match playlists {
        Ok(mut playlists) => {
            utils::sort_playlists_by_name(&mut playlists);
            utils::filter_playlists(&mut playlists, search);

            if playlists.is_empty() {
                warning!("No playlists found.");
                return;
            }

            let table = Table::new(utils::playlist_table_rows(playlists));
            println!("{}", table);
        }
        Err(e) => warning!("Error fetching Spotify playlists: {}", e),
    }
}
