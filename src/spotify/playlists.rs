use std::time::Duration;

use reqwest::{Client, StatusCode};
use tokio::time::sleep;

use crate::{
    config, error,
    management::TokenManager,
    types::{Playlist, PlaylistTrackItem, PlaylistTracksResponse, UserPlaylistsResponse},
    warning,
};

/// Fields requested from the track listing endpoint. Everything else the
/// API could return is dead weight for the migration.
const TRACK_FIELDS: &str = "items(track(name,artists(name),id)),next";

/// How often one page is re-requested after a 429 or 502 before the
/// listing gives up and returns what it has.
const MAX_PAGE_RETRIES: u32 = 3;

/// Retrieves all playlists of the authenticated user.
///
/// Follows Spotify's `next` continuation URLs until the listing is
/// exhausted and returns one flat sequence in the order the API yields it.
/// Rate limiting is handled by respecting the `Retry-After` header on 429
/// responses; 502 Bad Gateway responses are retried after a fixed delay.
/// Retries per page are bounded, and when the budget is exhausted or the
/// header is unusable the playlists fetched so far are returned.
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Vec<Playlist>)` - All playlists of the user
/// - `Err(reqwest::Error)` - Network error, API error, or HTTP error
///
/// # Authentication
///
/// Loads the token from the token manager. If no valid token is found, the
/// function terminates the program with an error message directing the
/// user to run `symcli auth`.
pub async fn get_user_playlists() -> Result<Vec<Playlist>, reqwest::Error> {
    let mut token_mgr = match TokenManager::load().await {
        Ok(manager) => manager,
        Err(e) => {
            error!("Failed to load token. Please run symcli auth\n Error: {}", e);
        }
    };

    let mut playlists = Vec::new();
    let mut retries = 0;
    let mut next_url = Some(format!(
        "{uri}/me/playlists?limit=50",
        uri = &config::spotify_apiurl()
    ));

    while let Some(api_url) = next_url.clone() {
        let client = Client::new();
        let token = token_mgr.get_valid_token().await;
        let response = client.get(&api_url).bearer_auth(token).send().await?;

        if response.status() == StatusCode::TOO_MANY_REQUESTS {
            match retry_after_delay(response.headers().get("retry-after")) {
                Some(delay) if retries < MAX_PAGE_RETRIES => {
                    retries += 1;
                    sleep(delay).await;
                    continue; // retry same page
                }
                _ => {
                    warning!(
                        "Rate limit is not recovering. Returning the {} playlists fetched so far.",
                        playlists.len()
                    );
                    break;
                }
            }
        }
        if response.status() == StatusCode::BAD_GATEWAY {
            if retries < MAX_PAGE_RETRIES {
                retries += 1;
                sleep(Duration::from_secs(10)).await;
                continue; // retry same page
            }
            warning!(
                "Bad gateway persists. Returning the {} playlists fetched so far.",
                playlists.len()
            );
            break;
        }

        let page = response
            .error_for_status()?
            .json::<UserPlaylistsResponse>()
            .await?;
        playlists.extend(page.items);
        next_url = page.next;
        retries = 0;
    }

    Ok(playlists)
}

/// Retrieves the full track listing of one playlist.
///
/// Requests only the fields the migration needs (track name, artist names,
/// track id) and follows `next` continuation URLs until exhausted, so the
/// caller sees one flat sequence in playlist order. Entries whose inner
/// track is `null` (removed tracks) are kept here and dropped later during
/// descriptor construction.
///
/// # Arguments
///
/// * `playlist_id` - Spotify ID of the playlist to fetch tracks for
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Vec<PlaylistTrackItem>)` - Ordered track entries of the playlist
/// - `Err(reqwest::Error)` - Network error, API error, or HTTP error
pub async fn get_playlist_tracks(
    playlist_id: &str,
) -> Result<Vec<PlaylistTrackItem>, reqwest::Error> {
    let mut token_mgr = match TokenManager::load().await {
        Ok(manager) => manager,
        Err(e) => {
            error!("Failed to load token. Please run symcli auth\n Error: {}", e);
        }
    };

    let first_url = format!(
        "{uri}/playlists/{id}/tracks",
        uri = &config::spotify_apiurl(),
        id = playlist_id
    );

    let mut items = Vec::new();
    let mut retries = 0;
    let mut next_url: Option<String> = None;
    let mut first_page = true;

    loop {
        let client = Client::new();
        let token = token_mgr.get_valid_token().await;

        let request = if first_page {
            client
                .get(&first_url)
                .query(&[("fields", TRACK_FIELDS), ("limit", "100")])
        } else {
            match &next_url {
                Some(url) => client.get(url),
                None => break,
            }
        };

        let response = request.bearer_auth(token).send().await?;

        if response.status() == StatusCode::TOO_MANY_REQUESTS {
            match retry_after_delay(response.headers().get("retry-after")) {
                Some(delay) if retries < MAX_PAGE_RETRIES => {
                    retries += 1;
                    sleep(delay).await;
                    continue; // retry same page
                }
                _ => {
                    warning!(
                        "Rate limit is not recovering. Returning the {} tracks fetched so far.",
                        items.len()
                    );
                    break;
                }
            }
        }
        if response.status() == StatusCode::BAD_GATEWAY {
            if retries < MAX_PAGE_RETRIES {
                retries += 1;
                sleep(Duration::from_secs(10)).await;
                continue; // retry same page
            }
            warning!(
                "Bad gateway persists. Returning the {} tracks fetched so far.",
                items.len()
            );
            break;
        }

        let page = response
            .error_for_status()?
            .json::<PlaylistTracksResponse>()
            .await?;
        items.extend(page.items);
        next_url = page.next;
        first_page = false;
        retries = 0;

        if next_url.is_none() {
            break;
        }
    }

    Ok(items)
}

/// Reads a `Retry-After` header value into the delay to wait before
/// re-requesting a rate-limited page.
///
/// Returns `None` when the header is missing or abnormally high; the
/// caller should then give up on the page rather than retry.
pub fn retry_after_delay(header: Option<&reqwest::header::HeaderValue>) -> Option<Duration> {
    let retry_after = header?.to_str().unwrap_or("0").parse::<u64>().unwrap_or(0);
    if retry_after <= 120 {
        Some(Duration::from_secs(retry_after))
    } else {
        warning!(
            "Retry after has reached a abnormal high of {} seconds. Try your best tommorrow again.",
            retry_after
        );
        None
    }
}
