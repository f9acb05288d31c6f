use reqwest::Client;
use serde_json::{Value, json};

use crate::{
    Res, config,
    management::{AuthFileError, BrowserAuth},
    migrate::PlaylistSink,
    resolver::CatalogSearch,
    types::{CreatePlaylistResponse, EditPlaylistResponse, SearchCandidate},
    ytmusic::search,
};

/// Client identification the youtubei API expects in every request body.
const CLIENT_NAME: &str = "WEB_REMIX";
const CLIENT_VERSION: &str = "1.20240101.00.00";

/// Authenticated YouTube Music session.
///
/// Constructed once per run from the browser credentials file and threaded
/// through all destination-service calls. Implements the search and
/// playlist-write contracts the resolver and migrator depend on.
pub struct YtMusic {
    auth: BrowserAuth,
    api_url: String,
}

impl YtMusic {
    /// Loads the browser credentials and prepares a session.
    pub async fn connect() -> Result<Self, AuthFileError> {
        let auth = BrowserAuth::load().await?;
        Ok(YtMusic {
            auth,
            api_url: config::ytmusic_apiurl(),
        })
    }

    /// Issues one authenticated POST against a youtubei endpoint. The
    /// request context (client name/version) is merged into every body.
    async fn post(&self, endpoint: &str, mut body: Value) -> Result<Value, reqwest::Error> {
        body["context"] = json!({
            "client": {
                "clientName": CLIENT_NAME,
                "clientVersion": CLIENT_VERSION,
            }
        });

        let api_url = format!("{uri}/{endpoint}", uri = self.api_url, endpoint = endpoint);

        let client = Client::new();
        let response = client
            .post(&api_url)
            .header("authorization", self.auth.authorization())
            .header("cookie", self.auth.cookie())
            .header("user-agent", self.auth.user_agent())
            .header("origin", self.auth.origin())
            .header("x-origin", self.auth.origin())
            .json(&body)
            .send()
            .await?;

        response.error_for_status()?.json::<Value>().await
    }
}

impl CatalogSearch for YtMusic {
    /// Searches the songs category and returns candidates in the service's
    /// relevance order.
    async fn search(&self, query: &str, limit: u32) -> Res<Vec<SearchCandidate>> {
        let body = json!({
            "query": query,
            "params": search::SONGS_FILTER_PARAMS,
        });

        let response = self.post("search", body).await?;
        Ok(search::parse_search_candidates(&response, limit as usize))
    }
}

impl PlaylistSink for YtMusic {
    /// Creates a private playlist and returns its identifier. A response
    /// without a playlist id is a failure; the migrator must not proceed
    /// against a playlist it cannot address.
    async fn create_playlist(&self, title: &str, description: &str) -> Res<String> {
        let body = json!({
            "title": title,
            "description": description,
            "privacyStatus": "PRIVATE",
        });

        let response = self.post("playlist/create", body).await?;
        let parsed: CreatePlaylistResponse = serde_json::from_value(response)?;
        match parsed.playlist_id {
            Some(playlist_id) if !playlist_id.is_empty() => Ok(playlist_id),
            _ => Err("playlist creation returned no playlist id".into()),
        }
    }

    /// Appends items to a playlist in one bulk call, preserving order.
    async fn add_items(&self, playlist_id: &str, video_ids: &[String]) -> Res<()> {
        let actions: Vec<Value> = video_ids
            .iter()
            .map(|id| {
                json!({
                    "action": "ACTION_ADD_VIDEO",
                    "addedVideoId": id,
                })
            })
            .collect();

        let body = json!({
            "playlistId": playlist_id,
            "actions": actions,
        });

        let response = self.post("browse/edit_playlist", body).await?;
        let parsed: EditPlaylistResponse = serde_json::from_value(response)?;
        match parsed.status.as_deref() {
            Some("STATUS_SUCCEEDED") | None => Ok(()),
            Some(status) => Err(format!("edit_playlist returned status {}", status).into()),
        }
    }
}
