use serde_json::Value;

use crate::types::SearchCandidate;

/// Protobuf filter blob restricting search to the songs category. Captured
/// from the web client; opaque but stable across client versions.
pub const SONGS_FILTER_PARAMS: &str = "EgWKAQIIAWoKEAkQBRAKEAMQBA==";

/// Extracts (title, video id) candidates from a raw search response, in
/// result order, up to `limit` entries.
///
/// The response is a renderer tree several levels deep
/// (`tabbedSearchResultsRenderer` → shelves → items); rather than mirror
/// that hierarchy, this walks the tree depth-first and collects every
/// `musicResponsiveListItemRenderer` that carries both a playable video id
/// and a title. Depth-first order matches the on-screen result order, which
/// is the service's relevance order the resolver depends on.
pub fn parse_search_candidates(response: &Value, limit: usize) -> Vec<SearchCandidate> {
    let mut candidates = Vec::new();
    collect_candidates(response, limit, &mut candidates);
    candidates
}

fn collect_candidates(node: &Value, limit: usize, out: &mut Vec<SearchCandidate>) {
    if out.len() >= limit {
        return;
    }

    match node {
        Value::Object(map) => {
            if let Some(renderer) = map.get("musicResponsiveListItemRenderer") {
                if let Some(candidate) = candidate_from_renderer(renderer) {
                    out.push(candidate);
                    return;
                }
            }
            for value in map.values() {
                collect_candidates(value, limit, out);
            }
        }
        Value::Array(values) => {
            for value in values {
                collect_candidates(value, limit, out);
            }
        }
        _ => {}
    }
}

/// Pulls the title and video id out of one list item renderer. The title is
/// the first text run of the first flex column; the video id lives in that
/// run's watch endpoint (or, for some layouts, in the item's overlay play
/// button).
fn candidate_from_renderer(renderer: &Value) -> Option<SearchCandidate> {
    let first_run = renderer
        .get("flexColumns")?
        .get(0)?
        .get("musicResponsiveListItemFlexColumnRenderer")?
        .get("text")?
        .get("runs")?
        .get(0)?;

    let title = first_run.get("text")?.as_str()?;

    let video_id = first_run
        .pointer("/navigationEndpoint/watchEndpoint/videoId")
        .or_else(|| renderer.pointer("/overlay/musicItemThumbnailOverlayRenderer/content/musicPlayButtonRenderer/playNavigationEndpoint/watchEndpoint/videoId"))
        .and_then(Value::as_str)?;

    if title.is_empty() || video_id.is_empty() {
        return None;
    }

    Some(SearchCandidate {
        title: title.to_string(),
        video_id: video_id.to_string(),
    })
}
