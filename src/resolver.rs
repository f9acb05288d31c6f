//! Cross-catalog track resolution.
//!
//! Given a (title, artist) pair from the source catalog, this module decides
//! which entry of the destination catalog's search results, if any, is the
//! most likely equivalent. Destination search already performs loose
//! matching, so relevance ranking can surface cover versions, remixes, or
//! different-artist tracks ahead of the literal match; the fuzzy-title step
//! is a secondary filter that prefers an exact-title hit over the service's
//! top relevance hit when one exists among the returned candidates.
//!
//! Resolution runs through explicit tiers, each with its own exit path:
//!
//! ```text
//! combined query -> title-only query -> fuzzy title match -> top result
//!                                    \-> unresolved (no candidates / search error)
//! ```

use crate::{
    Res,
    types::{Resolution, SearchCandidate, TrackDescriptor},
    warning,
};

/// Collaborator contract for the destination catalog's search endpoint.
///
/// Implementations return candidates in the service's own relevance order;
/// the resolver never re-ranks them. The songs-only category restriction is
/// the implementation's responsibility.
pub trait CatalogSearch {
    async fn search(&self, query: &str, limit: u32) -> Res<Vec<SearchCandidate>>;
}

impl<T: CatalogSearch> CatalogSearch for &T {
    async fn search(&self, query: &str, limit: u32) -> Res<Vec<SearchCandidate>> {
        (**self).search(query, limit).await
    }
}

/// How the winning candidate was chosen, relative to the original
/// (service-ranked) result order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchDecision {
    /// A candidate title cleared the similarity cutoff; the index points at
    /// the first candidate carrying the best-matched title string.
    FuzzyTitle(usize),
    /// No candidate title cleared the cutoff; the service's own top
    /// relevance hit is trusted instead.
    TopResult,
}

/// Resolves source tracks against a destination catalog search backend.
pub struct TrackResolver<S> {
    search: S,
    limit: u32,
    cutoff: f64,
}

impl<S: CatalogSearch> TrackResolver<S> {
    /// Creates a resolver with the default candidate limit (10) and
    /// similarity cutoff (0.6 on a 0-1 normalized scale).
    pub fn new(search: S) -> Self {
        TrackResolver {
            search,
            limit: 10,
            cutoff: 0.6,
        }
    }

    pub fn with_cutoff(mut self, cutoff: f64) -> Self {
        self.cutoff = cutoff;
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Resolves one track descriptor to a destination identifier.
    ///
    /// Returns exactly one of `Resolved` or `Unresolved` and never errors:
    /// a search transport/API failure is reported as a diagnostic and
    /// treated as `Unresolved` for this track, so a single bad call cannot
    /// abort resolution of subsequent tracks.
    pub async fn resolve(&self, track: &TrackDescriptor) -> Resolution {
        let candidates = match self.gather_candidates(track).await {
            Ok(candidates) => candidates,
            Err(e) => {
                warning!(
                    "Error searching YouTube Music for {} - {}: {}",
                    track.title,
                    track.artist,
                    e
                );
                return Resolution::Unresolved;
            }
        };

        if candidates.is_empty() {
            warning!("No match found for: {} - {}", track.title, track.artist);
            return Resolution::Unresolved;
        }

        let index = match pick_candidate(&track.title, &candidates, self.cutoff) {
            MatchDecision::FuzzyTitle(index) => index,
            MatchDecision::TopResult => 0,
        };

        Resolution::Resolved(candidates[index].video_id.clone())
    }

    /// Runs the two-tier search: a combined `"{title} {artist}"` query
    /// first, then a title-only retry when the combined query comes back
    /// empty. Artist-name formatting differences (features, localized
    /// names, punctuation) frequently sink the combined query even when the
    /// bare title hits.
    async fn gather_candidates(&self, track: &TrackDescriptor) -> Res<Vec<SearchCandidate>> {
        let combined = format!("{} {}", track.title, track.artist);
        let candidates = self.search.search(&combined, self.limit).await?;
        if !candidates.is_empty() {
            return Ok(candidates);
        }

        self.search.search(&track.title, self.limit).await
    }
}

/// Picks the winning candidate for a source title from an ordered,
/// non-empty candidate list.
///
/// Similarity is `strsim::normalized_levenshtein` between the source title
/// and each candidate title. The best-scoring title wins if it clears the
/// cutoff; among equal scores the earlier candidate is kept, and the chosen
/// index is that of the *first* candidate carrying the winning title string.
/// Ties are broken by search-result order, never by re-ranking. When no
/// title clears the cutoff the decision falls back to the top result.
pub fn pick_candidate(title: &str, candidates: &[SearchCandidate], cutoff: f64) -> MatchDecision {
    let mut best_score = 0.0_f64;
    let mut best_title: Option<&str> = None;

    for candidate in candidates {
        let score = strsim::normalized_levenshtein(title, &candidate.title);
        if score > best_score {
            best_score = score;
            best_title = Some(&candidate.title);
        }
    }

    if best_score < cutoff {
        return MatchDecision::TopResult;
    }

    let winner = best_title.unwrap_or_default();
    match candidates.iter().position(|c| c.title == winner) {
        Some(index) => MatchDecision::FuzzyTitle(index),
        None => MatchDecision::TopResult,
    }
}
