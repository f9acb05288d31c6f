//! # Spotify Integration Module
//!
//! Source-catalog side of the migration: authentication against the Spotify
//! Web API plus retrieval of the user's playlists and their track listings.
//! It handles all HTTP communication, OAuth flows, error handling, and rate
//! limiting for the source service, and presents higher layers with flat,
//! fully paginated sequences.
//!
//! ## Architecture
//!
//! ```text
//! Application Layer (CLI, Migrator)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (OAuth 2.0 PKCE)
//!     └── Playlist Operations (listing, track retrieval)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Authentication
//!
//! [`auth`] implements the OAuth 2.0 PKCE (Proof Key for Code Exchange)
//! flow: code verifier generation, a local callback server, browser launch,
//! token exchange, and token persistence. PKCE avoids storing a client
//! secret, which suits a desktop CLI that cannot keep one confidential.
//!
//! ## Playlist retrieval
//!
//! [`playlists`] covers the two read operations the migration needs:
//!
//! - `GET /me/playlists` - the user's playlists, page by page
//! - `GET /playlists/{id}/tracks` - a playlist's track listing, trimmed to
//!   the fields the migration consumes
//!
//! Both follow Spotify's `next` continuation URLs until exhausted, so
//! callers always see one flat, ordered sequence per call.
//!
//! ## Error handling
//!
//! - 429 Too Many Requests is honored via the `Retry-After` header
//! - 502 Bad Gateway is retried after a fixed delay
//! - all other HTTP and network errors propagate as `reqwest::Error`
//!
//! A failed listing is recovered by the CLI layer as an empty result and
//! treated as "nothing to do" for that scope.

pub mod auth;
pub mod playlists;
