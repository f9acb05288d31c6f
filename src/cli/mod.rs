//! # CLI Module
//!
//! User-facing command implementations for the playlist migration tool.
//! This layer owns all interaction: credential setup feedback, playlist
//! listings, the per-playlist confirmation loop, and result reporting. It
//! delegates the actual work to the service and migration modules.
//!
//! ## Commands
//!
//! - [`auth`] - Spotify OAuth 2.0 PKCE authentication flow
//! - [`list_playlists`] - table of the user's Spotify playlists with
//!   optional name filtering
//! - [`migrate`] - the migration driver: confirms each playlist with the
//!   operator (unless told otherwise), then copies it to YouTube Music and
//!   reports what could and could not be matched
//!
//! ## Error handling
//!
//! Fatal setup failures (missing credentials for either service) terminate
//! the run via `error!` before any playlist is touched. Everything after
//! that point is scoped: a failed listing is an empty listing, a failed
//! playlist is skipped and reported, and the run always proceeds to the
//! next playlist.

mod auth;
mod migrate;
mod playlists;

pub use auth::auth;
pub use migrate::migrate;
pub use playlists::list_playlists;
