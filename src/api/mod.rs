//! # API Module
//!
//! HTTP endpoints for the temporary local web server that backs the Spotify
//! OAuth flow. Only two routes exist:
//!
//! - [`callback`] - receives the authorization code from Spotify's
//!   authorization server and completes the PKCE token exchange
//! - [`health`] - liveness probe returning application status and version
//!
//! The server runs only for the duration of `symcli auth`; no endpoint is
//! exposed during a migration run. Built on [Axum](https://docs.rs/axum)
//! with shared PKCE state passed via an extension layer.

mod callback;
mod health;

pub use callback::callback;
pub use health::health;
