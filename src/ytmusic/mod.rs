//! # YouTube Music Integration Module
//!
//! Destination-catalog side of the migration: catalog search, playlist
//! creation, and playlist editing against YouTube Music's internal
//! `youtubei/v1` API, authenticated with browser-session credentials.
//!
//! ## Architecture
//!
//! ```text
//! Application Layer (Resolver, Migrator)
//!          ↓
//! YouTube Music Integration Layer
//!     ├── Session (browser credentials, SAPISIDHASH authorization)
//!     ├── Catalog Search (songs category, relevance-ranked candidates)
//!     └── Playlist Operations (create, add items)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! youtubei/v1 API
//! ```
//!
//! ## Authentication
//!
//! YouTube Music has no public OAuth surface for third-party playlist
//! writes, so the client reuses the request headers of a logged-in browser
//! session (`browser.json`). The `SAPISIDHASH` authorization value is
//! recomputed per request from the `SAPISID` cookie; see
//! [`crate::management::BrowserAuth`].
//!
//! ## API Coverage
//!
//! - `POST /search` - catalog search restricted to the songs category
//! - `POST /playlist/create` - create a private playlist
//! - `POST /browse/edit_playlist` - append items to a playlist
//!
//! ## Session model
//!
//! [`client::YtMusic`] is constructed once per run and threaded through all
//! calls, so credentials are read and validated a single time up front
//! rather than ambiently per call. It implements the two collaborator
//! contracts the migration core depends on:
//! [`crate::resolver::CatalogSearch`] and [`crate::migrate::PlaylistSink`].
//!
//! ## Response parsing
//!
//! Search responses are deeply nested renderer trees whose exact shape
//! shifts between client versions. [`search`] extracts the stable parts
//! (title, video id, result order) by walking the tree for
//! `musicResponsiveListItemRenderer` nodes instead of mirroring the entire
//! renderer hierarchy with serde structs.

pub mod client;
pub mod search;
