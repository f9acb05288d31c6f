use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{spotify, types::PkceToken};

/// Runs the Spotify authorization flow for the `auth` command.
///
/// Delegates to the PKCE implementation, which opens the browser, waits
/// for the callback and persists the token for later commands.
pub async fn auth(token_slot: Arc<Mutex<Option<PkceToken>>>) {
    spotify::auth::auth(token_slot).await;
}
