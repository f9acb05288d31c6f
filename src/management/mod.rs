mod auth;
mod browser;

pub use auth::TokenManager;
pub use browser::AuthFileError;
pub use browser::BrowserAuth;
