use std::{collections::HashMap, io::Error};

use chrono::Utc;
use sha1::{Digest, Sha1};

use crate::config;

#[derive(Debug)]
pub enum AuthFileError {
    IoError(Error),
    SerdeError(serde_json::Error),
    CriticalError(String),
}

impl From<Error> for AuthFileError {
    fn from(err: Error) -> Self {
        AuthFileError::IoError(err)
    }
}

impl std::fmt::Display for AuthFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthFileError::IoError(e) => write!(f, "{}", e),
            AuthFileError::SerdeError(e) => write!(f, "{}", e),
            AuthFileError::CriticalError(e) => write!(f, "{}", e),
        }
    }
}

/// YouTube Music request credentials captured from an authenticated browser
/// session.
///
/// The auth file (`browser.json`, produced by copying the request headers of
/// a logged-in YouTube Music tab) is a flat JSON object of header names to
/// values. The cookie line must carry a `SAPISID` (or `__Secure-3PAPISID`)
/// value, from which the per-request `SAPISIDHASH` authorization header is
/// derived.
pub struct BrowserAuth {
    headers: HashMap<String, String>,
    sapisid: String,
    origin: String,
}

impl BrowserAuth {
    /// Loads and validates the auth file configured via `YTMUSIC_AUTH_FILE`.
    pub async fn load() -> Result<Self, AuthFileError> {
        let path = config::ytmusic_auth_file();
        let content = async_fs::read_to_string(&path).await?;
        let raw: HashMap<String, String> =
            serde_json::from_str(&content).map_err(AuthFileError::SerdeError)?;

        // header names are matched case-insensitively
        let headers: HashMap<String, String> = raw
            .into_iter()
            .map(|(k, v)| (k.to_lowercase(), v))
            .collect();

        let cookie = headers.get("cookie").ok_or_else(|| {
            AuthFileError::CriticalError(format!("No cookie header found in {}", path))
        })?;

        let sapisid = extract_sapisid(cookie).ok_or_else(|| {
            AuthFileError::CriticalError(format!("No SAPISID cookie found in {}", path))
        })?;

        let origin = headers
            .get("origin")
            .or_else(|| headers.get("x-origin"))
            .cloned()
            .unwrap_or_else(|| "https://music.youtube.com".to_string());

        Ok(BrowserAuth {
            headers,
            sapisid,
            origin,
        })
    }

    /// Computes the `SAPISIDHASH` authorization value for the current
    /// timestamp. YouTube validates `sha1("{ts} {SAPISID} {origin}")`
    /// against the cookie sent with the request.
    pub fn authorization(&self) -> String {
        let ts = Utc::now().timestamp();
        let digest = Sha1::digest(format!("{} {} {}", ts, self.sapisid, self.origin).as_bytes());
        let hex: String = digest.iter().map(|b| format!("{:02x}", b)).collect();
        format!("SAPISIDHASH {}_{}", ts, hex)
    }

    pub fn cookie(&self) -> &str {
        self.headers.get("cookie").map(String::as_str).unwrap_or("")
    }

    pub fn user_agent(&self) -> &str {
        self.headers
            .get("user-agent")
            .map(String::as_str)
            .unwrap_or("Mozilla/5.0")
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }
}

fn extract_sapisid(cookie: &str) -> Option<String> {
    for part in cookie.split(';') {
        let part = part.trim();
        for key in ["SAPISID=", "__Secure-3PAPISID="] {
            if let Some(value) = part.strip_prefix(key) {
                if !value.is_empty() {
                    return Some(value.to_string());
                }
            }
        }
    }
    None
}
