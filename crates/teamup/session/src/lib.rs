//! Persisted login-state for the TeamUp client.
//!
//! The backend hands out a login state on successful sign-in; the client
//! keeps it in durable storage under the fixed `user_login_state` key.
//! Presence of a non-empty value is the whole authentication signal: the
//! navigation guard and the request interceptor only ever read it, while
//! writing and clearing stay with the login/logout flows.

#![deny(unsafe_code)]

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use thiserror::Error;
use tracing::warn;

/// Storage key for the persisted login state.
pub const LOGIN_STATE_KEY: &str = "user_login_state";

/// Session storage errors
#[derive(Debug, Error)]
pub enum SessionError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Session file could not be written
    #[error("session file error: {0}")]
    Format(String),

    /// No user configuration directory on this system
    #[error("cannot locate config directory")]
    NoConfigDir,
}

/// Read/write access to the persisted login state.
///
/// Reads are infallible by design: a store that cannot be read reports no
/// token, which downstream consumers treat as unauthenticated.
pub trait SessionStore: Send + Sync {
    /// Current login-state token, if any.
    fn token(&self) -> Option<String>;

    /// Persist a new login-state token.
    fn set_token(&self, token: &str) -> Result<(), SessionError>;

    /// Forget the persisted login state.
    fn clear(&self) -> Result<(), SessionError>;

    /// A non-empty token means an authenticated session.
    fn is_authenticated(&self) -> bool {
        self.token().map(|t| !t.is_empty()).unwrap_or(false)
    }
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    token: RwLock<Option<String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start out already authenticated.
    pub fn with_token(token: &str) -> Self {
        Self {
            token: RwLock::new(Some(token.to_string())),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn token(&self) -> Option<String> {
        self.token.read().ok().and_then(|t| t.clone())
    }

    fn set_token(&self, token: &str) -> Result<(), SessionError> {
        if let Ok(mut slot) = self.token.write() {
            *slot = Some(token.to_string());
        }
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        if let Ok(mut slot) = self.token.write() {
            *slot = None;
        }
        Ok(())
    }
}

/// On-disk serialization of the session file.
#[derive(Debug, Default, Serialize, Deserialize)]
struct SessionFile {
    #[serde(rename = "user_login_state", skip_serializing_if = "Option::is_none")]
    login_state: Option<String>,
}

/// File-backed store under the user config directory.
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Store backed by an explicit file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the default location, `<config dir>/teamup/session.toml`.
    pub fn open_default() -> Result<Self, SessionError> {
        Ok(Self::new(Self::default_path()?))
    }

    fn default_path() -> Result<PathBuf, SessionError> {
        let config_dir = dirs::config_dir().ok_or(SessionError::NoConfigDir)?;
        Ok(config_dir.join("teamup").join("session.toml"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_file(&self) -> Option<SessionFile> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "cannot read session file");
                return None;
            }
        };
        match toml::from_str(&contents) {
            Ok(file) => Some(file),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "malformed session file");
                None
            }
        }
    }

    fn write_file(&self, file: &SessionFile) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string(file).map_err(|e| SessionError::Format(e.to_string()))?;
        std::fs::write(&self.path, contents)?;
        Ok(())
    }
}

impl SessionStore for FileSessionStore {
    fn token(&self) -> Option<String> {
        self.read_file().and_then(|file| file.login_state)
    }

    fn set_token(&self, token: &str) -> Result<(), SessionError> {
        self.write_file(&SessionFile {
            login_state: Some(token.to_string()),
        })
    }

    fn clear(&self) -> Result<(), SessionError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
