//! Authenticated session context and its persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! A [`Session`] is created by a successful login and passed explicitly to
//! every authenticated call. Holding no session is the anonymous state.
//! [`SessionStore`] implementations persist a session between process runs;
//! clearing a store removes every stored key.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::error::{ApiError, MissingCredential};
use crate::types::{Id, LoginResponse, Role};

/// Credentials and identity for the logged-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    #[serde(rename = "user_type", default)]
    pub role: Option<Role>,
    #[serde(rename = "userID", default, deserialize_with = "crate::types::deserialize_opt_id")]
    pub user_id: Option<Id>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructor_name: Option<String>,
}

impl Session {
    #[must_use]
    pub fn new(access_token: &str, role: Option<Role>, user_id: Option<Id>) -> Self {
        Self {
            access_token: access_token.to_owned(),
            role,
            user_id,
            user_email: None,
            instructor_name: None,
        }
    }

    /// Session established by a login response for `email`.
    #[must_use]
    pub fn from_login(login: &LoginResponse, email: &str) -> Self {
        Self {
            access_token: login.access_token.clone(),
            role: Some(login.user_type),
            user_id: login.user_id(),
            user_email: Some(email.to_owned()),
            instructor_name: None,
        }
    }

    #[must_use]
    pub fn has_access_token(&self) -> bool {
        !self.access_token.trim().is_empty()
    }

    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.role
    }

    /// Bearer token, or `missing` if none is stored.
    pub(crate) fn token(&self, missing: MissingCredential) -> Result<&str, ApiError> {
        if self.has_access_token() {
            Ok(&self.access_token)
        } else {
            Err(ApiError::Unauthorized(missing))
        }
    }

    /// Token and user id, or `missing` if either is absent.
    pub(crate) fn token_and_user(&self, missing: MissingCredential) -> Result<(&str, Id), ApiError> {
        let token = self.token(missing)?;
        let user_id = self.user_id.ok_or(ApiError::Unauthorized(missing))?;
        Ok((token, user_id))
    }

    /// Token, role, and user id for role-scoped profile paths.
    pub(crate) fn identity(&self, missing: MissingCredential) -> Result<(&str, Role, Id), ApiError> {
        let (token, user_id) = self.token_and_user(missing)?;
        let role = self.role.ok_or(ApiError::Unauthorized(missing))?;
        Ok((token, role, user_id))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("session store io failed for {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("session store at {} is corrupt: {source}", .path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("session store lock poisoned")]
    Poisoned,
}

/// Persistence for at most one session.
pub trait SessionStore {
    /// Stored session, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read.
    fn load(&self) -> Result<Option<Session>, StoreError>;

    /// Replace the stored session.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be written.
    fn save(&self, session: &Session) -> Result<(), StoreError>;

    /// Remove every stored key.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be removed.
    fn clear(&self) -> Result<(), StoreError>;

    /// Save `Some`, clear on `None`.
    ///
    /// # Errors
    ///
    /// Propagates the underlying save or clear failure.
    fn sync(&self, session: Option<&Session>) -> Result<(), StoreError> {
        match session {
            Some(session) => self.save(session),
            None => self.clear(),
        }
    }

    /// Whether a stored session carries a bearer token.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read.
    fn has_access_token(&self) -> Result<bool, StoreError> {
        Ok(self.load()?.is_some_and(|s| s.has_access_token()))
    }
}

/// Process-local store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Option<Session>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn load(&self) -> Result<Option<Session>, StoreError> {
        let guard = self.inner.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(guard.clone())
    }

    fn save(&self, session: &Session) -> Result<(), StoreError> {
        let mut guard = self.inner.lock().map_err(|_| StoreError::Poisoned)?;
        *guard = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        let mut guard = self.inner.lock().map_err(|_| StoreError::Poisoned)?;
        *guard = None;
        Ok(())
    }
}

/// JSON file store. A missing file is the anonymous state.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io { path: self.path.clone(), source }
    }
}

impl SessionStore for FileStore {
    fn load(&self) -> Result<Option<Session>, StoreError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(self.io_error(e)),
        };
        if raw.trim().is_empty() {
            return Ok(None);
        }
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StoreError::Corrupt { path: self.path.clone(), source })
    }

    fn save(&self, session: &Session) -> Result<(), StoreError> {
        let rendered = serde_json::to_string_pretty(session)
            .map_err(|source| StoreError::Corrupt { path: self.path.clone(), source })?;
        std::fs::write(&self.path, rendered).map_err(|e| self.io_error(e))
    }

    fn clear(&self) -> Result<(), StoreError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.io_error(e)),
        }
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
