//! Flat-file user store: `username → {password, history[]}` in one JSON file.
//!
//! Every write rewrites the whole file in place (pretty-printed, 4-space
//! indent). There is no temp-file-and-rename, so a crash mid-write can leave
//! a truncated file, and two processes writing the same file race with
//! last-writer-wins. Within one process [`crate::core_state::CoreState`]
//! serializes load→mutate→save behind a mutex.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use crate::models::{UserRecord, Visit};

/// All accounts keyed by username. Ordered so listings are stable.
pub type Users = BTreeMap<String, UserRecord>;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("User store I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("User store at {path} is not valid JSON: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize user store for {path}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("User not found: {0}")]
    UnknownUser(String),
}

/// Handle on the JSON file backing the user store.
#[derive(Debug, Clone)]
pub struct UserStore {
    path: PathBuf,
}

impl UserStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole store. A missing file is an empty store; a file that
    /// exists but does not parse is an error.
    pub fn load(&self) -> Result<Users, StoreError> {
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "User store absent, starting empty");
                return Ok(Users::new());
            }
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        serde_json::from_slice(&bytes).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    /// Overwrite the file with the full mapping.
    pub fn save(&self, users: &Users) -> Result<(), StoreError> {
        let bytes = to_pretty_json(users).map_err(|source| StoreError::Serialize {
            path: self.path.clone(),
            source,
        })?;

        std::fs::write(&self.path, bytes).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;

        tracing::debug!(path = %self.path.display(), users = users.len(), "User store saved");
        Ok(())
    }
}

/// Serialize with a 4-space indent, matching existing `users.json` files.
fn to_pretty_json(users: &Users) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    users.serialize(&mut ser)?;
    Ok(buf)
}

// ─── Record operations ────────────────────────────────────────────────────────

/// Insert a new account with an empty history. Returns `false`, leaving
/// `users` untouched, when the name is already taken.
pub fn create_user(users: &mut Users, username: &str, password: &str) -> bool {
    if users.contains_key(username) {
        return false;
    }
    users.insert(username.to_string(), UserRecord::new(password));
    true
}

/// True only when the user exists and the password matches exactly.
pub fn authenticate(users: &Users, username: &str, password: &str) -> bool {
    users
        .get(username)
        .is_some_and(|user| user.password_matches(password))
}

/// Append a visit to the user's history and return the new history length.
pub fn append_visit(users: &mut Users, username: &str, visit: Visit) -> Result<usize, StoreError> {
    let user = users
        .get_mut(username)
        .ok_or_else(|| StoreError::UnknownUser(username.to_string()))?;
    user.history.push(visit);
    Ok(user.history.len())
}
