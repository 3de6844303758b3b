//! Application state shared by every API handler.
//!
//! `CoreState` owns the configuration, the user store handle and the
//! session registry. Sessions sit behind an `RwLock`; store writes are
//! serialized by a separate mutex so that load→mutate→save is atomic
//! with respect to other requests in this process. Guards are never held
//! across an `.await`.

use std::sync::{Mutex, RwLock, RwLockReadGuard, RwLockWriteGuard};

use uuid::Uuid;

use crate::config::Config;
use crate::session::{SessionContext, SessionRegistry};
use crate::store::{StoreError, UserStore, Users};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Unknown or ended session")]
    UnknownSession,
    #[error("Lock poisoned")]
    LockPoisoned,
    #[error(transparent)]
    Store(#[from] StoreError),
}

pub struct CoreState {
    pub config: Config,
    store: UserStore,
    /// Held for the whole of a read-modify-write on the store file.
    store_write: Mutex<()>,
    sessions: RwLock<SessionRegistry>,
}

impl CoreState {
    pub fn new(config: Config) -> Self {
        Self {
            store: UserStore::new(config.store_path.clone()),
            config,
            store_write: Mutex::new(()),
            sessions: RwLock::new(SessionRegistry::new()),
        }
    }

    // ── Store access ────────────────────────────────────────

    pub fn store(&self) -> &UserStore {
        &self.store
    }

    /// Fresh read of the store file.
    pub fn load_users(&self) -> Result<Users, CoreError> {
        Ok(self.store.load()?)
    }

    /// Load, apply `f`, and save only if `f` asks for it by returning
    /// `(value, true)`.
    pub fn update_users<T, E>(
        &self,
        f: impl FnOnce(&mut Users) -> Result<(T, bool), E>,
    ) -> Result<T, E>
    where
        E: From<CoreError>,
    {
        let _guard = self.store_write.lock().map_err(|_| CoreError::LockPoisoned)?;
        let mut users = self.store.load().map_err(CoreError::from)?;
        let (value, dirty) = f(&mut users)?;
        if dirty {
            self.store.save(&users).map_err(CoreError::from)?;
        }
        Ok(value)
    }

    // ── Session access ──────────────────────────────────────

    pub fn read_sessions(&self) -> Result<RwLockReadGuard<'_, SessionRegistry>, CoreError> {
        self.sessions.read().map_err(|_| CoreError::LockPoisoned)
    }

    pub fn write_sessions(&self) -> Result<RwLockWriteGuard<'_, SessionRegistry>, CoreError> {
        self.sessions.write().map_err(|_| CoreError::LockPoisoned)
    }

    pub fn start_session(&self) -> Result<Uuid, CoreError> {
        let id = self.write_sessions()?.start();
        tracing::info!(session = %id, "Session started");
        Ok(id)
    }

    pub fn end_session(&self, id: &Uuid) -> Result<(), CoreError> {
        if self.write_sessions()?.end(id) {
            tracing::info!(session = %id, "Session ended");
            Ok(())
        } else {
            Err(CoreError::UnknownSession)
        }
    }

    pub fn session_exists(&self, id: &Uuid) -> bool {
        self.read_sessions()
            .map(|sessions| sessions.get(id).is_some())
            .unwrap_or(false)
    }

    /// Run `f` against a read-only view of the session.
    pub fn with_session<T>(
        &self,
        id: &Uuid,
        f: impl FnOnce(&SessionContext) -> T,
    ) -> Result<T, CoreError> {
        let sessions = self.read_sessions()?;
        let session = sessions.get(id).ok_or(CoreError::UnknownSession)?;
        Ok(f(session))
    }

    /// Run `f` against a mutable session.
    pub fn with_session_mut<T>(
        &self,
        id: &Uuid,
        f: impl FnOnce(&mut SessionContext) -> T,
    ) -> Result<T, CoreError> {
        let mut sessions = self.write_sessions()?;
        let session = sessions.get_mut(id).ok_or(CoreError::UnknownSession)?;
        Ok(f(session))
    }
}

#[cfg(test)]
pub(crate) fn test_core_state() -> (CoreState, tempfile::TempDir) {
    let tmp = tempfile::tempdir().unwrap();
    let config = Config {
        store_path: tmp.path().join("users.json"),
        report_dir: tmp.path().to_path_buf(),
        greeting_delay: std::time::Duration::ZERO,
        ..Config::default()
    };
    (CoreState::new(config), tmp)
}
