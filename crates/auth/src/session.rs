//! Session persistence: single source of truth for "who is logged in."

use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Context;

use crate::Principal;

/// Storage abstraction behind the session store.
///
/// Injected so flows can run against test doubles; the store itself never
/// touches the network or the UI.
pub trait SessionStorage: Send + Sync {
    fn read(&self) -> anyhow::Result<Option<String>>;
    fn write(&self, payload: &str) -> anyhow::Result<()>;
    fn remove(&self) -> anyhow::Result<()>;
}

/// In-memory storage, for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slot: Mutex<Option<String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemoryStorage {
    fn read(&self) -> anyhow::Result<Option<String>> {
        Ok(self.slot.lock().unwrap_or_else(|e| e.into_inner()).clone())
    }

    fn write(&self, payload: &str) -> anyhow::Result<()> {
        *self.slot.lock().unwrap_or_else(|e| e.into_inner()) = Some(payload.to_string());
        Ok(())
    }

    fn remove(&self) -> anyhow::Result<()> {
        *self.slot.lock().unwrap_or_else(|e| e.into_inner()) = None;
        Ok(())
    }
}

/// One JSON document at `{app_data_dir}/payflow/session.json`.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Storage at the well-known per-user session path.
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            path: session_file_path()?,
        })
    }

    /// Storage at an explicit path (tests, portable installs).
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl SessionStorage for FileStorage {
    fn read(&self) -> anyhow::Result<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(payload) => Ok(Some(payload)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err)
                .with_context(|| format!("failed to read session file at {:?}", self.path)),
        }
    }

    fn write(&self, payload: &str) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create session directory at {:?}", parent))?;
        }

        // Write-then-rename: a concurrent read sees either the old document
        // or the new one, never a half-written value.
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, payload)
            .with_context(|| format!("failed to write session file at {:?}", tmp))?;
        std::fs::rename(&tmp, &self.path)
            .with_context(|| format!("failed to move session file into place at {:?}", self.path))?;

        Ok(())
    }

    fn remove(&self) -> anyhow::Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err)
                .with_context(|| format!("failed to remove session file at {:?}", self.path)),
        }
    }
}

/// Resolve the per-user session file path:
/// `{app_data_dir}/payflow/session.json`.
fn session_file_path() -> anyhow::Result<PathBuf> {
    let base = dirs::data_dir()
        .or_else(|| {
            dirs::home_dir().map(|mut h| {
                h.push(".local");
                h.push("share");
                h
            })
        })
        .context("failed to resolve OS app data directory - tried data_dir() and home_dir()/.local/share")?;

    let mut path = base;
    path.push("payflow");
    path.push("session.json");

    Ok(path)
}

/// Single source of truth for the active [`Principal`].
///
/// One writer at a time in practice (login, reset, logout flows); reads and
/// writes are synchronous with respect to each other on the UI thread.
pub struct SessionStore {
    storage: Box<dyn SessionStorage>,
}

impl SessionStore {
    pub fn new(storage: impl SessionStorage + 'static) -> Self {
        Self {
            storage: Box::new(storage),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(MemoryStorage::new())
    }

    /// Persist `principal`. Subsequent loads, in this process lifetime or a
    /// later one, return this value until cleared.
    pub fn save(&self, principal: &Principal) -> anyhow::Result<()> {
        let payload = serde_json::to_string(principal)
            .context("failed to serialize session principal")?;
        self.storage.write(&payload)
    }

    /// The persisted principal, if any.
    ///
    /// Unreadable or malformed data is treated as "no session" and logged,
    /// never surfaced as a fatal error.
    pub fn load(&self) -> Option<Principal> {
        let payload = match self.storage.read() {
            Ok(Some(payload)) => payload,
            Ok(None) => return None,
            Err(err) => {
                tracing::warn!("failed to read persisted session: {err:?}");
                return None;
            }
        };

        match serde_json::from_str(&payload) {
            Ok(principal) => Some(principal),
            Err(err) => {
                tracing::warn!("malformed persisted session, treating as logged out: {err}");
                None
            }
        }
    }

    /// Remove the persisted principal. Idempotent.
    pub fn clear(&self) {
        if let Err(err) = self.storage.remove() {
            tracing::warn!("failed to clear persisted session: {err:?}");
        }
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore").finish_non_exhaustive()
    }
}
