//! Where the session document is kept.
//!
//! The CLI uses [`FileBackend`]; tests and embedders use [`MemoryBackend`].

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::document::StoredState;
use crate::error::SessionError;

pub trait StateBackend: Send + Sync {
    fn load(&self) -> Result<StoredState, SessionError>;

    fn save(&self, state: &StoredState) -> Result<(), SessionError>;

    /// Remove every stored key.
    fn clear(&self) -> Result<(), SessionError>;

    /// Human-readable location, for status output.
    fn describe(&self) -> String;
}

/// JSON document on disk, readable only by the owner.
#[derive(Debug, Clone)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<(), SessionError> {
        let Some(parent) = self.path.parent() else {
            return Ok(());
        };
        if parent.as_os_str().is_empty() {
            return Ok(());
        }
        if parent.is_dir() {
            return Ok(());
        }
        fs::create_dir_all(parent)
            .map_err(|e| SessionError::Store(format!("mkdir {}: {e}", parent.display())))?;
        // Only a directory created here is tightened; an existing one keeps its mode.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Err(e) = fs::set_permissions(parent, fs::Permissions::from_mode(0o700)) {
                tracing::warn!("failed to chmod 0700 {}: {e}", parent.display());
            }
        }
        Ok(())
    }
}

impl StateBackend for FileBackend {
    fn load(&self) -> Result<StoredState, SessionError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(StoredState::default());
            }
            Err(e) => {
                return Err(SessionError::Store(format!(
                    "read {}: {e}",
                    self.path.display()
                )));
            }
        };
        if raw.trim().is_empty() {
            return Ok(StoredState::default());
        }
        serde_json::from_str(&raw)
            .map_err(|e| SessionError::Corrupt(format!("{}: {e}", self.path.display())))
    }

    fn save(&self, state: &StoredState) -> Result<(), SessionError> {
        self.ensure_parent()?;
        let json = serde_json::to_string_pretty(state)
            .map_err(|e| SessionError::Store(format!("serialize session: {e}")))?;

        // Write next to the target and rename so a crash never leaves half a document.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)
            .map_err(|e| SessionError::Store(format!("write {}: {e}", tmp.display())))?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&tmp, fs::Permissions::from_mode(0o600))
                .map_err(|e| SessionError::Store(format!("chmod {}: {e}", tmp.display())))?;
        }
        fs::rename(&tmp, &self.path).map_err(|e| {
            SessionError::Store(format!(
                "rename {} -> {}: {e}",
                tmp.display(),
                self.path.display()
            ))
        })
    }

    fn clear(&self) -> Result<(), SessionError> {
        if self.path.exists() {
            fs::remove_file(&self.path).map_err(|e| {
                SessionError::Store(format!("failed to delete {}: {e}", self.path.display()))
            })?;
        }
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// In-process storage; nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    state: Mutex<StoredState>,
}

impl MemoryBackend {
    #[must_use]
    pub fn with_state(state: StoredState) -> Self {
        Self {
            state: Mutex::new(state),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, StoredState>, SessionError> {
        self.state
            .lock()
            .map_err(|_| SessionError::Store("memory store lock poisoned".into()))
    }
}

impl StateBackend for MemoryBackend {
    fn load(&self) -> Result<StoredState, SessionError> {
        Ok(self.lock()?.clone())
    }

    fn save(&self, state: &StoredState) -> Result<(), SessionError> {
        *self.lock()? = state.clone();
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        *self.lock()? = StoredState::default();
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
