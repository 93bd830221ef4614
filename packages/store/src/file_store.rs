//! # Filesystem-backed session persistence
//!
//! [`FileBackend`] keeps the serialized session in a single JSON file so a
//! native build stays signed in across restarts.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! └── <storage_key>.json     # {"state": {...}, "version": 0}
//! ```
//!
//! ## Platform data directories
//!
//! Callers usually pass `dirs::data_dir().join("ops-dashboard")`:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/ops-dashboard/` |
//! | Linux | `~/.local/share/ops-dashboard/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\ops-dashboard\` |
//!
//! I/O errors are logged and swallowed: an unreadable file is a signed-out
//! session, an unwritable one just means the session will not survive a restart.

use std::path::PathBuf;

use crate::session::SessionBackend;

/// Filesystem-backed SessionBackend for native persistence.
#[derive(Clone, Debug)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(base: PathBuf, storage_key: &str) -> Self {
        Self {
            path: base.join(format!("{storage_key}.json")),
        }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl SessionBackend for FileBackend {
    fn load(&self) -> Option<String> {
        std::fs::read_to_string(&self.path).ok()
    }

    fn save(&self, raw: &str) {
        if let Some(parent) = self.path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        if let Err(e) = std::fs::write(&self.path, raw) {
            tracing::warn!(path = %self.path.display(), "failed to persist session: {e}");
        }
    }

    fn clear(&self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                tracing::warn!(path = %self.path.display(), "failed to remove session: {e}")
            }
        }
    }
}
