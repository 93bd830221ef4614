use std::sync::{Arc, Mutex};

use crate::session::SessionBackend;

/// In-memory session backend for testing and as a fallback when no durable
/// storage is available.
#[derive(Clone, Debug, Default)]
pub struct MemoryBackend {
    raw: Arc<Mutex<Option<String>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend pre-seeded with a persisted record, as if written by an earlier run.
    pub fn with_contents(raw: &str) -> Self {
        Self {
            raw: Arc::new(Mutex::new(Some(raw.to_string()))),
        }
    }
}

impl SessionBackend for MemoryBackend {
    fn load(&self) -> Option<String> {
        self.raw.lock().ok()?.clone()
    }

    fn save(&self, raw: &str) {
        if let Ok(mut slot) = self.raw.lock() {
            *slot = Some(raw.to_string());
        }
    }

    fn clear(&self) {
        if let Ok(mut slot) = self.raw.lock() {
            *slot = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_contents() {
        let backend = MemoryBackend::new();
        let other = backend.clone();
        assert!(backend.load().is_none());

        backend.save("{}");
        assert_eq!(other.load().as_deref(), Some("{}"));

        other.clear();
        assert!(backend.load().is_none());
    }
}
