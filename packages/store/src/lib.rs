pub mod config;
pub mod models;
pub mod session;
pub mod token;

mod memory;
pub use memory::MemoryBackend;

#[cfg(not(target_arch = "wasm32"))]
mod file_store;
#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FileBackend;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStorageBackend;

pub use config::DashboardConfig;
pub use models::{Role, UserIdentity};
pub use session::{Session, SessionBackend, SessionStore, SessionWatcher};
pub use token::{is_expired, Clock, SystemClock, TokenClaims};
