pub mod config;
pub mod session;
pub mod storage;

mod memory;
pub use memory::MemoryStorage;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorage;

pub use config::{ClinicConfig, ConfigError};
pub use session::{Role, Session, SessionError, SessionStore};
pub use storage::KeyValueStore;
