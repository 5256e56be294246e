//! # Flat key/value persistence
//!
//! [`KeyValueStore`] is the seam between the session logic and wherever the
//! client keeps its two persisted strings. Implementations:
//!
//! | Type | Platform | Backing |
//! |------|----------|---------|
//! | [`crate::MemoryStorage`] | native, tests | shared in-process map |
//! | `LocalStorage` | wasm32 + `web` | `window.localStorage` |
//!
//! The accessor performs no validation. Values survive page navigations within
//! the same origin and never expire; callers decide when to clear them.

/// Synchronous string storage keyed by string.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}
