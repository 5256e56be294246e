//! Session context and hooks for the UI.

use dioxus::prelude::*;
use store::{KeyValueStore, Session, SessionStore};

/// Create the platform session store.
///
/// - **Web** (WASM + `web` feature): `window.localStorage`
/// - **Native / tests**: the process-wide [`store::MemoryStorage`]
pub fn make_session_store() -> SessionStore<impl KeyValueStore + Clone> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        SessionStore::new(store::LocalStorage::new())
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        SessionStore::new(store::MemoryStorage::shared())
    }
}

/// Get the current session.
/// Returns a signal that updates on login, logout and invalidation.
pub fn use_session() -> Signal<Session> {
    use_context::<Signal<Session>>()
}

/// Provider component that loads the persisted session once.
/// Wrap your app with this component before any page reads the session.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let session = use_signal(|| make_session_store().load());

    use_context_provider(|| session);

    rsx! {
        {children}
    }
}

/// Re-read the store into the session signal after a write.
pub fn refresh_session(mut session: Signal<Session>) {
    let current = make_session_store().load();
    if *session.peek() != current {
        session.set(current);
    }
}
