//! Chat session token persistence behind a narrow storage interface.
//!
//! DESIGN
//! ======
//! The server threads conversation memory through an opaque `session_id`
//! token: the first chat reply carries one, and every later request must echo
//! it back. The token lives in `sessionStorage`, so a conversation survives
//! reloads but not a new tab or browser restart.
//!
//! Components never touch `sessionStorage` directly. They go through
//! [`SessionContext`], which dispatches to a [`SessionStore`] implementation:
//! the browser-backed store in the real app, an in-memory store in tests.
//! SSR paths safely report no token to keep server rendering deterministic.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;
use std::sync::Mutex;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "plantcheck_session_id";

/// Where the session token lives between requests.
pub trait SessionStore {
    /// The token from the last reply, if any has been seen.
    fn load(&self) -> Option<String>;

    /// Persist a token from a reply. Best-effort; storage failures are
    /// swallowed and the conversation continues without memory.
    fn store(&self, token: &str);
}

/// Shared handle to the active [`SessionStore`], provided via Leptos context.
#[derive(Clone)]
pub struct SessionContext {
    inner: Arc<dyn SessionStore + Send + Sync>,
}

impl SessionContext {
    /// Context backed by `sessionStorage` (no-op outside the browser).
    #[must_use]
    pub fn browser() -> Self {
        Self {
            inner: Arc::new(BrowserSessionStore),
        }
    }

    /// Context backed by process memory, for tests.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            inner: Arc::new(MemorySessionStore::default()),
        }
    }

    /// Token to attach to the next chat request.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.inner.load()
    }

    /// Record the token carried by a reply.
    pub fn remember(&self, token: &str) {
        self.inner.store(token);
    }

    /// Record a reply's token field. A reply without one leaves the stored
    /// token untouched, so an established session is never discarded.
    pub fn adopt(&self, token: Option<&str>) {
        if let Some(token) = token {
            self.remember(token);
        }
    }
}

/// `sessionStorage`-backed store used by the running app.
struct BrowserSessionStore;

impl SessionStore for BrowserSessionStore {
    fn load(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let window = web_sys::window()?;
            if let Ok(Some(storage)) = window.session_storage() {
                if let Ok(Some(token)) = storage.get_item(STORAGE_KEY) {
                    return Some(token);
                }
            }
            None
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn store(&self, token: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(storage)) = window.session_storage() {
                    let _ = storage.set_item(STORAGE_KEY, token);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    }
}

/// In-memory store for exercising session logic without a browser.
#[derive(Default)]
pub struct MemorySessionStore {
    token: Mutex<Option<String>>,
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Option<String> {
        self.token.lock().ok().and_then(|slot| slot.clone())
    }

    fn store(&self, token: &str) {
        if let Ok(mut slot) = self.token.lock() {
            *slot = Some(token.to_owned());
        }
    }
}
