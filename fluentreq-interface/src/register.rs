//! Process-wide backend registration.

use std::sync::{Arc, OnceLock};

use crate::Backend;

static BACKEND: OnceLock<Arc<dyn Backend>> = OnceLock::new();

/// Registers `backend` as the global default.
///
/// # Panics
///
/// Panics if a backend has already been registered.
pub fn register_backend(backend: impl Backend) {
    if BACKEND.set(Arc::new(backend)).is_err() {
        panic!("Backend already registered");
    }
}

/// Returns the globally registered backend, if any.
pub fn registered_backend() -> Option<Arc<dyn Backend>> {
    BACKEND.get().cloned()
}
