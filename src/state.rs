//! Shared application state for all routes.

use crate::store::Store;

/// Injected into every handler. Tests build one around a throwaway database.
#[derive(Clone, Debug)]
pub struct AppState {
    pub store: Store,
}

impl AppState {
    pub fn new(store: Store) -> Self {
        AppState { store }
    }
}
