//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds the shared resources needed
//! by the request handlers. The state is initialized once during startup and then
//! cloned for each request handler through Axum's state extraction.

use std::sync::Arc;

use crate::service::beer::BeerService;

/// Application state containing shared resources and dependencies.
///
/// Holds the beer service behind its capability trait, so request handlers
/// depend only on the operations the service exposes and never on a concrete
/// storage engine. The state is initialized once during server startup and
/// cloned (cheaply, it is a reference-counted pointer) for each incoming
/// request via Axum's state extraction.
#[derive(Clone)]
pub struct AppState {
    /// Beer service implementation backing the HTTP surface.
    ///
    /// In production this is a `BeerRepository` over the SQLite connection
    /// pool; tests substitute an in-memory fake implementing the same trait.
    pub beer: Arc<dyn BeerService>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `beer` - Beer service implementation
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(beer: Arc<dyn BeerService>) -> Self {
        Self { beer }
    }
}
