//! Shared application state injected into HTTP handlers.

use std::sync::Arc;

use crate::application::services::LinkService;
use crate::domain::repositories::LinkRepository;

/// State shared by all handlers.
///
/// The storage backend is chosen at startup, so the service holds the
/// repository as a trait object.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<dyn LinkRepository>>,
}

impl AppState {
    /// Builds the state around a storage backend.
    pub fn new(repository: Arc<dyn LinkRepository>) -> Self {
        Self {
            link_service: Arc::new(LinkService::new(repository)),
        }
    }
}
