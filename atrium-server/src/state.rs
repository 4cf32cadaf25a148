use std::sync::Arc;

use atrium_config::Config;
use atrium_core::{DocumentStore, Repository, ResourceKind};

use crate::auth::sessions::SessionTracker;
use crate::upload::UploadService;

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DocumentStore>,
    pub config: Arc<Config>,
    pub sessions: SessionTracker,
    pub uploads: UploadService,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}

impl AppState {
    pub fn new(store: Arc<dyn DocumentStore>, config: Config) -> Self {
        let uploads = UploadService::new(config.uploads.root.clone());
        Self {
            store,
            config: Arc::new(config),
            sessions: SessionTracker::default(),
            uploads,
        }
    }

    /// Repository instance for one resource type.
    pub fn repo(&self, kind: ResourceKind) -> Repository {
        Repository::new(self.store.clone(), kind.spec())
    }
}
