//! Service construction and teardown.

use creations_core::config::ConfigError;
use creations_core::storage::StorageError;
use creations_core::{
    AppConfig, DesignStore, HttpIdentityService, IdentityService, MemoryIdentityService,
    PlatformStorage, PreferencesStore, Storage, Suggester,
};
use std::sync::Arc;
use thiserror::Error;

/// Startup and I/O failures.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// The services one session runs against.
///
/// Exactly one design store and one preferences store exist per app; both
/// share the same storage backend.
pub struct App<S: Storage> {
    pub(crate) designs: DesignStore<S>,
    pub(crate) preferences: PreferencesStore<S>,
    pub(crate) suggester: Suggester,
    pub(crate) identity: Box<dyn IdentityService>,
}

impl App<PlatformStorage> {
    /// Build the app described by `config`.
    pub fn from_config(config: &AppConfig) -> Result<Self, AppError> {
        let storage = Arc::new(config.storage()?);
        log::info!("Using storage at {}", storage.base_path().display());

        let identity: Box<dyn IdentityService> = match config.identity.endpoint() {
            Some((url, anon_key)) => {
                log::info!("Using identity service at {}", url);
                Box::new(HttpIdentityService::new(url, anon_key))
            }
            None => {
                log::warn!("No identity service configured, accounts are kept in memory");
                Box::new(MemoryIdentityService::new())
            }
        };

        Ok(Self::new(
            storage,
            Suggester::new(config.suggestion_latency()),
            identity,
        ))
    }
}

impl<S: Storage> App<S> {
    pub fn new(storage: Arc<S>, suggester: Suggester, identity: Box<dyn IdentityService>) -> Self {
        Self {
            designs: DesignStore::open(Arc::clone(&storage)),
            preferences: PreferencesStore::open(storage),
            suggester,
            identity,
        }
    }

    pub fn designs(&self) -> &DesignStore<S> {
        &self.designs
    }

    pub fn preferences(&self) -> &PreferencesStore<S> {
        &self.preferences
    }

    pub fn storage(&self) -> &Arc<S> {
        self.designs.storage()
    }

    /// Save the design in progress before exit.
    pub fn shutdown(&mut self) {
        if let Some(product_id) = self.designs.current().product_id.clone() {
            self.designs.save(&product_id);
        }
        log::info!("Shut down");
    }
}
