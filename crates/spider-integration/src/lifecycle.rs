//! Entry lifecycle: process setup, entry setup, entry unload.
//!
//! One [`SpiderIntegration`] exists per process. Process setup runs once
//! with the host's static configuration, then the host calls entry
//! setup/unload once per configured account. Between a successful setup
//! and the next unload, the entry's client handle is visible to platform
//! handlers through [`SpiderIntegration::client_for`].

use std::sync::Arc;

use futures::future::join_all;
use thiserror::Error;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use spider_api::{SpiderApiError, SpiderConnector};

use crate::config::{SchemaError, SpiderConfig};
use crate::entry::ConfigEntry;
use crate::executor::{BlockingPool, OffloadError};
use crate::host::HostServices;
use crate::platform::{Platform, PLATFORMS};
use crate::registry::ClientRegistry;
use crate::DOMAIN;

/// Errors from entry setup.
#[derive(Debug, Error)]
pub enum SetupEntryError {
    /// The Spider API rejected the entry's credentials. Logged here and
    /// reported to the host; the entry stays retry-eligible under host
    /// policy.
    #[error("the Spider API rejected the credentials for this account")]
    Unauthorized,

    /// Entry data did not contain usable credentials.
    #[error(transparent)]
    BadEntryData(#[from] SchemaError),

    /// Any other vendor client failure, handed to the host untouched.
    #[error(transparent)]
    Api(SpiderApiError),

    /// The offloaded authentication job died before reporting back.
    #[error(transparent)]
    Offload(#[from] OffloadError),
}

/// Errors from entry unload.
#[derive(Debug, Error)]
pub enum UnloadEntryError {
    /// One or more platforms refused to unload. The client handle stays
    /// registered so a later attempt can succeed without
    /// re-authenticating.
    #[error("platforms failed to unload: {0:?}")]
    PlatformsFailed(Vec<Platform>),

    /// Unload was called for an entry that was never set up.
    #[error("no client registered for entry {0}")]
    NotRegistered(String),
}

/// Drives Spider account lifecycle against an injected host.
pub struct SpiderIntegration {
    host: Arc<dyn HostServices>,
    connector: Arc<dyn SpiderConnector>,
    registry: ClientRegistry,
    pool: BlockingPool,

    /// Handles for fire-and-forget work (import flow, platform
    /// forwarding). Production flow never blocks on these; the host and
    /// tests drain them through [`Self::block_till_done`].
    background: Mutex<Vec<JoinHandle<()>>>,
}

impl SpiderIntegration {
    pub fn new(host: Arc<dyn HostServices>, connector: Arc<dyn SpiderConnector>) -> Self {
        Self {
            host,
            connector,
            registry: ClientRegistry::new(),
            pool: BlockingPool::new(),
            background: Mutex::new(Vec::new()),
        }
    }

    /// Registry view for platform handlers.
    pub fn registry(&self) -> &ClientRegistry {
        &self.registry
    }

    /// Client handle for an entry, if it is currently set up.
    pub fn client_for(&self, entry_id: &str) -> Option<spider_api::ClientHandle> {
        self.registry.client_for(entry_id)
    }

    /// Process-level setup with the host's static configuration.
    ///
    /// Always starts from an empty registry. A document without a
    /// `spider:` section succeeds with no further effect; a malformed
    /// section is the only failure. With a valid section and no existing
    /// entries, one import flow is scheduled and setup returns without
    /// waiting on it.
    pub async fn async_setup(&self, config: &serde_yaml::Value) -> Result<(), SchemaError> {
        self.registry.reset();

        let Some(conf) = SpiderConfig::from_document(config)? else {
            return Ok(());
        };

        if self.host.entry_count(DOMAIN) == 0 {
            debug!("no Spider entries yet, scheduling an import flow");
            let host = Arc::clone(&self.host);
            self.retain(tokio::spawn(async move {
                host.start_import_flow(DOMAIN, conf).await;
            }))
            .await;
        }

        Ok(())
    }

    /// Set up one account entry.
    ///
    /// Authentication runs on the blocking pool so concurrent entries keep
    /// processing. On success the client is registered and the entry is
    /// handed to each platform as its own scheduled task.
    pub async fn async_setup_entry(&self, entry: &ConfigEntry) -> Result<(), SetupEntryError> {
        let conf = SpiderConfig::from_entry(entry)?;

        let connector = Arc::clone(&self.connector);
        let connected = self
            .pool
            .run(move || connector.connect(&conf.username, &conf.password, conf.scan_interval))
            .await?;

        let client = match connected {
            Ok(client) => client,
            Err(SpiderApiError::Unauthorized) => {
                error!(entry_id = %entry.entry_id, "can't connect to the Spider API: credentials rejected");
                return Err(SetupEntryError::Unauthorized);
            }
            Err(err) => return Err(SetupEntryError::Api(err)),
        };

        self.registry.insert(entry.entry_id.clone(), client);
        info!(entry_id = %entry.entry_id, title = %entry.title, "Spider account connected");

        for platform in PLATFORMS {
            let host = Arc::clone(&self.host);
            let entry = entry.clone();
            self.retain(tokio::spawn(async move {
                host.forward_entry_setup(&entry, platform).await;
            }))
            .await;
        }

        Ok(())
    }

    /// Unload one account entry.
    ///
    /// All platform unloads are launched together and every outcome is
    /// collected; the client handle is discarded only when all of them
    /// succeed.
    pub async fn async_unload_entry(&self, entry: &ConfigEntry) -> Result<(), UnloadEntryError> {
        let results = join_all(
            PLATFORMS.map(|platform| self.host.forward_entry_unload(entry, platform)),
        )
        .await;

        let failed: Vec<Platform> = PLATFORMS
            .iter()
            .zip(&results)
            .filter(|(_, ok)| !**ok)
            .map(|(platform, _)| *platform)
            .collect();

        if !failed.is_empty() {
            warn!(entry_id = %entry.entry_id, ?failed, "entry unload failed, keeping the client registered");
            return Err(UnloadEntryError::PlatformsFailed(failed));
        }

        match self.registry.remove(&entry.entry_id) {
            Some(_) => {
                info!(entry_id = %entry.entry_id, "Spider account disconnected");
                Ok(())
            }
            None => Err(UnloadEntryError::NotRegistered(entry.entry_id.clone())),
        }
    }

    /// Await every retained fire-and-forget task.
    ///
    /// Production flow never calls this; it exists so scheduled work can
    /// be made observable in diagnostics and tests.
    pub async fn block_till_done(&self) {
        let handles: Vec<_> = {
            let mut background = self.background.lock().await;
            background.drain(..).collect()
        };

        for handle in handles {
            let _ = handle.await;
        }
    }

    async fn retain(&self, handle: JoinHandle<()>) {
        self.background.lock().await.push(handle);
    }
}
