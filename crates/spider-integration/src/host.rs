//! Capabilities the integration consumes from the host.
//!
//! The host owns the entry store, the flow machinery and the platform
//! handlers. The lifecycle manager only ever calls back through this
//! trait, so it can be driven by a test double as easily as by a live
//! host process.

use async_trait::async_trait;

use crate::config::SpiderConfig;
use crate::entry::ConfigEntry;
use crate::platform::Platform;

/// Host facilities the integration calls back into.
#[async_trait]
pub trait HostServices: Send + Sync + 'static {
    /// Number of config entries the host currently holds for `domain`.
    fn entry_count(&self, domain: &str) -> usize;

    /// Start an import flow for `domain`, seeded with validated static
    /// configuration.
    async fn start_import_flow(&self, domain: &str, seed: SpiderConfig);

    /// Forward an entry to one platform for setup.
    async fn forward_entry_setup(&self, entry: &ConfigEntry, platform: Platform);

    /// Forward an entry to one platform for unload.
    ///
    /// Returns `true` once the platform released everything it set up for
    /// the entry.
    async fn forward_entry_unload(&self, entry: &ConfigEntry, platform: Platform) -> bool;
}
