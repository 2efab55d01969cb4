//! Spider cloud integration for the automation host
//!
//! Connects Itho Daalderop "Spider" climate and smart-plug accounts to the
//! host: validates static configuration, authenticates a per-account API
//! client off the event loop, forwards discovery to the climate, sensor
//! and switch platforms, and tears everything down symmetrically on
//! unload.
//!
//! # Key Types
//!
//! - [`SpiderConfig`] - validated account configuration
//! - [`ConfigEntry`] - host-owned record of one configured account
//! - [`SpiderIntegration`] - the entry lifecycle manager
//! - [`SpiderConfigFlow`] - config flow handler (user and import steps)
//!
//! The vendor client is injected as a [`spider_api::SpiderConnector`]; the
//! host's facilities (entry store, flow initiation, platform forwarding)
//! are injected as a [`HostServices`] implementation.

use std::time::Duration;

pub mod config;
pub mod config_flow;
pub mod entry;
pub mod executor;
pub mod host;
pub mod lifecycle;
pub mod platform;
pub mod registry;

pub use config::{SchemaError, SchemaResult, SpiderConfig};
pub use config_flow::{FlowOutcome, SpiderConfigFlow, STEP_USER};
pub use entry::{ConfigEntry, ConfigEntrySource};
pub use executor::{BlockingPool, OffloadError};
pub use host::HostServices;
pub use lifecycle::{SetupEntryError, SpiderIntegration, UnloadEntryError};
pub use platform::{Platform, PLATFORMS};

/// Integration domain, also the top-level configuration key.
pub const DOMAIN: &str = "spider";

/// Configuration key for the account username.
pub const CONF_USERNAME: &str = "username";
/// Configuration key for the account password.
pub const CONF_PASSWORD: &str = "password";
/// Configuration key for the polling interval.
pub const CONF_SCAN_INTERVAL: &str = "scan_interval";

/// Polling interval used when the configuration does not set one.
pub const DEFAULT_SCAN_INTERVAL: Duration = Duration::from_secs(120);
