//! Common test doubles: a scripted host and connector.
//!
//! Mirrors what a live host would provide, while capturing every
//! capability call for assertions.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;

use spider_api::{ClientHandle, SpiderApiClient, SpiderApiError, SpiderConnector};
use spider_integration::{
    ConfigEntry, HostServices, Platform, SpiderConfig, CONF_PASSWORD, CONF_SCAN_INTERVAL,
    CONF_USERNAME,
};

/// Record of one capability call made against the host.
#[derive(Debug, Clone, PartialEq)]
pub enum HostCall {
    ImportFlow {
        domain: String,
        username: String,
    },
    ForwardSetup {
        entry_id: String,
        platform: Platform,
    },
    ForwardUnload {
        entry_id: String,
        platform: Platform,
    },
}

/// Host double capturing every capability call.
#[derive(Default)]
pub struct MockHost {
    calls: Mutex<Vec<HostCall>>,
    entries: Mutex<usize>,
    unload_results: Mutex<HashMap<Platform, bool>>,
}

impl MockHost {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Pretend the host already holds `count` entries for the domain.
    pub fn set_entry_count(&self, count: usize) {
        *self.entries.lock().unwrap() = count;
    }

    /// Script the outcome of one platform's unload.
    pub fn set_unload_result(&self, platform: Platform, ok: bool) {
        self.unload_results.lock().unwrap().insert(platform, ok);
    }

    pub fn calls(&self) -> Vec<HostCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Platforms that received a forward-setup call, in call order.
    pub fn forwarded_setups(&self) -> Vec<Platform> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                HostCall::ForwardSetup { platform, .. } => Some(platform),
                _ => None,
            })
            .collect()
    }

    /// Platforms that received a forward-unload call, in call order.
    pub fn forwarded_unloads(&self) -> Vec<Platform> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                HostCall::ForwardUnload { platform, .. } => Some(platform),
                _ => None,
            })
            .collect()
    }

    pub fn import_flows(&self) -> Vec<HostCall> {
        self.calls()
            .into_iter()
            .filter(|call| matches!(call, HostCall::ImportFlow { .. }))
            .collect()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }
}

#[async_trait]
impl HostServices for MockHost {
    fn entry_count(&self, _domain: &str) -> usize {
        *self.entries.lock().unwrap()
    }

    async fn start_import_flow(&self, domain: &str, seed: SpiderConfig) {
        self.calls.lock().unwrap().push(HostCall::ImportFlow {
            domain: domain.to_string(),
            username: seed.username,
        });
    }

    async fn forward_entry_setup(&self, entry: &ConfigEntry, platform: Platform) {
        self.calls.lock().unwrap().push(HostCall::ForwardSetup {
            entry_id: entry.entry_id.clone(),
            platform,
        });
    }

    async fn forward_entry_unload(&self, entry: &ConfigEntry, platform: Platform) -> bool {
        self.calls.lock().unwrap().push(HostCall::ForwardUnload {
            entry_id: entry.entry_id.clone(),
            platform,
        });
        self.unload_results
            .lock()
            .unwrap()
            .get(&platform)
            .copied()
            .unwrap_or(true)
    }
}

/// Client double handed out by [`MockConnector`].
#[derive(Debug)]
pub struct MockClient {
    username: String,
    scan_interval: Duration,
}

impl SpiderApiClient for MockClient {
    fn account(&self) -> &str {
        &self.username
    }

    fn scan_interval(&self) -> Duration {
        self.scan_interval
    }
}

/// How the fake cloud answers a connection attempt.
#[derive(Debug, Clone, Copy)]
pub enum ConnectOutcome {
    Accept,
    Unauthorized,
    Transport,
}

/// Connector double with a scripted outcome.
pub struct MockConnector {
    outcome: Mutex<ConnectOutcome>,
    attempts: Mutex<Vec<String>>,
}

impl MockConnector {
    pub fn accepting() -> Arc<Self> {
        Self::with_outcome(ConnectOutcome::Accept)
    }

    pub fn rejecting() -> Arc<Self> {
        Self::with_outcome(ConnectOutcome::Unauthorized)
    }

    pub fn failing() -> Arc<Self> {
        Self::with_outcome(ConnectOutcome::Transport)
    }

    pub fn with_outcome(outcome: ConnectOutcome) -> Arc<Self> {
        Arc::new(Self {
            outcome: Mutex::new(outcome),
            attempts: Mutex::new(Vec::new()),
        })
    }

    /// Usernames that attempted to connect, in order.
    pub fn attempts(&self) -> Vec<String> {
        self.attempts.lock().unwrap().clone()
    }
}

impl SpiderConnector for MockConnector {
    fn connect(
        &self,
        username: &str,
        _password: &str,
        scan_interval: Duration,
    ) -> Result<ClientHandle, SpiderApiError> {
        self.attempts.lock().unwrap().push(username.to_string());
        match *self.outcome.lock().unwrap() {
            ConnectOutcome::Accept => Ok(Arc::new(MockClient {
                username: username.to_string(),
                scan_interval,
            })),
            ConnectOutcome::Unauthorized => Err(SpiderApiError::Unauthorized),
            ConnectOutcome::Transport => {
                Err(SpiderApiError::Transport("cloud unreachable".into()))
            }
        }
    }
}

/// Entry fixture carrying a full set of account data.
pub fn account_entry() -> ConfigEntry {
    ConfigEntry::new("Spider")
        .with_data_value(CONF_USERNAME, json!("user@example.com"))
        .with_data_value(CONF_PASSWORD, json!("hunter2"))
        .with_data_value(CONF_SCAN_INTERVAL, json!(300))
}

/// Config fixture matching [`account_entry`].
pub fn account_config() -> SpiderConfig {
    SpiderConfig {
        username: "user@example.com".into(),
        password: "hunter2".into(),
        scan_interval: Duration::from_secs(300),
    }
}
