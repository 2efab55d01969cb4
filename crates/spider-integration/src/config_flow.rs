//! Config flow: user and import steps for adding a Spider account.
//!
//! The host drives the flow UI and entry creation; this handler validates
//! each submission and tells the host what to show or create next. The
//! import step consumes the flow that process setup schedules for YAML
//! configuration.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use spider_api::{SpiderApiError, SpiderConnector};

use crate::config::SpiderConfig;
use crate::executor::BlockingPool;
use crate::host::HostServices;
use crate::DOMAIN;

/// Step shown when the account form is (re-)displayed.
pub const STEP_USER: &str = "user";

/// What the host should do after a flow step.
#[derive(Debug, Clone, PartialEq)]
pub enum FlowOutcome {
    /// Show (or re-show) the account form.
    Form {
        step_id: &'static str,
        errors: HashMap<&'static str, &'static str>,
    },
    /// Create a config entry from validated data.
    CreateEntry {
        title: String,
        data: HashMap<String, serde_json::Value>,
    },
    /// Stop the flow.
    Abort { reason: &'static str },
}

/// Flow handler for the Spider integration.
///
/// Only one Spider account is supported per host; a second flow aborts
/// instead of producing a duplicate entry.
pub struct SpiderConfigFlow {
    host: Arc<dyn HostServices>,
    connector: Arc<dyn SpiderConnector>,
    pool: BlockingPool,
}

impl SpiderConfigFlow {
    pub fn new(host: Arc<dyn HostServices>, connector: Arc<dyn SpiderConnector>) -> Self {
        Self {
            host,
            connector,
            pool: BlockingPool::new(),
        }
    }

    /// Initial step: the user submits account credentials.
    pub async fn async_step_user(&self, input: Option<SpiderConfig>) -> FlowOutcome {
        if self.host.entry_count(DOMAIN) > 0 {
            return FlowOutcome::Abort {
                reason: "single_instance_allowed",
            };
        }

        let Some(conf) = input else {
            return Self::form(HashMap::new());
        };

        let connector = Arc::clone(&self.connector);
        let probe = {
            let conf = conf.clone();
            self.pool
                .run(move || connector.connect(&conf.username, &conf.password, conf.scan_interval))
                .await
        };

        match probe {
            Ok(Ok(_client)) => FlowOutcome::CreateEntry {
                title: DOMAIN.to_string(),
                data: conf.into_data(),
            },
            Ok(Err(SpiderApiError::Unauthorized)) => {
                debug!("Spider flow: credentials rejected");
                Self::form(HashMap::from([("base", "invalid_auth")]))
            }
            Ok(Err(_)) | Err(_) => Self::form(HashMap::from([("base", "cannot_connect")])),
        }
    }

    /// Import step, seeded by process setup from validated YAML.
    pub async fn async_step_import(&self, conf: SpiderConfig) -> FlowOutcome {
        self.async_step_user(Some(conf)).await
    }

    fn form(errors: HashMap<&'static str, &'static str>) -> FlowOutcome {
        FlowOutcome::Form {
            step_id: STEP_USER,
            errors,
        }
    }
}
