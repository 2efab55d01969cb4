//! Static configuration validation.
//!
//! The host hands over its full YAML document; only the `spider:` section
//! is policed here. Top-level keys belonging to other integrations pass
//! through untouched, while unknown keys inside the section are rejected.

use std::collections::HashMap;
use std::time::Duration;

use serde_json::Value;
use thiserror::Error;

use crate::entry::ConfigEntry;
use crate::{CONF_PASSWORD, CONF_SCAN_INTERVAL, CONF_USERNAME, DEFAULT_SCAN_INTERVAL, DOMAIN};

/// Result type for schema validation
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Errors raised while validating the integration's configuration section.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("required field '{field}' is missing")]
    MissingField { field: &'static str },

    #[error("field '{field}' must be a {expected}")]
    InvalidType {
        field: &'static str,
        expected: &'static str,
    },

    #[error("field '{field}' is not a valid time period: {reason}")]
    InvalidDuration {
        field: &'static str,
        reason: String,
    },

    #[error("unknown field '{field}' in the spider section")]
    UnknownField { field: String },

    #[error("the spider section must be a mapping")]
    NotAMapping,

    #[error("the spider section holds unrepresentable data: {0}")]
    Unrepresentable(String),
}

/// Validated configuration for one Spider account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpiderConfig {
    pub username: String,
    pub password: String,
    pub scan_interval: Duration,
}

impl SpiderConfig {
    /// Extract and validate the integration's section from the host's full
    /// configuration document.
    ///
    /// Returns `Ok(None)` when the document carries no `spider:` key at
    /// all; setup treats that as a successful no-op.
    pub fn from_document(document: &serde_yaml::Value) -> SchemaResult<Option<Self>> {
        let Some(section) = document.get(DOMAIN) else {
            return Ok(None);
        };

        let section = serde_json::to_value(section)
            .map_err(|err| SchemaError::Unrepresentable(err.to_string()))?;
        let Value::Object(map) = section else {
            return Err(SchemaError::NotAMapping);
        };

        for key in map.keys() {
            if !matches!(
                key.as_str(),
                CONF_USERNAME | CONF_PASSWORD | CONF_SCAN_INTERVAL
            ) {
                return Err(SchemaError::UnknownField { field: key.clone() });
            }
        }

        Ok(Some(Self {
            username: required_string(map.get(CONF_USERNAME), CONF_USERNAME)?,
            password: required_string(map.get(CONF_PASSWORD), CONF_PASSWORD)?,
            scan_interval: optional_time_period(map.get(CONF_SCAN_INTERVAL))?,
        }))
    }

    /// Re-extract the record from a config entry's data map.
    ///
    /// Entry data was produced by the config flow, so no key policing here;
    /// a malformed entry still fails field by field.
    pub fn from_entry(entry: &ConfigEntry) -> SchemaResult<Self> {
        Ok(Self {
            username: required_string(entry.data.get(CONF_USERNAME), CONF_USERNAME)?,
            password: required_string(entry.data.get(CONF_PASSWORD), CONF_PASSWORD)?,
            scan_interval: optional_time_period(entry.data.get(CONF_SCAN_INTERVAL))?,
        })
    }

    /// Entry seed data for the host's entry store.
    pub fn into_data(self) -> HashMap<String, Value> {
        HashMap::from([
            (CONF_USERNAME.to_string(), Value::from(self.username)),
            (CONF_PASSWORD.to_string(), Value::from(self.password)),
            (
                CONF_SCAN_INTERVAL.to_string(),
                Value::from(self.scan_interval.as_secs()),
            ),
        ])
    }
}

fn required_string(value: Option<&Value>, field: &'static str) -> SchemaResult<String> {
    match value {
        None => Err(SchemaError::MissingField { field }),
        Some(Value::String(text)) => Ok(text.clone()),
        Some(_) => Err(SchemaError::InvalidType {
            field,
            expected: "string",
        }),
    }
}

fn optional_time_period(value: Option<&Value>) -> SchemaResult<Duration> {
    match value {
        None => Ok(DEFAULT_SCAN_INTERVAL),
        Some(value) => time_period(value, CONF_SCAN_INTERVAL),
    }
}

/// Coerce a seconds count or an `HH:MM:SS` string into a duration.
fn time_period(value: &Value, field: &'static str) -> SchemaResult<Duration> {
    match value {
        Value::Number(number) => {
            if let Some(secs) = number.as_u64() {
                return Ok(Duration::from_secs(secs));
            }
            match number.as_f64() {
                Some(secs) if secs >= 0.0 => Ok(Duration::from_secs_f64(secs)),
                _ => Err(SchemaError::InvalidDuration {
                    field,
                    reason: format!("'{number}' is not a non-negative second count"),
                }),
            }
        }
        Value::String(text) => parse_hms(text).ok_or_else(|| SchemaError::InvalidDuration {
            field,
            reason: format!("'{text}' is not an HH:MM:SS period"),
        }),
        _ => Err(SchemaError::InvalidType {
            field,
            expected: "duration",
        }),
    }
}

fn parse_hms(text: &str) -> Option<Duration> {
    let mut parts = text.split(':');
    let (hours, minutes, seconds) = match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(h), Some(m), Some(s), None) => (h, m, s),
        _ => return None,
    };

    let hours: u64 = hours.parse().ok()?;
    let minutes: u64 = minutes.parse().ok()?;
    let seconds: f64 = seconds.parse().ok()?;
    if minutes >= 60 || !(0.0..60.0).contains(&seconds) {
        return None;
    }

    Some(Duration::from_secs(hours * 3600 + minutes * 60) + Duration::from_secs_f64(seconds))
}
