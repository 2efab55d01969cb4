//! Device platforms served by the integration.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A device-category handler the host forwards entries to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    /// Thermostats
    Climate,
    /// Power and energy readings
    Sensor,
    /// Smart plugs
    Switch,
}

/// Platforms every Spider entry is forwarded to.
pub const PLATFORMS: [Platform; 3] = [Platform::Climate, Platform::Sensor, Platform::Switch];

impl Platform {
    /// Domain string the host knows the platform by.
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Climate => "climate",
            Platform::Sensor => "sensor",
            Platform::Switch => "switch",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
