//! Connector and client-handle traits for the Spider cloud API.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::error::SpiderApiError;

/// A live, authenticated Spider API client.
///
/// Platform handlers (climate, sensor, switch) drive devices through this
/// handle; the integration only stores it and hands it out per entry.
pub trait SpiderApiClient: Send + Sync + fmt::Debug {
    /// Account the client authenticated as.
    fn account(&self) -> &str;

    /// Polling cadence the client was configured with.
    fn scan_interval(&self) -> Duration;
}

/// Shared handle to an authenticated client, one per config entry.
pub type ClientHandle = Arc<dyn SpiderApiClient>;

/// Factory for authenticated Spider API clients.
///
/// `connect` performs network I/O and blocks the calling thread; run it
/// off the async scheduler (the integration uses its blocking pool).
pub trait SpiderConnector: Send + Sync {
    /// Authenticate `username`/`password` against the Spider cloud and
    /// return a ready client.
    ///
    /// Bad credentials surface as [`SpiderApiError::Unauthorized`]; any
    /// other failure (network, vendor outage) as
    /// [`SpiderApiError::Transport`].
    fn connect(
        &self,
        username: &str,
        password: &str,
        scan_interval: Duration,
    ) -> Result<ClientHandle, SpiderApiError>;
}
