//! Client boundary for the Spider cloud API
//!
//! The vendor client itself (HTTP transport, polling cadence, response
//! parsing) lives outside this workspace. This crate defines the seam the
//! integration talks through:
//!
//! - [`SpiderConnector`] - blocking factory that authenticates an account
//!   and returns a ready client
//! - [`SpiderApiClient`] - the live, authenticated client handle
//! - [`SpiderApiError`] - the error taxonomy the connector reports with

mod client;
mod error;

pub use client::{ClientHandle, SpiderApiClient, SpiderConnector};
pub use error::SpiderApiError;
