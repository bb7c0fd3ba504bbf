//! HTTP client for the Xray panel backend
//!
//! Wraps the backend's user, subscription and service-status endpoints
//! behind the [`PanelApi`] trait so UI code can be exercised against a mock.

pub mod client;
pub mod types;

pub use client::{error::ClientError, PanelApi, PanelClient, PanelClientBuilder};
pub use types::{ServerStatus, SubscriptionFormat, User};
