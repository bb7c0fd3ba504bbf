//! Browser UI for managing Xray proxy users
//!
//! A Yew single-page app over the panel backend: lists users with their
//! connection QR codes, adds and removes users, and shows the Clash and
//! V2Ray subscription documents.

pub mod app;
pub mod client;
pub mod components;
pub mod config;
pub mod logging;
pub mod services;
pub mod state;
pub mod theme;

pub use app::App;
pub use config::PanelConfig;
