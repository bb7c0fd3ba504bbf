//! Frontend configuration

use tracing::Level;

/// Panel configuration
pub struct PanelConfig;

impl PanelConfig {
    /// The only error the add-user form ever shows
    pub const ADD_USER_ERROR: &'static str = "Failed to add user";

    /// Edge length of a user's QR code, in pixels
    pub const QR_CODE_SIZE: u32 = 96;

    /// Class toggled on `<html>` while the dark theme is active
    pub const DARK_CLASS: &'static str = "dark";

    pub const USER_AGENT: &'static str = concat!("xray-panel-frontend/", env!("CARGO_PKG_VERSION"));

    /// Console log level
    pub fn log_level() -> Level {
        if cfg!(debug_assertions) {
            Level::DEBUG
        } else {
            Level::INFO
        }
    }
}
