//! Wire types for the panel backend

use serde::{Deserialize, Serialize};
use std::fmt;

/// A proxy user as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Server-assigned identifier, unique per user
    pub uuid: String,
    pub remark: String,
    /// Full `vless://` connection URI
    #[serde(default)]
    pub vless: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub remark: String,
}

/// Subscription document formats served under `/api/subscribe/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubscriptionFormat {
    /// Clash YAML configuration
    Clash,
    /// Base64 list of vless links
    V2ray,
}

impl SubscriptionFormat {
    pub fn path(self) -> &'static str {
        match self {
            Self::Clash => "/api/subscribe/clash",
            Self::V2ray => "/api/subscribe/v2ray",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Clash => "Clash YAML",
            Self::V2ray => "V2Ray Base64",
        }
    }
}

impl fmt::Display for SubscriptionFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Clash => "clash",
            Self::V2ray => "v2ray",
        })
    }
}

/// Service status reported by `GET /api/status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerStatus {
    pub user_count: usize,
    pub port: u16,
    pub protocol: String,
    pub xray_online: bool,
}

/// Recover the document text from a plain-text endpoint body.
///
/// The reference backend returns subscription documents as JSON string
/// literals, so a body that parses as one is unquoted. Anything else is
/// kept byte for byte.
pub fn decode_text_body(body: String) -> String {
    match serde_json::from_str::<String>(&body) {
        Ok(text) => text,
        Err(_) => body,
    }
}
