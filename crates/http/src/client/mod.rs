//! Panel HTTP client

pub mod api;
pub mod error;

pub use api::PanelApi;

use error::ClientError;
use reqwest::{Client, ClientBuilder, Response};

const DEFAULT_USER_AGENT: &str = concat!("xray-panel/", env!("CARGO_PKG_VERSION"));

/// Client for the panel backend.
///
/// Requests never carry a timeout: a hung backend leaves the awaiting
/// operation pending.
#[derive(Clone, Debug)]
pub struct PanelClient {
    client: Client,
    base_url: String,
}

impl PanelClient {
    /// Create a new client with default configuration
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::builder().base_url(base_url).build()
    }

    /// Create a new client builder
    pub fn builder() -> PanelClientBuilder {
        PanelClientBuilder::default()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, url)
    }

    /// Execute a request and decode a JSON body
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = Self::send(request).await?;
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Execute a request and return the body as text
    pub async fn execute_text(&self, request: reqwest::RequestBuilder) -> Result<String, ClientError> {
        let response = Self::send(request).await?;
        Ok(response.text().await?)
    }

    /// Execute a request whose body is ignored
    pub async fn execute_unit(&self, request: reqwest::RequestBuilder) -> Result<(), ClientError> {
        Self::send(request).await.map(drop)
    }

    async fn send(request: reqwest::RequestBuilder) -> Result<Response, ClientError> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            Ok(response)
        } else {
            let message = response.text().await.unwrap_or_else(|_| status.to_string());
            Err(ClientError::from_status(status, message))
        }
    }
}

/// Builder for PanelClient
#[derive(Default)]
pub struct PanelClientBuilder {
    base_url: Option<String>,
    user_agent: Option<String>,
}

impl PanelClientBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Build the client
    pub fn build(self) -> Result<PanelClient, ClientError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?;

        // Paths are appended verbatim, so no trailing slash
        let base_url = base_url.trim_end_matches('/').to_string();

        let user_agent = self
            .user_agent
            .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());
        let client = ClientBuilder::new().user_agent(user_agent).build()?;

        Ok(PanelClient { client, base_url })
    }
}
