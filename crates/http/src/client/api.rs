//! Typed operations over the panel REST contract

use super::{error::ClientError, PanelClient};
use crate::types::{
    decode_text_body, CreateUserRequest, ServerStatus, SubscriptionFormat, User,
};
use async_trait::async_trait;
use reqwest::Method;
use tracing::debug;

/// Backend operations the panel depends on.
///
/// Futures are not `Send`: in the browser they run on the single UI thread.
#[async_trait(?Send)]
pub trait PanelApi {
    /// `GET /api/users`
    async fn list_users(&self) -> Result<Vec<User>, ClientError>;

    /// `POST /api/user`
    async fn create_user(&self, remark: &str) -> Result<User, ClientError>;

    /// `DELETE /api/user/{uuid}`; the response body is ignored
    async fn delete_user(&self, uuid: &str) -> Result<(), ClientError>;

    /// `GET /api/subscribe/{clash,v2ray}`
    async fn subscription(&self, format: SubscriptionFormat) -> Result<String, ClientError>;

    /// `GET /api/status`
    async fn status(&self) -> Result<ServerStatus, ClientError>;

    /// `POST /api/xray/restart`
    async fn restart_xray(&self) -> Result<(), ClientError>;
}

#[async_trait(?Send)]
impl PanelApi for PanelClient {
    async fn list_users(&self) -> Result<Vec<User>, ClientError> {
        debug!("listing users");
        self.execute(self.request(Method::GET, "/api/users")).await
    }

    async fn create_user(&self, remark: &str) -> Result<User, ClientError> {
        debug!(remark, "creating user");
        let body = CreateUserRequest {
            remark: remark.to_string(),
        };
        self.execute(self.request(Method::POST, "/api/user").json(&body))
            .await
    }

    async fn delete_user(&self, uuid: &str) -> Result<(), ClientError> {
        debug!(uuid, "deleting user");
        self.execute_unit(self.request(Method::DELETE, &format!("/api/user/{uuid}")))
            .await
    }

    async fn subscription(&self, format: SubscriptionFormat) -> Result<String, ClientError> {
        debug!(%format, "fetching subscription");
        let body = self
            .execute_text(self.request(Method::GET, format.path()))
            .await?;
        Ok(decode_text_body(body))
    }

    async fn status(&self) -> Result<ServerStatus, ClientError> {
        self.execute(self.request(Method::GET, "/api/status")).await
    }

    async fn restart_xray(&self) -> Result<(), ClientError> {
        debug!("restarting xray");
        self.execute_unit(self.request(Method::POST, "/api/xray/restart"))
            .await
    }
}
