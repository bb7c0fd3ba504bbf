//! Service status and restart

use crate::state::ServerStatusAction;
use std::rc::Rc;
use xray_panel_http::{ClientError, PanelApi};

#[derive(Clone)]
pub struct StatusService {
    api: Rc<dyn PanelApi>,
}

impl StatusService {
    pub fn new(api: Rc<dyn PanelApi>) -> Self {
        Self { api }
    }

    pub async fn refresh(&self, dispatch: impl Fn(ServerStatusAction)) -> Result<(), ClientError> {
        let status = self.api.status().await?;
        dispatch(ServerStatusAction::Received(status));
        Ok(())
    }

    /// Restart Xray and re-read the status once it is back.
    ///
    /// The restarting flag is cleared whether or not the restart succeeded.
    pub async fn restart(&self, dispatch: impl Fn(ServerStatusAction)) -> Result<(), ClientError> {
        dispatch(ServerStatusAction::RestartStarted);
        let result = self.api.restart_xray().await;
        dispatch(ServerStatusAction::RestartFinished);
        result?;
        self.refresh(dispatch).await
    }
}
