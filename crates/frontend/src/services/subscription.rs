//! Subscription document service

use crate::state::SubscriptionAction;
use std::rc::Rc;
use xray_panel_http::{ClientError, PanelApi, SubscriptionFormat};

#[derive(Clone)]
pub struct SubscriptionService {
    api: Rc<dyn PanelApi>,
}

impl SubscriptionService {
    pub fn new(api: Rc<dyn PanelApi>) -> Self {
        Self { api }
    }

    /// Fetch the Clash document, then the V2Ray document.
    ///
    /// The V2Ray request is only issued once the Clash request has
    /// resolved. A failure at either step returns early without
    /// `Finished`, so the busy flag stays set.
    pub async fn fetch_all(&self, dispatch: impl Fn(SubscriptionAction)) -> Result<(), ClientError> {
        dispatch(SubscriptionAction::Started);

        let clash = self.api.subscription(SubscriptionFormat::Clash).await?;
        dispatch(SubscriptionAction::Received {
            format: SubscriptionFormat::Clash,
            document: clash,
        });

        let v2ray = self.api.subscription(SubscriptionFormat::V2ray).await?;
        dispatch(SubscriptionAction::Received {
            format: SubscriptionFormat::V2ray,
            document: v2ray,
        });

        dispatch(SubscriptionAction::Finished);
        Ok(())
    }
}
