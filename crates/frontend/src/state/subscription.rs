//! Subscription panel state

use std::rc::Rc;
use xray_panel_http::SubscriptionFormat;
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq, Default)]
pub struct SubscriptionState {
    clash: Option<String>,
    v2ray: Option<String>,
    pub busy: bool,
}

impl SubscriptionState {
    /// The stored document, hidden while empty.
    pub fn document(&self, format: SubscriptionFormat) -> Option<&str> {
        let document = match format {
            SubscriptionFormat::Clash => &self.clash,
            SubscriptionFormat::V2ray => &self.v2ray,
        };
        document.as_deref().filter(|text| !text.is_empty())
    }
}

#[derive(Debug)]
pub enum SubscriptionAction {
    Started,
    Received {
        format: SubscriptionFormat,
        document: String,
    },
    Finished,
}

impl Reducible for SubscriptionState {
    type Action = SubscriptionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            SubscriptionAction::Started => next.busy = true,
            SubscriptionAction::Received { format, document } => match format {
                SubscriptionFormat::Clash => next.clash = Some(document),
                SubscriptionFormat::V2ray => next.v2ray = Some(document),
            },
            SubscriptionAction::Finished => next.busy = false,
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn received(format: SubscriptionFormat, document: &str) -> SubscriptionAction {
        SubscriptionAction::Received {
            format,
            document: document.into(),
        }
    }

    #[test]
    fn documents_are_stored_independently() {
        let state = Rc::new(SubscriptionState::default())
            .reduce(SubscriptionAction::Started)
            .reduce(received(SubscriptionFormat::Clash, "proxies: []"));
        assert!(state.busy);
        assert_eq!(state.document(SubscriptionFormat::Clash), Some("proxies: []"));
        assert_eq!(state.document(SubscriptionFormat::V2ray), None);
    }

    #[test]
    fn refetch_keeps_old_documents_until_overwritten() {
        let state = Rc::new(SubscriptionState::default())
            .reduce(received(SubscriptionFormat::Clash, "old"))
            .reduce(SubscriptionAction::Finished)
            .reduce(SubscriptionAction::Started);
        assert_eq!(state.document(SubscriptionFormat::Clash), Some("old"));

        let state = state.reduce(received(SubscriptionFormat::Clash, "new"));
        assert_eq!(state.document(SubscriptionFormat::Clash), Some("new"));
    }

    #[test]
    fn empty_document_is_hidden() {
        let state = Rc::new(SubscriptionState::default())
            .reduce(received(SubscriptionFormat::V2ray, ""));
        assert_eq!(state.document(SubscriptionFormat::V2ray), None);
    }
}
