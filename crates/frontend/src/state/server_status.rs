//! Backend service status shown in the status card

use std::rc::Rc;
use xray_panel_http::ServerStatus;
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq, Default)]
pub struct ServerStatusState {
    pub status: Option<ServerStatus>,
    pub restarting: bool,
}

#[derive(Debug)]
pub enum ServerStatusAction {
    Received(ServerStatus),
    RestartStarted,
    RestartFinished,
}

impl Reducible for ServerStatusState {
    type Action = ServerStatusAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ServerStatusAction::Received(status) => next.status = Some(status),
            ServerStatusAction::RestartStarted => next.restarting = true,
            ServerStatusAction::RestartFinished => next.restarting = false,
        }
        Rc::new(next)
    }
}
