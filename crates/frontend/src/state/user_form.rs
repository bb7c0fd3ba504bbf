//! Add-user form state

use crate::config::PanelConfig;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq, Default)]
pub struct UserFormState {
    pub remark: String,
    pub busy: bool,
    pub error: Option<&'static str>,
}

impl UserFormState {
    /// Submission is disabled while the remark is empty or a request is out.
    pub fn can_submit(&self) -> bool {
        !self.remark.is_empty() && !self.busy
    }
}

#[derive(Debug)]
pub enum UserFormAction {
    Edit(String),
    Submitting,
    Succeeded,
    Failed,
}

impl Reducible for UserFormState {
    type Action = UserFormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            UserFormAction::Edit(remark) => next.remark = remark,
            UserFormAction::Submitting => {
                next.busy = true;
                next.error = None;
            }
            UserFormAction::Succeeded => {
                next.busy = false;
                next.remark.clear();
            }
            UserFormAction::Failed => {
                next.busy = false;
                next.error = Some(PanelConfig::ADD_USER_ERROR);
            }
        }
        Rc::new(next)
    }
}
