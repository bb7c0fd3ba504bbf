//! User collection owned by the root view

use std::rc::Rc;
use xray_panel_http::User;
use yew::prelude::*;

/// The root view's users. `Loading` until the initial list arrives.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum UsersState {
    #[default]
    Loading,
    Loaded(Vec<User>),
}

impl UsersState {
    pub fn users(&self) -> Option<&[User]> {
        match self {
            Self::Loading => None,
            Self::Loaded(users) => Some(users),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

#[derive(Debug)]
pub enum UsersAction {
    /// Initial list fetched
    Loaded(Vec<User>),
    /// Created by the backend; appended in arrival order
    Added(User),
    /// Deleted on the backend
    Removed(String),
}

impl Reducible for UsersState {
    type Action = UsersAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            UsersAction::Loaded(users) => Rc::new(Self::Loaded(users)),
            UsersAction::Added(user) => self.patched(|users| users.push(user)),
            UsersAction::Removed(uuid) => self.patched(|users| users.retain(|u| u.uuid != uuid)),
        }
    }
}

impl UsersState {
    /// Nothing to patch before the list exists.
    fn patched(self: Rc<Self>, patch: impl FnOnce(&mut Vec<User>)) -> Rc<Self> {
        if let Self::Loaded(users) = &*self {
            let mut users = users.clone();
            patch(&mut users);
            return Rc::new(Self::Loaded(users));
        }
        self
    }
}
