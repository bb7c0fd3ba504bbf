//! User management service

use crate::state::{UserFormAction, UsersAction};
use std::rc::Rc;
use tracing::warn;
use xray_panel_http::{ClientError, PanelApi, User};

/// Add, list and remove users, reporting state changes through reducer
/// actions.
#[derive(Clone)]
pub struct UserService {
    api: Rc<dyn PanelApi>,
}

impl UserService {
    pub fn new(api: Rc<dyn PanelApi>) -> Self {
        Self { api }
    }

    /// Fetch the full collection for the root view
    pub async fn load_users(&self, dispatch: impl Fn(UsersAction)) -> Result<(), ClientError> {
        let users = self.api.list_users().await?;
        dispatch(UsersAction::Loaded(users));
        Ok(())
    }

    /// Submit the add-user form.
    ///
    /// Every failure collapses into the form's single error message.
    pub async fn create_user(
        &self,
        remark: String,
        dispatch: impl Fn(UserFormAction),
        on_created: impl Fn(User),
    ) {
        dispatch(UserFormAction::Submitting);
        match self.api.create_user(&remark).await {
            Ok(user) => {
                on_created(user);
                dispatch(UserFormAction::Succeeded);
            }
            Err(err) => {
                warn!(error = %err, %remark, "failed to create user");
                dispatch(UserFormAction::Failed);
            }
        }
    }

    /// Delete a user; the row is only removed once the backend confirms
    pub async fn delete_user(
        &self,
        uuid: String,
        dispatch: impl Fn(UsersAction),
    ) -> Result<(), ClientError> {
        self.api.delete_user(&uuid).await?;
        dispatch(UsersAction::Removed(uuid));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::mock::{server_error, user, MockPanelApi, Store};
    use crate::state::{UserFormState, UsersState};

    fn service(api: MockPanelApi) -> UserService {
        UserService::new(Rc::new(api))
    }

    #[tokio::test]
    async fn initial_load_shows_users() {
        let mut api = MockPanelApi::new();
        api.expect_list_users()
            .times(1)
            .returning(|| Ok(vec![user("a1", "alice")]));

        let users = Store::new(UsersState::default());
        service(api)
            .load_users(|action| users.dispatch(action))
            .await
            .unwrap();

        let state = users.get();
        assert!(!state.is_loading());
        let listed = state.users().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].remark, "alice");
        assert_eq!(listed[0].uuid, "a1");
        assert_eq!(listed[0].vless, "vless://a1");
    }

    #[tokio::test]
    async fn failed_load_keeps_placeholder() {
        let mut api = MockPanelApi::new();
        api.expect_list_users().returning(|| Err(server_error()));

        let users = Store::new(UsersState::default());
        let result = service(api).load_users(|action| users.dispatch(action)).await;

        assert!(result.is_err());
        assert!(users.get().is_loading());
    }

    #[tokio::test]
    async fn create_issues_one_request_and_appends_once() {
        let mut api = MockPanelApi::new();
        api.expect_create_user()
            .withf(|remark| remark == "bob")
            .times(1)
            .returning(|_| Ok(user("b2", "bob")));

        let users = Store::new(UsersState::Loaded(vec![user("a1", "alice")]));
        let form = Store::new(UserFormState::default());
        form.dispatch(UserFormAction::Edit("bob".into()));

        service(api)
            .create_user(
                form.get().remark.clone(),
                |action| form.dispatch(action),
                |created| users.dispatch(UsersAction::Added(created)),
            )
            .await;

        assert_eq!(
            users.get().users().unwrap(),
            &[user("a1", "alice"), user("b2", "bob")][..]
        );
        let form = form.get();
        assert_eq!(form.remark, "");
        assert!(!form.busy);
        assert_eq!(form.error, None);
    }

    #[tokio::test]
    async fn create_failure_shows_fixed_message() {
        let mut api = MockPanelApi::new();
        api.expect_create_user()
            .times(1)
            .returning(|_| Err(ClientError::Validation("remark".into())));

        let users = Store::new(UsersState::Loaded(vec![]));
        let form = Store::new(UserFormState::default());
        form.dispatch(UserFormAction::Edit("bob".into()));

        service(api)
            .create_user(
                "bob".into(),
                |action| form.dispatch(action),
                |created| users.dispatch(UsersAction::Added(created)),
            )
            .await;

        assert_eq!(users.get().users().map(<[User]>::len), Some(0));
        let form = form.get();
        assert_eq!(form.error, Some(crate::config::PanelConfig::ADD_USER_ERROR));
        assert_eq!(form.remark, "bob");
        assert!(!form.busy);
    }

    #[tokio::test]
    async fn delete_removes_after_success() {
        let mut api = MockPanelApi::new();
        api.expect_delete_user()
            .withf(|uuid| uuid == "a1")
            .times(1)
            .returning(|_| Ok(()));

        let users = Store::new(UsersState::Loaded(vec![user("a1", "alice"), user("b2", "bob")]));
        service(api)
            .delete_user("a1".into(), |action| users.dispatch(action))
            .await
            .unwrap();

        assert_eq!(users.get().users().unwrap(), &[user("b2", "bob")][..]);
    }

    #[tokio::test]
    async fn delete_failure_keeps_row() {
        let mut api = MockPanelApi::new();
        api.expect_delete_user()
            .times(1)
            .returning(|_| Err(server_error()));

        let users = Store::new(UsersState::Loaded(vec![user("a1", "alice")]));
        let result = service(api)
            .delete_user("a1".into(), |action| users.dispatch(action))
            .await;

        assert!(result.is_err());
        assert_eq!(users.get().users().unwrap(), &[user("a1", "alice")][..]);
    }
}
