use async_trait::async_trait;
use mockall::mock;
use std::cell::RefCell;
use std::rc::Rc;
use xray_panel_http::{ClientError, PanelApi, ServerStatus, SubscriptionFormat, User};
use yew::functional::Reducible;

mock! {
    pub PanelApi {}

    #[async_trait(?Send)]
    impl PanelApi for PanelApi {
        async fn list_users(&self) -> Result<Vec<User>, ClientError>;
        async fn create_user(&self, remark: &str) -> Result<User, ClientError>;
        async fn delete_user(&self, uuid: &str) -> Result<(), ClientError>;
        async fn subscription(&self, format: SubscriptionFormat) -> Result<String, ClientError>;
        async fn status(&self) -> Result<ServerStatus, ClientError>;
        async fn restart_xray(&self) -> Result<(), ClientError>;
    }
}

pub fn user(uuid: &str, remark: &str) -> User {
    User {
        uuid: uuid.into(),
        remark: remark.into(),
        vless: format!("vless://{uuid}"),
    }
}

pub fn server_error() -> ClientError {
    ClientError::ServerError {
        status: 500,
        message: "Internal Server Error".into(),
    }
}

/// Folds dispatched actions into a reducer state, like `use_reducer`.
pub struct Store<S: Reducible>(RefCell<Rc<S>>);

impl<S: Reducible> Store<S> {
    pub fn new(state: S) -> Self {
        Self(RefCell::new(Rc::new(state)))
    }

    pub fn dispatch(&self, action: S::Action) {
        let current = self.0.borrow().clone();
        self.0.replace(current.reduce(action));
    }

    pub fn get(&self) -> Rc<S> {
        self.0.borrow().clone()
    }
}
