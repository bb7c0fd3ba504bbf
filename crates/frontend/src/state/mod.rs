//! Reducer state for the panel's views

pub mod server_status;
pub mod subscription;
pub mod user_form;
pub mod users;

pub use server_status::{ServerStatusAction, ServerStatusState};
pub use subscription::{SubscriptionAction, SubscriptionState};
pub use user_form::{UserFormAction, UserFormState};
pub use users::{UsersAction, UsersState};
