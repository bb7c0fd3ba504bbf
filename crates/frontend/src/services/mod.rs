//! Service modules for API and browser interactions

pub mod clipboard;
pub mod status;
pub mod subscription;
pub mod user;

#[cfg(test)]
pub(crate) mod mock;

pub use clipboard::copy_to_clipboard;
pub use status::StatusService;
pub use subscription::SubscriptionService;
pub use user::UserService;
