//! Reusable UI components

mod copy_button;
mod qr_code;
mod spinner;
mod status_card;
mod subscription_panel;
mod theme_toggle;
mod user_card;
mod user_form;
mod user_list;

pub use copy_button::CopyButton;
pub use qr_code::{render_svg, ConnectionQr};
pub use spinner::LoadingSpinner as Spinner;
pub use status_card::StatusCard;
pub use subscription_panel::SubscriptionPanel;
pub use theme_toggle::ThemeToggle;
pub use user_card::UserCard;
pub use user_form::UserForm;
pub use user_list::UserList;
