//! One card per user

use super::copy_button::CopyButton;
use super::qr_code::ConnectionQr;
use crate::config::PanelConfig;
use xray_panel_http::User;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct UserCardProps {
    pub user: User,
    pub on_delete: Callback<String>,
}

#[function_component(UserCard)]
pub fn user_card(props: &UserCardProps) -> Html {
    let user = &props.user;

    let on_delete = {
        let uuid = user.uuid.clone();
        let on_delete = props.on_delete.clone();
        Callback::from(move |_: MouseEvent| on_delete.emit(uuid.clone()))
    };

    html! {
        <div class="p-6 rounded-lg shadow bg-white dark:bg-gray-800 flex flex-col md:flex-row items-center justify-between">
            <div>
                <div class="font-semibold">{format!("Remark: {}", user.remark)}</div>
                <div class="text-sm text-gray-500 dark:text-gray-400 font-mono">{format!("UUID: {}", user.uuid)}</div>
                <div class="mt-2 flex gap-2">
                    <CopyButton text={user.vless.clone()} label="Copy link" />
                    <button
                        class="px-3 py-1 bg-red-500 hover:bg-red-600 text-white rounded"
                        onclick={on_delete}
                    >
                        {"Delete"}
                    </button>
                </div>
            </div>
            <div class="mt-4 md:mt-0">
                <ConnectionQr value={user.vless.clone()} size={PanelConfig::QR_CODE_SIZE} />
            </div>
        </div>
    }
}
