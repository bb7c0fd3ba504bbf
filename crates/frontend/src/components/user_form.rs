//! Add-user form

use crate::client::use_api;
use crate::services::UserService;
use crate::state::{UserFormAction, UserFormState};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use xray_panel_http::User;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct UserFormProps {
    /// Receives each user the backend creates
    pub on_created: Callback<User>,
}

#[function_component(UserForm)]
pub fn user_form(props: &UserFormProps) -> Html {
    let api = use_api();
    let service = use_memo(api, |api| UserService::new(api.api()));
    let state = use_reducer(UserFormState::default);

    let on_input = {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            dispatcher.dispatch(UserFormAction::Edit(input.value()));
        })
    };

    let on_submit = {
        let state = state.clone();
        let service = service.clone();
        let on_created = props.on_created.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !state.can_submit() {
                return;
            }

            let remark = state.remark.clone();
            let dispatcher = state.dispatcher();
            let service = service.clone();
            let on_created = on_created.clone();
            spawn_local(async move {
                service
                    .create_user(
                        remark,
                        |action| dispatcher.dispatch(action),
                        |user| on_created.emit(user),
                    )
                    .await;
            });
        })
    };

    html! {
        <form class="flex flex-wrap items-center gap-2 mb-6" onsubmit={on_submit}>
            <input
                type="text"
                class="border border-gray-300 dark:border-gray-600 bg-white dark:bg-gray-800 px-3 py-2 rounded w-64"
                placeholder="Remark (e.g. user name)"
                value={state.remark.clone()}
                oninput={on_input}
                required=true
            />
            <button
                type="submit"
                class="px-4 py-2 bg-blue-600 hover:bg-blue-700 disabled:opacity-50 text-white rounded"
                disabled={!state.can_submit()}
            >
                {if state.busy { "Adding..." } else { "Add user" }}
            </button>
            if let Some(error) = state.error {
                <span class="text-red-500 ml-2">{error}</span>
            }
        </form>
    }
}
