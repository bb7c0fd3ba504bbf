//! Xray service status card

use crate::client::use_api;
use crate::services::StatusService;
use crate::state::ServerStatusState;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[function_component(StatusCard)]
pub fn status_card() -> Html {
    let api = use_api();
    let service = use_memo(api, |api| StatusService::new(api.api()));
    let state = use_reducer(ServerStatusState::default);

    {
        let dispatcher = state.dispatcher();
        let service = service.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                if let Err(err) = service.refresh(|action| dispatcher.dispatch(action)).await {
                    tracing::warn!(error = %err, "failed to load service status");
                }
            });
        });
    }

    let on_restart = {
        let dispatcher = state.dispatcher();
        let service = service.clone();
        Callback::from(move |_: MouseEvent| {
            let dispatcher = dispatcher.clone();
            let service = service.clone();
            spawn_local(async move {
                if let Err(err) = service.restart(|action| dispatcher.dispatch(action)).await {
                    tracing::warn!(error = %err, "failed to restart xray");
                }
            });
        })
    };

    let Some(status) = &state.status else {
        return html! {};
    };

    let (badge_class, badge_text) = if status.xray_online {
        (
            "inline-flex items-center px-2.5 py-0.5 rounded-full text-xs font-medium bg-green-100 text-green-800 dark:bg-green-900/30 dark:text-green-400",
            "Online",
        )
    } else {
        (
            "inline-flex items-center px-2.5 py-0.5 rounded-full text-xs font-medium bg-red-100 text-red-800 dark:bg-red-900/30 dark:text-red-400",
            "Offline",
        )
    };

    html! {
        <div class="mb-6 p-4 rounded-lg shadow bg-white dark:bg-gray-800 flex flex-wrap items-center gap-6">
            <div>
                <p class="text-sm text-gray-600 dark:text-gray-400">{"Xray"}</p>
                <span class={badge_class}>{badge_text}</span>
            </div>
            <div>
                <p class="text-sm text-gray-600 dark:text-gray-400">{"Users"}</p>
                <p class="font-semibold">{status.user_count.to_string()}</p>
            </div>
            <div>
                <p class="text-sm text-gray-600 dark:text-gray-400">{"Port"}</p>
                <p class="font-semibold">{status.port.to_string()}</p>
            </div>
            <div>
                <p class="text-sm text-gray-600 dark:text-gray-400">{"Protocol"}</p>
                <p class="font-semibold">{status.protocol.clone()}</p>
            </div>
            <button
                class="ml-auto px-3 py-1 bg-gray-700 hover:bg-gray-600 disabled:opacity-50 text-white rounded"
                onclick={on_restart}
                disabled={state.restarting}
            >
                {if state.restarting { "Restarting..." } else { "Restart Xray" }}
            </button>
        </div>
    }
}
