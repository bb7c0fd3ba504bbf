//! Subscription documents panel

use super::copy_button::CopyButton;
use crate::client::use_api;
use crate::services::SubscriptionService;
use crate::state::SubscriptionState;
use wasm_bindgen_futures::spawn_local;
use xray_panel_http::SubscriptionFormat;
use yew::prelude::*;

#[function_component(SubscriptionPanel)]
pub fn subscription_panel() -> Html {
    let api = use_api();
    let service = use_memo(api, |api| SubscriptionService::new(api.api()));
    let state = use_reducer(SubscriptionState::default);

    let on_fetch = {
        let dispatcher = state.dispatcher();
        let service = service.clone();
        Callback::from(move |_: MouseEvent| {
            let dispatcher = dispatcher.clone();
            let service = service.clone();
            spawn_local(async move {
                // A failed step leaves the panel busy; nothing else to undo
                if let Err(err) = service.fetch_all(|action| dispatcher.dispatch(action)).await {
                    tracing::warn!(error = %err, "failed to fetch subscriptions");
                }
            });
        })
    };

    let document_view = |format: SubscriptionFormat, height: &'static str| {
        state.document(format).map_or_else(
            || html! {},
            |text| {
                html! {
                    <div class="mb-4">
                        <div class="font-semibold mb-1">{format.label()}</div>
                        <textarea
                            class={classes!("w-full", height, "border", "rounded", "p-2", "text-xs", "font-mono", "bg-gray-50", "dark:bg-gray-900")}
                            value={text.to_string()}
                            readonly=true
                        />
                        <CopyButton text={text.to_string()} class="mt-2" />
                    </div>
                }
            },
        )
    };

    html! {
        <div class="my-8 p-6 rounded-lg shadow bg-white dark:bg-gray-800">
            <h2 class="text-xl font-bold mb-4">{"Subscriptions"}</h2>
            <button
                class="px-4 py-2 bg-green-600 hover:bg-green-700 disabled:opacity-50 text-white rounded mb-4"
                onclick={on_fetch}
                disabled={state.busy}
            >
                {if state.busy { "Loading..." } else { "Fetch subscriptions" }}
            </button>
            {document_view(SubscriptionFormat::Clash, "h-32")}
            {document_view(SubscriptionFormat::V2ray, "h-20")}
        </div>
    }
}
