//! Client configuration and initialization

use crate::config::PanelConfig;
use std::rc::Rc;
use web_sys::window;
use xray_panel_http::{ClientError, PanelApi, PanelClient};
use yew::prelude::*;

/// Get the base URL for API calls
fn get_base_url() -> String {
    if let Some(window) = window() {
        if let Ok(origin) = window.location().origin() {
            return origin;
        }
    }

    // Default to relative URLs
    String::new()
}

/// Build the client for the backend serving this page
pub fn create_client() -> Result<PanelClient, ClientError> {
    PanelClient::builder()
        .base_url(get_base_url())
        .user_agent(PanelConfig::USER_AGENT)
        .build()
}

/// Backend handle shared with every component through context
#[derive(Clone)]
pub struct ApiContext {
    api: Rc<dyn PanelApi>,
}

impl ApiContext {
    pub fn new(api: Rc<dyn PanelApi>) -> Self {
        Self { api }
    }

    pub fn api(&self) -> Rc<dyn PanelApi> {
        self.api.clone()
    }
}

impl PartialEq for ApiContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.api, &other.api)
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct ApiProviderProps {
    pub children: Children,
}

#[function_component(ApiProvider)]
pub fn api_provider(props: &ApiProviderProps) -> Html {
    let context = use_memo((), |_| {
        create_client().map(|client| ApiContext::new(Rc::new(client)))
    });

    match &*context {
        Ok(context) => html! {
            <ContextProvider<ApiContext> context={context.clone()}>
                { props.children.clone() }
            </ContextProvider<ApiContext>>
        },
        Err(err) => {
            tracing::error!(error = %err, "failed to build API client");
            html! {
                <div class="p-8 text-center text-red-600 dark:text-red-400">
                    {"Unable to reach the panel API"}
                </div>
            }
        }
    }
}

/// Hook to access the backend client
#[hook]
pub fn use_api() -> ApiContext {
    use_context::<ApiContext>()
        .expect("API context not found. Make sure to wrap your app with ApiProvider")
}
