use crate::client::{use_api, ApiProvider};
use crate::components::{
    Spinner, StatusCard, SubscriptionPanel, ThemeToggle, UserForm, UserList,
};
use crate::services::UserService;
use crate::state::{UsersAction, UsersState};
use crate::theme::ThemeProvider;
use wasm_bindgen_futures::spawn_local;
use xray_panel_http::User;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <ThemeProvider>
            <ApiProvider>
                <AppContent />
            </ApiProvider>
        </ThemeProvider>
    }
}

/// Root view: owns the user collection and patches it after each
/// successful add or delete instead of re-fetching.
#[function_component(AppContent)]
fn app_content() -> Html {
    let api = use_api();
    let service = use_memo(api, |api| UserService::new(api.api()));
    let users = use_reducer(UsersState::default);

    // Initial load. A failure leaves the loading placeholder up.
    {
        let dispatcher = users.dispatcher();
        let service = service.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                if let Err(err) = service.load_users(|action| dispatcher.dispatch(action)).await {
                    tracing::warn!(error = %err, "failed to load users");
                }
            });
        });
    }

    let on_created = {
        let dispatcher = users.dispatcher();
        Callback::from(move |user: User| dispatcher.dispatch(UsersAction::Added(user)))
    };

    let on_delete = {
        let dispatcher = users.dispatcher();
        let service = service.clone();
        Callback::from(move |uuid: String| {
            let dispatcher = dispatcher.clone();
            let service = service.clone();
            spawn_local(async move {
                // The row stays when the backend refuses
                if let Err(err) = service
                    .delete_user(uuid.clone(), |action| dispatcher.dispatch(action))
                    .await
                {
                    tracing::warn!(error = %err, %uuid, "failed to delete user");
                }
            });
        })
    };

    let Some(list) = users.users() else {
        return html! { <Spinner text="Loading..." /> };
    };

    html! {
        <div class="min-h-screen bg-gray-50 dark:bg-gray-900 text-gray-900 dark:text-gray-100 relative">
            <ThemeToggle />
            <div class="max-w-3xl mx-auto py-8 px-4">
                <h1 class="text-3xl font-bold mb-6">{"Xray User Management"}</h1>
                <StatusCard />
                <UserForm {on_created} />
                <SubscriptionPanel />
                <UserList users={list.to_vec()} {on_delete} />
            </div>
        </div>
    }
}
