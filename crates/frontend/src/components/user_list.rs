//! User list view component

use super::user_card::UserCard;
use xray_panel_http::User;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct UserListProps {
    pub users: Vec<User>,
    pub on_delete: Callback<String>,
}

#[function_component(UserList)]
pub fn user_list(props: &UserListProps) -> Html {
    html! {
        <div class="grid gap-6 mt-8">
            {for props.users.iter().map(|user| html! {
                <UserCard
                    key={user.uuid.clone()}
                    user={user.clone()}
                    on_delete={props.on_delete.clone()}
                />
            })}
        </div>
    }
}
