//! Light/dark switch

use crate::theme::{use_theme, use_theme_toggle};
use yew::prelude::*;

#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let theme = use_theme().theme;
    let toggle = use_theme_toggle();

    let label = if theme.is_dark() {
        "☀️ Light"
    } else {
        "🌙 Dark"
    };

    html! {
        <button
            class="absolute top-4 right-4 px-3 py-1 rounded bg-gray-700 text-white hover:bg-gray-600 transition-colors"
            onclick={toggle.reform(|_: MouseEvent| ())}
        >
            {label}
        </button>
    }
}
