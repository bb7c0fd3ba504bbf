//! Theme provider component

use super::context::{apply_document_theme, ThemeContext};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct ThemeProviderProps {
    pub children: Children,
}

#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let theme = use_reducer(ThemeContext::default);

    // Runs on mount as well, so the document always matches the state
    use_effect_with(theme.theme, |theme| apply_document_theme(*theme));

    html! {
        <ContextProvider<UseReducerHandle<ThemeContext>> context={theme}>
            { props.children.clone() }
        </ContextProvider<UseReducerHandle<ThemeContext>>>
    }
}
