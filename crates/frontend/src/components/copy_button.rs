use crate::services::copy_to_clipboard;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CopyButtonProps {
    /// Text placed on the clipboard when clicked
    pub text: AttrValue,
    #[prop_or(AttrValue::Static("Copy"))]
    pub label: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(CopyButton)]
pub fn copy_button(props: &CopyButtonProps) -> Html {
    let onclick = {
        let text = props.text.clone();
        Callback::from(move |_: MouseEvent| copy_to_clipboard(&text))
    };

    html! {
        <button
            type="button"
            class={classes!("px-3", "py-1", "bg-blue-500", "hover:bg-blue-600", "text-white", "rounded", props.class.clone())}
            title="Copy to clipboard"
            {onclick}
        >
            {props.label.clone()}
        </button>
    }
}
