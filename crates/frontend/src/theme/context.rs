//! Theme context definition

use crate::config::PanelConfig;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

/// Theme state shared through context. Starts light on every page load.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct ThemeContext {
    pub theme: Theme,
}

pub enum ThemeAction {
    Toggle,
}

impl Reducible for ThemeContext {
    type Action = ThemeAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ThemeAction::Toggle => Rc::new(Self {
                theme: self.theme.toggle(),
            }),
        }
    }
}

/// Mirror the theme onto the document root's class list.
pub fn apply_document_theme(theme: Theme) {
    let Some(element) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
    else {
        return;
    };

    if let Ok(html_element) = element.dyn_into::<web_sys::HtmlElement>() {
        let class_list = html_element.class_list();
        let result = match theme {
            Theme::Dark => class_list.add_1(PanelConfig::DARK_CLASS),
            Theme::Light => class_list.remove_1(PanelConfig::DARK_CLASS),
        };
        if let Err(err) = result {
            tracing::debug!(?err, "failed to update document theme class");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_light() {
        assert_eq!(ThemeContext::default().theme, Theme::Light);
    }

    #[test]
    fn toggle_flips() {
        let ctx = Rc::new(ThemeContext::default()).reduce(ThemeAction::Toggle);
        assert!(ctx.theme.is_dark());
    }

    #[test]
    fn double_toggle_restores() {
        let start = Rc::new(ThemeContext::default());
        let end = start
            .clone()
            .reduce(ThemeAction::Toggle)
            .reduce(ThemeAction::Toggle);
        assert_eq!(end.theme, start.theme);
        assert_eq!(Theme::Dark.toggle().toggle(), Theme::Dark);
    }
}
