//! Dark/light theme flag. Not persisted; every page load starts light.

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
    pub fn toggle(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct ThemeState {
    pub theme: Theme,
}

pub enum ThemeAction {
    Toggle,
}

impl Reducible for ThemeState {
    type Action = ThemeAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ThemeAction::Toggle => Rc::new(Self {
                theme: self.theme.toggle(),
            }),
        }
    }
}

/// Mirrors the theme onto the `dark` class of the root element.
pub fn apply_document_theme(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
    else {
        return;
    };
    if let Ok(html_element) = root.dyn_into::<web_sys::HtmlElement>() {
        let class_list = html_element.class_list();
        let _ = if theme.is_dark() {
            class_list.add_1("dark")
        } else {
            class_list.remove_1("dark")
        };
    }
}
