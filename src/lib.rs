use std::rc::Rc;

use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod config;
pub mod contact;
pub mod faq;
pub mod theme;

pub mod components {
    pub mod chat_widget;
    pub mod contact_form;
    pub mod header;
}
pub mod pages {
    pub mod landing;
}

use components::{chat_widget::ChatWidget, header::Header};
use config::SiteConfig;
use faq::FaqTable;
use pages::landing::Landing;
use theme::{apply_document_theme, ThemeAction, ThemeState};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! {
                <div class="not-found">
                    <h1>{"Page not found"}</h1>
                    <Link<Route> to={Route::Home}>{"Back to home"}</Link<Route>>
                </div>
            }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: Rc<SiteConfig>,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let theme = use_reducer(ThemeState::default);
    let faq_table = use_memo(|config| config.faq_table(), props.config.clone());

    use_effect_with_deps(
        |theme| {
            apply_document_theme(*theme);
            || ()
        },
        theme.theme,
    );

    let toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_| {
            info!("Switching theme from {:?}", theme.theme);
            theme.dispatch(ThemeAction::Toggle);
        })
    };

    html! {
        <ContextProvider<Rc<SiteConfig>> context={props.config.clone()}>
            <ContextProvider<Rc<FaqTable>> context={faq_table}>
                <BrowserRouter>
                    <div class="app">
                        <Header
                            brand_name={props.config.brand_name.clone()}
                            theme={theme.theme}
                            on_toggle_theme={toggle_theme}
                        />
                        <Switch<Route> render={switch} />
                        <ChatWidget title={props.config.support_title.clone()} />
                    </div>
                </BrowserRouter>
            </ContextProvider<Rc<FaqTable>>>
        </ContextProvider<Rc<SiteConfig>>>
    }
}
