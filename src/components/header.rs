use yew::prelude::*;
use yew_router::prelude::*;

use crate::theme::Theme;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub brand_name: String,
    pub theme: Theme,
    pub on_toggle_theme: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let HeaderProps { brand_name, theme, on_toggle_theme } = props;

    let toggle = {
        let on_toggle_theme = on_toggle_theme.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle_theme.emit(());
        })
    };

    html! {
        <header class="top-nav">
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    { brand_name }
                </Link<Route>>
                <button
                    class="theme-toggle"
                    onclick={toggle}
                    title={if theme.is_dark() { "Switch to light mode" } else { "Switch to dark mode" }}
                >
                    { if theme.is_dark() { "☀️" } else { "🌙" } }
                </button>
            </div>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    width: 100%;
                    z-index: 10;
                    background: #fff;
                    box-shadow: 0 2px 6px rgba(0, 0, 0, 0.1);
                }
                .dark .top-nav {
                    background: #1f2937;
                }
                .nav-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 1rem 2rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }
                .nav-logo {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #2563eb;
                    text-decoration: none;
                }
                .theme-toggle {
                    padding: 0.5rem;
                    border: none;
                    border-radius: 50%;
                    background: #e5e7eb;
                    cursor: pointer;
                    font-size: 20px;
                }
                .dark .theme-toggle {
                    background: #374151;
                }
                "#}
            </style>
        </header>
    }
}
