use std::rc::Rc;

use log::{error, info};

use softsell::config::{self, SiteConfig};
use softsell::{App, AppProps};

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    let site = match SiteConfig::load() {
        Ok(site) => site,
        Err(e) => {
            error!("Falling back to built-in site config: {}", e);
            SiteConfig::degraded()
        }
    };

    info!("Starting application with {} FAQ entries", site.faq.len());
    yew::Renderer::<App>::with_props(AppProps { config: Rc::new(site) }).render();
}
