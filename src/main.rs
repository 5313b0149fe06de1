//! Comic Store Admin Frontend Entry Point

mod app;
mod components;
mod context;
mod logger;
mod store;

use app::App;
use comic_admin_core::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_env();
    logger::init(config.log_level);
    log::info!("comic admin starting against {}", config.api_base_url);

    mount_to_body(move || view! { <App config=config /> });
}
