use std::rc::Rc;

use log::{info, Level};
use yew::prelude::*;

mod config;
mod api {
    pub mod client;
    pub mod models;
}
mod components {
    pub mod feedback_form;
    pub mod loader;
    pub mod parallax;
    pub mod testimonials;
}
mod pages {
    pub mod landing;
}

use api::client::HttpApi;
use components::loader::Loader;
use config::SiteConfig;
use pages::landing::Landing;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub api: Rc<HttpApi>,
}

#[function_component]
pub fn App(props: &AppProps) -> Html {
    let loading_done = use_state(|| false);

    let on_loaded = {
        let loading_done = loading_done.clone();
        Callback::from(move |_| {
            info!("Splash finished");
            loading_done.set(true);
        })
    };

    html! {
        <div class={classes!("site", (*loading_done).then(|| "ready"))}>
            <Loader on_complete={on_loaded} />
            <Landing api={props.api.clone()} />
        </div>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    let config = SiteConfig::from_env();
    info!("Starting application against {}", config.backend_url());

    let api = Rc::new(HttpApi::new(config));
    yew::Renderer::<App>::with_props(AppProps { api }).render();
}
