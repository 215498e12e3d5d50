use dioxus::prelude::*;

mod api;
mod config;
mod format_helpers;
mod remote;
mod routes;
#[cfg(test)]
mod test_support;

use api::ApiClient;
use routes::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

/// Composition root: provides the API client and identity settings to every
/// routed view, then hands off to the router.
#[component]
fn App() -> Element {
    let config = config::load_config();

    use_context_provider(|| ApiClient::new(config.base_url()));
    use_context_provider(|| config.identity.clone());

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}
