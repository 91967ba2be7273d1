mod components;
mod config;
mod pages;
mod router;
mod services;

use yew::prelude::*;
use yew_router::BrowserRouter;

use crate::config::ConsoleConfig;
use crate::router::{switch, Route};
use crate::services::notifier::NotifierHandle;

#[derive(Properties, PartialEq)]
struct AppProps {
    config: ConsoleConfig,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    html! {
        <BrowserRouter>
            <ContextProvider<NotifierHandle> context={NotifierHandle::default()}>
                <div id="app">
                    <components::header::Header title={props.config.business_name.clone()} />
                    <yew_router::Switch<Route> render={switch} />
                </div>
            </ContextProvider<NotifierHandle>>
        </BrowserRouter>
    }
}

fn main() {
    let (config, load_error) = match ConsoleConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (ConsoleConfig::default(), Some(e)),
    };

    tracing_wasm::set_as_global_default_with_config(
        tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(config.max_level())
            .build(),
    );

    if let Some(e) = load_error {
        tracing::warn!("Failed to load console config, using defaults: {}", e);
    }

    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
