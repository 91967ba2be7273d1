use shared::AppView;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::settings_hub::SettingsHub;
use crate::router::Route;

#[function_component(Settings)]
pub fn settings() -> Html {
    let navigator = use_navigator();

    let on_navigate = {
        let navigator = navigator.clone();
        Callback::from(move |view: String| match &navigator {
            Some(navigator) => navigator.push(&Route::SettingsSubView { view }),
            None => tracing::error!("No router available for settings view {}", view),
        })
    };

    let on_top_level_navigate = Callback::from(move |token: AppView| match &navigator {
        Some(navigator) => navigator.push(&Route::from(token)),
        None => tracing::error!("No router available for {}", token),
    });

    html! {
        <div class="container">
            <h2>{ "Settings" }</h2>
            <p>{ "Configure your business and console preferences." }</p>
            <SettingsHub {on_navigate} {on_top_level_navigate} />
        </div>
    }
}
