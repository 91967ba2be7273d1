use shared::SettingsView;
use yew::prelude::*;

use crate::components::settings_hub::label_for;
use crate::components::view_placeholder::ViewPlaceholder;
use crate::pages::not_found::NotFound;

#[derive(Properties, PartialEq)]
pub struct SettingsViewPageProps {
    /// Sub-view id taken from the URL
    pub view: String,
}

#[function_component(SettingsViewPage)]
pub fn settings_view_page(props: &SettingsViewPageProps) -> Html {
    match props.view.parse::<SettingsView>() {
        Ok(view) => {
            let title = label_for(view).unwrap_or(view.as_str()).to_string();
            html! {
                <div class="container">
                    <ViewPlaceholder {title} />
                </div>
            }
        }
        Err(e) => {
            tracing::warn!("{}", e);
            html! { <NotFound missing={props.view.clone()} /> }
        }
    }
}
