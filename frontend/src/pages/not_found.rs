use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

pub fn not_found_message(missing: Option<&str>) -> String {
    match missing {
        Some(view) => format!("There is no settings page called \"{}\".", view),
        None => "The page you're looking for doesn't exist.".to_string(),
    }
}

#[derive(Properties, PartialEq)]
pub struct NotFoundProps {
    /// Settings sub-view id that did not match any screen
    #[prop_or_default]
    pub missing: Option<String>,
}

#[function_component(NotFound)]
pub fn not_found(props: &NotFoundProps) -> Html {
    let (back_to, back_label) = if props.missing.is_some() {
        (Route::Settings, "Back to Settings")
    } else {
        (Route::Dashboard, "Back to Dashboard")
    };

    html! {
        <div class="container">
            <div class="empty-state">
                <h2>{ "404 - Page Not Found" }</h2>
                <p>{ not_found_message(props.missing.as_deref()) }</p>
                <Link<Route> to={back_to}>
                    <button class="btn btn-primary">{ back_label }</button>
                </Link<Route>>
            </div>
        </div>
    }
}
