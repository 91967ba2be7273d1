use yew::prelude::*;

use crate::components::suggestion_strip::SuggestionStrip;

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    html! {
        <div class="container">
            <h2>{ "Dashboard" }</h2>
            <p>{ "Here's what's happening at your studio today." }</p>
            <h3>{ "Ideas for your console" }</h3>
            <SuggestionStrip />
        </div>
    }
}
