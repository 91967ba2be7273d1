use shared::Icon;
use yew::prelude::*;

use crate::components::icon::IconGlyph;

pub const PLACEHOLDER_SENTENCE: &str = "This feature is not yet implemented. Check back soon!";

/// Text shown by the placeholder screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderCopy {
    pub heading: String,
    pub body: &'static str,
}

impl PlaceholderCopy {
    pub fn for_title(title: &str) -> Self {
        Self {
            heading: title.to_string(),
            body: PLACEHOLDER_SENTENCE,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ViewPlaceholderProps {
    pub title: String,
}

#[function_component(ViewPlaceholder)]
pub fn view_placeholder(props: &ViewPlaceholderProps) -> Html {
    let copy = PlaceholderCopy::for_title(&props.title);

    html! {
        <div class="empty-state">
            <IconGlyph icon={Icon::Construction} class={classes!("placeholder-icon")} />
            <h2>{ copy.heading }</h2>
            <p>{ copy.body }</p>
        </div>
    }
}
