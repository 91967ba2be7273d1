use shared::Icon;
use yew::prelude::*;

pub fn glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::User => "👤",
        Icon::CreditCard => "💳",
        Icon::Palette => "🎨",
        Icon::Boxes => "📦",
        Icon::Percent => "%",
        Icon::CalendarOff => "🚫",
        Icon::ArrowLeft => "←",
        Icon::Sparkles => "✨",
        Icon::Clock => "⏰",
        Icon::Bell => "🔔",
        Icon::Chart => "📈",
        Icon::Construction => "🚧",
    }
}

#[derive(Properties, PartialEq)]
pub struct IconGlyphProps {
    pub icon: Icon,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(IconGlyph)]
pub fn icon_glyph(props: &IconGlyphProps) -> Html {
    html! {
        <span
            class={classes!("icon", format!("icon-{}", props.icon.name()), props.class.clone())}
            aria-hidden="true"
        >
            { glyph(props.icon) }
        </span>
    }
}
