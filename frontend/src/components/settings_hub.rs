use shared::{AppView, Icon, MenuEntry, NavigationRequest, SettingsView};
use yew::prelude::*;

use crate::components::icon::IconGlyph;

/// Destinations listed in the settings hub, in display order
pub fn settings_menu() -> Vec<MenuEntry> {
    vec![
        MenuEntry {
            icon: Icon::User,
            label: "Business Profile",
            description: "Name, address, opening hours and contact details",
            foreground: "text-blue-600",
            background: "bg-blue-100",
            request: NavigationRequest::SubView(SettingsView::Profile),
        },
        MenuEntry {
            icon: Icon::CreditCard,
            label: "Payments",
            description: "Payment methods, deposits and payouts",
            foreground: "text-green-600",
            background: "bg-green-100",
            request: NavigationRequest::SubView(SettingsView::Payments),
        },
        MenuEntry {
            icon: Icon::Palette,
            label: "Theme",
            description: "Colors and branding for your booking page",
            foreground: "text-purple-600",
            background: "bg-purple-100",
            request: NavigationRequest::SubView(SettingsView::Theme),
        },
        MenuEntry {
            icon: Icon::Boxes,
            label: "Resources",
            description: "Rooms, chairs and equipment that can be booked",
            foreground: "text-orange-600",
            background: "bg-orange-100",
            request: NavigationRequest::SubView(SettingsView::Resources),
        },
        MenuEntry {
            icon: Icon::Percent,
            label: "Discounts",
            description: "Promo codes, packages and loyalty rewards",
            foreground: "text-pink-600",
            background: "bg-pink-100",
            request: NavigationRequest::SubView(SettingsView::Discounts),
        },
        MenuEntry {
            icon: Icon::CalendarOff,
            label: "Time Blocks",
            description: "Holidays, breaks and other unavailable time",
            foreground: "text-red-600",
            background: "bg-red-100",
            request: NavigationRequest::SubView(SettingsView::Blocks),
        },
        MenuEntry {
            icon: Icon::ArrowLeft,
            label: "Back to Dashboard",
            description: "Return to the main overview",
            foreground: "text-gray-600",
            background: "bg-gray-100",
            request: NavigationRequest::TopLevel(AppView::Dashboard),
        },
    ]
}

/// Label of the hub entry leading to `view`
pub fn label_for(view: SettingsView) -> Option<&'static str> {
    settings_menu()
        .into_iter()
        .find(|entry| entry.request == NavigationRequest::SubView(view))
        .map(|entry| entry.label)
}

pub fn select_entry(
    entry: &MenuEntry,
    on_navigate: &Callback<String>,
    on_top_level_navigate: &Callback<AppView>,
) {
    tracing::debug!(entry = entry.id(), "Settings entry selected");
    entry.request.dispatch(
        |id| on_navigate.emit(id),
        |token| on_top_level_navigate.emit(token),
    );
}

#[derive(Properties, PartialEq)]
pub struct SettingsHubProps {
    /// Navigates to a settings sub-view by id
    pub on_navigate: Callback<String>,
    /// Navigates to another top-level section
    pub on_top_level_navigate: Callback<AppView>,
}

#[function_component(SettingsHub)]
pub fn settings_hub(props: &SettingsHubProps) -> Html {
    html! {
        <div class="settings-hub">
            { for settings_menu().into_iter().map(|entry| {
                let key = entry.id();
                let icon = entry.icon;
                let label = entry.label;
                let description = entry.description;
                let badge = classes!("settings-icon", entry.background);
                let color = classes!(entry.foreground);

                let on_navigate = props.on_navigate.clone();
                let on_top_level_navigate = props.on_top_level_navigate.clone();
                let onclick = Callback::from(move |_: MouseEvent| {
                    select_entry(&entry, &on_navigate, &on_top_level_navigate);
                });

                html! {
                    <button type="button" class="settings-item" key={key} {onclick}>
                        <div class={badge}>
                            <IconGlyph icon={icon} class={color} />
                        </div>
                        <div class="settings-text">
                            <div class="settings-label">{ label }</div>
                            <div class="settings-description">{ description }</div>
                        </div>
                    </button>
                }
            })}
        </div>
    }
}
