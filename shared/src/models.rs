use serde::Serialize;

use crate::navigation::NavigationRequest;

/// Symbol shown next to a menu entry or suggestion chip.
///
/// The frontend decides how each icon is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    User,
    CreditCard,
    Palette,
    Boxes,
    Percent,
    CalendarOff,
    ArrowLeft,
    Sparkles,
    Clock,
    Bell,
    Chart,
    Construction,
}

impl Icon {
    pub fn name(&self) -> &'static str {
        match self {
            Icon::User => "user",
            Icon::CreditCard => "credit-card",
            Icon::Palette => "palette",
            Icon::Boxes => "boxes",
            Icon::Percent => "percent",
            Icon::CalendarOff => "calendar-off",
            Icon::ArrowLeft => "arrow-left",
            Icon::Sparkles => "sparkles",
            Icon::Clock => "clock",
            Icon::Bell => "bell",
            Icon::Chart => "chart",
            Icon::Construction => "construction",
        }
    }
}

/// One selectable row of the settings hub
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuEntry {
    pub icon: Icon,
    pub label: &'static str,
    pub description: &'static str,
    /// CSS classes for the icon color
    pub foreground: &'static str,
    /// CSS classes for the icon badge
    pub background: &'static str,
    pub request: NavigationRequest,
}

impl MenuEntry {
    /// Identifier of the destination, unique within the hub
    pub fn id(&self) -> &'static str {
        match self.request {
            NavigationRequest::SubView(view) => view.as_str(),
            NavigationRequest::TopLevel(token) => token.as_str(),
        }
    }
}

/// Example feature request shown as a chip
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuggestionEntry {
    pub text: &'static str,
    pub icon: Option<Icon>,
}

impl SuggestionEntry {
    pub const fn new(text: &'static str) -> Self {
        Self { text, icon: None }
    }

    pub const fn with_icon(text: &'static str, icon: Icon) -> Self {
        Self {
            text,
            icon: Some(icon),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::{AppView, SettingsView};

    #[test]
    fn test_icon_name_matches_serde() {
        for icon in [Icon::CreditCard, Icon::CalendarOff, Icon::ArrowLeft, Icon::User] {
            let json = serde_json::to_string(&icon).unwrap();
            assert_eq!(json, format!("\"{}\"", icon.name()));
        }
    }

    #[test]
    fn test_menu_entry_serialize() {
        let entry = MenuEntry {
            icon: Icon::ArrowLeft,
            label: "Back",
            description: "Return",
            foreground: "text-gray-600",
            background: "bg-gray-100",
            request: NavigationRequest::TopLevel(AppView::Dashboard),
        };
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["icon"], "arrow-left");
        assert_eq!(value["request"]["target"], "dashboard");
        assert_ne!(
            entry.request,
            NavigationRequest::SubView(SettingsView::Profile)
        );
    }

    #[test]
    fn test_menu_entry_id_follows_request() {
        let mut entry = MenuEntry {
            icon: Icon::Palette,
            label: "Theme",
            description: "Colors",
            foreground: "text-purple-600",
            background: "bg-purple-100",
            request: NavigationRequest::SubView(SettingsView::Theme),
        };
        assert_eq!(entry.id(), "theme");

        entry.request = NavigationRequest::TopLevel(AppView::Dashboard);
        assert_eq!(entry.id(), "dashboard");
    }

    #[test]
    fn test_suggestion_constructors() {
        assert_eq!(SuggestionEntry::new("a").icon, None);
        assert_eq!(
            SuggestionEntry::with_icon("b", Icon::Bell).icon,
            Some(Icon::Bell)
        );
    }
}
