use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// View Tokens
// ============================================================================

/// Top-level section of the console, owned by the host shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppView {
    Dashboard,
    Settings,
}

impl AppView {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppView::Dashboard => "dashboard",
            AppView::Settings => "settings",
        }
    }
}

impl fmt::Display for AppView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppView {
    type Err = UnknownViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dashboard" => Ok(AppView::Dashboard),
            "settings" => Ok(AppView::Settings),
            other => Err(UnknownViewError::TopLevel(other.to_string())),
        }
    }
}

/// Screen inside the settings section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SettingsView {
    Profile,
    Payments,
    Theme,
    Resources,
    Discounts,
    Blocks,
}

impl SettingsView {
    pub const ALL: [SettingsView; 6] = [
        SettingsView::Profile,
        SettingsView::Payments,
        SettingsView::Theme,
        SettingsView::Resources,
        SettingsView::Discounts,
        SettingsView::Blocks,
    ];

    /// Identifier used in sub-view navigation and in the URL
    pub fn as_str(&self) -> &'static str {
        match self {
            SettingsView::Profile => "profile",
            SettingsView::Payments => "payments",
            SettingsView::Theme => "theme",
            SettingsView::Resources => "resources",
            SettingsView::Discounts => "discounts",
            SettingsView::Blocks => "blocks",
        }
    }
}

impl fmt::Display for SettingsView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SettingsView {
    type Err = UnknownViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SettingsView::ALL
            .into_iter()
            .find(|view| view.as_str() == s)
            .ok_or_else(|| UnknownViewError::SubView(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnknownViewError {
    #[error("unknown settings view: {0}")]
    SubView(String),
    #[error("unknown application view: {0}")]
    TopLevel(String),
}

// ============================================================================
// Navigation Requests
// ============================================================================

/// Where selecting a menu entry should take the user.
///
/// A request targets either a settings sub-view or a top-level section,
/// never both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "target", rename_all = "snake_case")]
pub enum NavigationRequest {
    SubView(SettingsView),
    TopLevel(AppView),
}

impl NavigationRequest {
    /// Hands the request to the matching navigator. Exactly one of the two
    /// closures runs, exactly once.
    pub fn dispatch<S, T>(&self, sub_view: S, top_level: T)
    where
        S: FnOnce(String),
        T: FnOnce(AppView),
    {
        match self {
            NavigationRequest::SubView(view) => sub_view(view.as_str().to_string()),
            NavigationRequest::TopLevel(token) => top_level(*token),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_settings_view_ids_parse_back() {
        for view in SettingsView::ALL {
            assert_eq!(view.as_str().parse::<SettingsView>(), Ok(view));
        }
    }

    #[test]
    fn test_unknown_settings_view() {
        let err = "billing".parse::<SettingsView>().unwrap_err();
        assert_eq!(err, UnknownViewError::SubView("billing".to_string()));
        assert_eq!(err.to_string(), "unknown settings view: billing");
    }

    #[test]
    fn test_app_view_token() {
        assert_eq!(AppView::Dashboard.to_string(), "dashboard");
        assert_eq!("settings".parse::<AppView>(), Ok(AppView::Settings));
        assert!("Dashboard".parse::<AppView>().is_err());
    }

    #[test]
    fn test_dispatch_sub_view() {
        let sub_calls = RefCell::new(Vec::new());
        let top_calls = RefCell::new(Vec::new());

        NavigationRequest::SubView(SettingsView::Theme).dispatch(
            |id| sub_calls.borrow_mut().push(id),
            |token| top_calls.borrow_mut().push(token),
        );

        assert_eq!(*sub_calls.borrow(), vec!["theme".to_string()]);
        assert!(top_calls.borrow().is_empty());
    }

    #[test]
    fn test_dispatch_top_level() {
        let sub_calls = RefCell::new(Vec::new());
        let top_calls = RefCell::new(Vec::new());

        NavigationRequest::TopLevel(AppView::Dashboard).dispatch(
            |id| sub_calls.borrow_mut().push(id),
            |token| top_calls.borrow_mut().push(token),
        );

        assert!(sub_calls.borrow().is_empty());
        assert_eq!(*top_calls.borrow(), vec![AppView::Dashboard]);
    }

    #[test]
    fn test_request_serde() {
        let request = NavigationRequest::TopLevel(AppView::Dashboard);
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"kind":"top_level","target":"dashboard"}"#);

        let parsed: NavigationRequest =
            serde_json::from_str(r#"{"kind":"sub_view","target":"payments"}"#).unwrap();
        assert_eq!(parsed, NavigationRequest::SubView(SettingsView::Payments));
    }
}
