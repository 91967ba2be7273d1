//! Types shared between the console shell and its settings components.

pub mod models;
pub mod navigation;

pub use models::{Icon, MenuEntry, SuggestionEntry};
pub use navigation::{AppView, NavigationRequest, SettingsView, UnknownViewError};
