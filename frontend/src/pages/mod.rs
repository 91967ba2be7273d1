pub mod dashboard;
pub mod not_found;
pub mod settings;
pub mod settings_view;
