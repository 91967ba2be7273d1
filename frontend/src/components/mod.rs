pub mod header;
pub mod icon;
pub mod settings_hub;
pub mod suggestion_strip;
pub mod view_placeholder;
