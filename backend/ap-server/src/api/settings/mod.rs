pub mod settings;
pub mod settings_response;
pub mod update_settings_request;
