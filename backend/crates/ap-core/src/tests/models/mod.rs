mod app_settings;
mod broadcast_category;
mod broadcast_message;
mod broadcast_status;
mod config_template;
mod push;
mod recipient_preference;
mod skip_reason;
mod target_audience_spec;
