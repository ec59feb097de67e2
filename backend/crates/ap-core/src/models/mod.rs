pub mod app_settings;
pub mod audience;
pub mod broadcast_category;
pub mod broadcast_message;
pub mod broadcast_stats;
pub mod broadcast_status;
pub mod config_template;
pub mod delivery_token;
pub mod notification_record;
pub mod push;
pub mod recipient_preference;
pub mod skip_reason;
pub mod target_audience_spec;
