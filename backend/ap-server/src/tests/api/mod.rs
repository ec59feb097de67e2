mod create_broadcast_request;
mod error;
mod list_broadcasts_query;
mod update_settings_request;
