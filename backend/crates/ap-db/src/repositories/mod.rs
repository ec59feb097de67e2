pub mod broadcast_repository;
pub mod delivery_token_repository;
pub mod notification_repository;
pub mod preference_repository;
pub mod recipient_repository;
pub mod settings_repository;
