pub mod connection;
pub mod error;
pub mod repositories;

mod timestamp;

pub use connection::{create_in_memory_pool, create_pool, run_migrations};
pub use error::{DbError, Result};
pub use repositories::broadcast_repository::BroadcastRepository;
pub use repositories::delivery_token_repository::DeliveryTokenRepository;
pub use repositories::notification_repository::NotificationRepository;
pub use repositories::preference_repository::PreferenceRepository;
pub use repositories::recipient_repository::RecipientRepository;
pub use repositories::settings_repository::SettingsRepository;
