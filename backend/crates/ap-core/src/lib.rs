pub mod error;
pub mod gateway;
pub mod models;
pub mod store;

#[cfg(test)]
mod tests;

pub use error::push_gateway_error::PushGatewayError;
pub use error::remote_config_error::{RemoteConfigError, RemoteErrorKind};
pub use error::store_error::{StoreError, StoreResult};
pub use error::{CoreError, Result as CoreResult};
pub use gateway::push_gateway::PushGateway;
pub use gateway::remote_config_service::RemoteConfigService;
pub use models::app_settings::{AppSettings, SettingsUpdate};
pub use models::audience::{Audience, AudienceType};
pub use models::broadcast_category::BroadcastCategory;
pub use models::broadcast_message::BroadcastMessage;
pub use models::broadcast_stats::BroadcastStats;
pub use models::broadcast_status::BroadcastStatus;
pub use models::config_template::{ConfigParameter, ConfigTemplate, ParameterValue, ValueType};
pub use models::delivery_token::DeliveryToken;
pub use models::notification_record::NotificationRecord;
pub use models::push::{DeliveryFailure, MulticastResponse, PushPayload, TokenSendResult};
pub use models::recipient_preference::RecipientPreference;
pub use models::skip_reason::SkipReason;
pub use models::target_audience_spec::{AudienceFilters, TargetAudienceSpec};
pub use store::broadcast_store::BroadcastStore;
pub use store::notification_record_store::NotificationRecordStore;
pub use store::preference_store::PreferenceStore;
pub use store::recipient_directory::RecipientDirectory;
pub use store::settings_store::SettingsStore;
pub use store::token_store::TokenStore;

pub use error_location::ErrorLocation;

/// Opaque identifier of a platform user that can receive broadcasts.
pub type RecipientId = String;

/// Actor recorded on in-app notifications created by admin broadcasts.
pub const SYSTEM_ACTOR: &str = "admin";
