//! Audience-targeted broadcast delivery: audience resolution, consent
//! filtering, batched push fan-out and durable in-app records.

pub mod audience_resolver;
pub mod dispatcher;
pub mod error;
pub mod http_push_gateway;
pub mod metrics;
pub mod preference_gate;
pub mod record_writer;
pub mod rendered_notification;
pub mod scheduler;
pub mod service;
pub mod token_registry;


pub use audience_resolver::AudienceResolver;
pub use dispatcher::{BroadcastDispatcher, DispatchConfig, DispatchResult};
pub use error::{BroadcastError, Result as BroadcastResult};
pub use http_push_gateway::HttpPushGateway;
pub use metrics::BroadcastMetrics;
pub use preference_gate::{EligibilityResult, PreferenceGate, SkippedRecipient};
pub use record_writer::{NotificationRecordWriter, RecordWriteSummary};
pub use rendered_notification::RenderedNotification;
pub use scheduler::ScheduledBroadcastRunner;
pub use service::{BroadcastOutcome, BroadcastService, NewBroadcast};
pub use token_registry::DeliveryTokenRegistry;
