use crate::{
    AudienceResolver, BroadcastDispatcher, BroadcastError, BroadcastMetrics, BroadcastResult,
    NotificationRecordWriter, PreferenceGate, RenderedNotification, SkippedRecipient,
};

use ap_core::{
    BroadcastCategory, BroadcastMessage, BroadcastStatus, BroadcastStore, RecipientId,
    TargetAudienceSpec,
};

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::Instrument;
use uuid::Uuid;

/// Admin input for a new broadcast.
#[derive(Debug, Clone)]
pub struct NewBroadcast {
    pub title: String,
    pub body: String,
    pub category: BroadcastCategory,
    pub target_audience: TargetAudienceSpec,
    pub image_url: Option<String>,
    pub deep_link: Option<String>,
    pub scheduled_for: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct BroadcastOutcome {
    pub message: BroadcastMessage,
    pub sent: usize,
    pub failed: usize,
    pub skipped: Vec<SkippedRecipient>,
}

impl BroadcastOutcome {
    fn not_sent(message: BroadcastMessage) -> Self {
        Self {
            message,
            sent: 0,
            failed: 0,
            skipped: Vec::new(),
        }
    }
}

/// How far a send got before an error, deciding where the message lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DeliveryPhase {
    /// Nothing pushed yet; the message can safely go back to draft.
    Preparing,
    /// Pushes may have gone out; a retry could double-send.
    Dispatching,
}

/// Runs a broadcast end to end: resolve, filter, record, push, finalize.
pub struct BroadcastService {
    store: Arc<dyn BroadcastStore>,
    resolver: AudienceResolver,
    gate: PreferenceGate,
    writer: NotificationRecordWriter,
    dispatcher: BroadcastDispatcher,
    metrics: BroadcastMetrics,
}

impl BroadcastService {
    pub fn new(
        store: Arc<dyn BroadcastStore>,
        resolver: AudienceResolver,
        gate: PreferenceGate,
        writer: NotificationRecordWriter,
        dispatcher: BroadcastDispatcher,
    ) -> Self {
        Self {
            store,
            resolver,
            gate,
            writer,
            dispatcher,
            metrics: BroadcastMetrics::new(),
        }
    }

    /// Store a new broadcast and send it, unless it is scheduled for later.
    pub async fn create(&self, request: NewBroadcast) -> BroadcastResult<BroadcastOutcome> {
        let message = BroadcastMessage::new(
            request.title.trim().to_string(),
            request.body.trim().to_string(),
            request.category,
            request.target_audience,
            request.image_url,
            request.deep_link,
            request.scheduled_for,
        );
        message.validate()?;

        self.store.insert_broadcast(&message).await?;
        log::info!(
            "Created {} broadcast {} ({})",
            message.category,
            message.id,
            message.status
        );

        if message.status == BroadcastStatus::Scheduled {
            return Ok(BroadcastOutcome::not_sent(message));
        }

        self.send_message(message).await
    }

    /// Send an existing draft, or a scheduled broadcast whose time has come.
    pub async fn send(&self, id: Uuid) -> BroadcastResult<BroadcastOutcome> {
        let message = self.get(id).await?;

        let ready = match message.status {
            BroadcastStatus::Draft => true,
            BroadcastStatus::Scheduled => message.is_due(Utc::now()),
            _ => false,
        };
        if !ready {
            return Err(BroadcastError::invalid_state(id, message.status));
        }

        self.send_message(message).await
    }

    pub async fn get(&self, id: Uuid) -> BroadcastResult<BroadcastMessage> {
        self.store
            .find_broadcast(id)
            .await?
            .ok_or_else(|| BroadcastError::not_found(id))
    }

    pub async fn list(&self, limit: u32) -> BroadcastResult<Vec<BroadcastMessage>> {
        Ok(self.store.list_broadcasts(limit).await?)
    }

    pub async fn due_scheduled(
        &self,
        now: DateTime<Utc>,
    ) -> BroadcastResult<Vec<BroadcastMessage>> {
        Ok(self.store.due_scheduled(now).await?)
    }

    /// Deliver `message` and persist its final status.
    ///
    /// On error the message goes back to `draft` if nothing was pushed yet,
    /// otherwise to `failed` so it is not sent twice.
    pub async fn send_message(
        &self,
        message: BroadcastMessage,
    ) -> BroadcastResult<BroadcastOutcome> {
        if !message.status.is_dispatchable() {
            return Err(BroadcastError::invalid_state(message.id, message.status));
        }

        let span = tracing::info_span!("broadcast", notification_id = %message.id);
        self.run_send(message).instrument(span).await
    }

    async fn run_send(
        &self,
        mut message: BroadcastMessage,
    ) -> BroadcastResult<BroadcastOutcome> {
        message.transition_to(BroadcastStatus::Sending)?;
        if !self.store.claim_for_sending(message.id).await? {
            let current = self.get(message.id).await?;
            log::warn!(
                "Broadcast {} already claimed by another sender ({})",
                message.id,
                current.status
            );
            return Err(BroadcastError::invalid_state(message.id, current.status));
        }

        let mut phase = DeliveryPhase::Preparing;
        match self.deliver(&mut message, &mut phase).await {
            Ok(outcome) => {
                self.metrics.broadcast_finished(BroadcastStatus::Sent.as_str());
                log::info!(
                    "Broadcast {} sent: {} delivered, {} failed, {} skipped",
                    outcome.message.id,
                    outcome.sent,
                    outcome.failed,
                    outcome.skipped.len()
                );
                Ok(outcome)
            }
            Err(e) => {
                self.recover(&mut message, phase, &e).await;
                Err(e)
            }
        }
    }

    async fn deliver(
        &self,
        message: &mut BroadcastMessage,
        phase: &mut DeliveryPhase,
    ) -> BroadcastResult<BroadcastOutcome> {
        let audience = message.target_audience.audience()?;
        let candidates = self.resolver.resolve(&audience).await?;
        let eligibility = self
            .gate
            .filter_eligible(&candidates, message.category, audience.audience_type())
            .await?;

        let recipients: Vec<RecipientId> = eligibility.eligible.into_iter().collect();
        message.stats.total_recipients = recipients.len() as u64;
        self.store.update_broadcast(message).await?;

        let rendered = RenderedNotification::from_message(message);
        self.writer
            .write_records(message.id, &recipients, &rendered)
            .await?;

        *phase = DeliveryPhase::Dispatching;
        let dispatch = self.dispatcher.dispatch(&rendered.push, &recipients).await;
        message.stats.delivered = dispatch.sent as u64;

        let mut finished = message.clone();
        finished.transition_to(BroadcastStatus::Sent)?;
        self.store.update_broadcast(&finished).await?;
        *message = finished.clone();

        Ok(BroadcastOutcome {
            message: finished,
            sent: dispatch.sent,
            failed: dispatch.failed,
            skipped: eligibility.skipped,
        })
    }

    async fn recover(
        &self,
        message: &mut BroadcastMessage,
        phase: DeliveryPhase,
        error: &BroadcastError,
    ) {
        let next = match phase {
            DeliveryPhase::Preparing => BroadcastStatus::Draft,
            DeliveryPhase::Dispatching => BroadcastStatus::Failed,
        };

        log::error!(
            "Broadcast {} aborted during {:?}, marking {}: {}",
            message.id,
            phase,
            next,
            error
        );
        self.metrics.broadcast_finished(next.as_str());

        if message.transition_to(next).is_err() {
            return;
        }
        if let Err(e) = self.store.update_broadcast(message).await {
            log::warn!(
                "Could not persist {} status for broadcast {}: {}",
                next,
                message.id,
                e
            );
        }
    }
}
