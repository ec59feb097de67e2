use ap_core::{
    BroadcastCategory, BroadcastMessage, NotificationRecord, SYSTEM_ACTOR, TargetAudienceSpec,
};

use uuid::Uuid;

pub fn create_test_broadcast(audience: TargetAudienceSpec) -> BroadcastMessage {
    BroadcastMessage::new(
        "Test Broadcast".to_string(),
        "Test body".to_string(),
        BroadcastCategory::Announcement,
        audience,
        Some("https://img.example.com/banner.png".to_string()),
        Some("app://home".to_string()),
        None,
    )
}

pub fn create_test_record(broadcast_id: Uuid, recipient_id: &str) -> NotificationRecord {
    NotificationRecord {
        id: NotificationRecord::record_id(broadcast_id, recipient_id),
        broadcast_id,
        recipient_id: recipient_id.to_string(),
        category: BroadcastCategory::Announcement,
        message: "Test Broadcast: Test body".to_string(),
        is_read: false,
        actors: vec![SYSTEM_ACTOR.to_string()],
        deep_link: None,
        image_url: None,
        created_at: None,
    }
}
