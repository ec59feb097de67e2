use ap_db::{RecipientRepository, create_in_memory_pool};

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

/// In-memory SQLite pool with migrations applied
pub async fn create_test_pool() -> SqlitePool {
    create_in_memory_pool()
        .await
        .expect("Failed to create test pool")
}

pub async fn create_test_user(pool: &SqlitePool, user_id: &str, role: &str) {
    RecipientRepository::new(pool.clone())
        .create_user(user_id, role)
        .await
        .expect("Failed to create test user");
}

pub async fn create_test_post(pool: &SqlitePool, author_id: &str, created_at: DateTime<Utc>) {
    let post_id = uuid::Uuid::new_v4().to_string();
    RecipientRepository::new(pool.clone())
        .create_post(&post_id, author_id, created_at)
        .await
        .expect("Failed to create test post");
}
