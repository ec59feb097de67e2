mod common;

use common::{create_test_pool, create_test_post, create_test_user};

use ap_core::RecipientDirectory;
use ap_db::RecipientRepository;

use chrono::{Duration, Utc};
use googletest::prelude::*;

#[tokio::test]
async fn given_users_with_roles_when_filtering_by_role_then_only_matching_ids() {
    // Given
    let pool = create_test_pool().await;
    create_test_user(&pool, "u1", "admin").await;
    create_test_user(&pool, "u2", "user").await;
    create_test_user(&pool, "u3", "admin").await;
    let repo = RecipientRepository::new(pool);

    // When
    let mut admins = repo.recipient_ids_with_role("admin").await.unwrap();
    admins.sort();

    // Then
    assert_that!(admins, eq(&vec!["u1".to_string(), "u3".to_string()]));
    assert_that!(repo.all_recipient_ids().await.unwrap().len(), eq(3));
}

#[tokio::test]
async fn given_posts_inside_and_outside_window_when_querying_authors_then_only_recent() {
    // Given
    let pool = create_test_pool().await;
    let now = Utc::now();
    create_test_post(&pool, "recent", now - Duration::days(2)).await;
    create_test_post(&pool, "recent", now - Duration::days(1)).await;
    create_test_post(&pool, "stale", now - Duration::days(45)).await;
    let repo = RecipientRepository::new(pool);

    // When
    let authors = repo
        .content_author_ids_since(now - Duration::days(30))
        .await
        .unwrap();

    // Then: one entry per qualifying post, duplicates preserved
    assert_that!(authors, eq(&vec!["recent".to_string(), "recent".to_string()]));
}

#[tokio::test]
async fn given_existing_user_when_created_again_then_role_is_updated() {
    // Given
    let pool = create_test_pool().await;
    create_test_user(&pool, "u1", "user").await;
    create_test_user(&pool, "u1", "moderator").await;
    let repo = RecipientRepository::new(pool);

    // When
    let moderators = repo.recipient_ids_with_role("moderator").await.unwrap();

    // Then
    assert_that!(moderators, eq(&vec!["u1".to_string()]));
    assert_that!(repo.all_recipient_ids().await.unwrap().len(), eq(1));
}
