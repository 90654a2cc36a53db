//! Integration tests for the user repository.
//!
//! Covers duplicate-key classification (id vs. email constraint), the
//! zero-rows-affected not-found paths, and tag-set round trips.
//!
//! **IMPORTANT**: These tests require a fully migrated PostgreSQL database.
//! Run migrations first: `sqlx migrate run`

use insights_db::test_fixtures::TestDatabase;
use insights_db::{Error, FilterTag, User, UserRepository};

fn user(id: &str, email: &str) -> User {
    User {
        id: id.to_string(),
        email: email.to_string(),
        notification_enabled: true,
        notification_filter_tags: vec![FilterTag::WealthCreation],
    }
}

#[tokio::test]
#[ignore = "requires migrated database"]
async fn test_create_and_get_round_trip() {
    let test_db = TestDatabase::new().await;
    test_db.truncate().await;

    let created = user("user-1", "user1@example.com");
    test_db.db.users.create(&created).await.unwrap();

    let fetched = test_db.db.users.get("user-1").await.unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
#[ignore = "requires migrated database"]
async fn test_duplicate_id_is_classified_as_already_registered() {
    let test_db = TestDatabase::new().await;
    test_db.truncate().await;

    test_db
        .db
        .users
        .create(&user("user-1", "user1@example.com"))
        .await
        .unwrap();

    let err = test_db
        .db
        .users
        .create(&user("user-1", "other@example.com"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::UserAlreadyRegistered));
}

#[tokio::test]
#[ignore = "requires migrated database"]
async fn test_duplicate_email_is_classified_as_email_exists() {
    let test_db = TestDatabase::new().await;
    test_db.truncate().await;

    test_db
        .db
        .users
        .create(&user("user-1", "user1@example.com"))
        .await
        .unwrap();

    let err = test_db
        .db
        .users
        .create(&user("user-2", "user1@example.com"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::EmailAlreadyExists));
}

#[tokio::test]
#[ignore = "requires migrated database"]
async fn test_get_unknown_user_is_not_registered() {
    let test_db = TestDatabase::new().await;
    test_db.truncate().await;

    let err = test_db.db.users.get("nobody").await.unwrap_err();
    assert!(matches!(err, Error::UserNotRegistered));
}

#[tokio::test]
#[ignore = "requires migrated database"]
async fn test_update_changes_email_and_preferences() {
    let test_db = TestDatabase::new().await;
    test_db.truncate().await;

    test_db
        .db
        .users
        .create(&user("user-1", "user1@example.com"))
        .await
        .unwrap();

    let updated = User {
        id: "user-1".to_string(),
        email: "new@example.com".to_string(),
        notification_enabled: false,
        notification_filter_tags: vec![
            FilterTag::PersonalDevelopment,
            FilterTag::WealthCreation,
        ],
    };
    test_db.db.users.update(&updated).await.unwrap();

    let fetched = test_db.db.users.get("user-1").await.unwrap();
    assert_eq!(fetched, updated);
}

#[tokio::test]
#[ignore = "requires migrated database"]
async fn test_update_unknown_user_is_not_registered() {
    let test_db = TestDatabase::new().await;
    test_db.truncate().await;

    let err = test_db
        .db
        .users
        .update(&user("nobody", "nobody@example.com"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::UserNotRegistered));
}

#[tokio::test]
#[ignore = "requires migrated database"]
async fn test_update_to_taken_email_is_email_exists() {
    let test_db = TestDatabase::new().await;
    test_db.truncate().await;

    test_db
        .db
        .users
        .create(&user("user-1", "user1@example.com"))
        .await
        .unwrap();
    test_db
        .db
        .users
        .create(&user("user-2", "user2@example.com"))
        .await
        .unwrap();

    let err = test_db
        .db
        .users
        .update(&user("user-2", "user1@example.com"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::EmailAlreadyExists));
}

#[tokio::test]
#[ignore = "requires migrated database"]
async fn test_delete_removes_the_row() {
    let test_db = TestDatabase::new().await;
    test_db.truncate().await;

    test_db
        .db
        .users
        .create(&user("user-1", "user1@example.com"))
        .await
        .unwrap();
    test_db.db.users.delete("user-1").await.unwrap();

    let err = test_db.db.users.get("user-1").await.unwrap_err();
    assert!(matches!(err, Error::UserNotRegistered));
}

#[tokio::test]
#[ignore = "requires migrated database"]
async fn test_delete_unknown_user_is_not_registered() {
    let test_db = TestDatabase::new().await;
    test_db.truncate().await;

    let err = test_db.db.users.delete("nobody").await.unwrap_err();
    assert!(matches!(err, Error::UserNotRegistered));
}
