//! Integration tests for the source repository.
//!
//! Verifies the anti-enumeration property: another user's source reads as
//! not-found to update/delete, never as a permission error.
//!
//! **IMPORTANT**: These tests require a fully migrated PostgreSQL database.
//! Run migrations first: `sqlx migrate run`

use insights_db::test_fixtures::TestDatabase;
use insights_db::{Error, Source, SourceRepository};

fn source(user_id: &str, name: &str) -> Source {
    Source {
        id: 0,
        user_id: user_id.to_string(),
        name: name.to_string(),
        description: None,
        isbn13: Some("9780735211292".to_string()),
    }
}

async fn setup() -> TestDatabase {
    let test_db = TestDatabase::new().await;
    test_db.truncate().await;
    test_db.seed_user("user-1", "user1@example.com").await;
    test_db.seed_user("user-2", "user2@example.com").await;
    test_db
}

#[tokio::test]
#[ignore = "requires migrated database"]
async fn test_create_returns_generated_id_and_list_round_trips() {
    let test_db = setup().await;

    let id = test_db
        .db
        .sources
        .create(&source("user-1", "Atomic Habits"))
        .await
        .unwrap();

    let listed = test_db.db.sources.list("user-1").await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, id);
    assert_eq!(listed[0].name, "Atomic Habits");
    assert_eq!(listed[0].isbn13.as_deref(), Some("9780735211292"));
}

#[tokio::test]
#[ignore = "requires migrated database"]
async fn test_create_for_unknown_user_is_not_registered() {
    let test_db = setup().await;

    let err = test_db
        .db
        .sources
        .create(&source("nobody", "Atomic Habits"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::UserNotRegistered));
}

#[tokio::test]
#[ignore = "requires migrated database"]
async fn test_list_only_returns_own_sources() {
    let test_db = setup().await;

    let own = test_db.seed_source("user-1", "Deep Work").await;
    let foreign = test_db.seed_source("user-2", "Digital Minimalism").await;

    let listed = test_db.db.sources.list("user-1").await.unwrap();
    assert!(listed.iter().any(|s| s.id == own));
    assert!(!listed.iter().any(|s| s.id == foreign));
}

#[tokio::test]
#[ignore = "requires migrated database"]
async fn test_update_own_source() {
    let test_db = setup().await;
    let id = test_db.seed_source("user-1", "Deep Work").await;

    let mut updated = source("user-1", "Deep Work (2nd ed.)");
    updated.id = id;
    updated.description = Some("Focused success".to_string());
    test_db.db.sources.update(&updated).await.unwrap();

    let listed = test_db.db.sources.list("user-1").await.unwrap();
    assert_eq!(listed[0].name, "Deep Work (2nd ed.)");
    assert_eq!(listed[0].description.as_deref(), Some("Focused success"));
}

#[tokio::test]
#[ignore = "requires migrated database"]
async fn test_update_foreign_source_reads_as_not_found() {
    let test_db = setup().await;
    let foreign = test_db.seed_source("user-2", "Digital Minimalism").await;

    let mut attempt = source("user-1", "hijacked");
    attempt.id = foreign;
    let err = test_db.db.sources.update(&attempt).await.unwrap_err();
    assert!(matches!(err, Error::SourceNotFound));
}

#[tokio::test]
#[ignore = "requires migrated database"]
async fn test_delete_foreign_source_reads_as_not_found() {
    let test_db = setup().await;
    let foreign = test_db.seed_source("user-2", "Digital Minimalism").await;

    let err = test_db
        .db
        .sources
        .delete(foreign, "user-1")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::SourceNotFound));

    // Still present for its owner.
    let listed = test_db.db.sources.list("user-2").await.unwrap();
    assert_eq!(listed.len(), 1);
}

#[tokio::test]
#[ignore = "requires migrated database"]
async fn test_delete_own_source() {
    let test_db = setup().await;
    let id = test_db.seed_source("user-1", "Deep Work").await;

    test_db.db.sources.delete(id, "user-1").await.unwrap();
    assert!(test_db.db.sources.list("user-1").await.unwrap().is_empty());
}
