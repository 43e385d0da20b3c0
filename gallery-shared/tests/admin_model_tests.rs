/// Integration tests for admin accounts and sessions
///
/// Run with: cargo test --test admin_model_tests

use chrono::Duration;
use gallery_shared::auth::{
    password::{hash_password, verify_password},
    session_token::hash_session_token,
};
use gallery_shared::db::{
    migrations::run_migrations,
    pool::{create_pool, DatabaseConfig},
};
use gallery_shared::models::{
    admin_session::AdminSession,
    admin_user::{AdminUser, CreateAdminUser},
};
use sqlx::SqlitePool;

async fn setup() -> SqlitePool {
    let pool = create_pool(DatabaseConfig::in_memory())
        .await
        .expect("Failed to create in-memory pool");
    run_migrations(&pool).await.expect("Failed to run migrations");
    pool
}

async fn create_admin(pool: &SqlitePool, username: &str, password: &str) -> AdminUser {
    AdminUser::create(
        pool,
        CreateAdminUser {
            username: username.to_string(),
            password_hash: hash_password(password).unwrap(),
        },
    )
    .await
    .expect("Failed to create admin")
}

#[tokio::test]
async fn test_admin_username_is_unique() {
    let pool = setup().await;
    create_admin(&pool, "atelier", "first-password").await;

    let duplicate = AdminUser::create(
        &pool,
        CreateAdminUser {
            username: "atelier".to_string(),
            password_hash: "irrelevant".to_string(),
        },
    )
    .await;

    match duplicate {
        Err(sqlx::Error::Database(e)) => assert!(e.is_unique_violation()),
        other => panic!("expected a unique violation, got {:?}", other),
    }
}

#[tokio::test]
async fn test_find_by_username_is_case_sensitive() {
    let pool = setup().await;
    create_admin(&pool, "atelier", "secret-password").await;

    assert!(AdminUser::find_by_username(&pool, "atelier")
        .await
        .unwrap()
        .is_some());
    assert!(AdminUser::find_by_username(&pool, "Atelier")
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_upsert_replaces_password_hash() {
    let pool = setup().await;
    let original = create_admin(&pool, "atelier", "old-password").await;

    let replaced = AdminUser::upsert(
        &pool,
        CreateAdminUser {
            username: "atelier".to_string(),
            password_hash: hash_password("new-password").unwrap(),
        },
    )
    .await
    .unwrap();

    assert_eq!(replaced.id, original.id);
    assert!(verify_password("new-password", &replaced.password_hash).unwrap());
    assert!(!verify_password("old-password", &replaced.password_hash).unwrap());
}

#[tokio::test]
async fn test_session_round_trip() {
    let pool = setup().await;
    create_admin(&pool, "atelier", "secret-password").await;

    let (session, token) = AdminSession::create(&pool, "atelier", Duration::hours(1))
        .await
        .unwrap();

    // Only the hash is stored
    assert_eq!(session.token_hash, hash_session_token(&token));
    assert_ne!(session.token_hash, token);

    let found = AdminSession::find_active(&pool, &token).await.unwrap().unwrap();
    assert_eq!(found.username, "atelier");

    assert!(AdminSession::delete(&pool, &token).await.unwrap());
    assert!(AdminSession::find_active(&pool, &token).await.unwrap().is_none());
    assert!(!AdminSession::delete(&pool, &token).await.unwrap());
}

#[tokio::test]
async fn test_expired_session_is_absent() {
    let pool = setup().await;
    create_admin(&pool, "atelier", "secret-password").await;

    let (_, token) = AdminSession::create(&pool, "atelier", Duration::seconds(-1))
        .await
        .unwrap();

    assert!(AdminSession::find_active(&pool, &token).await.unwrap().is_none());
    // The lookup removed the row
    assert!(!AdminSession::delete(&pool, &token).await.unwrap());
}

#[tokio::test]
async fn test_purge_expired_keeps_live_sessions() {
    let pool = setup().await;
    create_admin(&pool, "atelier", "secret-password").await;

    let (_, live) = AdminSession::create(&pool, "atelier", Duration::hours(2))
        .await
        .unwrap();
    for _ in 0..3 {
        AdminSession::create(&pool, "atelier", Duration::seconds(-10))
            .await
            .unwrap();
    }

    assert_eq!(AdminSession::purge_expired(&pool).await.unwrap(), 3);
    assert_eq!(AdminSession::purge_expired(&pool).await.unwrap(), 0);
    assert!(AdminSession::find_active(&pool, &live).await.unwrap().is_some());
}

#[tokio::test]
async fn test_unknown_token_resolves_to_nothing() {
    let pool = setup().await;

    assert!(AdminSession::find_active(&pool, "not-a-real-token")
        .await
        .unwrap()
        .is_none());
}
