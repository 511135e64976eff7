mod common;

use cms_rest_api::domain::entities::{AppUserPatch, NewAppUser, Status};
use cms_rest_api::domain::repositories::AppUserRepository;
use cms_rest_api::error::AppError;
use cms_rest_api::infrastructure::persistence::PgAppUserRepository;
use sqlx::PgPool;
use std::sync::Arc;

async fn repo(pool: &PgPool) -> PgAppUserRepository {
    common::setup_schema(pool).await;
    PgAppUserRepository::new(Arc::new(pool.clone()))
}

fn new_user(user_name: &str, email: &str) -> NewAppUser {
    NewAppUser {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        user_name: user_name.to_string(),
        email: email.to_string(),
        password_hash: "salt$hash".to_string(),
        image_path: None,
    }
}

#[sqlx::test(migrations = false)]
async fn test_create_and_lookup(pool: PgPool) {
    let repo = repo(&pool).await;

    let user = repo.create(new_user("ada", "ada@example.com")).await.unwrap();

    assert_eq!(user.audit.status, Status::Active);
    assert_eq!(
        repo.find_by_email("ada@example.com").await.unwrap().unwrap().id,
        user.id
    );
    assert_eq!(repo.find_by_user_name("ada").await.unwrap().unwrap().id, user.id);
    assert!(repo.find_by_user_name("grace").await.unwrap().is_none());
}

#[sqlx::test(migrations = false)]
async fn test_duplicate_email_is_conflict(pool: PgPool) {
    let repo = repo(&pool).await;
    repo.create(new_user("ada", "ada@example.com")).await.unwrap();

    let err = repo
        .create(new_user("ada2", "ada@example.com"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict { .. }));
}

#[sqlx::test(migrations = false)]
async fn test_update_password_hash(pool: PgPool) {
    let repo = repo(&pool).await;
    let user = repo.create(new_user("ada", "ada@example.com")).await.unwrap();

    let patch = AppUserPatch {
        password_hash: Some("salt2$hash2".to_string()),
        image_path: Some(Some("/img/ada.png".to_string())),
        ..Default::default()
    };
    let updated = repo.update(user.id, patch).await.unwrap();

    assert_eq!(updated.password_hash, "salt2$hash2");
    assert_eq!(updated.image_path.as_deref(), Some("/img/ada.png"));
    assert_eq!(updated.audit.status, Status::Modified);
}

#[sqlx::test(migrations = false)]
async fn test_deleted_user_is_hidden(pool: PgPool) {
    let repo = repo(&pool).await;
    let user = repo.create(new_user("ada", "ada@example.com")).await.unwrap();
    repo.create(new_user("grace", "grace@example.com")).await.unwrap();

    repo.soft_delete(user.id).await.unwrap();

    assert!(repo.find_by_id(user.id).await.unwrap().is_none());
    assert!(repo.find_by_email("ada@example.com").await.unwrap().is_none());
    assert_eq!(repo.count().await.unwrap(), 1);

    let users = repo.list(0, 10).await.unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].user_name, "grace");
}
