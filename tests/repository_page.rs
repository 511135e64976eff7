mod common;

use cms_rest_api::domain::entities::{NewPage, PagePatch, Status};
use cms_rest_api::domain::repositories::PageRepository;
use cms_rest_api::error::AppError;
use cms_rest_api::infrastructure::persistence::PgPageRepository;
use sqlx::PgPool;
use std::sync::Arc;

async fn repo(pool: &PgPool) -> PgPageRepository {
    common::setup_schema(pool).await;
    PgPageRepository::new(Arc::new(pool.clone()))
}

#[sqlx::test(migrations = false)]
async fn test_create_and_find(pool: PgPool) {
    let repo = repo(&pool).await;

    let page = repo
        .create(NewPage {
            title: "About".to_string(),
            slug: "about".to_string(),
            content: "<h1>About</h1>".to_string(),
        })
        .await
        .unwrap();

    let by_id = repo.find_by_id(page.id).await.unwrap().unwrap();
    assert_eq!(by_id.content, "<h1>About</h1>");
    assert_eq!(by_id.audit.status, Status::Active);

    let by_slug = repo.find_by_slug("about").await.unwrap().unwrap();
    assert_eq!(by_slug.id, page.id);
}

#[sqlx::test(migrations = false)]
async fn test_update_content_only(pool: PgPool) {
    let repo = repo(&pool).await;
    let id = common::create_test_page(&pool, "Contact", "contact").await;

    let patch = PagePatch {
        content: Some("<p>Call us</p>".to_string()),
        ..Default::default()
    };
    let page = repo.update(id, patch).await.unwrap();

    assert_eq!(page.title, "Contact");
    assert_eq!(page.content, "<p>Call us</p>");
    assert_eq!(page.audit.status, Status::Modified);
}

#[sqlx::test(migrations = false)]
async fn test_deleted_page_is_not_updatable(pool: PgPool) {
    let repo = repo(&pool).await;
    let id = common::create_test_page(&pool, "Contact", "contact").await;

    repo.soft_delete(id).await.unwrap();

    let patch = PagePatch {
        title: Some("Reach us".to_string()),
        ..Default::default()
    };
    let err = repo.update(id, patch).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound { .. }));

    let (status, _) = common::raw_audit(&pool, "pages", id).await;
    assert_eq!(status, Status::Passive.code());
}

#[sqlx::test(migrations = false)]
async fn test_list_skips_deleted(pool: PgPool) {
    let repo = repo(&pool).await;
    common::create_test_page(&pool, "About", "about").await;
    let gone = common::create_test_page(&pool, "Old", "old").await;
    repo.soft_delete(gone).await.unwrap();

    let pages = repo.list(0, 10).await.unwrap();
    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0].slug, "about");
    assert_eq!(repo.count().await.unwrap(), 1);
}
