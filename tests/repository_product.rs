mod common;

use cms_rest_api::domain::entities::{NewProduct, ProductPatch, Status};
use cms_rest_api::domain::repositories::ProductRepository;
use cms_rest_api::error::AppError;
use cms_rest_api::infrastructure::persistence::PgProductRepository;
use rust_decimal::Decimal;
use sqlx::PgPool;
use std::sync::Arc;

async fn repo(pool: &PgPool) -> PgProductRepository {
    common::setup_schema(pool).await;
    PgProductRepository::new(Arc::new(pool.clone()))
}

fn new_product(category_id: i64, slug: &str) -> NewProduct {
    NewProduct {
        name: "Desk Lamp".to_string(),
        slug: slug.to_string(),
        description: None,
        unit_price: Decimal::new(2450, 2),
        units_in_stock: 12,
        image_path: Some("/img/lamp.png".to_string()),
        category_id,
    }
}

#[sqlx::test(migrations = false)]
async fn test_create_keeps_decimal_precision(pool: PgPool) {
    let repo = repo(&pool).await;
    let category_id = common::create_test_category(&pool, "Office", "office").await;

    let product = repo.create(new_product(category_id, "lamp")).await.unwrap();

    assert_eq!(product.unit_price, Decimal::new(2450, 2));
    assert_eq!(product.units_in_stock, 12);
    assert_eq!(product.category_id, category_id);
    assert_eq!(product.audit.status, Status::Active);
}

#[sqlx::test(migrations = false)]
async fn test_unknown_category_is_rejected(pool: PgPool) {
    let repo = repo(&pool).await;

    let err = repo.create(new_product(404, "lamp")).await.unwrap_err();
    match err {
        AppError::Validation { details, .. } => assert_eq!(details["category_id"], 404),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[sqlx::test(migrations = false)]
async fn test_deleted_category_is_rejected(pool: PgPool) {
    let repo = repo(&pool).await;
    let office = common::create_test_category(&pool, "Office", "office").await;
    let home = common::create_test_category(&pool, "Home", "home").await;
    let product = repo.create(new_product(office, "lamp")).await.unwrap();

    sqlx::query("UPDATE categories SET status = 3, deleted_at = NOW() WHERE id = $1")
        .bind(home)
        .execute(&pool)
        .await
        .unwrap();

    let err = repo.create(new_product(home, "chair")).await.unwrap_err();
    assert!(matches!(err, AppError::Validation { .. }));

    let patch = ProductPatch {
        category_id: Some(home),
        ..Default::default()
    };
    let err = repo.update(product.id, patch).await.unwrap_err();
    assert!(matches!(err, AppError::Validation { .. }));
    assert_eq!(repo.find_by_id(product.id).await.unwrap().unwrap().category_id, office);
}

#[sqlx::test(migrations = false)]
async fn test_create_waits_for_category_delete(pool: PgPool) {
    let repo = Arc::new(repo(&pool).await);
    let office = common::create_test_category(&pool, "Office", "office").await;

    // An uncommitted category delete holding the row lock.
    let mut tx = pool.begin().await.unwrap();
    sqlx::query("SELECT id FROM categories WHERE id = $1 FOR UPDATE")
        .bind(office)
        .execute(&mut *tx)
        .await
        .unwrap();
    sqlx::query("UPDATE categories SET status = 3, deleted_at = NOW() WHERE id = $1")
        .bind(office)
        .execute(&mut *tx)
        .await
        .unwrap();

    let creating = tokio::spawn({
        let repo = Arc::clone(&repo);
        async move { repo.create(new_product(office, "lamp")).await }
    });

    common::wait_for_lock_waiter(&pool).await;
    tx.commit().await.unwrap();

    let err = creating.await.unwrap().unwrap_err();
    assert!(matches!(err, AppError::Validation { .. }));
    assert_eq!(repo.count(Some(office)).await.unwrap(), 0);
}

#[sqlx::test(migrations = false)]
async fn test_price_overflow_is_validation(pool: PgPool) {
    let repo = repo(&pool).await;
    let office = common::create_test_category(&pool, "Office", "office").await;

    let mut product = new_product(office, "lamp");
    product.unit_price = Decimal::new(12_345_678_901, 0);

    let err = repo.create(product).await.unwrap_err();
    assert!(matches!(err, AppError::Validation { .. }));
}

#[sqlx::test(migrations = false)]
async fn test_list_by_category_and_count(pool: PgPool) {
    let repo = repo(&pool).await;
    let office = common::create_test_category(&pool, "Office", "office").await;
    let garden = common::create_test_category(&pool, "Garden", "garden").await;
    common::create_test_product(&pool, office, "Stapler", "stapler").await;
    common::create_test_product(&pool, office, "Binder", "binder").await;
    common::create_test_product(&pool, garden, "Rake", "rake").await;

    let office_items = repo.list_by_category(office, 0, 10).await.unwrap();
    let names: Vec<_> = office_items.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Binder", "Stapler"]);

    assert_eq!(repo.count(Some(office)).await.unwrap(), 2);
    assert_eq!(repo.count(Some(garden)).await.unwrap(), 1);
    assert_eq!(repo.count(None).await.unwrap(), 3);
    assert_eq!(repo.list(0, 10).await.unwrap().len(), 3);
}

#[sqlx::test(migrations = false)]
async fn test_update_clears_image_and_moves_category(pool: PgPool) {
    let repo = repo(&pool).await;
    let office = common::create_test_category(&pool, "Office", "office").await;
    let home = common::create_test_category(&pool, "Home", "home").await;
    let product = repo.create(new_product(office, "lamp")).await.unwrap();

    let patch = ProductPatch {
        unit_price: Some(Decimal::new(1999, 2)),
        image_path: Some(None),
        category_id: Some(home),
        ..Default::default()
    };
    let updated = repo.update(product.id, patch).await.unwrap();

    assert_eq!(updated.unit_price, Decimal::new(1999, 2));
    assert!(updated.image_path.is_none());
    assert_eq!(updated.category_id, home);
    assert_eq!(updated.name, "Desk Lamp");
    assert_eq!(updated.audit.status, Status::Modified);
}

#[sqlx::test(migrations = false)]
async fn test_soft_delete(pool: PgPool) {
    let repo = repo(&pool).await;
    let office = common::create_test_category(&pool, "Office", "office").await;
    let id = common::create_test_product(&pool, office, "Stapler", "stapler").await;

    repo.soft_delete(id).await.unwrap();

    assert!(repo.find_by_id(id).await.unwrap().is_none());
    assert_eq!(repo.count(Some(office)).await.unwrap(), 0);

    let (status, deleted) = common::raw_audit(&pool, "products", id).await;
    assert_eq!(status, Status::Passive.code());
    assert!(deleted);
}
