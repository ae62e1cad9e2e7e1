//! Catalog use cases running against Postgres with the shipped migrations.
//!
//! `#[sqlx::test]` creates a throwaway database per test from `DATABASE_URL`.

use std::sync::Arc;

use async_trait::async_trait;
use bigdecimal::BigDecimal;
use sqlx::PgPool;
use uuid::Uuid;

use business::application::catalog::coordinator::LifecycleCoordinator;
use business::application::media::images::ImageManager;
use business::application::media::videos::VideoManager;
use business::domain::catalog::details::Sellable;
use business::domain::catalog::errors::CatalogError;
use business::domain::catalog::use_cases::create::{
    CreateSellableParams, CreateSellableUseCase, CreatedSellable,
};
use business::domain::catalog::use_cases::delete::DeleteSellableUseCase;
use business::domain::catalog::use_cases::get::{GetSellableParams, GetSellableUseCase};
use business::domain::catalog::use_cases::publication::PublicationUseCase;
use business::domain::catalog::use_cases::restore::RestoreSellableUseCase;
use business::domain::catalog::use_cases::update::{UpdateSellableParams, UpdateSellableUseCase};
use business::domain::course::model::{Course, CoursePatch, NewCourse};
use business::domain::media::errors::{AttachmentError, MediaCatalogError};
use business::domain::media::model::{NewImage, VideoRef};
use business::domain::media::owner::OwnerRepository;
use business::domain::media::services::MediaCatalog;
use business::domain::media::use_cases::images::{AddImageParams, ImageManagerUseCase};
use business::domain::media::use_cases::videos::{AttachVideoParams, VideoManagerUseCase};
use business::domain::shared::diff::{FieldDiff, FieldValue};
use business::domain::shared::value_objects::Visibility;
use logger::TracingLogger;
use persistence::course::entity::CourseTable;
use persistence::details::repository::DetailsRepositoryPostgres;
use persistence::media::owner_adapter::OwnerAdapterPostgres;
use persistence::product::repository::ProductRepositoryPostgres;
use persistence::transaction::{PgTransactionManager, PgTx};

struct KnownVideos;

#[async_trait]
impl MediaCatalog for KnownVideos {
    async fn video_exists(&self, _video: &VideoRef) -> Result<bool, MediaCatalogError> {
        Ok(true)
    }
}

struct Courses {
    coordinator: LifecycleCoordinator<PgTransactionManager, Course>,
    images: ImageManager<PgTransactionManager, Course>,
    videos: VideoManager<PgTransactionManager, Course>,
}

fn courses(pool: PgPool) -> Courses {
    let transactions = Arc::new(PgTransactionManager::new(pool));
    let details = Arc::new(DetailsRepositoryPostgres::<CourseTable>::new());
    let owners: Arc<dyn OwnerRepository<PgTx, Owner = Course>> =
        Arc::new(OwnerAdapterPostgres::new(details.clone()));
    let logger = Arc::new(TracingLogger);

    Courses {
        coordinator: LifecycleCoordinator::new(
            transactions.clone(),
            Arc::new(ProductRepositoryPostgres::new()),
            details,
            logger.clone(),
        ),
        images: ImageManager::new(transactions.clone(), owners.clone(), logger.clone()),
        videos: VideoManager::new(transactions, owners, Arc::new(KnownVideos), logger),
    }
}

fn new_course(name: &str, short_description: Option<&str>) -> NewCourse {
    NewCourse {
        name: name.to_string(),
        short_description: short_description.map(str::to_string),
        description: "Ownership, borrowing and lifetimes.".to_string(),
        duration_hours: 8,
        access_days: 90,
    }
}

fn new_image(media_id: &str) -> NewImage {
    NewImage {
        media_id: media_id.to_string(),
        url: format!("http://cdn.example.com/{media_id}.png"),
        secure_url: format!("https://cdn.example.com/{media_id}.png"),
        public_id: format!("catalog/{media_id}"),
    }
}

impl Courses {
    async fn create(&self, name: &str, price: i64) -> CreatedSellable {
        CreateSellableUseCase::execute(
            &self.coordinator,
            CreateSellableParams {
                price: BigDecimal::from(price),
                details: new_course(name, None),
            },
        )
        .await
        .unwrap()
    }

    async fn get(&self, id: Uuid, visibility: Visibility) -> Result<Sellable<Course>, CatalogError> {
        GetSellableUseCase::execute(
            &self.coordinator,
            GetSellableParams {
                id: id.to_string(),
                visibility,
            },
        )
        .await
    }

    async fn update(&self, id: Uuid, price: Option<i64>, details: CoursePatch) -> FieldDiffs {
        let outcome = UpdateSellableUseCase::execute(
            &self.coordinator,
            UpdateSellableParams {
                id: id.to_string(),
                price: price.map(BigDecimal::from),
                details,
            },
        )
        .await
        .unwrap();
        (outcome.details, outcome.product)
    }

    async fn add_image(&self, id: Uuid, media_id: &str) -> Result<(), AttachmentError> {
        self.images
            .add_image(AddImageParams {
                owner_id: id.to_string(),
                image: new_image(media_id),
            })
            .await
            .map(|_| ())
    }
}

type FieldDiffs = (FieldDiff, FieldDiff);

#[sqlx::test(migrations = "./migrations")]
async fn should_create_unpublished_pair_without_short_description(pool: PgPool) {
    let courses = courses(pool);

    let created = courses.create("Rust ownership", 50).await;
    let stored = courses
        .get(created.details_id, Visibility::IncludingUnpublished)
        .await
        .unwrap();

    assert!(!stored.details.in_stock);
    assert!(!stored.product.in_stock);
    assert_eq!(stored.product.id, created.product_id);
    assert_eq!(stored.product.details_id, created.details_id);
    assert_eq!(stored.details.short_description, None);
    assert!(matches!(
        courses.get(created.details_id, Visibility::Published).await,
        Err(CatalogError::NotFound)
    ));
}

#[sqlx::test(migrations = "./migrations")]
async fn should_clear_short_description_with_empty_string(pool: PgPool) {
    let courses = courses(pool);
    let created = courses.create("Rust ownership", 50).await;

    courses
        .update(
            created.details_id,
            None,
            CoursePatch {
                short_description: Some("Borrow checker tour".to_string()),
                ..CoursePatch::default()
            },
        )
        .await;
    let (details, _) = courses
        .update(
            created.details_id,
            None,
            CoursePatch {
                short_description: Some(String::new()),
                ..CoursePatch::default()
            },
        )
        .await;

    assert_eq!(
        details.get("short_description"),
        Some(&FieldValue::NullableText(None))
    );
    let stored = courses
        .get(created.details_id, Visibility::IncludingUnpublished)
        .await
        .unwrap();
    assert_eq!(stored.details.short_description, None);
}

#[sqlx::test(migrations = "./migrations")]
async fn should_change_only_price_of_single_letter_course(pool: PgPool) {
    let courses = courses(pool);
    let created = courses.create("X", 50).await;

    let (details, product) = courses
        .update(created.details_id, Some(75), CoursePatch::default())
        .await;

    assert!(details.is_empty());
    assert_eq!(
        product,
        FieldDiff::from([("price", FieldValue::Decimal(BigDecimal::from(75)))])
    );
    let stored = courses
        .get(created.details_id, Visibility::IncludingUnpublished)
        .await
        .unwrap();
    assert_eq!(stored.product.price, BigDecimal::from(75));
    assert_eq!(stored.details.name, "X");
}

#[sqlx::test(migrations = "./migrations")]
async fn should_restore_deleted_pair_as_unpublished(pool: PgPool) {
    let courses = courses(pool);
    let id = courses.create("Rust ownership", 50).await.details_id;
    courses.coordinator.publish(&id.to_string()).await.unwrap();

    courses.coordinator.delete(&id.to_string()).await.unwrap();

    assert!(matches!(
        courses.get(id, Visibility::IncludingUnpublished).await,
        Err(CatalogError::NotFound)
    ));
    let deleted = courses.get(id, Visibility::IncludingDeleted).await.unwrap();
    assert!(deleted.details.deleted_at.is_some());
    assert!(!deleted.details.in_stock);
    assert!(!deleted.product.in_stock);

    RestoreSellableUseCase::execute(&courses.coordinator, &id.to_string())
        .await
        .unwrap();

    let restored = courses.get(id, Visibility::IncludingUnpublished).await.unwrap();
    assert!(restored.details.deleted_at.is_none());
    assert!(restored.product.deleted_at.is_none());
    assert!(!restored.details.in_stock);
    assert!(!restored.product.in_stock);
}

#[sqlx::test(migrations = "./migrations")]
async fn should_report_not_found_when_purging_unknown_pair(pool: PgPool) {
    let courses = courses(pool);

    let result = courses
        .coordinator
        .delete_permanent(&Uuid::new_v4().to_string())
        .await;

    assert!(matches!(result, Err(CatalogError::NotFound)));
}

#[sqlx::test(migrations = "./migrations")]
async fn should_purge_only_unpublished_pairs(pool: PgPool) {
    let courses = courses(pool);
    let id = courses.create("Rust ownership", 50).await.details_id;
    courses.add_image(id, "img_0").await.unwrap();
    courses.coordinator.publish(&id.to_string()).await.unwrap();

    let published = courses.coordinator.delete_permanent(&id.to_string()).await;
    assert!(matches!(published, Err(CatalogError::NotFound)));
    assert!(courses.get(id, Visibility::Published).await.is_ok());

    courses.coordinator.unpublish(&id.to_string()).await.unwrap();
    courses
        .coordinator
        .delete_permanent(&id.to_string())
        .await
        .unwrap();

    assert!(matches!(
        courses.get(id, Visibility::IncludingDeleted).await,
        Err(CatalogError::NotFound)
    ));
}

#[sqlx::test(migrations = "./migrations")]
async fn should_hold_image_count_at_five(pool: PgPool) {
    let courses = courses(pool);
    let id = courses.create("Rust ownership", 50).await.details_id;
    for n in 0..5 {
        courses.add_image(id, &format!("img_{n}")).await.unwrap();
    }

    let sixth = courses.add_image(id, "img_5").await;

    assert!(matches!(sixth, Err(AttachmentError::ImageLimitExceeded)));
    let stored = courses.get(id, Visibility::IncludingUnpublished).await.unwrap();
    assert_eq!(stored.details.media.uploaded_image_count, 5);
    assert_eq!(stored.details.media.images.len(), 5);
}

#[sqlx::test(migrations = "./migrations")]
async fn should_unlink_media_from_soft_deleted_owner(pool: PgPool) {
    let courses = courses(pool);
    let id = courses.create("Rust ownership", 50).await.details_id;
    courses
        .videos
        .add(AttachVideoParams {
            owner_id: id.to_string(),
            video_id: "vid_1".to_string(),
        })
        .await
        .unwrap();
    courses.add_image(id, "img_0").await.unwrap();
    courses.add_image(id, "img_1").await.unwrap();
    courses.coordinator.delete(&id.to_string()).await.unwrap();

    assert_eq!(courses.videos.unlink_video("vid_1").await.unwrap(), vec![id]);
    assert_eq!(courses.images.unlink_image("img_0").await.unwrap(), vec![id]);

    RestoreSellableUseCase::execute(&courses.coordinator, &id.to_string())
        .await
        .unwrap();
    let restored = courses.get(id, Visibility::IncludingUnpublished).await.unwrap();
    assert_eq!(restored.details.media.video, None);
    assert_eq!(restored.details.media.uploaded_image_count, 1);
    assert_eq!(restored.details.media.images.len(), 1);
    assert_eq!(restored.details.media.images[0].media_id, "img_1");
}

#[sqlx::test(migrations = "./migrations")]
async fn should_treat_unreferenced_media_as_nothing_to_unlink(pool: PgPool) {
    let courses = courses(pool);
    courses.create("Rust ownership", 50).await;

    assert!(courses.videos.unlink_video("vid_gone").await.unwrap().is_empty());
    assert!(courses.images.unlink_image("img_gone").await.unwrap().is_empty());
}
