use std::sync::Arc;

use async_trait::async_trait;
use bigdecimal::BigDecimal;
use chrono::Utc;
use mockall::mock;
use uuid::Uuid;

use crate::domain::catalog::repository::DetailsRepository;
use crate::domain::course::model::Course;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::media::errors::MediaCatalogError;
use crate::domain::media::model::{Image, MediaAttachments, VideoRef};
use crate::domain::media::owner::OwnerRepository;
use crate::domain::media::services::MediaCatalog;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::value_objects::DetailsType;
use crate::domain::shared::diff::FieldDiff;
use crate::domain::shared::value_objects::{Page, Visibility};
use crate::domain::transaction::TransactionManager;

/// Stand-in transaction handle; the mocks never look inside it.
#[derive(Debug, Default)]
pub struct TestTx;

mock! {
    pub Transactions {}

    #[async_trait]
    impl TransactionManager for Transactions {
        type Tx = TestTx;

        async fn begin(&self) -> Result<TestTx, RepositoryError>;
        async fn commit(&self, tx: TestTx) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub ProductRepo {}

    #[async_trait]
    impl ProductRepository<TestTx> for ProductRepo {
        async fn get_by_details(&self, tx: &mut TestTx, details_id: Uuid, visibility: Visibility) -> Result<Product, RepositoryError>;
        async fn lock_by_details(&self, tx: &mut TestTx, details_id: Uuid) -> Result<Product, RepositoryError>;
        async fn create(&self, tx: &mut TestTx, product: &Product) -> Result<(), RepositoryError>;
        async fn set_published_by_details(&self, tx: &mut TestTx, details_id: Uuid, published: bool) -> Result<u64, RepositoryError>;
        async fn update_fields_by_details(&self, tx: &mut TestTx, details_id: Uuid, diff: &FieldDiff) -> Result<u64, RepositoryError>;
        async fn soft_delete_by_details(&self, tx: &mut TestTx, details_id: Uuid) -> Result<u64, RepositoryError>;
        async fn permanent_delete_by_details(&self, tx: &mut TestTx, details_id: Uuid) -> Result<u64, RepositoryError>;
        async fn restore_by_details(&self, tx: &mut TestTx, details_id: Uuid) -> Result<u64, RepositoryError>;
    }
}

mock! {
    pub CourseRepo {}

    #[async_trait]
    impl DetailsRepository<TestTx> for CourseRepo {
        type Details = Course;

        async fn get(&self, tx: &mut TestTx, id: Uuid, visibility: Visibility) -> Result<Course, RepositoryError>;
        async fn lock_including_unpublished(&self, tx: &mut TestTx, id: Uuid) -> Result<Course, RepositoryError>;
        async fn list(&self, tx: &mut TestTx, visibility: Visibility, page: Page) -> Result<Vec<Course>, RepositoryError>;
        async fn count(&self, tx: &mut TestTx, visibility: Visibility) -> Result<u64, RepositoryError>;
        async fn create(&self, tx: &mut TestTx, details: &Course) -> Result<(), RepositoryError>;
        async fn set_published(&self, tx: &mut TestTx, id: Uuid, published: bool) -> Result<u64, RepositoryError>;
        async fn update_fields(&self, tx: &mut TestTx, id: Uuid, diff: &FieldDiff) -> Result<u64, RepositoryError>;
        async fn soft_delete(&self, tx: &mut TestTx, id: Uuid) -> Result<u64, RepositoryError>;
        async fn permanent_delete(&self, tx: &mut TestTx, id: Uuid) -> Result<u64, RepositoryError>;
        async fn restore(&self, tx: &mut TestTx, id: Uuid) -> Result<u64, RepositoryError>;
    }
}

mock! {
    pub CourseOwners {}

    #[async_trait]
    impl OwnerRepository<TestTx> for CourseOwners {
        type Owner = Course;

        fn owner_type(&self) -> DetailsType;
        async fn lock_owner(&self, tx: &mut TestTx, id: Uuid) -> Result<Course, RepositoryError>;
        async fn find_owners(&self, tx: &mut TestTx, ids: &[Uuid]) -> Result<Vec<Course>, RepositoryError>;
        async fn find_owners_by_image(&self, tx: &mut TestTx, media_id: &str) -> Result<Vec<Course>, RepositoryError>;
        async fn find_owners_by_video(&self, tx: &mut TestTx, video: &VideoRef) -> Result<Vec<Course>, RepositoryError>;
        async fn append_image(&self, tx: &mut TestTx, owner_id: Uuid, image: &Image) -> Result<u64, RepositoryError>;
        async fn remove_image(&self, tx: &mut TestTx, owner_id: Uuid, media_id: &str) -> Result<u64, RepositoryError>;
        async fn remove_image_from_owners(&self, tx: &mut TestTx, owner_ids: &[Uuid], media_id: &str) -> Result<u64, RepositoryError>;
        async fn set_video(&self, tx: &mut TestTx, owner_id: Uuid, video: &VideoRef) -> Result<u64, RepositoryError>;
        async fn clear_video(&self, tx: &mut TestTx, owner_id: Uuid) -> Result<u64, RepositoryError>;
        async fn clear_video_from_owners(&self, tx: &mut TestTx, owner_ids: &[Uuid], video: &VideoRef) -> Result<u64, RepositoryError>;
    }
}

mock! {
    pub Media {}

    #[async_trait]
    impl MediaCatalog for Media {
        async fn video_exists(&self, video: &VideoRef) -> Result<bool, MediaCatalogError>;
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

/// Expects one transaction that gets committed.
pub fn committing_transactions() -> MockTransactions {
    let mut transactions = MockTransactions::new();
    transactions.expect_begin().times(1).returning(|| Ok(TestTx));
    transactions.expect_commit().times(1).returning(|_| Ok(()));
    transactions
}

/// Expects one transaction that is dropped without commit.
pub fn rolled_back_transactions() -> MockTransactions {
    let mut transactions = MockTransactions::new();
    transactions.expect_begin().times(1).returning(|| Ok(TestTx));
    transactions.expect_commit().never();
    transactions
}

/// Expects no transaction at all, for requests rejected up front.
pub fn unused_transactions() -> MockTransactions {
    let mut transactions = MockTransactions::new();
    transactions.expect_begin().never();
    transactions.expect_commit().never();
    transactions
}

pub fn course(id: Uuid) -> Course {
    let now = Utc::now();
    Course {
        id,
        name: "Async Rust".to_string(),
        short_description: None,
        description: "Futures, executors and pinning.".to_string(),
        duration_hours: 12,
        access_days: 365,
        in_stock: false,
        deleted_at: None,
        media: MediaAttachments::default(),
        created_at: now,
        updated_at: now,
    }
}

pub fn course_with_images(id: Uuid, media_ids: &[&str]) -> Course {
    let images = media_ids.iter().map(|media_id| image(media_id)).collect::<Vec<_>>();
    Course {
        media: MediaAttachments {
            uploaded_image_count: images.len() as u32,
            images,
            video: None,
        },
        ..course(id)
    }
}

pub fn course_product(details_id: Uuid, price: i64) -> Product {
    let now = Utc::now();
    Product::from_repository(
        Uuid::new_v4(),
        BigDecimal::from(price),
        details_id,
        DetailsType::Course,
        false,
        None,
        now,
        now,
    )
}

pub fn image(media_id: &str) -> Image {
    Image {
        media_id: media_id.to_string(),
        url: format!("http://cdn.example.com/{media_id}.png"),
        secure_url: format!("https://cdn.example.com/{media_id}.png"),
        public_id: format!("catalog/{media_id}"),
        created_at: Utc::now(),
    }
}
