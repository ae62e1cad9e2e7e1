use std::sync::Arc;

use business::application::catalog::coordinator::LifecycleCoordinator;
use business::application::media::attachments::AttachmentsQuery;
use business::application::media::images::ImageManager;
use business::application::media::videos::VideoManager;
use business::domain::catalog::details::SellableDetails;
use business::domain::logger::Logger;
use business::domain::media::owner::OwnerRepository;
use business::domain::media::services::MediaCatalog;
use business::domain::product::repository::ProductRepository;

use logger::TracingLogger;
use media_service::client::MediaServiceClient;
use media_service::video_catalog::VideoCatalogHttp;
use persistence::course::entity::CourseTable;
use persistence::details::repository::DetailsRepositoryPostgres;
use persistence::details::table::DetailsTable;
use persistence::media::owner_adapter::OwnerAdapterPostgres;
use persistence::product::repository::ProductRepositoryPostgres;
use persistence::seminar::entity::SeminarTable;
use persistence::training_session::entity::TrainingSessionTable;
use persistence::transaction::{PgTransactionManager, PgTx};

use crate::api::catalog::handlers::FamilyHandlers;
use crate::api::course::routes::CourseApi;
use crate::api::health::routes::Api as HealthApi;
use crate::api::media::routes::{FamilyMedia, MediaApi};
use crate::api::seminar::routes::SeminarApi;
use crate::api::training_session::routes::TrainingSessionApi;
use crate::config::media_service_config::MediaServiceConfig;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub course_api: CourseApi,
    pub training_session_api: TrainingSessionApi,
    pub seminar_api: SeminarApi,
    pub media_api: MediaApi,
}

/// Adapters shared by every Details family.
struct SharedAdapters {
    transactions: Arc<PgTransactionManager>,
    products: Arc<dyn ProductRepository<PgTx>>,
    media: Arc<dyn MediaCatalog>,
    logger: Arc<dyn Logger>,
}

impl SharedAdapters {
    /// Wires the coordinator and attachment managers of family `F`.
    fn family<F: DetailsTable>(&self) -> (FamilyHandlers<F::Details>, FamilyMedia) {
        let details = Arc::new(DetailsRepositoryPostgres::<F>::new());
        let owners: Arc<dyn OwnerRepository<PgTx, Owner = F::Details>> =
            Arc::new(OwnerAdapterPostgres::new(details.clone()));

        let coordinator = Arc::new(LifecycleCoordinator::<_, F::Details>::new(
            self.transactions.clone(),
            self.products.clone(),
            details,
            self.logger.clone(),
        ));
        let images = Arc::new(ImageManager::new(
            self.transactions.clone(),
            owners.clone(),
            self.logger.clone(),
        ));
        let videos = Arc::new(VideoManager::new(
            self.transactions.clone(),
            owners.clone(),
            self.media.clone(),
            self.logger.clone(),
        ));
        let attachments = Arc::new(AttachmentsQuery::new(
            self.transactions.clone(),
            owners,
            self.logger.clone(),
        ));

        let handlers = FamilyHandlers {
            create: coordinator.clone(),
            update: coordinator.clone(),
            get: coordinator.clone(),
            list: coordinator.clone(),
            publication: coordinator.clone(),
            delete: coordinator.clone(),
            restore: coordinator,
            images: images.clone(),
            videos: videos.clone(),
            attachments,
        };
        let media = FamilyMedia {
            details_type: F::Details::DETAILS_TYPE,
            images,
            videos,
        };
        (handlers, media)
    }
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool, media_service: &MediaServiceConfig) -> anyhow::Result<Self> {
        let client = MediaServiceClient::new(&media_service.base_url, media_service.timeout)?;

        let shared = SharedAdapters {
            transactions: Arc::new(PgTransactionManager::new(pool)),
            products: Arc::new(ProductRepositoryPostgres::new()),
            media: Arc::new(VideoCatalogHttp::new(client)),
            logger: Arc::new(TracingLogger),
        };

        let (courses, course_media) = shared.family::<CourseTable>();
        let (training_sessions, training_session_media) = shared.family::<TrainingSessionTable>();
        let (seminars, seminar_media) = shared.family::<SeminarTable>();

        Ok(Self {
            health_api: HealthApi::new(),
            course_api: CourseApi::new(courses),
            training_session_api: TrainingSessionApi::new(training_sessions),
            seminar_api: SeminarApi::new(seminars),
            media_api: MediaApi::new(vec![course_media, training_session_media, seminar_media]),
        })
    }
}
