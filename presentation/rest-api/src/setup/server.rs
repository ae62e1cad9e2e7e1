use poem::{EndpointExt, Route, Server as PoemServer, listener::TcpListener, middleware::Tracing};
use poem_openapi::OpenApiService;

use crate::api::course::routes::CourseApi;
use crate::api::health::routes::Api as HealthApi;
use crate::api::media::routes::MediaApi;
use crate::api::seminar::routes::SeminarApi;
use crate::api::training_session::routes::TrainingSessionApi;
use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

type CatalogApis = (HealthApi, CourseApi, TrainingSessionApi, SeminarApi, MediaApi);

pub struct Server;

impl Server {
    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let service = Self::openapi(container, &addr);
        let docs = service.swagger_ui();
        let spec = service.spec_endpoint();

        let app = Route::new()
            .nest("/", service)
            .nest("/docs", docs)
            .nest("/openapi.json", spec)
            .with(config.cors)
            .with(Tracing);

        tracing::info!(%addr, docs = %format!("http://{addr}/docs"), "catalog service listening");
        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }

    fn openapi(container: DependencyContainer, addr: &str) -> OpenApiService<CatalogApis, ()> {
        let apis = (
            container.health_api,
            container.course_api,
            container.training_session_api,
            container.seminar_api,
            container.media_api,
        );
        OpenApiService::new(apis, "Catalog Service API", env!("CARGO_PKG_VERSION"))
            .server(format!("http://{addr}"))
    }
}
