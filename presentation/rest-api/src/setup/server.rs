use poem::{
    EndpointExt, Route, Server as PoemServer, endpoint::StaticFilesEndpoint,
    listener::TcpListener, middleware::Tracing,
};
use poem_openapi::OpenApiService;

use crate::{
    config::{app_config::AppConfig, storage_config::IMAGES_ROUTE},
    setup::dependency_injection::DependencyContainer,
};

pub struct Server;

impl Server {
    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let base_url = config.server.base_url();
        let api_service = OpenApiService::new(
            (
                container.health_api,
                container.food_item_api,
                container.expiry_api,
                container.category_api,
            ),
            "Pantry API",
            env!("CARGO_PKG_VERSION"),
        )
        .server(base_url.clone());
        let ui = api_service.swagger_ui();
        let spec = api_service.spec_endpoint();
        let images = StaticFilesEndpoint::new(config.storage.root_dir.clone());
        let app = Route::new()
            .nest("/", api_service)
            .nest(IMAGES_ROUTE, images)
            .nest("/docs", ui)
            .nest("/openapi.json", spec)
            .with(config.cors)
            .with(Tracing);
        tracing::info!("Server running at {base_url}");
        tracing::info!("Swagger UI at {base_url}/docs");
        tracing::info!(
            "Serving images from {} at {base_url}{IMAGES_ROUTE}",
            config.storage.root_dir.display()
        );
        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }
}
