use poem::endpoint::StaticFilesEndpoint;
use poem::{
    EndpointExt, IntoEndpoint, Route, Server as PoemServer, listener::TcpListener,
    middleware::Tracing,
};
use poem_openapi::OpenApiService;

use crate::api::error::error_envelope;
use crate::api::health::routes::HealthApi;
use crate::api::product::routes::ProductApi;
use crate::config::{app_config::AppConfig, frontend_config::FrontendConfig};
use crate::setup::dependency_injection::DependencyContainer;

pub struct Server;

impl Server {
    fn service(
        container: DependencyContainer,
        server_url: &str,
    ) -> OpenApiService<(HealthApi, ProductApi), ()> {
        OpenApiService::new(
            (container.health_api, container.product_api),
            "Product Catalog API",
            env!("CARGO_PKG_VERSION"),
        )
        .server(server_url)
    }

    /// Serves the built frontend; unknown paths fall back to `index.html` so the
    /// client-side router can handle them.
    pub fn frontend(config: &FrontendConfig) -> StaticFilesEndpoint {
        StaticFilesEndpoint::new(config.dist_dir.clone())
            .index_file("index.html")
            .fallback_to_index()
    }

    /// `/api` answers every failure, including ones raised by the framework,
    /// with the failure envelope. Everything else goes to the frontend.
    pub fn routes(
        container: DependencyContainer,
        server_url: &str,
        frontend: &FrontendConfig,
    ) -> Route {
        let api_service = Self::service(container, server_url);
        let ui = api_service.swagger_ui();
        let spec = api_service.spec_endpoint();
        Route::new()
            .nest(
                "/api",
                api_service.into_endpoint().catch_all_error(error_envelope),
            )
            .nest("/docs", ui)
            .at("/openapi.json", spec)
            .nest("/", Self::frontend(frontend))
    }

    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        if !config.frontend.index_file().exists() {
            tracing::warn!(
                "Frontend entry page not found at {}",
                config.frontend.index_file().display()
            );
        }
        let app = Self::routes(container, &config.server.api_url(), &config.frontend)
            .with(config.cors)
            .with(Tracing);
        tracing::info!("Server started at http://{}", addr);
        tracing::info!("Swagger UI at http://{}/docs", addr);
        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }
}
