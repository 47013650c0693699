use crate::{
    routes::apply_routes,
    services::stop_monitoring::stop_monitoring_service::{
        StopMonitoringService, StopMonitoringServiceConfig,
    },
    types::{
        app_config::{AppConfig, ConfigError},
        app_state::AppState,
    },
};
use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn gen_app(config: AppConfig) -> Result<Router, ConfigError> {
    let state = AppState {
        stop_monitoring_service: StopMonitoringService::new(StopMonitoringServiceConfig {
            api_key: config.bustime_key,
            host: config.bustime_host,
            timeout: config.bustime_timeout,
        })
        .map_err(ConfigError::HttpClient)?,
    };

    Ok(apply_routes(Router::new())
        .route("/health", get(health))
        .layer(CorsLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}

async fn health() -> &'static str {
    "OK"
}

#[cfg(test)]
pub struct MockApp {
    pub app: Router,
    pub bustime_server: mockito::ServerGuard,
}

#[cfg(test)]
pub async fn gen_mock_app() -> MockApp {
    let bustime_server = mockito::Server::new_async().await;

    let app = gen_app(AppConfig {
        bustime_host: bustime_server.url(),
        bustime_key: "key".to_string(),
        bustime_timeout: std::time::Duration::from_secs(5),
        bind_address: "127.0.0.1:0".to_string(),
    })
    .unwrap();

    MockApp {
        app,
        bustime_server,
    }
}
