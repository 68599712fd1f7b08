//! Hackathon AI assistant web server
//!

use hackathon_ai_assistant::api;
use hackathon_ai_assistant::core::services::MyAssistantService;
use hackathon_ai_assistant::infrastructure::config::Settings;
use hackathon_ai_assistant::infrastructure::sessions::InMemorySessionRepository;

use anyhow::anyhow;
use axum::Router;
use axum::http::{HeaderValue, Method};
use axum::routing::get;
use di::{Injectable, ServiceCollection};
use di_axum::RouterServiceProviderExtensions;
use log::{info, warn};
use tokio::runtime::{Builder, Runtime};
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::services::ServeDir;

fn main() -> anyhow::Result<()> {
    // initialize tracing
    tracing_subscriber::fmt::init();

    let runtime: Runtime = Builder::new_multi_thread().enable_all().build()?;

    runtime.block_on(web_server_task())
}

async fn web_server_task() -> anyhow::Result<()> {
    let provider = ServiceCollection::new()
        .add(Settings::singleton())
        .add(InMemorySessionRepository::singleton())
        .add(MyAssistantService::scoped())
        .build_provider()
        .map_err(|e| anyhow!("invalid service configuration: {e:?}"))?;

    // same instance the services see
    let settings = provider.get_required::<Settings>();
    if settings.hf_token.is_none() {
        warn!("HF_TOKEN is not set, only the offline demo mode can be loaded");
    }

    let origins = cors_origins(&settings.allowed_origins);

    let app = Router::new()
        .route("/", get(api::pages::index))
        .nest_service(
            "/static",
            ServiceBuilder::new().service(ServeDir::new("static")),
        )
        .nest("/api", api::assistant::router())
        .layer(
            CorsLayer::new()
                .allow_headers(Any)
                .allow_methods([Method::GET, Method::POST])
                .allow_origin(AllowOrigin::list(origins)),
        )
        .with_provider(provider);

    let listener = tokio::net::TcpListener::bind(&settings.listen_addr).await?;
    info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    info!("Shutting down...");

    Ok(())
}

fn cors_origins(origins: &[String]) -> Vec<HeaderValue> {
    origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("ignoring invalid CORS origin `{origin}`");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cors_origins_skips_invalid_entries() {
        let origins = vec![
            "http://localhost:3000".to_owned(),
            "http://bad\norigin".to_owned(),
        ];

        let parsed = cors_origins(&origins);

        assert_eq!(parsed, vec![HeaderValue::from_static("http://localhost:3000")]);
    }
}
