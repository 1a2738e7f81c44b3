pub mod auth;
pub mod error;
pub mod handlers;
pub mod location;
pub mod models;
pub mod openapi;
pub mod orchestrator;
pub mod pagination;
pub mod settings;
pub mod store;
pub mod time_codec;
pub mod transform;
pub mod wizard;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Router,
    routing::{get, put},
};
use handlers::{create_class, healthz_live, healthz_ready, list_classes, root, update_class};
use tower_http::LatencyUnit;
use tower_http::cors::CorsLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::openapi::ApiDoc;
use crate::settings::Settings;
use crate::store::RestStore;

#[derive(Clone)]
pub struct AppState {
    pub settings: Settings,
    pub store: Arc<RestStore>,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        let store = RestStore::new(settings.store_url.clone(), settings.store_api_key.clone());
        Self {
            settings,
            store: Arc::new(store),
        }
    }
}

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::from_env()?;

    let env_filter = if settings.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .without_time()
        .init();

    let state = AppState::new(settings);
    let addr = SocketAddr::from(([0, 0, 0, 0], state.settings.port));
    let app = build_router(state);

    info!("Starting Tutor Classes API on {addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

pub fn build_router(state: AppState) -> Router {
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        );

    let mut router = Router::new()
        .route("/", get(root))
        .route("/healthz/live", get(healthz_live))
        .route("/healthz/ready", get(healthz_ready))
        .route("/classes", get(list_classes).post(create_class))
        .route("/classes/{id}", put(update_class))
        .with_state(state.clone());

    if state.settings.enable_swagger {
        let openapi = ApiDoc::openapi();
        let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi);
        router = router.merge(swagger);
    }

    router.layer(CorsLayer::permissive()).layer(trace_layer)
}
