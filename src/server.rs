// Axum Server Module
//
// Routes:
//   GET /, /index.html        catalog page
//   GET /project.html?id=...  detail page
//   GET /data/projects.json   raw project document
//   GET /health               liveness
//   fallback                  static assets (when a static dir is configured)

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, services::ServeDir, trace::TraceLayer};

use crate::config::ServerConfig;
use crate::error::AppError;
use crate::source::CatalogSource;
use crate::web::handlers::pages::{catalog_page, project_page};

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub source: Arc<CatalogSource>,
    pub static_dir: Option<PathBuf>,
}

impl AppState {
    pub fn new(source: CatalogSource) -> Self {
        Self {
            source: Arc::new(source),
            static_dir: None,
        }
    }

    pub fn from_config(config: &ServerConfig) -> Self {
        Self {
            source: Arc::new(CatalogSource::new(config.data_path.clone())),
            static_dir: config.static_dir.clone(),
        }
    }

    pub fn with_static_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.static_dir = Some(dir.into());
        self
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    let static_dir = state.static_dir.clone();

    let router = Router::new()
        // Pages
        .route("/", get(catalog_page))
        .route("/index.html", get(catalog_page))
        .route("/project.html", get(project_page))

        // Data document, same relative path the pages were built against
        .route("/data/projects.json", get(raw_projects))

        // Health check
        .route("/health", get(health_check));

    let router = match static_dir {
        Some(dir) => router.fallback_service(ServeDir::new(dir)),
        None => router,
    };

    router
        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

async fn raw_projects(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let raw = state.source.load_raw().await.map_err(|e| {
        tracing::error!("Error reading project data: {}", e);
        AppError::from(e)
    })?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        raw,
    ))
}
