// Axum API Server Module
//
// Purpose: serve the rendered portfolio page, its section fragments and the
// initial UI patches over HTTP. The document is loaded once at startup.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use moka::future::Cache;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::app::App;
use crate::config::SiteConfig;
use crate::interaction::InteractionController;
use crate::page::{Mount, Page};
use crate::render::PageGenerator;
use crate::web::handlers::pages;

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct ServerState {
    /// Booted application; cloned per page request (the store is shared).
    pub app: App,
    pub generator: Arc<PageGenerator>,
    /// Rendered HTML keyed by "page:index" / "section:{mount}".
    pub cache: Cache<String, String>,
}

impl ServerState {
    pub async fn new(config: &SiteConfig) -> Self {
        tracing::info!("Loading CV data...");
        let app = App::boot(config).await;
        Self::from_app(app)
    }

    pub fn from_app(app: App) -> Self {
        tracing::info!("Initializing Moka cache...");
        let cache = Cache::builder()
            .max_capacity(256)
            .time_to_live(Duration::from_secs(300))
            .build();
        let generator = Arc::new(PageGenerator::new(app.state().options.clone()));
        Self { app, generator, cache }
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: ServerState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Full page (askama)
        .route("/", get(pages::index_page))
        // JSON API
        .route("/api/cv", get(get_cv))
        .route("/api/sections/:mount", get(get_section))
        .route("/api/ui/initial", get(get_initial_patches))
        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn health_check(State(state): State<ServerState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "data_loaded": state.app.store().is_some(),
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// The whole CV document as loaded.
async fn get_cv(State(state): State<ServerState>) -> Result<Json<serde_json::Value>, AppError> {
    let data = state.app.store().ok_or(AppError::Unavailable)?;
    let value = serde_json::to_value(data).map_err(|e| AppError::Internal(e.to_string()))?;
    Ok(Json(value))
}

/// HTML fragment for one mount point. 204 when the section has no data.
async fn get_section(
    State(state): State<ServerState>,
    Path(name): Path<String>,
) -> Result<Response, AppError> {
    let mount = Mount::from_name(&name)
        .ok_or_else(|| AppError::NotFound(format!("Unknown mount point '{}'", name)))?;
    let data = state.app.store().ok_or(AppError::Unavailable)?;

    let cache_key = format!("section:{}", mount.name());
    if let Some(cached) = state.cache.get(&cache_key).await {
        tracing::debug!("Cache hit for {}", cache_key);
        return Ok(html_response(cached));
    }

    match state.generator.render_mount(data, mount) {
        Some(rendered) => {
            state.cache.insert(cache_key, rendered.html.clone()).await;
            Ok(html_response(rendered.html))
        }
        None => Ok(StatusCode::NO_CONTENT.into_response()),
    }
}

/// Initial collapse patches for a page carrying every mount point.
async fn get_initial_patches(State(state): State<ServerState>) -> impl IntoResponse {
    let mut page = Page::full();
    let done = state.generator.render_all(state.app.store(), &mut page);
    let patches = InteractionController::new().initialize(&done);
    Json(patches)
}

fn html_response(html: String) -> Response {
    ([(header::CONTENT_TYPE, "text/html; charset=utf-8")], html).into_response()
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    Unavailable,
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Unavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                "CV data not loaded".to_string(),
            ),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
