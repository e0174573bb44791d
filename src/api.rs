//! HTTP surface: request/response types, handlers, router and OpenAPI document.

use std::any::Any;

use axum::{
    extract::rejection::JsonRejection,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any as AnyOrigin, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

use crate::analyzer::{self, Analysis, Sentiment};
use crate::config::Config;
use crate::error::{AppError, ErrorResponse};
use crate::search::{self, Video};

#[derive(OpenApi)]
#[openapi(
    paths(search_videos, analyze_video, health),
    components(
        schemas(
            SearchRequest,
            SearchResponse,
            AnalyzeRequest,
            AnalyzeResponse,
            HealthResponse,
            ErrorResponse,
            Video,
            Analysis,
            Sentiment
        )
    ),
    tags(
        (name = "videos", description = "Video search and content analysis"),
        (name = "system", description = "Service health")
    )
)]
pub struct ApiDoc;

const SEARCH_FAILED: &str = "Search failed";
const ANALYSIS_FAILED: &str = "Analysis failed";

// Text fields are loosely typed: any JSON value is accepted and read through
// `text_field`, so only absent or falsy values produce a 400.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SearchRequest {
    #[schema(value_type = Option<String>)]
    pub query: Option<Value>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SearchResponse {
    pub videos: Vec<Video>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    #[schema(value_type = Option<String>)]
    pub video_id: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub title: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub description: Option<Value>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AnalyzeResponse {
    pub analysis: Analysis,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}

/// Builds the application router.
pub fn router(config: &Config) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods(AnyOrigin)
        .allow_headers(AnyOrigin);

    let mut app = Router::new()
        .route("/health", get(health))
        .route(
            "/api/search",
            post(search_videos)
                .layer(CatchPanicLayer::custom(|err| panic_response(SEARCH_FAILED, err))),
        )
        .route(
            "/api/analyze",
            post(analyze_video)
                .layer(CatchPanicLayer::custom(|err| panic_response(ANALYSIS_FAILED, err))),
        );

    if config.swagger {
        app = app.merge(
            SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()),
        );
    }

    app.fallback_service(ServeDir::new(&config.static_dir))
        .layer(CatchPanicLayer::custom(|err| panic_response("Internal server error", err)))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Search videos for a query
///
/// Returns five placeholder results with the query interpolated.
#[utoipa::path(
    post,
    path = "/api/search",
    request_body = SearchRequest,
    responses(
        (status = 200, description = "Search results", body = SearchResponse),
        (status = 400, description = "Query missing or empty", body = ErrorResponse),
        (status = 500, description = "Search failed", body = ErrorResponse)
    ),
    tag = "videos"
)]
pub async fn search_videos(
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<SearchResponse>, AppError> {
    let Json(req) = payload.map_err(|e| AppError::internal(SEARCH_FAILED, e))?;
    let query = text_field(req.query).unwrap_or_default();

    tracing::info!("🔎 Search request: {:?}", query);
    let videos = search::search(&query)?;

    Ok(Json(SearchResponse { videos }))
}

/// Analyze a video's title and description
#[utoipa::path(
    post,
    path = "/api/analyze",
    request_body = AnalyzeRequest,
    responses(
        (status = 200, description = "Content analysis", body = AnalyzeResponse),
        (status = 400, description = "Video ID or title missing", body = ErrorResponse),
        (status = 500, description = "Analysis failed", body = ErrorResponse)
    ),
    tag = "videos"
)]
pub async fn analyze_video(
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let Json(req) = payload.map_err(|e| AppError::internal(ANALYSIS_FAILED, e))?;

    let (video_id, title) = match (text_field(req.video_id), text_field(req.title)) {
        (Some(video_id), Some(title)) => (video_id, title),
        _ => {
            return Err(AppError::InvalidArgument(
                "Video ID and title are required".to_string(),
            ))
        }
    };
    let description = text_field(req.description).unwrap_or_default();

    tracing::info!("🧠 Analyzing video {}", video_id);
    let analysis = analyzer::analyze(&title, &description);
    tracing::debug!(
        video_id = %video_id,
        sentiment = ?analysis.sentiment,
        topics = analysis.topics.len(),
        "analysis complete"
    );

    Ok(Json(AnalyzeResponse { analysis }))
}

/// Service health
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is up", body = HealthResponse)),
    tag = "system"
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Reads a loosely typed text field. Absent, null, `false`, `0` and `""` count
/// as missing; whitespace is kept as-is. Other values use their text form.
fn text_field(value: Option<Value>) -> Option<String> {
    match value? {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) => Some(s).filter(|s| !s.is_empty()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::Number(n) => Some(n.to_string()),
        other => Some(other.to_string()),
    }
}

fn panic_response(context: &'static str, err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    AppError::internal(context, anyhow::anyhow!(detail)).into_response()
}
