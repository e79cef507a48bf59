//! HTTP handlers for Diligence server.

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::http::Method;
use actix_web::{HttpRequest, HttpResponse, Responder, get, route, web};
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

use diligence_core::{FactProvider, perform_analysis, timestamp};

use crate::openapi::ApiDoc;

const ANALYSIS_FAILED: &str = "Failed to perform analysis";

const CORS_METHODS: [&str; 6] = ["GET", "OPTIONS", "PATCH", "DELETE", "POST", "PUT"];

const CORS_HEADERS: [&str; 9] = [
    "X-CSRF-Token",
    "X-Requested-With",
    "Accept",
    "Accept-Version",
    "Content-Length",
    "Content-MD5",
    "Content-Type",
    "Date",
    "X-Api-Version",
];

/// Shared application state for handlers.
#[derive(Clone)]
pub struct AppState {
    /// Source of analysis facts.
    pub facts: Arc<dyn FactProvider + Send + Sync>,
    /// Include failure details in error envelopes.
    pub expose_errors: bool,
}

impl AppState {
    /// Create handler state around a fact provider.
    pub fn new(facts: Arc<dyn FactProvider + Send + Sync>, expose_errors: bool) -> Self {
        Self {
            facts,
            expose_errors,
        }
    }
}

/// Liveness payload.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Always "ok".
    pub status: String,
    /// ISO-8601 response timestamp.
    pub timestamp: String,
}

/// Error response payload.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message.
    pub error: String,
    /// Failure details, only in development mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Unknown API route payload.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct NotFoundResponse {
    /// Always "Not Found".
    pub error: String,
    /// Requested path.
    pub path: String,
}

/// Register every `/api` route, including the OPTIONS and 404 catch-alls.
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(health)
        .service(analysis)
        .service(openapi_json)
        .service(api_fallback("/api"))
        .service(api_fallback("/api/{tail:.*}"));
}

fn api_fallback(path: &str) -> actix_web::Resource {
    web::resource(path)
        .route(web::method(Method::OPTIONS).to(preflight))
        .route(web::route().to(api_not_found))
}

/// CORS policy shared by every route.
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .send_wildcard()
        .allowed_methods(CORS_METHODS)
        .allowed_headers(CORS_HEADERS)
        .max_age(3600)
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is alive", body = HealthResponse)
    ),
    tag = "system"
)]
#[route("/api/health", method = "GET", method = "HEAD")]
/// Report liveness without touching the analysis pipeline.
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        timestamp: timestamp(),
    })
}

#[utoipa::path(
    get,
    path = "/analysis",
    responses(
        (status = 200, description = "Current analysis", body = diligence_core::AnalysisData),
        (status = 500, description = "Analysis failed", body = ErrorResponse)
    ),
    tag = "analysis"
)]
#[route("/api/analysis", method = "GET", method = "HEAD")]
/// Run the analysis and return the full payload.
pub async fn analysis(state: web::Data<AppState>) -> impl Responder {
    match perform_analysis(&*state.facts).await {
        Ok(data) => HttpResponse::Ok().json(data),
        Err(err) => {
            log::error!("analysis error: {err}");
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: ANALYSIS_FAILED.to_string(),
                details: state.expose_errors.then(|| err.to_string()),
            })
        }
    }
}

#[utoipa::path(
    get,
    path = "/openapi.json",
    responses(
        (status = 200, description = "OpenAPI document", body = serde_json::Value)
    ),
    tag = "system"
)]
#[get("/api/openapi.json")]
/// Serve the OpenAPI document.
pub async fn openapi_json() -> impl Responder {
    HttpResponse::Ok().json(ApiDoc::openapi())
}

async fn preflight() -> HttpResponse {
    HttpResponse::Ok().finish()
}

async fn api_not_found(req: HttpRequest) -> HttpResponse {
    HttpResponse::NotFound().json(NotFoundResponse {
        error: "Not Found".to_string(),
        path: req.path().to_string(),
    })
}
