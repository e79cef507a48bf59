//! OpenAPI specification for Diligence server.

use utoipa::OpenApi;

use diligence_core::{
    AnalysisData, ClaimStatus, CodeQuality, CodeStructure, ContentAnalysis, DevelopmentMetrics,
    ImplementationQuality, PerformanceAnalysis, Recommendation, RecommendationKind, RiskIndicator,
    RiskLevel, Severity, TechnicalClaim, TechnicalValidation, WebsiteAnalysis,
};

use crate::routes::{ErrorResponse, HealthResponse, NotFoundResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::analysis,
        crate::routes::openapi_json
    ),
    components(
        schemas(
            AnalysisData,
            CodeStructure,
            CodeQuality,
            ImplementationQuality,
            DevelopmentMetrics,
            TechnicalValidation,
            TechnicalClaim,
            ClaimStatus,
            PerformanceAnalysis,
            Recommendation,
            RecommendationKind,
            WebsiteAnalysis,
            ContentAnalysis,
            RiskIndicator,
            Severity,
            RiskLevel,
            HealthResponse,
            ErrorResponse,
            NotFoundResponse
        )
    ),
    tags(
        (name = "analysis", description = "Technical analysis"),
        (name = "system", description = "System endpoints")
    )
)]
/// OpenAPI specification for the Diligence server.
pub struct ApiDoc;
