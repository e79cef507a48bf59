#![deny(missing_docs)]
//! Diligence core library.
//!
//! This crate contains the analysis data model, the fact provider seam, and
//! the scoring and recommendation rules shared by the server and the CLI.

/// Analysis orchestration.
pub mod analysis;
pub mod domain;
pub mod error;
pub mod facts;
pub mod recommendations;
pub mod report;
pub mod scoring;

pub use analysis::{perform_analysis, timestamp};
pub use domain::{
    AnalysisData, ClaimStatus, CodeQuality, CodeStructure, ContentAnalysis, DevelopmentMetrics,
    FeatureMap, ImplementationQuality, NewUser, PerformanceAnalysis, Recommendation,
    RecommendationKind, RiskIndicator, RiskLevel, Severity, TechnicalClaim, TechnicalValidation,
    User, VersionProgression, WebsiteAnalysis,
};
pub use error::{DiligenceError, Result};
pub use facts::{FactFuture, FactProvider, StaticFacts};
pub use recommendations::generate_recommendations;
pub use report::{DEFAULT_REPORT_FILE, render_json, render_markdown_report, render_text_report};
pub use scoring::{PROMISING_THRESHOLD, SOUND_THRESHOLD, ScoreLevel, calculate_technical_score};
