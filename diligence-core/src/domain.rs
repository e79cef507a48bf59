//! Domain entities for Diligence.
//!
//! Every record serializes to the camelCase JSON consumed by dashboards, and
//! every enum-like field is a closed enum so out-of-domain values are rejected
//! when a payload is parsed.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Feature name mapped to whether an implementation was found.
pub type FeatureMap = BTreeMap<String, bool>;

/// Version label mapped to a description of what it introduced.
pub type VersionProgression = BTreeMap<String, String>;

/// Code quality summary for the analysed repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CodeQuality {
    /// Whether the main source file parses.
    pub syntax_valid: bool,
    /// Whether the main source file compiles.
    pub compilation_success: bool,
    /// Documentation level descriptor.
    pub documentation: String,
    /// Architecture descriptor.
    pub architecture: String,
}

/// Structural facts about the analysed repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CodeStructure {
    /// Number of files in the repository.
    pub total_files: u32,
    /// Primary source file.
    pub main_file: String,
    /// Total line count of the main file.
    pub total_lines: u32,
    /// Lines containing code.
    pub code_lines: u32,
    /// Lines containing comments.
    pub comment_lines: u32,
    /// Number of classes declared.
    pub classes: u32,
    /// Number of functions declared.
    pub functions: u32,
    /// Number of import statements.
    pub imports: u32,
    /// Claimed features and whether each one is implemented.
    pub implementations: FeatureMap,
    /// Code quality summary.
    pub code_quality: CodeQuality,
}

/// Development process metrics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DevelopmentMetrics {
    /// Features with an implementation.
    pub features_implemented: u32,
    /// Theoretical claims made by the project.
    pub theoretical_claims: u32,
    /// Claims backed by an implementation.
    pub actual_implementations: u32,
    /// Test coverage descriptor.
    pub test_coverage: String,
    /// Example availability descriptor.
    pub examples: String,
}

/// Implementation completeness facts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImplementationQuality {
    /// Share of declared functionality that is implemented, in `[0, 1]`.
    pub implementation_ratio: f64,
    /// Placeholder (`pass`) statements found.
    pub pass_statements: u32,
    /// Whether placeholder code dominates any component.
    pub placeholder_code: bool,
    /// Framework tensor operations found.
    pub py_torch_operations: u32,
    /// Mathematical operations found.
    pub mathematical_operations: u32,
    /// Complexity descriptor.
    pub code_complexity: String,
    /// Maturity descriptor.
    pub architectural_maturity: String,
    /// Description of each released version.
    pub version_progression: VersionProgression,
    /// Development process metrics.
    pub development_metrics: DevelopmentMetrics,
}

/// Validation outcome for a technical claim.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClaimStatus {
    /// Code evidence supports the claim.
    Validated,
    /// The claim could not be confirmed either way.
    Unverified,
    /// Code evidence contradicts the claim.
    Invalid,
}

impl ClaimStatus {
    /// Wire label of the status.
    pub fn label(self) -> &'static str {
        match self {
            Self::Validated => "VALIDATED",
            Self::Unverified => "UNVERIFIED",
            Self::Invalid => "INVALID",
        }
    }

    /// Status marker used by text renderers.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Validated => "[x]",
            Self::Unverified => "[?]",
            Self::Invalid => "[!]",
        }
    }
}

/// A claim made about the project together with its evidence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TechnicalClaim {
    /// The claim being checked.
    pub claim: String,
    /// Validation outcome.
    pub status: ClaimStatus,
    /// Supporting evidence.
    pub evidence: String,
    /// Code excerpt backing the evidence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// Claim validation results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TechnicalValidation {
    /// Claims in presentation order.
    pub claims_validated: Vec<TechnicalClaim>,
    /// Overall validation descriptor.
    pub overall_validation: String,
    /// Coherence descriptor.
    pub code_coherence: String,
    /// Soundness descriptor.
    pub architectural_soundness: String,
}

impl TechnicalValidation {
    /// Number of claims with [`ClaimStatus::Validated`].
    pub fn validated_count(&self) -> usize {
        self.claims_validated
            .iter()
            .filter(|claim| claim.status == ClaimStatus::Validated)
            .count()
    }
}

/// Performance claim analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceAnalysis {
    /// Speed optimizations found in code.
    pub speed_optimizations: Vec<String>,
    /// Memory optimizations found in code.
    pub memory_optimizations: Vec<String>,
    /// Architectural optimizations found in code.
    pub architectural_optimizations: Vec<String>,
    /// Theoretical basis descriptor (e.g. "SOLID").
    pub theoretical_basis: String,
    /// Implementation quality descriptor (e.g. "HIGH").
    pub implementation_quality: String,
    /// Plausibility of the performance claims.
    pub performance_claims: String,
    /// Benchmark status descriptor.
    pub benchmark_status: String,
}

/// Kind of advisory message.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationKind {
    /// Positive finding.
    Success,
    /// Informational note.
    Info,
    /// Caution advised.
    Warning,
    /// Blocking problem.
    Error,
}

impl RecommendationKind {
    /// Wire label of the kind.
    pub fn label(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }

    /// Status marker used by text renderers.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Success => "[ok]",
            Self::Info => "[i]",
            Self::Warning => "[!]",
            Self::Error => "[x]",
        }
    }
}

/// An advisory message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Recommendation {
    /// Advisory kind.
    #[serde(rename = "type")]
    pub kind: RecommendationKind,
    /// Short title.
    pub title: String,
    /// Advisory body.
    pub message: String,
}

impl Recommendation {
    /// Create a recommendation.
    pub fn new(
        kind: RecommendationKind,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            title: title.into(),
            message: message.into(),
        }
    }
}

/// Website content checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContentAnalysis {
    /// An about page exists.
    pub has_about_page: bool,
    /// Contact information is published.
    pub has_contact_info: bool,
    /// A privacy policy is published.
    pub has_privacy_policy: bool,
    /// Terms of service are published.
    pub has_terms_of_service: bool,
    /// Marketing claims found on the site.
    pub claims_found: Vec<String>,
}

/// Severity of a risk indicator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Minor concern.
    Low,
    /// Notable concern.
    Medium,
    /// Serious concern.
    High,
}

impl Severity {
    /// Wire label of the severity.
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// A named concern about a website.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RiskIndicator {
    /// Indicator name.
    pub indicator: String,
    /// Indicator severity.
    pub severity: Severity,
    /// Explanation.
    pub description: String,
}

/// Overall website risk.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    /// Low risk.
    Low,
    /// Medium risk.
    Medium,
    /// High risk.
    High,
}

impl RiskLevel {
    /// Wire label of the risk level.
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        }
    }

    /// Human-readable risk description.
    pub fn description(self) -> &'static str {
        match self {
            Self::Low => "Low Risk",
            Self::Medium => "Medium Risk",
            Self::High => "High Risk",
        }
    }
}

/// Trust assessment of the project's website.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WebsiteAnalysis {
    /// Domain name.
    pub domain: String,
    /// Registration age descriptor.
    pub domain_age: String,
    /// Whether the TLS certificate is valid.
    pub ssl_valid: bool,
    /// Certificate issuer.
    pub ssl_issuer: String,
    /// Content checks.
    pub content_analysis: ContentAnalysis,
    /// Risk indicators in presentation order.
    pub risk_indicators: Vec<RiskIndicator>,
    /// Overall risk.
    pub overall_risk: RiskLevel,
    /// Trust score, 0-100.
    pub score: u8,
}

/// Full analysis payload served to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisData {
    /// Aggregate technical score, 0-100.
    pub overall: u8,
    /// Structural facts.
    pub structure: CodeStructure,
    /// Implementation quality facts.
    pub quality: ImplementationQuality,
    /// Claim validation results.
    pub validation: TechnicalValidation,
    /// Performance claim analysis.
    pub performance: PerformanceAnalysis,
    /// Advisory messages in priority order.
    pub recommendations: Vec<Recommendation>,
    /// Website trust assessment, when available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website_analysis: Option<WebsiteAnalysis>,
    /// ISO-8601 generation timestamp.
    pub analyzed_at: String,
}

/// Stored account record.
///
/// Declared for the `users` table; no request path reads or writes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Serial identifier.
    pub id: i32,
    /// Unique login name.
    pub username: String,
    /// Password hash.
    pub password: String,
}

/// Insertable account record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct NewUser {
    /// Unique login name.
    pub username: String,
    /// Password hash.
    pub password: String,
}
