//! Analysis orchestration.

use chrono::{SecondsFormat, Utc};
use futures::future;

use crate::domain::AnalysisData;
use crate::error::{DiligenceError, Result};
use crate::facts::{FactFuture, FactProvider};
use crate::recommendations::generate_recommendations;
use crate::scoring::calculate_technical_score;

/// Run every fact provider and assemble a freshly stamped analysis.
///
/// The four repository providers are polled concurrently; the first failure
/// aborts the whole analysis so callers never observe partial data.
pub async fn perform_analysis<P: FactProvider + ?Sized>(provider: &P) -> Result<AnalysisData> {
    let (structure, quality, validation, performance) = future::try_join4(
        tagged("code_structure", provider.code_structure()),
        tagged("implementation_quality", provider.implementation_quality()),
        tagged("technical_validation", provider.technical_validation()),
        tagged("performance_analysis", provider.performance_analysis()),
    )
    .await?;

    let website_analysis = tagged("website_analysis", provider.website_analysis()).await?;

    let overall = calculate_technical_score(&structure, &quality, &validation, &performance);
    let recommendations = generate_recommendations(overall, &validation);
    log::debug!(
        "analysis scored {overall} with {} recommendations",
        recommendations.len()
    );

    Ok(AnalysisData {
        overall,
        structure,
        quality,
        validation,
        performance,
        recommendations,
        website_analysis,
        analyzed_at: timestamp(),
    })
}

/// Current UTC time as ISO-8601 with millisecond precision.
pub fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

async fn tagged<T>(provider: &'static str, pending: FactFuture<T>) -> Result<T> {
    pending.await.map_err(|err| match err {
        DiligenceError::Provider { .. } => err,
        other => DiligenceError::provider(provider, other.to_string()),
    })
}
