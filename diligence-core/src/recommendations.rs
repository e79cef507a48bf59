//! Advisory messages derived from the technical score.

use crate::domain::{Recommendation, RecommendationKind, TechnicalValidation};
use crate::scoring::{PROMISING_THRESHOLD, SOUND_THRESHOLD};

/// Build the advisory list for an analysis, highest priority first.
///
/// The validation record is accepted so claim-driven advice can be added
/// without changing callers; the current rules depend on the score only.
pub fn generate_recommendations(
    score: u8,
    _validation: &TechnicalValidation,
) -> Vec<Recommendation> {
    let mut recommendations = Vec::with_capacity(4);

    if score >= SOUND_THRESHOLD {
        recommendations.push(Recommendation::new(
            RecommendationKind::Success,
            "TECHNICALLY SOUND IMPLEMENTATION",
            "The HST architecture appears to be a genuine, well-implemented AI system with strong code evidence.",
        ));
    } else if score >= PROMISING_THRESHOLD {
        recommendations.push(Recommendation::new(
            RecommendationKind::Info,
            "PROMISING IMPLEMENTATION",
            "The HST architecture shows good implementation quality but some claims remain unverified.",
        ));
    }

    recommendations.push(Recommendation::new(
        RecommendationKind::Info,
        "PERFORMANCE BENCHMARKING NEEDED",
        "Run actual performance tests to validate 1000+ TPS claims on real hardware.",
    ));
    recommendations.push(Recommendation::new(
        RecommendationKind::Warning,
        "FORMAL TESTING REQUIRED",
        "Add comprehensive unit tests and integration tests for production use.",
    ));
    recommendations.push(Recommendation::new(
        RecommendationKind::Warning,
        "WEBSITE DUE DILIGENCE",
        "The aethyr-global.com website shows some risk indicators. Exercise caution with any financial commitments.",
    ));

    recommendations
}

#[cfg(test)]
mod tests {
    use super::generate_recommendations;
    use crate::domain::{RecommendationKind, TechnicalValidation};

    fn empty_validation() -> TechnicalValidation {
        TechnicalValidation {
            claims_validated: Vec::new(),
            overall_validation: "NONE".to_string(),
            code_coherence: "UNKNOWN".to_string(),
            architectural_soundness: "UNKNOWN".to_string(),
        }
    }

    fn titles(score: u8) -> Vec<String> {
        generate_recommendations(score, &empty_validation())
            .into_iter()
            .map(|rec| rec.title)
            .collect()
    }

    const TRAILING: [&str; 3] = [
        "PERFORMANCE BENCHMARKING NEEDED",
        "FORMAL TESTING REQUIRED",
        "WEBSITE DUE DILIGENCE",
    ];

    #[test]
    fn sound_score_leads_with_success() {
        let recs = generate_recommendations(94, &empty_validation());
        assert_eq!(recs.len(), 4);
        assert_eq!(recs[0].kind, RecommendationKind::Success);
        assert_eq!(recs[0].title, "TECHNICALLY SOUND IMPLEMENTATION");
        assert_eq!(titles(94)[1..], TRAILING);
    }

    #[test]
    fn promising_score_leads_with_info() {
        let recs = generate_recommendations(65, &empty_validation());
        assert_eq!(recs.len(), 4);
        assert_eq!(recs[0].kind, RecommendationKind::Info);
        assert_eq!(recs[0].title, "PROMISING IMPLEMENTATION");
        assert_eq!(titles(65)[1..], TRAILING);
    }

    #[test]
    fn low_score_omits_the_conditional_entry() {
        assert_eq!(titles(40), TRAILING);
    }

    #[test]
    fn thresholds_are_inclusive() {
        assert_eq!(titles(80)[0], "TECHNICALLY SOUND IMPLEMENTATION");
        assert_eq!(titles(79)[0], "PROMISING IMPLEMENTATION");
        assert_eq!(titles(60)[0], "PROMISING IMPLEMENTATION");
        assert_eq!(titles(59).len(), 3);
    }

    #[test]
    fn trailing_kinds_are_fixed() {
        let kinds: Vec<_> = generate_recommendations(10, &empty_validation())
            .into_iter()
            .map(|rec| rec.kind)
            .collect();
        assert_eq!(
            kinds,
            vec![
                RecommendationKind::Info,
                RecommendationKind::Warning,
                RecommendationKind::Warning
            ]
        );
    }
}
