//! Technical score aggregation.

use crate::domain::{CodeStructure, ImplementationQuality, PerformanceAnalysis, TechnicalValidation};

const SYNTAX_VALID_POINTS: f64 = 15.0;
const COMPILATION_POINTS: f64 = 10.0;
const IMPLEMENTATION_RATIO_WEIGHT: f64 = 30.0;
const VALIDATED_CLAIMS_WEIGHT: f64 = 35.0;
const THEORETICAL_BASIS_POINTS: f64 = 5.0;
const IMPLEMENTATION_QUALITY_POINTS: f64 = 5.0;

/// Minimum score considered technically sound.
pub const SOUND_THRESHOLD: u8 = 80;
/// Minimum score considered promising.
pub const PROMISING_THRESHOLD: u8 = 60;

/// Combine the four fact records into a score in `0..=100`.
pub fn calculate_technical_score(
    structure: &CodeStructure,
    quality: &ImplementationQuality,
    validation: &TechnicalValidation,
    performance: &PerformanceAnalysis,
) -> u8 {
    let mut score = 0.0;

    if structure.code_quality.syntax_valid {
        score += SYNTAX_VALID_POINTS;
    }
    if structure.code_quality.compilation_success {
        score += COMPILATION_POINTS;
    }

    score += quality.implementation_ratio * IMPLEMENTATION_RATIO_WEIGHT;
    score += validated_share(validation) * VALIDATED_CLAIMS_WEIGHT;

    if performance.theoretical_basis == "SOLID" {
        score += THEORETICAL_BASIS_POINTS;
    }
    if performance.implementation_quality == "HIGH" {
        score += IMPLEMENTATION_QUALITY_POINTS;
    }

    clamp_score(score)
}

/// Qualitative band for a technical score.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ScoreLevel {
    /// At or above [`SOUND_THRESHOLD`].
    Sound,
    /// At or above [`PROMISING_THRESHOLD`].
    Promising,
    /// Below [`PROMISING_THRESHOLD`].
    NeedsWork,
}

impl ScoreLevel {
    /// Classify a score.
    pub fn from_score(score: u8) -> Self {
        if score >= SOUND_THRESHOLD {
            Self::Sound
        } else if score >= PROMISING_THRESHOLD {
            Self::Promising
        } else {
            Self::NeedsWork
        }
    }

    /// Short badge label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Sound => "SOUND",
            Self::Promising => "PROMISING",
            Self::NeedsWork => "NEEDS WORK",
        }
    }

    /// Assessment line used in exported reports.
    pub fn assessment(self) -> &'static str {
        match self {
            Self::Sound => "TECHNICALLY SOUND",
            Self::Promising => "PROMISING",
            Self::NeedsWork => "NEEDS WORK",
        }
    }
}

fn validated_share(validation: &TechnicalValidation) -> f64 {
    let total = validation.claims_validated.len();
    if total == 0 {
        return 0.0;
    }
    validation.validated_count() as f64 / total as f64
}

fn clamp_score(score: f64) -> u8 {
    if !score.is_finite() {
        return 0;
    }
    score.round().clamp(0.0, 100.0) as u8
}
