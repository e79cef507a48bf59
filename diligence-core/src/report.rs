//! Report formatting utilities for Diligence outputs.

use std::fmt::Write;

use serde::Serialize;

use crate::domain::{AnalysisData, FeatureMap, WebsiteAnalysis};
use crate::scoring::ScoreLevel;

/// Default file name for exported plain-text reports.
pub const DEFAULT_REPORT_FILE: &str = "technical-analysis-report.txt";

/// Render an analysis as the downloadable plain-text report.
pub fn render_text_report(data: &AnalysisData) -> String {
    let mut output = String::new();
    let level = ScoreLevel::from_score(data.overall);

    let _ = writeln!(output, "TECHNICAL ANALYSIS REPORT");
    let _ = writeln!(output, "Generated: {}\n", data.analyzed_at);

    heading(&mut output, "EXECUTIVE SUMMARY");
    let _ = writeln!(
        output,
        "Technical Implementation Score: {}/100",
        data.overall
    );
    let _ = writeln!(output, "Assessment: {}\n", level.assessment());

    let structure = &data.structure;
    heading(&mut output, "CODE STRUCTURE ANALYSIS");
    let _ = writeln!(output, "Main File: {}", structure.main_file);
    let _ = writeln!(output, "Total Lines: {}", structure.total_lines);
    let _ = writeln!(output, "Code Lines: {}", structure.code_lines);
    let _ = writeln!(output, "Comment Lines: {}", structure.comment_lines);
    let _ = writeln!(output, "Classes Implemented: {}", structure.classes);
    let _ = writeln!(output, "Functions Implemented: {}\n", structure.functions);
    let _ = writeln!(output, "IMPLEMENTED FEATURES:");
    append_features(&mut output, &structure.implementations);
    let _ = writeln!(output);

    let quality = &data.quality;
    heading(&mut output, "CODE QUALITY METRICS");
    let _ = writeln!(
        output,
        "Syntax Valid: {}",
        yes_no(structure.code_quality.syntax_valid)
    );
    let _ = writeln!(
        output,
        "Compilation Success: {}",
        yes_no(structure.code_quality.compilation_success)
    );
    let _ = writeln!(
        output,
        "Implementation Ratio: {}",
        percent(quality.implementation_ratio)
    );
    let _ = writeln!(
        output,
        "Pass Statements (Placeholders): {}",
        quality.pass_statements
    );
    let _ = writeln!(output, "PyTorch Operations: {}", quality.py_torch_operations);
    let _ = writeln!(
        output,
        "Mathematical Operations: {}\n",
        quality.mathematical_operations
    );

    let validation = &data.validation;
    heading(&mut output, "TECHNICAL CLAIMS VALIDATION");
    for claim in &validation.claims_validated {
        let _ = writeln!(output, "{}: {}", claim.claim, claim.status.label());
        let _ = writeln!(output, "  Evidence: {}", claim.evidence);
        if let Some(code) = &claim.code {
            let _ = writeln!(output, "  Code Reference: {code}");
        }
        let _ = writeln!(output);
    }
    let _ = writeln!(
        output,
        "Overall Validation: {}",
        validation.overall_validation
    );
    let _ = writeln!(output, "Code Coherence: {}", validation.code_coherence);
    let _ = writeln!(
        output,
        "Architectural Soundness: {}\n",
        validation.architectural_soundness
    );

    let performance = &data.performance;
    heading(&mut output, "PERFORMANCE ANALYSIS");
    let _ = writeln!(output, "Theoretical Basis: {}", performance.theoretical_basis);
    let _ = writeln!(
        output,
        "Implementation Quality: {}",
        performance.implementation_quality
    );
    let _ = writeln!(
        output,
        "Performance Claims: {}",
        performance.performance_claims
    );
    let _ = writeln!(output, "Benchmark Status: {}\n", performance.benchmark_status);
    append_bullets(
        &mut output,
        "Speed Optimizations Found:",
        &performance.speed_optimizations,
    );
    append_bullets(
        &mut output,
        "Memory Optimizations Found:",
        &performance.memory_optimizations,
    );

    if let Some(website) = &data.website_analysis {
        append_website_text(&mut output, website);
    }

    heading(&mut output, "RECOMMENDATIONS");
    for rec in &data.recommendations {
        let _ = writeln!(output, "{}: {}", rec.title.to_uppercase(), rec.message);
    }
    let _ = writeln!(output);

    heading(&mut output, "TECHNICAL CONCLUSION");
    let _ = writeln!(
        output,
        "This analysis is based on static code analysis and architectural review."
    );
    let _ = writeln!(output, "Next steps should include:");
    let _ = writeln!(output, "1. Performance benchmarking on actual hardware");
    let _ = writeln!(output, "2. Formal testing suite implementation");
    let _ = writeln!(output, "3. Comparative analysis with existing architectures");
    let _ = writeln!(output, "4. Documentation of performance characteristics\n");
    let _ = writeln!(output, "Report generated by Diligence");
    output
}

/// Render an analysis as Markdown.
pub fn render_markdown_report(data: &AnalysisData) -> String {
    let mut output = String::new();
    let level = ScoreLevel::from_score(data.overall);

    let _ = writeln!(output, "# Technical Analysis Report\n");
    let _ = writeln!(output, "- Generated: `{}`", data.analyzed_at);
    let _ = writeln!(
        output,
        "- Score: **{}/100** ({})\n",
        data.overall,
        level.label()
    );

    let structure = &data.structure;
    let _ = writeln!(output, "## Code Structure\n");
    let _ = writeln!(output, "| Metric | Value |");
    let _ = writeln!(output, "| --- | --- |");
    let _ = writeln!(output, "| Main file | `{}` |", structure.main_file);
    let _ = writeln!(output, "| Total lines | {} |", structure.total_lines);
    let _ = writeln!(output, "| Code lines | {} |", structure.code_lines);
    let _ = writeln!(output, "| Classes | {} |", structure.classes);
    let _ = writeln!(output, "| Functions | {} |", structure.functions);
    let _ = writeln!(
        output,
        "| Implementation ratio | {} |\n",
        percent(data.quality.implementation_ratio)
    );

    let _ = writeln!(output, "### Implementations");
    for (feature, implemented) in &structure.implementations {
        let mark = if *implemented { "x" } else { " " };
        let _ = writeln!(output, "- [{mark}] {feature}");
    }
    let _ = writeln!(output);

    let validation = &data.validation;
    let _ = writeln!(
        output,
        "## Claims ({}/{} validated)\n",
        validation.validated_count(),
        validation.claims_validated.len()
    );
    for claim in &validation.claims_validated {
        let _ = writeln!(
            output,
            "- {} **{}** ({}): {}",
            claim.status.symbol(),
            claim.claim,
            claim.status.label(),
            claim.evidence
        );
    }
    let _ = writeln!(output);

    let performance = &data.performance;
    let _ = writeln!(output, "## Performance\n");
    let _ = writeln!(
        output,
        "- Theoretical basis: {}\n- Implementation quality: {}\n- Claims: {}\n- Benchmarks: {}\n",
        performance.theoretical_basis,
        performance.implementation_quality,
        performance.performance_claims,
        performance.benchmark_status
    );

    if let Some(website) = &data.website_analysis {
        let _ = writeln!(output, "## Website: {}\n", website.domain);
        let _ = writeln!(
            output,
            "- Risk: {} ({}/100)",
            website.overall_risk.description(),
            website.score
        );
        let _ = writeln!(
            output,
            "- SSL: {} ({})",
            if website.ssl_valid { "valid" } else { "invalid" },
            website.ssl_issuer
        );
        for indicator in &website.risk_indicators {
            let _ = writeln!(
                output,
                "- **{}** [{}]: {}",
                indicator.indicator,
                indicator.severity.label(),
                indicator.description
            );
        }
        let _ = writeln!(output);
    }

    let _ = writeln!(output, "## Recommendations\n");
    for rec in &data.recommendations {
        let _ = writeln!(
            output,
            "- {} **{}**: {}",
            rec.kind.symbol(),
            rec.title,
            rec.message
        );
    }
    output
}

/// Render any serializable report payload as JSON.
pub fn render_json<T: Serialize + ?Sized>(payload: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(payload)
}

fn heading(output: &mut String, title: &str) {
    let _ = writeln!(output, "{title}\n{}", "=".repeat(title.len()));
}

fn append_features(output: &mut String, features: &FeatureMap) {
    for (feature, implemented) in features {
        let state = if *implemented {
            "IMPLEMENTED"
        } else {
            "NOT FOUND"
        };
        let _ = writeln!(output, "- {feature}: {state}");
    }
}

fn append_bullets(output: &mut String, title: &str, items: &[String]) {
    let _ = writeln!(output, "{title}");
    for item in items {
        let _ = writeln!(output, "- {item}");
    }
    let _ = writeln!(output);
}

fn append_website_text(output: &mut String, website: &WebsiteAnalysis) {
    heading(output, &format!("WEBSITE ANALYSIS ({})", website.domain));
    let _ = writeln!(output, "Domain: {}", website.domain);
    let _ = writeln!(output, "Domain Age: {}", website.domain_age);
    let _ = writeln!(output, "SSL Valid: {}", yes_no(website.ssl_valid));
    let _ = writeln!(output, "SSL Issuer: {}", website.ssl_issuer);
    let _ = writeln!(output, "Overall Risk: {}", website.overall_risk.label());
    let _ = writeln!(output, "Trust Score: {}/100\n", website.score);

    let content = &website.content_analysis;
    let _ = writeln!(output, "Content Analysis:");
    let _ = writeln!(output, "- About Page: {}", present(content.has_about_page));
    let _ = writeln!(output, "- Contact Info: {}", present(content.has_contact_info));
    let _ = writeln!(
        output,
        "- Privacy Policy: {}",
        present(content.has_privacy_policy)
    );
    let _ = writeln!(
        output,
        "- Terms of Service: {}\n",
        present(content.has_terms_of_service)
    );
    append_bullets(output, "Claims Found:", &content.claims_found);

    let _ = writeln!(output, "Risk Indicators:");
    for indicator in &website.risk_indicators {
        let _ = writeln!(
            output,
            "- [{}] {}: {}",
            indicator.severity.label().to_uppercase(),
            indicator.indicator,
            indicator.description
        );
    }
    let _ = writeln!(output);
}

fn yes_no(value: bool) -> &'static str {
    if value { "Yes" } else { "No" }
}

fn present(value: bool) -> &'static str {
    if value { "Present" } else { "Missing" }
}

fn percent(ratio: f64) -> String {
    format!("{:.1}%", ratio * 100.0)
}
