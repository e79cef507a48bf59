#![deny(missing_docs)]
//! Diligence command-line interface.
//!
//! Fetches, renders, and exports technical analysis reports.

mod client;

use clap::{Args, Parser, Subcommand, ValueEnum};
use client::{AnalysisClient, ApiError, RETRY_HINT, ServerArgs, normalize_server_url};
use diligence_core::{
    AnalysisData, DEFAULT_REPORT_FILE, FactProvider, perform_analysis, render_json,
    render_markdown_report, render_text_report,
};
use std::path::{Path, PathBuf};

pub(crate) type CliResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

#[derive(Parser)]
#[command(name = "diligence", version, about = "Diligence CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone)]
struct OutputArgs {
    /// Output format for report data.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Write the report to a file instead of stdout.
    #[arg(long = "report-output")]
    report_output: Option<PathBuf>,
}

#[derive(ValueEnum, Copy, Clone, Debug, Eq, PartialEq)]
enum OutputFormat {
    Text,
    Json,
    Markdown,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the technical analysis from a running server.
    Fetch {
        #[command(flatten)]
        server: ServerArgs,
        #[command(flatten)]
        report: OutputArgs,
    },
    /// Download the plain-text technical analysis report.
    Export {
        #[command(flatten)]
        server: ServerArgs,
        /// Destination file for the report.
        #[arg(short, long, default_value = DEFAULT_REPORT_FILE)]
        output: PathBuf,
    },
    /// Check that the server is up.
    Health {
        #[command(flatten)]
        server: ServerArgs,
    },
    /// Run the analysis locally without a server.
    Analyze {
        #[command(flatten)]
        report: OutputArgs,
    },
}

#[cfg(not(test))]
#[tokio::main]
async fn main() -> CliResult<()> {
    use client::ReqwestAnalysisClient;
    use diligence_core::StaticFacts;
    use std::time::Duration;

    let cli = Cli::parse();

    match cli.command {
        Commands::Fetch { server, report } => {
            let client = ReqwestAnalysisClient::new(Duration::from_secs(server.timeout_secs))?;
            run_fetch(&client, &server.server_url, &report).await?
        }
        Commands::Export { server, output } => {
            let client = ReqwestAnalysisClient::new(Duration::from_secs(server.timeout_secs))?;
            run_export(&client, &server.server_url, &output).await?
        }
        Commands::Health { server } => {
            let client = ReqwestAnalysisClient::new(Duration::from_secs(server.timeout_secs))?;
            run_health(&client, &server.server_url).await?
        }
        Commands::Analyze { report } => run_analyze(&StaticFacts::new(), &report).await?,
    }

    Ok(())
}

#[cfg(test)]
fn main() {}

async fn run_fetch<C: AnalysisClient + ?Sized>(
    client: &C,
    server_url: &str,
    report: &OutputArgs,
) -> CliResult<()> {
    let data = fetch_or_explain(client, server_url).await?;
    let contents = render_analysis(&data, report.format)?;
    emit_output(report, contents).await
}

async fn run_export<C: AnalysisClient + ?Sized>(
    client: &C,
    server_url: &str,
    output: &Path,
) -> CliResult<()> {
    let data = fetch_or_explain(client, server_url).await?;
    write_file(output, render_text_report(&data)).await?;
    println!("Report written to {}", output.display());
    Ok(())
}

async fn run_health<C: AnalysisClient + ?Sized>(client: &C, server_url: &str) -> CliResult<()> {
    let server_url = normalize_server_url(server_url)?;
    let health = client.fetch_health(&server_url).await?;
    match health.timestamp {
        Some(timestamp) => println!("{server_url}: {} at {timestamp}", health.status),
        None => println!("{server_url}: {}", health.status),
    }
    Ok(())
}

async fn run_analyze<P: FactProvider + ?Sized>(facts: &P, report: &OutputArgs) -> CliResult<()> {
    let data = perform_analysis(facts).await?;
    let contents = render_analysis(&data, report.format)?;
    emit_output(report, contents).await
}

/// Fetch the analysis, printing the failure and retry hint to stderr.
async fn fetch_or_explain<C: AnalysisClient + ?Sized>(
    client: &C,
    server_url: &str,
) -> CliResult<AnalysisData> {
    let server_url = normalize_server_url(server_url)?;
    match client.fetch_analysis(&server_url).await {
        Ok(data) => Ok(data),
        Err(err) => {
            eprintln!("{}", describe_fetch_failure(err.as_ref()));
            Err(err)
        }
    }
}

fn describe_fetch_failure(err: &(dyn std::error::Error + Send + Sync + 'static)) -> String {
    let reason = match err.downcast_ref::<ApiError>() {
        Some(ApiError {
            envelope: Some(envelope),
            ..
        }) => match &envelope.details {
            Some(details) => format!("{}: {details}", envelope.error),
            None => envelope.error.clone(),
        },
        _ => err.to_string(),
    };
    format!("Error: {reason}\n{RETRY_HINT}")
}

fn render_analysis(data: &AnalysisData, format: OutputFormat) -> CliResult<String> {
    let mut contents = match format {
        OutputFormat::Text => render_text_report(data),
        OutputFormat::Markdown => render_markdown_report(data),
        OutputFormat::Json => render_json(data)?,
    };
    if !contents.ends_with('\n') {
        contents.push('\n');
    }
    Ok(contents)
}

async fn emit_output(output: &OutputArgs, contents: String) -> CliResult<()> {
    if let Some(path) = &output.report_output {
        write_file(path, contents).await?;
    } else {
        print!("{contents}");
    }
    Ok(())
}

async fn write_file(path: &Path, contents: String) -> CliResult<()> {
    if let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(path, contents).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use client::{ErrorEnvelope, HealthStatus};
    use diligence_core::{
        CodeStructure, DiligenceError, FactFuture, ImplementationQuality, PerformanceAnalysis,
        StaticFacts, TechnicalValidation, WebsiteAnalysis,
    };
    use std::future::Future;
    use std::pin::Pin;
    use std::sync::Mutex;

    static UNIQUE_COUNTER: std::sync::atomic::AtomicUsize = std::sync::atomic::AtomicUsize::new(0);

    fn temp_dir(name: &str) -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("system time")
            .as_nanos();
        let counter = UNIQUE_COUNTER.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
        std::env::temp_dir().join(format!("diligence_cli_{name}_{nanos}_{counter}"))
    }

    async fn sample_data() -> AnalysisData {
        perform_analysis(&StaticFacts::new())
            .await
            .expect("analysis")
    }

    struct FakeClient {
        analysis: Option<AnalysisData>,
        requested: Mutex<Vec<String>>,
    }

    impl FakeClient {
        fn new(analysis: Option<AnalysisData>) -> Self {
            Self {
                analysis,
                requested: Mutex::new(Vec::new()),
            }
        }

        fn requested(&self) -> Vec<String> {
            self.requested.lock().expect("lock").clone()
        }
    }

    impl AnalysisClient for FakeClient {
        fn fetch_analysis<'a>(
            &'a self,
            server_url: &'a str,
        ) -> Pin<Box<dyn Future<Output = CliResult<AnalysisData>> + Send + 'a>> {
            self.requested
                .lock()
                .expect("lock")
                .push(server_url.to_string());
            let result: CliResult<AnalysisData> = match &self.analysis {
                Some(data) => Ok(data.clone()),
                None => Err(Box::new(ApiError {
                    status: 500,
                    envelope: Some(ErrorEnvelope {
                        error: "Failed to perform analysis".to_string(),
                        details: None,
                    }),
                })),
            };
            Box::pin(async move { result })
        }

        fn fetch_health<'a>(
            &'a self,
            server_url: &'a str,
        ) -> Pin<Box<dyn Future<Output = CliResult<HealthStatus>> + Send + 'a>> {
            self.requested
                .lock()
                .expect("lock")
                .push(server_url.to_string());
            let result: CliResult<HealthStatus> = Ok(HealthStatus {
                status: "ok".to_string(),
                timestamp: None,
            });
            Box::pin(async move { result })
        }
    }

    struct BrokenFacts;

    impl FactProvider for BrokenFacts {
        fn code_structure(&self) -> FactFuture<CodeStructure> {
            Box::pin(async { Err::<CodeStructure, _>(DiligenceError::Other("offline".to_string())) })
        }

        fn implementation_quality(&self) -> FactFuture<ImplementationQuality> {
            StaticFacts.implementation_quality()
        }

        fn technical_validation(&self) -> FactFuture<TechnicalValidation> {
            StaticFacts.technical_validation()
        }

        fn performance_analysis(&self) -> FactFuture<PerformanceAnalysis> {
            StaticFacts.performance_analysis()
        }

        fn website_analysis(&self) -> FactFuture<Option<WebsiteAnalysis>> {
            Box::pin(async { Ok::<Option<WebsiteAnalysis>, _>(None) })
        }
    }

    #[test]
    fn cli_defaults_server_url_and_format() {
        let cli = Cli::try_parse_from(["diligence", "fetch"]).expect("parse");
        match cli.command {
            Commands::Fetch { server, report } => {
                assert_eq!(server.timeout_secs, 30);
                assert_eq!(report.format, OutputFormat::Text);
                assert!(report.report_output.is_none());
            }
            _ => panic!("expected fetch"),
        }
    }

    #[test]
    fn cli_export_defaults_to_report_file() {
        let cli = Cli::try_parse_from(["diligence", "export"]).expect("parse");
        match cli.command {
            Commands::Export { output, .. } => {
                assert_eq!(output, PathBuf::from("technical-analysis-report.txt"));
            }
            _ => panic!("expected export"),
        }
    }

    #[test]
    fn cli_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["diligence", "analyze", "--format", "yaml"]).is_err());
    }

    #[test]
    fn describe_fetch_failure_uses_envelope() {
        let err = ApiError {
            status: 500,
            envelope: Some(ErrorEnvelope {
                error: "Failed to perform analysis".to_string(),
                details: Some("code_structure provider failed: offline".to_string()),
            }),
        };
        assert_eq!(
            describe_fetch_failure(&err),
            "Error: Failed to perform analysis: code_structure provider failed: offline\n\
             Failed to analyze code. Please try again."
        );
    }

    #[test]
    fn describe_fetch_failure_falls_back_to_error_text() {
        let err = ApiError {
            status: 502,
            envelope: None,
        };
        let message = describe_fetch_failure(&err);
        assert!(message.starts_with("Error: server returned 502"));
        assert!(message.ends_with(RETRY_HINT));
    }

    #[tokio::test]
    async fn render_analysis_supports_every_format() {
        let data = sample_data().await;

        let text = render_analysis(&data, OutputFormat::Text).expect("text");
        assert!(text.starts_with("TECHNICAL ANALYSIS REPORT"));

        let markdown = render_analysis(&data, OutputFormat::Markdown).expect("markdown");
        assert!(markdown.starts_with('#'));

        let json = render_analysis(&data, OutputFormat::Json).expect("json");
        let decoded: AnalysisData = serde_json::from_str(&json).expect("decode");
        assert_eq!(decoded.overall, 94);
        assert!(json.ends_with('\n'));
    }

    #[tokio::test]
    async fn run_fetch_writes_report_file() {
        let data = sample_data().await;
        let client = FakeClient::new(Some(data));
        let dir = temp_dir("fetch");
        let path = dir.join("nested/report.json");
        let report = OutputArgs {
            format: OutputFormat::Json,
            report_output: Some(path.clone()),
        };

        run_fetch(&client, "http://localhost:8080/", &report)
            .await
            .expect("fetch");

        assert_eq!(client.requested(), vec!["http://localhost:8080".to_string()]);
        let contents = std::fs::read_to_string(&path).expect("report");
        assert!(contents.contains("\"overall\": 94"));
        std::fs::remove_dir_all(&dir).expect("cleanup");
    }

    #[tokio::test]
    async fn run_fetch_propagates_server_failure() {
        let client = FakeClient::new(None);
        let report = OutputArgs {
            format: OutputFormat::Text,
            report_output: None,
        };

        let err = run_fetch(&client, "http://localhost:8080", &report)
            .await
            .unwrap_err();
        assert!(err.downcast_ref::<ApiError>().is_some());
        assert_eq!(client.requested().len(), 1);
    }

    #[tokio::test]
    async fn run_export_writes_text_report() {
        let data = sample_data().await;
        let client = FakeClient::new(Some(data));
        let dir = temp_dir("export");
        let path = dir.join(DEFAULT_REPORT_FILE);

        run_export(&client, "http://localhost:8080", &path)
            .await
            .expect("export");

        let contents = std::fs::read_to_string(&path).expect("report");
        assert!(contents.starts_with("TECHNICAL ANALYSIS REPORT"));
        assert!(contents.contains("Technical Implementation Score: 94/100"));
        std::fs::remove_dir_all(&dir).expect("cleanup");
    }

    #[tokio::test]
    async fn run_health_rejects_blank_url() {
        let client = FakeClient::new(None);
        assert!(run_health(&client, "  ").await.is_err());
        assert!(client.requested().is_empty());

        run_health(&client, "http://localhost:8080/")
            .await
            .expect("health");
        assert_eq!(client.requested(), vec!["http://localhost:8080".to_string()]);
    }

    #[tokio::test]
    async fn run_analyze_runs_in_process() {
        let dir = temp_dir("analyze");
        let path = dir.join("analysis.md");
        let report = OutputArgs {
            format: OutputFormat::Markdown,
            report_output: Some(path.clone()),
        };

        run_analyze(&StaticFacts::new(), &report)
            .await
            .expect("analyze");
        let contents = std::fs::read_to_string(&path).expect("report");
        assert!(contents.contains("94"));

        let err = run_analyze(&BrokenFacts, &report).await.unwrap_err();
        assert!(err.to_string().contains("code_structure provider failed"));
        std::fs::remove_dir_all(&dir).expect("cleanup");
    }
}
