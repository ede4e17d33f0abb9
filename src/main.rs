//! Corsair - CORS misconfiguration scanner CLI

use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use tabled::builder::Builder;
use tabled::settings::Style;
use tracing_subscriber::EnvFilter;

use corsair::config;
use corsair::models::{ScanReport, ScanRequest, Verbosity, VerdictKind};
use corsair::report::{self, ConsoleReporter};
use corsair::scanner::{CorsPolicy, ScanEngine};

/// Scans a URL for common CORS misconfigurations
#[derive(Parser)]
#[command(name = "corsair", version, about, long_about = None)]
struct Cli {
    /// The URL to scan for CORS misconfigurations
    url: String,

    /// Origin header values to test with (default: http://evil.com http://localhost null)
    #[arg(long, num_args = 1.., value_name = "ORIGIN")]
    origins: Option<Vec<String>>,

    /// The User-Agent string to use (default: vuln-CORS-Misconfiguration-Scanner/1.0)
    #[arg(long)]
    user_agent: Option<String>,

    /// Timeout in seconds for each request (default: 10)
    #[arg(long)]
    timeout: Option<u64>,

    /// Follow redirects
    #[arg(long)]
    allow_redirects: bool,

    /// Verbosity level: 0 (errors only), 1 (errors and basic info), 2 (verbose output)
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=2))]
    verbosity: Option<u8>,

    /// Number of origins to probe concurrently (default: 1, sequential)
    #[arg(long)]
    concurrency: Option<usize>,

    /// Require Access-Control-Allow-Origin to equal the origin exactly
    /// instead of merely containing it
    #[arg(long)]
    exact_origin_match: bool,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the scan results to a JSON file
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

fn print_banner() {
    let banner = r#"
    ╔═══════════════════════════════════════╗
    ║  CORSAIR v0.1.0                       ║
    ║  CORS Misconfiguration Scanner        ║
    ╚═══════════════════════════════════════╝
    "#;
    println!("{}", banner.cyan());
}

fn print_summary(report: &ScanReport) {
    let kinds = [
        VerdictKind::WildcardVulnerable,
        VerdictKind::MismatchVulnerable,
        VerdictKind::NullOriginVulnerable,
        VerdictKind::CorrectlyConfigured,
        VerdictKind::NoPolicy,
    ];

    println!("\n{}", "  Scan Summary".bold());
    println!("  {}", "─".repeat(35));

    let mut builder = Builder::default();
    builder.push_record(["Verdict", "Count"]);

    for kind in &kinds {
        builder.push_record([
            kind.label().to_string(),
            report.count_by_kind(*kind).to_string(),
        ]);
    }

    builder.push_record([
        "Transport Errors".to_string(),
        report.transport_failures().to_string(),
    ]);
    builder.push_record(["Requests".to_string(), report.total_requests.to_string()]);

    let mut table = builder.build();
    table.with(Style::rounded());
    println!("{table}");

    let vulnerable = report.vulnerable_count();
    let correct = report.count_by_kind(VerdictKind::CorrectlyConfigured);
    let failed = report.transport_failures();

    println!(
        "\n  {} {} {}",
        format!("{vulnerable} vulnerable").red().bold(),
        format!("{correct} correct").green(),
        format!("{failed} failed").yellow(),
    );
}

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut request = if let Some(ref path) = cli.config {
        match config::load_config(path) {
            Ok(request) => request,
            Err(e) => {
                eprintln!("{} {e}", "Error:".red().bold());
                std::process::exit(1);
            }
        }
    } else {
        ScanRequest::default()
    };

    if let Err(e) = config::merge_cli_args(
        &mut request,
        cli.url,
        cli.origins,
        cli.user_agent,
        cli.timeout,
        cli.allow_redirects,
        cli.verbosity,
        cli.concurrency,
        cli.exact_origin_match,
    ) {
        eprintln!("{} {e}", "Error:".red().bold());
        std::process::exit(1);
    }

    let filter = match request.verbosity {
        Verbosity::Debug => "corsair=debug",
        _ => "corsair=info",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    if request.verbosity >= Verbosity::Info {
        print_banner();
        println!("  {} {}", "Target:".bold(), request.target.green());
        println!(
            "  {} {}\n",
            "Origins:".bold(),
            request
                .origins
                .iter()
                .map(|o| o.to_string())
                .collect::<Vec<_>>()
                .join(", ")
                .cyan()
        );
    }

    let engine = ScanEngine::new(CorsPolicy::new(request.match_mode));
    let reporter = ConsoleReporter::new(request.verbosity);
    let scan_report = engine.run(&request, &reporter).await?;

    if request.verbosity >= Verbosity::Info {
        print_summary(&scan_report);
    }

    if let Some(ref path) = cli.output {
        report::json::export(&scan_report, path)?;
        if request.verbosity >= Verbosity::Info {
            println!(
                "\n  {} {}",
                "Results saved to:".bold(),
                path.display().to_string().green()
            );
        }
    }

    Ok(())
}
