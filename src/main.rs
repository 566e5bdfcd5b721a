//! Route resolver CLI.
//!
//! Resolves and redacts client route URLs against a route table loaded from
//! a TOML file (or the built-in client routes).
//!
//! # Architecture Overview
//!
//! ```text
//!     URL ──▶ normalize ──▶ RouteParser ──▶ Route? ──┬──▶ parse   (JSON)
//!                          (compiled once)            ├──▶ redact  (template)
//!                                                     └──▶ bench   (update/log/check)
//! ```

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Instant;

use clap::{Parser, Subcommand};
use route_resolver::config::{load_config, ResolverConfig};
use route_resolver::observability::logging::init_logging;
use route_resolver::redaction::{AggregateRedactor, ClientRouteRedactor, UrlRedactor};
use route_resolver::routing::{Route, RouteParser};

#[derive(Parser)]
#[command(name = "route-resolver")]
#[command(about = "Resolve and redact client route URLs", long_about = None)]
struct Cli {
    /// Route table configuration (TOML). Defaults to the built-in client routes.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the configured log level.
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve URLs and print each route as JSON
    Parse { urls: Vec<String> },
    /// Print the redacted form of each URL
    Redact { urls: Vec<String> },
    /// Print the route table and any patterns that failed to compile
    Check,
    /// Resolve each URL once and reuse the route for dependent operations
    Bench {
        #[arg(short, long, default_value_t = 1000)]
        iterations: u32,
        urls: Vec<String>,
    },
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ResolverConfig::default(),
    };
    if let Some(level) = cli.log_level {
        config.observability.log_level = level;
    }
    init_logging(&config.observability)?;

    let parser = Arc::new(RouteParser::from_config(&config.routes));
    tracing::info!(
        routes = parser.len(),
        dropped = parser.compile_errors().len(),
        "Route table compiled"
    );

    match cli.command {
        Commands::Parse { urls } => {
            for url in &urls {
                let route = parser.parse(url);
                println!("{}", serde_json::to_string(&route)?);
            }
        }
        Commands::Redact { urls } => {
            let redactor =
                AggregateRedactor::default().with(ClientRouteRedactor::new(parser.clone()));
            for url in &urls {
                println!("{}", redactor.redact(url));
            }
        }
        Commands::Check => {
            for matcher in parser.matchers() {
                println!("{:<24} {}", matcher.template(), matcher.pattern());
            }
            if !parser.compile_errors().is_empty() {
                for error in parser.compile_errors() {
                    eprintln!("dropped: {}", error);
                }
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Bench { iterations, urls } => bench(&parser, iterations, &urls),
    }

    Ok(ExitCode::SUCCESS)
}

/// A triggering event bundled with its resolved route.
struct Action<'a> {
    url: &'a str,
    route: Option<Route>,
}

fn bench(parser: &RouteParser, iterations: u32, urls: &[String]) {
    let total = Instant::now();
    let mut parses = 0u64;

    for url in urls {
        let start = Instant::now();
        let mut checked = 0u64;

        for _ in 0..iterations {
            let action = Action {
                url,
                route: parser.parse(url),
            };
            parses += 1;

            // update, analytics and permission check all read the same route
            let resolved = [update(&action), log_tap(&action), check_permissions(&action)];
            checked += resolved.iter().filter(|r| **r).count() as u64;
        }

        let elapsed = start.elapsed();
        println!(
            "{url}: {:?} per action ({checked} dependent operations resolved)",
            elapsed / iterations.max(1)
        );
    }

    println!("total: {:?} for {parses} parses", total.elapsed());
}

fn update(action: &Action<'_>) -> bool {
    action.route.as_ref().is_some_and(|route| {
        tracing::debug!(path = %route.path(), "Updated");
        true
    })
}

fn log_tap(action: &Action<'_>) -> bool {
    action.route.as_ref().is_some_and(|route| {
        tracing::debug!(path = %route.path(), "Logged tap");
        true
    })
}

fn check_permissions(action: &Action<'_>) -> bool {
    match &action.route {
        Some(route) => {
            tracing::debug!(path = %route.path(), "Checked permissions");
            true
        }
        None => {
            tracing::debug!(url_len = action.url.len(), "No route; permission check skipped");
            false
        }
    }
}
