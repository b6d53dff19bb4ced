//! Benefit Engine API server binary.

use std::path::PathBuf;

use anyhow::Context;
use benefit_engine::api::{AppState, create_router};
use benefit_engine::config::{ConfigLoader, RuleRegistry};
use clap::Parser;
use tracing::info;

/// Statutory benefit calculation REST API server
#[derive(Parser, Debug)]
#[command(name = "benefit-engine")]
#[command(version, about, long_about = None)]
struct Args {
    /// Host address to bind to
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value = "8080")]
    port: u16,

    /// Directory of jurisdiction rule files; the built-in rules are used when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = if args.verbose {
        "debug,benefit_engine=debug"
    } else {
        "info,benefit_engine=info"
    };

    tracing_subscriber::fmt().with_env_filter(filter).init();

    let registry = match &args.config {
        Some(dir) => {
            info!(path = %dir.display(), "Loading jurisdiction rules");
            ConfigLoader::load(dir)
                .with_context(|| format!("failed to load rules from {}", dir.display()))?
                .into_registry()
        }
        None => {
            info!("Using built-in jurisdiction rules");
            RuleRegistry::builtin()
        }
    };
    info!(
        jurisdictions = registry.len(),
        default = %registry.default_rule_set().code(),
        "Rule registry ready"
    );

    let app = create_router(AppState::new(registry));
    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!(address = %addr, "Benefit engine listening");

    axum::serve(listener, app).await?;
    Ok(())
}
