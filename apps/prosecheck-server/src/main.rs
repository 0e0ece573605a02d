//! ProseCheck API Server
//!
//! Grammar-checking backend: proxies analysis to an external
//! LanguageTool-compatible oracle and manages correction sessions. Provides
//! REST API endpoints for:
//!
//! - Session lifecycle and content analysis
//! - Correction/suggestion classification with resolution tracking
//! - Fix application (session-based and stateless)
//!
//! ## Architecture
//!
//! Sessions live in process memory; the oracle is the only external
//! dependency and is configured via `--oracle-url` or `ORACLE_URL`. The
//! server adds:
//!
//! - Rate limiting via tower-governor
//! - CORS for browser clients

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use clap::Parser;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod api;
mod error;
mod models;
mod oracle;
mod state;

use api::{
    handle_apply_fix, handle_apply_stateless, handle_check, handle_create_session,
    handle_get_session, handle_health, handle_list_languages,
};
use oracle::OracleClient;
use state::AppState;

/// Public LanguageTool instance; fine for trying things out, run your own
/// for anything serious
const DEFAULT_ORACLE_URL: &str = "https://api.languagetool.org";

/// Command-line arguments for the ProseCheck server
#[derive(Parser, Debug)]
#[command(name = "prosecheck-server")]
#[command(about = "ProseCheck server for grammar analysis and correction sessions")]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "3000")]
    port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Base URL of the grammar oracle (falls back to ORACLE_URL, then the
    /// public LanguageTool API)
    #[arg(long)]
    oracle_url: Option<String>,

    /// Oracle request timeout in milliseconds
    #[arg(long, default_value = "10000")]
    timeout_ms: u64,

    /// Rate limit: requests per second per IP
    #[arg(long, default_value = "10")]
    rate_limit: u32,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let oracle_url = args
        .oracle_url
        .or_else(|| std::env::var("ORACLE_URL").ok())
        .unwrap_or_else(|| DEFAULT_ORACLE_URL.to_string());

    info!("Starting ProseCheck server on {}:{}", args.host, args.port);

    // Create rate limiter configuration
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(args.rate_limit.into())
            .burst_size(args.rate_limit * 2)
            .finish()
            .expect("Failed to create rate limiter config"),
    );

    // Create shared state
    let state = AppState::new(OracleClient::new(oracle_url.clone(), args.timeout_ms)?);

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router
    let app = Router::new()
        // Health check
        .route("/health", get(handle_health))
        // API endpoints
        .route("/api/languages", get(handle_list_languages))
        .route("/api/session", post(handle_create_session))
        .route("/api/session/:id", get(handle_get_session))
        .route("/api/session/:id/check", post(handle_check))
        .route("/api/session/:id/fix", post(handle_apply_fix))
        .route("/api/apply", post(handle_apply_stateless))
        // Apply middleware
        .layer(GovernorLayer {
            config: governor_conf,
        })
        .layer(cors)
        .with_state(state);

    // Start server
    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Server listening on http://{}", addr);
    info!("Oracle endpoint: {}", oracle_url);
    info!("Rate limit: {} requests/second per IP", args.rate_limit);
    info!("Oracle timeout: {}ms", args.timeout_ms);

    axum::serve(listener, app).await?;

    Ok(())
}
