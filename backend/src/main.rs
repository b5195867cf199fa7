//! Garden Advisor Backend
//!
//! HTTP front end for the gardening advisor: irrigation recommendations,
//! growth tracking, irrigation profiles, the plant catalog, FAQ chat and
//! UI localization.
//!
//! ## Architecture
//!
//! - Routes: HTTP request handling and routing
//! - Services: request validation and generator selection
//! - Shared crate: the advisory calculations themselves

use anyhow::Result;
use garden_advisor_backend::{config, routes, state::AppState};
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    init_tracing();

    let config = config::AppConfig::load()?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        env = if config::AppConfig::is_production() { "production" } else { "development" },
        "Starting Garden Advisor Backend"
    );

    if config::AppConfig::is_production() {
        validate_production_config(&config)?;
    }

    if let Some(seed) = config.advisor.rng_seed {
        warn!(seed, "Shared generator uses a fixed seed; unseeded responses are reproducible");
    }

    let state = AppState::new(config.clone());
    let app = routes::create_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    info!(address = %addr, "Server listening");

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    // Serve with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Initialize tracing/logging
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if config::AppConfig::is_production() {
            "garden_advisor_backend=info,tower_http=info".into()
        } else {
            "garden_advisor_backend=debug,tower_http=debug".into()
        }
    });

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if config::AppConfig::is_production() {
        // JSON logging for production (better for log aggregation)
        subscriber
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}

/// Validate configuration for production deployment
fn validate_production_config(config: &config::AppConfig) -> Result<()> {
    let mut errors = Vec::new();
    let advisor = &config.advisor;

    if advisor.max_growth_days == 0 {
        errors.push("advisor.max_growth_days must be greater than zero".to_string());
    }

    if advisor.max_growth_days > garden_advisor_shared::MAX_GROWTH_DAYS {
        errors.push(format!(
            "advisor.max_growth_days ({}) exceeds the supported maximum ({})",
            advisor.max_growth_days,
            garden_advisor_shared::MAX_GROWTH_DAYS
        ));
    }

    if advisor.default_growth_days > advisor.max_growth_days {
        errors.push(format!(
            "advisor.default_growth_days ({}) exceeds advisor.max_growth_days ({})",
            advisor.default_growth_days, advisor.max_growth_days
        ));
    }

    if advisor.default_locale.parse::<garden_advisor_shared::Locale>().is_err() {
        warn!(
            locale = %advisor.default_locale,
            "Unknown default locale, falling back to English"
        );
    }

    if !errors.is_empty() {
        for err in &errors {
            error!("Configuration error: {}", err);
        }
        anyhow::bail!("Invalid production configuration");
    }

    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        }
        _ = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
