//! HTTP server initialization and runtime setup.
//!
//! Builds the landing service from configuration and runs the Axum server.

use crate::application::services::LandingService;
use crate::config::Config;
use crate::domain::analytics::{AnalyticsEmitter, MetrikaCapability};
use crate::domain::deep_link::DeepLinkBuilder;
use crate::domain::ports::{GtagApi, TrackingTransport};
use crate::domain::reporter::TrackingReporter;
use crate::infrastructure::analytics::{Ga4MeasurementProtocol, MetrikaMeasurementProtocol};
use crate::infrastructure::tracking::{HttpTrackingTransport, NullTrackingTransport};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Wires transports and analytics integrations into a [`LandingService`].
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be created.
pub fn build_landing_service(config: &Config) -> Result<LandingService> {
    let client = reqwest::Client::builder()
        .timeout(config.tracking_timeout())
        .user_agent(concat!("seo-landing/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("Failed to build HTTP client")?;

    let transport: Arc<dyn TrackingTransport> = match &config.tracking_endpoint {
        Some(endpoint) => {
            tracing::info!("Tracking enabled: {}", endpoint);
            Arc::new(HttpTrackingTransport::with_client(client.clone(), endpoint))
        }
        None => {
            tracing::info!("Tracking disabled (NullTrackingTransport)");
            Arc::new(NullTrackingTransport::new())
        }
    };

    let metrika = config.metrika.as_ref().map(|m| MetrikaCapability {
        counter_id: m.counter_id,
        api: Arc::new(MetrikaMeasurementProtocol::new(
            client.clone(),
            &m.measurement_token,
        )),
    });

    let gtag = config.ga4.as_ref().map(|g| {
        Arc::new(Ga4MeasurementProtocol::new(
            client.clone(),
            &g.measurement_id,
            &g.api_secret,
        )) as Arc<dyn GtagApi>
    });

    Ok(LandingService::new(
        DeepLinkBuilder::new(&config.bot_username),
        TrackingReporter::new(transport),
        AnalyticsEmitter::new(metrika, gtag),
    )
    .with_form_reset_delay(config.form_reset_delay()))
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - The HTTP client cannot be created
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let landing_service = build_landing_service(&config)?;
    let state = AppState::new(landing_service);

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolves on Ctrl+C. Background tracking requests still in flight are dropped.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
