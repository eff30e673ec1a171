//! locale-gateway - Locale-aware HTTP gateway for the marketing site
//!
//! This is the composition root that wires together all the components.

use locale_gateway::adapters::inbound::{app, AppState};
use locale_gateway::adapters::outbound::{DashMapCountryCache, HttpGeoResolver};
use locale_gateway::application::LocaleService;
use locale_gateway::config::load_config;
use locale_gateway::domain::ports::{CountryCache, GeoResolver};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::fmt::format::FmtSpan;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration from environment
    let cfg = load_config()?;

    // Setup logging
    let log_level = if cfg.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_span_events(FmtSpan::CLOSE)
        .init();

    tracing::info!(
        "starting locale-gateway default_locale={} listen={}",
        cfg.default_locale,
        cfg.listen_addr
    );

    // ===== COMPOSITION ROOT =====
    // Wire up all adapters and services

    // IP-to-country cache (DashMap, capacity-bounded)
    let cache: Arc<dyn CountryCache> = Arc::new(DashMapCountryCache::new(cfg.geo_cache_capacity));

    // GeoIP resolver (HTTP lookup behind the cache)
    let geo_resolver: Arc<dyn GeoResolver> = Arc::new(HttpGeoResolver::new(
        cfg.geoip_endpoint.clone(),
        Duration::from_secs(cfg.geoip_timeout_secs),
        cache,
    )?);

    // Application service with the standard strategy chain
    let service = LocaleService::new(geo_resolver, cfg.default_locale);

    let state = Arc::new(AppState {
        service,
        config: cfg.clone(),
    });

    // Pages behind the locale middleware
    let router = app(state).layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(&cfg.listen_addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
