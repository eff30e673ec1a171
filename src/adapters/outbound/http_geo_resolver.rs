//! HTTP GeoIP Resolver
//!
//! Implements GeoResolver against a third-party plain-text lookup service,
//! fronted by the injected IP-to-country cache.

use crate::domain::ports::{CountryCache, GeoResolver};
use async_trait::async_trait;
use std::net::IpAddr;
use std::sync::Arc;
use std::time::Duration;

/// Internal failure taxonomy for one lookup attempt.
///
/// Never leaves this module except as a log line: the port contract maps
/// every variant to "no result".
#[derive(Debug, thiserror::Error)]
enum GeoLookupError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("upstream returned status {0}")]
    Status(u16),
    #[error("malformed country body: {0:?}")]
    MalformedBody(String),
}

/// Geo-IP resolver backed by an HTTP country-lookup endpoint.
///
/// One GET per cache miss, bounded by the client-level timeout. Failed
/// lookups are not cached and not retried within the request; the next
/// request from the same IP tries again.
pub struct HttpGeoResolver {
    client: reqwest::Client,
    endpoint: String,
    cache: Arc<dyn CountryCache>,
}

impl HttpGeoResolver {
    /// Create a resolver against `endpoint` (base URL, no trailing path).
    ///
    /// The timeout is enforced by the underlying client, covering connect,
    /// request, and body read, so a hanging upstream cannot stall request
    /// handling past it.
    pub fn new(
        endpoint: impl Into<String>,
        timeout: Duration,
        cache: Arc<dyn CountryCache>,
    ) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("locale-gateway/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            cache,
        })
    }

    async fn lookup(&self, ip: &str) -> Result<String, GeoLookupError> {
        let url = format!("{}/{}/country/", self.endpoint.trim_end_matches('/'), ip);

        let resp = self.client.get(&url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(GeoLookupError::Status(status.as_u16()));
        }

        let body = resp.text().await?;
        let code = body.trim().to_uppercase();
        if code.len() != 2 || !code.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(GeoLookupError::MalformedBody(body));
        }

        Ok(code)
    }
}

#[async_trait]
impl GeoResolver for HttpGeoResolver {
    async fn country_for(&self, ip: IpAddr) -> Option<String> {
        let key = ip.to_string();

        if let Some(country) = self.cache.get(&key) {
            tracing::debug!("geo cache hit {} -> {}", key, country);
            return Some(country);
        }

        match self.lookup(&key).await {
            Ok(country) => {
                self.cache.insert(&key, &country);
                tracing::debug!("geo lookup {} -> {}", key, country);
                Some(country)
            }
            Err(e) => {
                tracing::warn!("geo lookup failed for {}: {}", key, e);
                None
            }
        }
    }
}
