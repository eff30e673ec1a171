//! Locale Resolution Strategies
//!
//! Each strategy inspects one signal on the request and either produces a
//! supported locale or has no opinion. The application service tries them
//! in a fixed priority order: cookie, header, geo-IP.

use crate::domain::entities::{is_public_ip, RequestSignals};
use crate::domain::ports::GeoResolver;
use crate::domain::value_objects::Locale;
use async_trait::async_trait;
use std::sync::Arc;

/// One step in the locale resolution chain.
///
/// Strategies never fail: anything unusable about their signal (missing,
/// malformed, unsupported) is reported as `None` so the chain advances.
#[async_trait]
pub trait LocaleStrategy: Send + Sync {
    /// Strategy name, for decision logging.
    fn name(&self) -> &'static str;

    /// Attempt to produce a locale from the request's signals.
    async fn try_resolve(&self, signals: &RequestSignals) -> Option<Locale>;
}

/// Resolves from the locale preference cookie set on an earlier visit.
///
/// Highest priority: a returning visitor's recorded choice outranks
/// whatever their browser or network location suggests.
pub struct CookieStrategy;

#[async_trait]
impl LocaleStrategy for CookieStrategy {
    fn name(&self) -> &'static str {
        "cookie"
    }

    async fn try_resolve(&self, signals: &RequestSignals) -> Option<Locale> {
        signals
            .cookie_locale
            .as_deref()
            .and_then(Locale::from_tag)
    }
}

/// Resolves from the `Accept-Language` header.
///
/// Takes each comma-separated entry in header order, strips any `;q=`
/// weight, normalizes the primary subtag to a 2-character lowercase code,
/// and returns the first member of the supported set.
pub struct HeaderStrategy;

impl HeaderStrategy {
    fn parse(header: &str) -> Option<Locale> {
        header
            .split(',')
            .filter_map(|entry| {
                let tag = entry.split(';').next().unwrap_or(entry).trim();
                let primary = tag.split('-').next().unwrap_or(tag);
                let code: String = primary.chars().take(2).collect::<String>().to_lowercase();
                Locale::from_tag(&code)
            })
            .next()
    }
}

#[async_trait]
impl LocaleStrategy for HeaderStrategy {
    fn name(&self) -> &'static str {
        "accept-language"
    }

    async fn try_resolve(&self, signals: &RequestSignals) -> Option<Locale> {
        signals.accept_language.as_deref().and_then(Self::parse)
    }
}

/// Resolves from the client IP's country of origin.
///
/// Lowest-priority signal and the only one touching the network. Private
/// and loopback addresses are skipped outright, and a country outside the
/// mapping table has no opinion.
pub struct GeoStrategy {
    resolver: Arc<dyn GeoResolver>,
}

impl GeoStrategy {
    pub fn new(resolver: Arc<dyn GeoResolver>) -> Self {
        Self { resolver }
    }
}

#[async_trait]
impl LocaleStrategy for GeoStrategy {
    fn name(&self) -> &'static str {
        "geo-ip"
    }

    async fn try_resolve(&self, signals: &RequestSignals) -> Option<Locale> {
        let ip = signals.client_ip.filter(|ip| is_public_ip(*ip))?;
        let country = self.resolver.country_for(ip).await?;
        Locale::for_country(&country)
    }
}
