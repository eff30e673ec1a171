//! Locale Service - Main application use case
//!
//! Orchestrates locale resolution for one request: checks whether the path
//! already carries a locale prefix, otherwise runs the strategy chain and
//! produces the redirect target. This is the primary interface for the
//! inbound HTTP adapter.

use crate::domain::entities::{RequestSignals, RouteDecision};
use crate::domain::ports::GeoResolver;
use crate::domain::services::{CookieStrategy, GeoStrategy, HeaderStrategy, LocaleStrategy};
use crate::domain::value_objects::Locale;
use std::sync::Arc;

/// Locale service - main application use case.
///
/// Holds the ordered strategy chain (cookie, header, geo-IP) and the
/// configured default locale. Each request is decided independently; the
/// service itself is stateless and shared across handlers.
pub struct LocaleService {
    strategies: Vec<Box<dyn LocaleStrategy>>,
    default_locale: Locale,
}

impl LocaleService {
    /// Create a service with the standard strategy chain.
    pub fn new(geo_resolver: Arc<dyn GeoResolver>, default_locale: Locale) -> Self {
        Self::with_strategies(
            vec![
                Box::new(CookieStrategy),
                Box::new(HeaderStrategy),
                Box::new(GeoStrategy::new(geo_resolver)),
            ],
            default_locale,
        )
    }

    /// Create a service with a custom chain. Used by tests to exercise
    /// ordering without real adapters.
    pub fn with_strategies(
        strategies: Vec<Box<dyn LocaleStrategy>>,
        default_locale: Locale,
    ) -> Self {
        Self {
            strategies,
            default_locale,
        }
    }

    /// Run the strategy chain; the first strategy with an opinion wins.
    ///
    /// Always produces a supported locale: an exhausted chain falls back
    /// to the configured default.
    pub async fn resolve(&self, signals: &RequestSignals) -> Locale {
        for strategy in &self.strategies {
            if let Some(locale) = strategy.try_resolve(signals).await {
                tracing::debug!("locale {} resolved via {}", locale, strategy.name());
                return locale;
            }
        }

        tracing::debug!("no signal produced a locale, using default {}", self.default_locale);
        self.default_locale
    }

    /// Decide how to route one request.
    ///
    /// A path whose first segment is a supported locale tag passes through
    /// unchanged; anything else is redirected to the path with the resolved
    /// locale inserted as the new first segment. The query string, when
    /// present, is carried over verbatim.
    pub async fn decide(
        &self,
        path: &str,
        query: Option<&str>,
        signals: &RequestSignals,
    ) -> RouteDecision {
        if let Some(locale) = Self::prefixed_locale(path) {
            return RouteDecision::PassThrough { locale };
        }

        let locale = self.resolve(signals).await;
        let mut location = format!("/{}{}", locale.as_str(), Self::normalize(path));
        if let Some(q) = query {
            location.push('?');
            location.push_str(q);
        }

        RouteDecision::Redirect { location, locale }
    }

    /// The locale encoded in the path's first segment, if any.
    ///
    /// Whole-segment match only: `/en/services` is prefixed, `/enquiry`
    /// is not.
    pub fn prefixed_locale(path: &str) -> Option<Locale> {
        let first = path.trim_start_matches('/').split('/').next()?;
        Locale::from_tag(first)
    }

    fn normalize(path: &str) -> &str {
        if path.is_empty() {
            "/"
        } else {
            path
        }
    }
}
