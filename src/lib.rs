//! locale-gateway Library
//!
//! This module exposes the locale gateway components for use in
//! integration tests and as a library.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;

// Re-export commonly used types
pub use adapters::inbound::{app, AppState};
pub use adapters::outbound::{DashMapCountryCache, HttpGeoResolver};
pub use application::LocaleService;
pub use config::{load_config, Config};
pub use domain::entities::{RequestSignals, RouteDecision};
pub use domain::ports::{CountryCache, GeoResolver};
pub use domain::value_objects::{Locale, SUPPORTED_LOCALES};
