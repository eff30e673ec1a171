//! GeoIP Resolver Port
//!
//! Defines the interface for resolving IP addresses to a country of origin.

use async_trait::async_trait;
use std::net::IpAddr;

/// Resolver for IP address to country code.
///
/// This is an outbound port that abstracts the geo-IP source.
/// Implementations may call a third-party lookup service or serve
/// canned answers in tests.
///
/// The contract is result-or-absent: a lookup failure is reported as
/// `None`, never as an error, so the resolution chain can fall through
/// to the default locale without touching error-handling mechanics.
#[async_trait]
pub trait GeoResolver: Send + Sync {
    /// Resolve an IP address to an ISO 3166-1 alpha-2 country code.
    ///
    /// Returns `None` if the IP cannot be resolved for any reason.
    async fn country_for(&self, ip: IpAddr) -> Option<String>;
}
