//! Domain Entities - Core business objects
//!
//! These entities represent the per-request concepts of the locale gateway.
//! They have no external dependencies and contain only business logic.

use crate::domain::value_objects::Locale;
use std::net::IpAddr;

/// The signals a single request carries for locale resolution.
///
/// Built once by the inbound adapter, consumed once by the strategy chain,
/// then discarded. Values are raw: validation happens in the strategies so
/// a malformed signal degrades to "absent" instead of failing the request.
#[derive(Debug, Clone, Default)]
pub struct RequestSignals {
    /// Raw value of the locale preference cookie, if present
    pub cookie_locale: Option<String>,
    /// Raw `Accept-Language` header value, if present
    pub accept_language: Option<String>,
    /// Client IP derived from forwarding headers, if present
    pub client_ip: Option<IpAddr>,
}

/// The outcome of locale resolution for one request.
///
/// Exactly one decision is produced per non-bypassed request, and the
/// preference cookie is set either way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    /// Path already carries a supported locale prefix; forward unchanged.
    PassThrough { locale: Locale },
    /// Path lacks a locale prefix; redirect to the rewritten location.
    Redirect { location: String, locale: Locale },
}

impl RouteDecision {
    /// The locale this decision persists in the preference cookie.
    pub fn locale(&self) -> Locale {
        match self {
            Self::PassThrough { locale } => *locale,
            Self::Redirect { locale, .. } => *locale,
        }
    }
}

/// Whether an IP address is eligible for geo-IP lookup.
///
/// Loopback, private-range, link-local and unique-local addresses carry no
/// geographic information and must never be sent upstream.
pub fn is_public_ip(ip: IpAddr) -> bool {
    match ip {
        IpAddr::V4(v4) => {
            !(v4.is_loopback()
                || v4.is_private()
                || v4.is_link_local()
                || v4.is_unspecified()
                || v4.is_broadcast())
        }
        IpAddr::V6(v6) => {
            // fc00::/7 unique-local, fe80::/10 link-local
            let seg = v6.segments()[0];
            !(v6.is_loopback()
                || v6.is_unspecified()
                || (seg & 0xfe00) == 0xfc00
                || (seg & 0xffc0) == 0xfe80)
        }
    }
}
