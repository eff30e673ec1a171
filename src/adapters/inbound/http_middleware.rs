//! Locale Middleware
//!
//! The inbound HTTP adapter: runs before every page handler, extracts the
//! request's locale signals, asks the application service for a routing
//! decision, and answers with either a pass-through or a redirect, setting
//! the preference cookie in both cases.

use crate::application::LocaleService;
use crate::config::Config;
use crate::domain::entities::{RequestSignals, RouteDecision};
use crate::domain::value_objects::Locale;
use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    Router,
};
use std::net::IpAddr;
use std::sync::Arc;

use super::pages;

/// One year, the preference cookie lifetime.
const COOKIE_MAX_AGE_SECS: u32 = 31_536_000;

/// Shared state for the middleware and composition root.
pub struct AppState {
    pub service: LocaleService,
    pub config: Config,
}

/// Build the page router with the locale middleware mounted in front.
pub fn app(state: Arc<AppState>) -> Router {
    pages::router().layer(middleware::from_fn_with_state(state, locale_middleware))
}

/// Locale resolution middleware.
///
/// Bypassed paths (assets, API, framework-reserved) pass through untouched.
/// Every other request gets exactly one of: pass-through with a refreshed
/// preference cookie, or a 307 redirect to the locale-prefixed path with
/// the same cookie. Nothing in here may fail the request: unusable signals
/// degrade to the default locale.
pub async fn locale_middleware(
    State(state): State<Arc<AppState>>,
    req: Request,
    next: Next,
) -> Response {
    let path = req.uri().path().to_string();
    if is_bypassed(&path, &state.config.excluded_prefixes) {
        return next.run(req).await;
    }

    let query = req.uri().query().map(str::to_string);
    let signals = extract_signals(req.headers(), &state.config.cookie_name);
    let decision = state
        .service
        .decide(&path, query.as_deref(), &signals)
        .await;

    let cookie = preference_cookie(
        &state.config.cookie_name,
        decision.locale(),
        state.config.cookie_secure,
    );

    match decision {
        RouteDecision::PassThrough { .. } => {
            let mut resp = next.run(req).await;
            if let Some(cookie) = cookie {
                resp.headers_mut().append(header::SET_COOKIE, cookie);
            }
            resp
        }
        RouteDecision::Redirect { location, .. } => {
            let Ok(location) = HeaderValue::from_str(&location) else {
                // Unrepresentable target: serve the request as-is rather
                // than fail it.
                return next.run(req).await;
            };

            let mut resp = StatusCode::TEMPORARY_REDIRECT.into_response();
            resp.headers_mut().insert(header::LOCATION, location);
            if let Some(cookie) = cookie {
                resp.headers_mut().append(header::SET_COOKIE, cookie);
            }
            resp
        }
    }
}

/// Paths the resolver must never touch: file assets, configured API and
/// asset prefixes, and framework-reserved segments starting with `_`.
fn is_bypassed(path: &str, excluded_prefixes: &[String]) -> bool {
    let segments: Vec<&str> = path.trim_start_matches('/').split('/').collect();

    if let Some(last) = segments.last() {
        if last.contains('.') {
            return true;
        }
    }
    if let Some(first) = segments.first() {
        if first.starts_with('_') {
            return true;
        }
    }

    excluded_prefixes.iter().any(|prefix| {
        let prefix = prefix.trim_end_matches('/');
        path == prefix || path.starts_with(&format!("{}/", prefix))
    })
}

/// Pull the raw locale signals off the request headers.
fn extract_signals(headers: &HeaderMap, cookie_name: &str) -> RequestSignals {
    RequestSignals {
        cookie_locale: cookie_value(headers, cookie_name),
        accept_language: headers
            .get(header::ACCEPT_LANGUAGE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        client_ip: client_ip(headers),
    }
}

fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|line| line.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(k, _)| *k == name)
        .map(|(_, v)| v.trim().to_string())
}

/// Derive the client IP from forwarding headers.
///
/// `x-forwarded-for` carries a comma-separated proxy chain; the first
/// entry is the original client. `x-real-ip` is the single-value
/// fallback. Unparseable values count as absent.
fn client_ip(headers: &HeaderMap) -> Option<IpAddr> {
    let forwarded = headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .and_then(|v| v.trim().parse().ok());

    forwarded.or_else(|| {
        headers
            .get("x-real-ip")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse().ok())
    })
}

fn preference_cookie(name: &str, locale: Locale, secure: bool) -> Option<HeaderValue> {
    let mut cookie = format!(
        "{}={}; Max-Age={}; Path=/; SameSite=Lax",
        name,
        locale.as_str(),
        COOKIE_MAX_AGE_SECS
    );
    if secure {
        cookie.push_str("; Secure");
    }

    HeaderValue::from_str(&cookie).ok()
}
