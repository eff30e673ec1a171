//! Demo Page Layer
//!
//! Minimal downstream collaborator for the locale middleware: a localized
//! placeholder page for any `/{locale}/...` path and a health endpoint on
//! the API prefix (which the middleware bypasses).

use crate::domain::value_objects::Locale;
use axum::{
    http::Uri,
    response::Html,
    routing::get,
    Json, Router,
};

pub fn router() -> Router {
    Router::new()
        .route("/api/health", get(health))
        .fallback(page)
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Render a placeholder page for a locale-prefixed path.
///
/// Requests reach this handler only after the middleware has confirmed or
/// rewritten the prefix, so a missing prefix here just falls back to the
/// crate default.
async fn page(uri: Uri) -> Html<String> {
    let path = uri.path();
    let locale = path
        .trim_start_matches('/')
        .split('/')
        .next()
        .and_then(Locale::from_tag)
        .unwrap_or_default();

    let greeting = match locale {
        Locale::English => "Welcome",
        Locale::Albanian => "Mirë se vini",
    };

    Html(format!(
        "<!doctype html><html lang=\"{locale}\"><body><h1>{greeting}</h1><p>{path}</p></body></html>"
    ))
}
