mod http_middleware;
mod pages;

pub use http_middleware::{app, locale_middleware, AppState};
