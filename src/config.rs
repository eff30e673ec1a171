use crate::domain::value_objects::Locale;
use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    // HTTP server settings
    pub listen_addr: String,
    pub debug: bool,

    // Locale settings
    pub default_locale: Locale,
    pub cookie_name: String,
    pub cookie_secure: bool,
    pub excluded_prefixes: Vec<String>,

    // GeoIP lookup settings
    pub geoip_endpoint: String,
    pub geoip_timeout_secs: u64,
    pub geo_cache_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".to_string(),
            debug: false,
            default_locale: Locale::English,
            cookie_name: "locale".to_string(),
            cookie_secure: false,
            excluded_prefixes: vec![
                "/api".to_string(),
                "/assets".to_string(),
                "/static".to_string(),
            ],
            geoip_endpoint: "https://ipapi.co".to_string(),
            geoip_timeout_secs: 3,
            geo_cache_capacity: 10_000,
        }
    }
}

pub fn load_config() -> anyhow::Result<Config> {
    let defaults = Config::default();

    let listen_addr =
        std::env::var("LOCALE_GATEWAY_LISTEN_ADDR").unwrap_or(defaults.listen_addr);

    let debug = std::env::var("DEBUG").is_ok();

    // The one setting that must not silently degrade: a default locale
    // outside the supported set would leak into every cookie and redirect.
    let default_locale = match std::env::var("LOCALE_GATEWAY_DEFAULT_LOCALE") {
        Ok(tag) => Locale::from_tag(&tag)
            .with_context(|| format!("unsupported default locale {:?}", tag))?,
        Err(_) => defaults.default_locale,
    };

    let cookie_name =
        std::env::var("LOCALE_GATEWAY_COOKIE_NAME").unwrap_or(defaults.cookie_name);

    let cookie_secure = std::env::var("LOCALE_GATEWAY_COOKIE_SECURE")
        .map(|v| v == "1" || v.to_lowercase() == "true")
        .unwrap_or(defaults.cookie_secure);

    let excluded_prefixes = match std::env::var("LOCALE_GATEWAY_EXCLUDED_PREFIXES") {
        Ok(v) => v
            .split(',')
            .map(str::trim)
            .filter(|p| p.starts_with('/'))
            .map(String::from)
            .collect(),
        Err(_) => defaults.excluded_prefixes,
    };

    let geoip_endpoint =
        std::env::var("LOCALE_GATEWAY_GEOIP_ENDPOINT").unwrap_or(defaults.geoip_endpoint);

    let geoip_timeout_secs = std::env::var("LOCALE_GATEWAY_GEOIP_TIMEOUT_SECS")
        .unwrap_or_default()
        .parse()
        .unwrap_or(defaults.geoip_timeout_secs);

    let geo_cache_capacity = std::env::var("LOCALE_GATEWAY_GEO_CACHE_CAPACITY")
        .unwrap_or_default()
        .parse()
        .unwrap_or(defaults.geo_cache_capacity);

    Ok(Config {
        listen_addr,
        debug,
        default_locale,
        cookie_name,
        cookie_secure,
        excluded_prefixes,
        geoip_endpoint,
        geoip_timeout_secs,
        geo_cache_capacity,
    })
}
