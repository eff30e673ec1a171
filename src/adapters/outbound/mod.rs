mod dashmap_country_cache;
mod http_geo_resolver;

pub use dashmap_country_cache::DashMapCountryCache;
pub use http_geo_resolver::HttpGeoResolver;
