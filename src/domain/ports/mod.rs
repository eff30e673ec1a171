mod country_cache;
mod geo_resolver;

pub use country_cache::CountryCache;
pub use geo_resolver::GeoResolver;
