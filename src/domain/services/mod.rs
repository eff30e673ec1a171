mod strategies;

pub use strategies::{CookieStrategy, GeoStrategy, HeaderStrategy, LocaleStrategy};
