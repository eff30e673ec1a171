pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;

pub use entities::{is_public_ip, RequestSignals, RouteDecision};
pub use value_objects::{Locale, SUPPORTED_LOCALES};
