//! Value Objects - Immutable domain primitives
//!
//! Value objects are identified by their value rather than identity.
//! They are immutable and can be freely shared.

use serde::{Deserialize, Serialize};

/// A supported site locale.
///
/// The supported set is closed: any tag outside it is rejected at the
/// boundary and never reaches a cookie, a redirect path, or a log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    /// English (en) - crate-level default
    English,
    /// Albanian (sq)
    Albanian,
}

/// All locales the site serves, in no significant order.
pub const SUPPORTED_LOCALES: &[Locale] = &[Locale::English, Locale::Albanian];

/// Country code (ISO 3166-1 alpha-2) to locale mapping.
///
/// Deliberately explicit and small: extend it one entry at a time as the
/// site targets new markets. Countries not listed fall through to the
/// configured default.
const COUNTRY_LOCALES: &[(&str, Locale)] = &[("AL", Locale::Albanian)];

impl Locale {
    /// Parse a locale from a whole tag.
    ///
    /// The match is case-insensitive but exact: `"en"` parses, `"en-US"`
    /// and `"english"` do not.
    ///
    /// # Examples
    /// ```
    /// use locale_gateway::domain::Locale;
    ///
    /// assert_eq!(Locale::from_tag("sq"), Some(Locale::Albanian));
    /// assert_eq!(Locale::from_tag("EN"), Some(Locale::English));
    /// assert_eq!(Locale::from_tag("de"), None);
    /// ```
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.to_lowercase().as_str() {
            "en" => Some(Self::English),
            "sq" => Some(Self::Albanian),
            _ => None,
        }
    }

    /// Convert to the tag used in paths and cookies.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Albanian => "sq",
        }
    }

    /// Map a country code (ISO 3166-1 alpha-2) to a locale.
    ///
    /// Returns `None` for countries outside the mapping table so callers
    /// fall through to the default locale.
    pub fn for_country(country: &str) -> Option<Self> {
        let code = country.to_uppercase();
        COUNTRY_LOCALES
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, locale)| *locale)
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::English
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tag_supported() {
        assert_eq!(Locale::from_tag("en"), Some(Locale::English));
        assert_eq!(Locale::from_tag("sq"), Some(Locale::Albanian));
    }

    #[test]
    fn test_from_tag_case_insensitive() {
        assert_eq!(Locale::from_tag("EN"), Some(Locale::English));
        assert_eq!(Locale::from_tag("Sq"), Some(Locale::Albanian));
    }

    #[test]
    fn test_from_tag_rejects_unsupported() {
        let invalid = vec!["de", "en-US", "english", "", "e", "sqi", "sq "];

        for tag in invalid {
            assert_eq!(Locale::from_tag(tag), None, "should reject tag: {:?}", tag);
        }
    }

    #[test]
    fn test_as_str_round_trip() {
        for locale in SUPPORTED_LOCALES {
            assert_eq!(Locale::from_tag(locale.as_str()), Some(*locale));
        }
    }

    #[test]
    fn test_for_country_mapped() {
        assert_eq!(Locale::for_country("AL"), Some(Locale::Albanian));
        assert_eq!(Locale::for_country("al"), Some(Locale::Albanian));
    }

    #[test]
    fn test_for_country_unmapped() {
        for country in ["US", "DE", "XX", ""] {
            assert_eq!(Locale::for_country(country), None);
        }
    }

    #[test]
    fn test_default_is_english() {
        assert_eq!(Locale::default(), Locale::English);
    }

    #[test]
    fn test_display_matches_tag() {
        assert_eq!(Locale::Albanian.to_string(), "sq");
        assert_eq!(Locale::English.to_string(), "en");
    }
}
