//! Listing configuration: page sizes and the default locale.

use serde::Deserialize;

use super::error::ValidationError;

/// Listing configuration shared by content and geo endpoints
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ListingConfig {
    /// Page size used when a request does not specify one
    #[serde(default = "default_page_size")]
    pub default_page_size: u32,

    /// Largest page size a request may ask for; larger requests are rejected
    #[serde(default = "default_max_page_size")]
    pub max_page_size: u32,

    /// Locale whose values are stored inline; requests for it skip the overlay
    #[serde(default = "default_locale")]
    pub default_locale: String,
}

impl ListingConfig {
    /// Whether `locale` needs a translation overlay.
    pub fn needs_overlay(&self, locale: &str) -> bool {
        locale != self.default_locale
    }

    /// Validate listing configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.default_page_size == 0 || self.max_page_size == 0 {
            return Err(ValidationError::InvalidPageSize);
        }
        if self.default_page_size > self.max_page_size {
            return Err(ValidationError::DefaultPageSizeTooLarge);
        }
        if self.default_locale.trim().is_empty() {
            return Err(ValidationError::EmptyDefaultLocale);
        }
        Ok(())
    }
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            max_page_size: default_max_page_size(),
            default_locale: default_locale(),
        }
    }
}

fn default_page_size() -> u32 {
    20
}

fn default_max_page_size() -> u32 {
    100
}

fn default_locale() -> String {
    "en".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_defaults_are_valid() {
        let config = ListingConfig::default();
        assert_eq!(config.default_page_size, 20);
        assert_eq!(config.max_page_size, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_above_max_is_rejected() {
        let config = ListingConfig {
            default_page_size: 50,
            max_page_size: 10,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::DefaultPageSizeTooLarge)
        );
    }

    #[test]
    fn test_zero_page_size_is_rejected() {
        let config = ListingConfig {
            default_page_size: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidPageSize));
    }

    #[test]
    fn test_default_locale_skips_overlay() {
        let config = ListingConfig::default();
        assert!(!config.needs_overlay("en"));
        assert!(config.needs_overlay("ru"));
    }
}
