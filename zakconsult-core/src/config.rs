//! Site-wide configuration loaded from the bundled `site.json`.

use serde::Deserialize;
use thiserror::Error;

const DEFAULT_SITE_DATA: &str = include_str!("../../zakconsult-web/static/site.json");

pub const DEFAULT_RECIPIENT: &str = "office@zakconsult.com";
pub const DEFAULT_SUBJECT: &str = "Website Inquiry";
pub const DEFAULT_SCROLL_THRESHOLD_PX: f64 = 10.0;
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.1;
pub const DEFAULT_REVEAL_SELECTOR: &str =
    ".service-card, .step, .why-card, .contact-form, .contact-info";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("recipient must not be empty")]
    EmptyRecipient,
    #[error("scroll threshold must be finite and non-negative (got {0})")]
    ScrollThreshold(f64),
    #[error("reveal threshold must be within 0.0..=1.0 (got {0})")]
    RevealThreshold(f64),
    #[error("reveal selector must not be empty")]
    EmptySelector,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Address the contact form's `mailto:` link is sent to.
    pub recipient: String,
    /// Subject used when the visitor leaves the subject field blank.
    pub default_subject: String,
    pub scroll_threshold_px: f64,
    /// Fraction of a target that must be visible before it is revealed.
    pub reveal_threshold: f64,
    pub reveal_selector: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            recipient: DEFAULT_RECIPIENT.to_string(),
            default_subject: DEFAULT_SUBJECT.to_string(),
            scroll_threshold_px: DEFAULT_SCROLL_THRESHOLD_PX,
            reveal_threshold: DEFAULT_REVEAL_THRESHOLD,
            reveal_selector: DEFAULT_REVEAL_SELECTOR.to_string(),
        }
    }
}

impl SiteConfig {
    /// Parse and validate a configuration document.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a value is out of range.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load the bundled configuration, falling back to defaults when it is invalid.
    #[must_use]
    pub fn load_from_static() -> Self {
        Self::from_json(DEFAULT_SITE_DATA).unwrap_or_else(|err| {
            log::warn!("Bundled site config rejected, using defaults: {err}");
            Self::default()
        })
    }

    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// Returns the first out-of-range value found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.recipient.trim().is_empty() {
            return Err(ConfigError::EmptyRecipient);
        }
        if !self.scroll_threshold_px.is_finite() || self.scroll_threshold_px < 0.0 {
            return Err(ConfigError::ScrollThreshold(self.scroll_threshold_px));
        }
        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(ConfigError::RevealThreshold(self.reveal_threshold));
        }
        if self.reveal_selector.trim().is_empty() {
            return Err(ConfigError::EmptySelector);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_config_matches_defaults() {
        assert_eq!(SiteConfig::load_from_static(), SiteConfig::default());
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let cfg = SiteConfig::from_json(r#"{"recipient":"hello@example.org"}"#).unwrap();
        assert_eq!(cfg.recipient, "hello@example.org");
        assert_eq!(cfg.default_subject, DEFAULT_SUBJECT);
        assert!((cfg.scroll_threshold_px - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn rejects_out_of_range_values() {
        assert!(matches!(
            SiteConfig::from_json(r#"{"reveal_threshold":1.5}"#),
            Err(ConfigError::RevealThreshold(_))
        ));
        assert!(matches!(
            SiteConfig::from_json(r#"{"scroll_threshold_px":-1}"#),
            Err(ConfigError::ScrollThreshold(_))
        ));
        assert!(matches!(
            SiteConfig::from_json(r#"{"recipient":"  "}"#),
            Err(ConfigError::EmptyRecipient)
        ));
    }

    #[test]
    fn malformed_json_is_reported() {
        let err = SiteConfig::from_json("{").unwrap_err();
        assert!(err.to_string().starts_with("JSON parsing error"));
    }
}
