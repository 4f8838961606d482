use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default address the contact form hands off to
pub const DEFAULT_CONTACT_ADDRESS: &str = "prajjwal.singhpratap@gmail.com";

/// Failure to read a site configuration block
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse site config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Everything the page behaviours need to know about the hosting document.
///
/// Every field has a default matching the stock portfolio markup, so an empty
/// or partial TOML block only overrides what it names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Minimum level written to the browser console
    pub log_level: String,
    pub selectors: Selectors,
    pub scroll: ScrollConfig,
    pub reveal: RevealConfig,
    pub timing: Timing,
    pub contact: ContactConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            selectors: Selectors::default(),
            scroll: ScrollConfig::default(),
            reveal: RevealConfig::default(),
            timing: Timing::default(),
            contact: ContactConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Parse a TOML configuration block
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Load from an optional TOML block, falling back to defaults.
    ///
    /// Returns the parse error alongside the defaults so the caller can log it
    /// once a logger exists.
    pub fn load(contents: Option<&str>) -> (Self, Option<ConfigError>) {
        match contents {
            None => (Self::default(), None),
            Some(text) if text.trim().is_empty() => (Self::default(), None),
            Some(text) => match Self::from_toml_str(text) {
                Ok(config) => (config, None),
                Err(err) => (Self::default(), Some(err)),
            },
        }
    }
}

/// CSS selectors and ids for every element the behaviours touch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub year: String,
    pub mobile_menu: String,
    pub mobile_toggle: String,
    pub mobile_links: String,
    pub anchors: String,
    pub reveal_targets: String,
    pub email: String,
    pub contact_form: String,
    pub sections: String,
    pub nav_links: String,
    pub hero: String,
    pub project_cards: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            year: "#year".to_string(),
            mobile_menu: "#mobileMenu".to_string(),
            mobile_toggle: ".mobile-nav-toggle".to_string(),
            mobile_links: ".mobile-nav-menu .nav-link".to_string(),
            anchors: "a[href^=\"#\"]".to_string(),
            reveal_targets: "section, .project-card, .skill-card, .about-card, .timeline-item"
                .to_string(),
            email: ".contact-row .value".to_string(),
            contact_form: "#contact form".to_string(),
            sections: "section[id]".to_string(),
            nav_links: ".nav-link".to_string(),
            hero: ".hero-card".to_string(),
            project_cards: ".project-card".to_string(),
        }
    }
}

/// Scroll geometry thresholds, in CSS pixels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// How far above a section's top its nav link becomes active
    pub active_offset: f64,
    /// Offset past which the scroll-to-top button shows
    pub top_button_threshold: f64,
    /// Viewport width the parallax effect requires (exclusive)
    pub parallax_min_width: f64,
    /// Offset at which the parallax effect stops updating (exclusive)
    pub parallax_max_offset: f64,
    /// Fraction of the scroll offset applied as translation
    pub parallax_rate: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            active_offset: 100.0,
            top_button_threshold: 300.0,
            parallax_min_width: 900.0,
            parallax_max_offset: 500.0,
            parallax_rate: 0.05,
        }
    }
}

/// IntersectionObserver options for the fade-in reveal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub threshold: f64,
    pub root_margin: String,
    pub hidden_class: String,
    pub visible_class: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".to_string(),
            hidden_class: "fade-in".to_string(),
            visible_class: "fade-in-visible".to_string(),
        }
    }
}

/// Timer durations, in milliseconds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timing {
    pub copy_revert_ms: u32,
    pub notice_visible_ms: u32,
    pub notice_fade_ms: u32,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            copy_revert_ms: 2000,
            notice_visible_ms: 3000,
            notice_fade_ms: 300,
        }
    }
}

/// Contact handoff settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub address: String,
    pub copy_confirmation: String,
    pub accent_color: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_CONTACT_ADDRESS.to_string(),
            copy_confirmation: "Email copied! ✓".to_string(),
            accent_color: "var(--accent)".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_matches_stock_markup() {
        let config = SiteConfig::default();
        assert_eq!(config.selectors.contact_form, "#contact form");
        assert_eq!(config.scroll.top_button_threshold, 300.0);
        assert_eq!(config.timing.copy_revert_ms, 2000);
        assert_eq!(config.contact.address, DEFAULT_CONTACT_ADDRESS);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = SiteConfig::from_toml_str(
            r#"
            log_level = "debug"

            [contact]
            address = "someone@example.org"

            [scroll]
            top_button_threshold = 450.0
            "#,
        )
        .unwrap();

        assert_eq!(config.log_level, "debug");
        assert_eq!(config.contact.address, "someone@example.org");
        assert_eq!(config.contact.copy_confirmation, "Email copied! ✓");
        assert_eq!(config.scroll.top_button_threshold, 450.0);
        assert_eq!(config.scroll.active_offset, 100.0);
        assert_eq!(config.selectors, Selectors::default());
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(SiteConfig::from_toml_str("").unwrap(), SiteConfig::default());
    }

    #[test]
    fn test_load_without_block() {
        let (config, err) = SiteConfig::load(None);
        assert_eq!(config, SiteConfig::default());
        assert!(err.is_none());
    }

    #[test]
    fn test_load_blank_block() {
        let (config, err) = SiteConfig::load(Some("   \n  "));
        assert_eq!(config, SiteConfig::default());
        assert!(err.is_none());
    }

    #[test]
    fn test_load_invalid_toml_falls_back() {
        let (config, err) = SiteConfig::load(Some("invalid toml content"));
        assert_eq!(config, SiteConfig::default());
        let err = err.expect("parse error should be reported");
        assert!(err.to_string().contains("failed to parse site config"));
    }

    #[test]
    fn test_load_wrong_type_falls_back() {
        let (config, err) = SiteConfig::load(Some("[timing]\ncopy_revert_ms = \"soon\""));
        assert_eq!(config.timing, Timing::default());
        assert!(err.is_some());
    }

    #[test]
    fn test_roundtrip_through_toml() {
        let config = SiteConfig::default();
        let text = toml::to_string_pretty(&config).unwrap();
        assert_eq!(SiteConfig::from_toml_str(&text).unwrap(), config);
    }
}
