//! Page-supplied tuning
//!
//! Read once at startup from an inline JSON script element. Nothing is
//! persisted; a page without the element gets the defaults.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::EnhanceError;
use crate::reveal::RevealOptions;

/// Element ids and selectors the handlers attach to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Selectors {
    pub header_id: String,
    pub menu_button_id: String,
    pub nav_links_id: String,
    pub anchors: String,
    pub faq_question: String,
    pub faq_answer: String,
    /// Content card groups revealed on scroll
    pub fade_in: Vec<String>,
    pub avatars: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            header_id: HEADER_ID.to_string(),
            menu_button_id: MENU_BUTTON_ID.to_string(),
            nav_links_id: NAV_LINKS_ID.to_string(),
            anchors: ANCHOR_SELECTOR.to_string(),
            faq_question: FAQ_QUESTION_SELECTOR.to_string(),
            faq_answer: FAQ_ANSWER_SELECTOR.to_string(),
            fade_in: FADE_IN_SELECTORS.iter().map(|s| s.to_string()).collect(),
            avatars: AVATAR_SELECTOR.to_string(),
        }
    }
}

impl Selectors {
    /// Card groups joined into one selector list
    pub fn fade_in_query(&self) -> String {
        self.fade_in.join(", ")
    }

    /// Every id and selector must be non-blank; an empty selector makes
    /// `querySelectorAll` throw and an empty id matches nothing
    pub fn validate(&self) -> Result<(), EnhanceError> {
        if self.fade_in.is_empty() {
            return Err(EnhanceError::InvalidConfig(
                "selectors.fade_in needs at least one selector".to_string(),
            ));
        }
        let named = [
            ("header_id", &self.header_id),
            ("menu_button_id", &self.menu_button_id),
            ("nav_links_id", &self.nav_links_id),
            ("anchors", &self.anchors),
            ("faq_question", &self.faq_question),
            ("faq_answer", &self.faq_answer),
            ("avatars", &self.avatars),
        ];
        let fade_in = self.fade_in.iter().map(|s| ("fade_in", s));
        for (name, value) in named.into_iter().chain(fade_in) {
            if value.trim().is_empty() {
                return Err(EnhanceError::InvalidConfig(format!(
                    "selectors.{name} must not be empty"
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LandingConfig {
    /// Header gets the scrolled style past this offset (px)
    pub header_scroll_threshold: f64,
    /// Fixed header height subtracted from anchor targets (px)
    pub header_offset: f64,
    /// Optional throttle for the header scroll handler (ms); unset runs on every event
    pub header_throttle_ms: Option<f64>,
    pub fade_in: RevealOptions,
    pub avatars: RevealOptions,
    pub selectors: Selectors,
    /// `error`, `warn`, `info`, `debug` or `trace`
    pub log_level: String,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            header_scroll_threshold: HEADER_SCROLL_THRESHOLD,
            header_offset: HEADER_OFFSET,
            header_throttle_ms: None,
            fade_in: RevealOptions::new(FADE_IN_THRESHOLD, FADE_IN_ROOT_MARGIN),
            avatars: RevealOptions::new(AVATAR_THRESHOLD, AVATAR_ROOT_MARGIN),
            selectors: Selectors::default(),
            log_level: "info".to_string(),
        }
    }
}

impl LandingConfig {
    /// Parse and validate
    pub fn from_json(json: &str) -> Result<Self, EnhanceError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| EnhanceError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), EnhanceError> {
        for (name, value) in [
            ("header_scroll_threshold", self.header_scroll_threshold),
            ("header_offset", self.header_offset),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(EnhanceError::InvalidConfig(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }
        if let Some(ms) = self.header_throttle_ms {
            if !ms.is_finite() || ms <= 0.0 {
                return Err(EnhanceError::InvalidConfig(format!(
                    "header_throttle_ms must be positive, got {ms}"
                )));
            }
        }
        self.fade_in.validate()?;
        self.avatars.validate()?;
        self.selectors.validate()?;
        self.log_level()?;
        Ok(())
    }

    pub fn log_level(&self) -> Result<log::Level, EnhanceError> {
        self.log_level.parse().map_err(|_| {
            EnhanceError::InvalidConfig(format!("unknown log level {:?}", self.log_level))
        })
    }

    /// Load from the page's inline config element (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let text = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        let Some(text) = text else {
            return Self::default();
        };

        match Self::from_json(&text) {
            Ok(config) => {
                log::info!("Loaded landing config from #{}", CONFIG_ELEMENT_ID);
                config
            }
            Err(e) => {
                log::warn!("Ignoring landing config: {}", e);
                Self::default()
            }
        }
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = LandingConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.header_offset, 80.0);
        assert_eq!(config.fade_in.root_margin, "0px 0px -50px 0px");
        assert_eq!(config.log_level().unwrap(), log::Level::Info);
        assert_eq!(
            config.selectors.fade_in_query(),
            ".feature-card, .stat-card, .step, .testimonial-card"
        );
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = LandingConfig::from_json(
            r#"{ "header_offset": 64, "fade_in": { "threshold": 0.25, "root_margin": "0px" } }"#,
        )
        .unwrap();
        assert_eq!(config.header_offset, 64.0);
        assert_eq!(config.fade_in.threshold, 0.25);
        assert_eq!(config.header_scroll_threshold, 100.0);
        assert_eq!(config.selectors, Selectors::default());
    }

    #[test]
    fn test_rejects_invalid_values() {
        let cases = [
            r#"{ "header_offset": -1 }"#,
            r#"{ "header_throttle_ms": 0 }"#,
            r#"{ "avatars": { "threshold": 2.0, "root_margin": "0px" } }"#,
            r#"{ "fade_in": { "threshold": 0.1, "root_margin": "1em" } }"#,
            r#"{ "log_level": "loud" }"#,
            r#"{ "unknown_field": true }"#,
            "not json",
        ];
        for json in cases {
            assert!(
                matches!(
                    LandingConfig::from_json(json),
                    Err(EnhanceError::InvalidConfig(_) | EnhanceError::InvalidRootMargin(_))
                ),
                "accepted {json}"
            );
        }
    }

    #[test]
    fn test_rejects_empty_selectors() {
        let cases = [
            r#"{ "selectors": { "fade_in": [] } }"#,
            r#"{ "selectors": { "fade_in": [".feature-card", ""] } }"#,
            r#"{ "selectors": { "fade_in": ["  "] } }"#,
            r#"{ "selectors": { "avatars": "" } }"#,
            r#"{ "selectors": { "header_id": "" } }"#,
        ];
        for json in cases {
            let err = LandingConfig::from_json(json).unwrap_err();
            assert!(
                matches!(&err, EnhanceError::InvalidConfig(msg) if msg.starts_with("selectors.")),
                "{json}: {err}"
            );
        }

        let config = LandingConfig::from_json(r#"{ "selectors": { "fade_in": [".card"] } }"#)
            .unwrap();
        assert_eq!(config.selectors.fade_in_query(), ".card");
    }

    #[test]
    fn test_pretty_json_roundtrips() {
        let config = LandingConfig {
            header_throttle_ms: Some(16.0),
            ..Default::default()
        };
        let parsed = LandingConfig::from_json(&config.to_json_pretty()).unwrap();
        assert_eq!(parsed, config);
    }
}
