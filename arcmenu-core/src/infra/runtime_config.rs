//! Runtime configuration for user-adjustable constants
//!
//! This module provides a RuntimeConfig struct with Option<T> fields that override
//! the default constants. Accessor methods fall back to constants when None.

use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

use crate::error::ConfigError;
use crate::infra::constants::{carousel, feedback, input, layout, lifecycle};

/// Runtime configuration with optional overrides for constants.
/// Fields are None by default, falling back to compiled constants.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RuntimeConfig {
    // ========== LAYOUT ESTIMATE ==========
    /// Fixed card width (px)
    pub card_width: Option<f32>,
    /// Gap between cards (px)
    pub card_gap: Option<f32>,
    /// Strip padding, both sides combined (px)
    pub edge_padding_total: Option<f32>,

    // ========== CAROUSEL CURVE ==========
    /// Edge arrow hysteresis band (px)
    pub edge_hysteresis: Option<f32>,
    /// Recenter dead zone (px)
    pub recenter_epsilon: Option<f32>,
    /// Falloff distance as a fraction of viewport width
    pub falloff_fraction: Option<f32>,
    /// Scale lost at full falloff
    pub scale_depth: Option<f32>,
    /// Vertical droop at full falloff (px)
    pub vertical_droop: Option<f32>,
    /// Opacity lost at full falloff
    pub fade_depth: Option<f32>,

    // ========== INPUT ==========
    /// Wheel delta multiplier
    pub wheel_multiplier: Option<f32>,
    /// Edge arrow click scroll distance (px)
    pub arrow_scroll_step: Option<f32>,

    // ========== LIFECYCLE ==========
    /// Settle re-layout delay (ms)
    pub settle_delay_ms: Option<u64>,
    /// Header reveal delay (ms)
    pub header_reveal_delay_ms: Option<u64>,

    // ========== FEEDBACK ==========
    /// Whether audio feedback plays at all
    pub feedback_enabled: Option<bool>,
    /// Feedback volume in [0, 1]
    pub feedback_volume: Option<f32>,
}

impl RuntimeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse overrides from a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse overrides from a JSON object (e.g. posted by the host).
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file. `.json` files are read as JSON, everything else
    /// as TOML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text =
            std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json_str(&text)
        } else {
            Self::from_toml_str(&text)
        }
    }

    /// Reject overrides that would break the carousel invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn unit(
            field: &'static str,
            value: Option<f32>,
        ) -> Result<(), ConfigError> {
            match value {
                Some(v) if !(0.0..=1.0).contains(&v) => {
                    Err(ConfigError::OutOfRange {
                        field,
                        expectation: "within [0, 1]",
                        value: v,
                    })
                }
                _ => Ok(()),
            }
        }
        fn positive(
            field: &'static str,
            value: Option<f32>,
        ) -> Result<(), ConfigError> {
            match value {
                Some(v) if v <= 0.0 || !v.is_finite() => {
                    Err(ConfigError::OutOfRange {
                        field,
                        expectation: "a positive finite number",
                        value: v,
                    })
                }
                _ => Ok(()),
            }
        }
        fn non_negative(
            field: &'static str,
            value: Option<f32>,
        ) -> Result<(), ConfigError> {
            match value {
                Some(v) if v < 0.0 || !v.is_finite() => {
                    Err(ConfigError::OutOfRange {
                        field,
                        expectation: "a non-negative finite number",
                        value: v,
                    })
                }
                _ => Ok(()),
            }
        }

        unit("scale_depth", self.scale_depth)?;
        unit("fade_depth", self.fade_depth)?;
        unit("feedback_volume", self.feedback_volume)?;
        positive("falloff_fraction", self.falloff_fraction)?;
        positive("card_width", self.card_width)?;
        positive("wheel_multiplier", self.wheel_multiplier)?;
        non_negative("card_gap", self.card_gap)?;
        non_negative("edge_padding_total", self.edge_padding_total)?;
        non_negative("edge_hysteresis", self.edge_hysteresis)?;
        non_negative("recenter_epsilon", self.recenter_epsilon)?;
        non_negative("vertical_droop", self.vertical_droop)?;
        non_negative("arrow_scroll_step", self.arrow_scroll_step)?;
        Ok(())
    }

    // ========== LAYOUT ACCESSORS ==========

    pub fn card_width(&self) -> f32 {
        self.card_width.unwrap_or(layout::CARD_WIDTH)
    }

    pub fn card_gap(&self) -> f32 {
        self.card_gap.unwrap_or(layout::CARD_GAP)
    }

    pub fn edge_padding_total(&self) -> f32 {
        self.edge_padding_total
            .unwrap_or(layout::EDGE_PADDING_TOTAL)
    }

    // ========== CAROUSEL ACCESSORS ==========

    pub fn edge_hysteresis(&self) -> f32 {
        self.edge_hysteresis.unwrap_or(carousel::EDGE_HYSTERESIS)
    }

    pub fn recenter_epsilon(&self) -> f32 {
        self.recenter_epsilon.unwrap_or(carousel::RECENTER_EPSILON)
    }

    pub fn falloff_fraction(&self) -> f32 {
        self.falloff_fraction.unwrap_or(carousel::FALLOFF_FRACTION)
    }

    pub fn scale_depth(&self) -> f32 {
        self.scale_depth.unwrap_or(carousel::SCALE_DEPTH)
    }

    pub fn vertical_droop(&self) -> f32 {
        self.vertical_droop.unwrap_or(carousel::VERTICAL_DROOP)
    }

    pub fn fade_depth(&self) -> f32 {
        self.fade_depth.unwrap_or(carousel::FADE_DEPTH)
    }

    // ========== INPUT ACCESSORS ==========

    pub fn wheel_multiplier(&self) -> f32 {
        self.wheel_multiplier.unwrap_or(input::WHEEL_MULTIPLIER)
    }

    pub fn arrow_scroll_step(&self) -> f32 {
        self.arrow_scroll_step.unwrap_or(input::ARROW_SCROLL_STEP)
    }

    // ========== LIFECYCLE ACCESSORS ==========

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(
            self.settle_delay_ms.unwrap_or(lifecycle::SETTLE_DELAY_MS),
        )
    }

    pub fn header_reveal_delay(&self) -> Duration {
        Duration::from_millis(
            self.header_reveal_delay_ms
                .unwrap_or(lifecycle::HEADER_REVEAL_DELAY_MS),
        )
    }

    // ========== FEEDBACK ACCESSORS ==========

    pub fn feedback_enabled(&self) -> bool {
        self.feedback_enabled.unwrap_or(feedback::ENABLED)
    }

    pub fn feedback_volume(&self) -> f32 {
        self.feedback_volume
            .unwrap_or(feedback::VOLUME)
            .clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_fall_back_to_constants() {
        let rc = RuntimeConfig::new();
        assert_eq!(rc.card_width(), layout::CARD_WIDTH);
        assert_eq!(rc.edge_hysteresis(), carousel::EDGE_HYSTERESIS);
        assert_eq!(rc.settle_delay(), Duration::from_millis(60));
        assert!(rc.feedback_enabled());
    }

    #[test]
    fn toml_overrides_apply() {
        let rc = RuntimeConfig::from_toml_str(
            "card_width = 200.0\nsettle_delay_ms = 120\nfeedback_enabled = false\n",
        )
        .unwrap();
        assert_eq!(rc.card_width(), 200.0);
        assert_eq!(rc.card_gap(), layout::CARD_GAP);
        assert_eq!(rc.settle_delay(), Duration::from_millis(120));
        assert!(!rc.feedback_enabled());
    }

    #[test]
    fn json_overrides_apply() {
        let rc =
            RuntimeConfig::from_json_str(r#"{ "feedback_volume": 0.8 }"#)
                .unwrap();
        assert_eq!(rc.feedback_volume(), 0.8);
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        let err = RuntimeConfig::from_toml_str("scale_depth = 1.5").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::OutOfRange {
                field: "scale_depth",
                ..
            }
        ));
        assert!(RuntimeConfig::from_toml_str("falloff_fraction = 0.0").is_err());
    }

    #[test]
    fn negative_geometry_is_rejected() {
        for field in [
            "card_gap",
            "edge_padding_total",
            "edge_hysteresis",
            "recenter_epsilon",
            "vertical_droop",
            "arrow_scroll_step",
        ] {
            let err = RuntimeConfig::from_toml_str(&format!("{field} = -1.0"))
                .unwrap_err();
            assert!(
                matches!(err, ConfigError::OutOfRange { field: f, .. } if f == field),
                "{field}: {err}"
            );
        }
        assert!(RuntimeConfig::from_toml_str("vertical_droop = nan").is_err());
        assert!(
            RuntimeConfig::from_toml_str("recenter_epsilon = 0.0
card_gap = 0.0")
                .is_ok()
        );
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(RuntimeConfig::from_toml_str("card_widht = 3.0").is_err());
    }
}
