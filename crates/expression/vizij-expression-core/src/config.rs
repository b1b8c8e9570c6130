//! Core configuration for vizij-expression-core.

use serde::{Deserialize, Serialize};

use crate::blink::BlinkParams;
use crate::channel::Channel;
use crate::error::ConfigError;
use crate::player::AdvanceMode;

/// Auto blink configuration. Ranges are checked by [`Config::validate`];
/// the runtime assumes a validated config.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub blink: BlinkParams,
    /// Depth multiplier matching the model's eye opening, in [0,2].
    pub modulate_ratio: f32,
    /// Bounds of the random wait between trigger evaluations, in seconds.
    pub interval_min: f32,
    pub interval_max: f32,
    pub advance: AdvanceMode,
    /// Channel the blink transition writes.
    pub channel: Channel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            blink: BlinkParams::default(),
            modulate_ratio: 1.0,
            interval_min: 1.0,
            interval_max: 3.0,
            advance: AdvanceMode::SingleStep,
            channel: Channel::Blink,
        }
    }
}

fn check_range(field: &'static str, value: f32, min: f32, max: f32) -> Result<(), ConfigError> {
    // NaN fails the contains check as well.
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}

impl Config {
    /// Parse a (possibly partial) JSON config and validate it.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let cfg: Config =
            serde_json::from_str(raw).map_err(|e| ConfigError::Parse(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let b = &self.blink;
        check_range("blink.ratio_half", b.ratio_half, 0.0, 1.0)?;
        check_range("blink.ratio_close", b.ratio_close, 0.0, 1.0)?;
        check_range("blink.close_duration", b.close_duration, 0.0, f32::MAX)?;
        check_range("blink.open_duration", b.open_duration, 0.0, f32::MAX)?;
        check_range("blink.random_threshold", b.random_threshold, 0.0, 1.0)?;
        check_range(
            "blink.partial_blink_probability",
            b.partial_blink_probability,
            0.0,
            1.0,
        )?;
        check_range("modulate_ratio", self.modulate_ratio, 0.0, 2.0)?;

        let ordered = self.interval_min >= 0.0 && self.interval_min <= self.interval_max;
        if !ordered || !self.interval_max.is_finite() {
            return Err(ConfigError::InvalidInterval {
                min: self.interval_min,
                max: self.interval_max,
            });
        }
        Ok(())
    }
}
