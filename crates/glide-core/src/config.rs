//! Control configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

use glide_anim::Easing;
use glide_segments::{ThemeMode, DEFAULT_SEGMENT_INSET};

use crate::error::CoreError;
use crate::Result;

/// What a selection request does while a transition is still running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReentryPolicy {
    /// Retarget every tween from its current value toward the new selection
    #[default]
    Restart,
    /// Drop the request until the running transition settles
    Ignore,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Length of each transition tween
    pub animation_duration_ms: u64,
    /// Easing shared by the indicator and both panels
    pub easing: Easing,
    /// Margin subtracted from each segment's share of the width
    pub segment_inset: f64,
    /// Theme used to resolve label and chrome colors
    pub theme: ThemeMode,
    /// Behavior for taps that arrive mid-transition
    pub reentry: ReentryPolicy,
}

impl Config {
    pub const DEFAULT_ANIMATION_DURATION_MS: u64 = 250;

    /// Parse and validate a JSON configuration. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.segment_inset.is_finite() || self.segment_inset < 0.0 {
            return Err(CoreError::Config(format!(
                "segment_inset must be a non-negative number, got {}",
                self.segment_inset
            )));
        }
        Ok(())
    }

    pub fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_duration_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            animation_duration_ms: Self::DEFAULT_ANIMATION_DURATION_MS,
            easing: Easing::Linear,
            segment_inset: DEFAULT_SEGMENT_INSET,
            theme: ThemeMode::Light,
            reentry: ReentryPolicy::Restart,
        }
    }
}
