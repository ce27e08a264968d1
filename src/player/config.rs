use std::path::Path;

use anyhow::Context;

use crate::{
    animation::ease::Ease,
    foundation::core::Fps,
    foundation::error::{KinemaError, KinemaResult},
};

/// Scene-wide settings, fixed for the lifetime of a [`crate::Scene`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Tick rate of the virtual clock.
    pub fps: Fps,
    /// Duration of an animation with no explicit run time, in seconds.
    pub default_run_time: f64,
    /// Rate function used when neither the animation nor the play call sets one.
    pub default_rate: Ease,
    /// Duration of [`crate::Scene::wait_default`], in seconds.
    pub wait_time: f64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            fps: Fps::default(),
            default_run_time: 1.0,
            default_rate: Ease::Smooth,
            wait_time: 1.0,
        }
    }
}

impl SceneConfig {
    /// Check every field.
    pub fn validate(&self) -> KinemaResult<()> {
        self.fps.validate()?;
        positive_secs("default_run_time", self.default_run_time)?;
        positive_secs("wait_time", self.wait_time)
    }

    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json_str(s: &str) -> KinemaResult<Self> {
        let cfg: Self = serde_json::from_str(s)
            .map_err(|e| KinemaError::serde(format!("scene config: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse and validate a JSON config file.
    pub fn from_path(path: &Path) -> KinemaResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read scene config '{}'", path.display()))?;
        Self::from_json_str(&text)
    }
}

/// Per-call settings for [`crate::Scene::play`].
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayConfig {
    /// Total call duration; rescales the whole schedule when set.
    pub run_time: Option<f64>,
    /// Rate function for animations that do not set their own.
    pub rate_func: Option<Ease>,
    /// Start offset of each animation as a fraction of the previous one's duration.
    pub lag_ratio: f64,
}

impl PlayConfig {
    /// All defaults: natural durations, no stagger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the total call duration.
    pub fn run_time(mut self, secs: f64) -> Self {
        self.run_time = Some(secs);
        self
    }

    /// Set the rate function.
    pub fn rate_func(mut self, ease: Ease) -> Self {
        self.rate_func = Some(ease);
        self
    }

    /// Set the stagger ratio.
    pub fn lag_ratio(mut self, ratio: f64) -> Self {
        self.lag_ratio = ratio;
        self
    }

    /// Check every field.
    pub fn validate(&self) -> KinemaResult<()> {
        if let Some(rt) = self.run_time {
            positive_secs("run_time", rt)?;
        }
        if !(self.lag_ratio.is_finite() && self.lag_ratio >= 0.0) {
            return Err(KinemaError::validation(
                "lag_ratio must be finite and >= 0",
            ));
        }
        Ok(())
    }
}

fn positive_secs(what: &str, v: f64) -> KinemaResult<()> {
    if v.is_finite() && v > 0.0 {
        Ok(())
    } else {
        Err(KinemaError::validation(format!(
            "{what} must be finite and > 0 (got {v})"
        )))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/player/config.rs"]
mod tests;
