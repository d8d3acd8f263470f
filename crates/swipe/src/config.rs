//! Tuning knobs for the swipe machine and the bio panel.
//!
//! Every field has a serde default, so a partial YAML/JSON section only
//! needs to name what it overrides. Call `validate()` once at startup.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Thresholds and timings for card swiping.
///
/// Distances are in pixels, velocities in pixels per second.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwipeConfig {
    /// A drag commits once `|offset.x|` exceeds this.
    #[serde(default = "default_commit_distance")]
    pub commit_distance: f32,

    /// Rightward flick speed that commits before `commit_distance`.
    #[serde(default = "default_flick_velocity")]
    pub flick_velocity: f32,

    /// Minimum rightward offset for the flick rule to apply.
    #[serde(default = "default_flick_min_offset")]
    pub flick_min_offset: f32,

    /// Exit animation distance for an ordinary swipe.
    #[serde(default = "default_exit_distance")]
    pub exit_distance: f32,

    /// Exit distance when liking the final card.
    #[serde(default = "default_farewell_distance")]
    pub farewell_distance: f32,

    /// Live offset past which the Like / Nope badge shows.
    #[serde(default = "default_badge_threshold")]
    pub badge_threshold: f32,

    /// Degrees of card tilt per pixel of drag.
    #[serde(default = "default_rotation_factor")]
    pub rotation_factor: f32,

    /// Tilt of a card leaving the stack, in degrees.
    #[serde(default = "default_exit_rotation")]
    pub exit_rotation_deg: f32,

    /// Exit animation duration; the machine stays locked this long.
    #[serde(default = "default_settle_ms")]
    pub settle_ms: u64,

    /// Match overlay auto-dismiss delay.
    #[serde(default = "default_match_dismiss_ms")]
    pub match_dismiss_ms: u64,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            commit_distance: default_commit_distance(),
            flick_velocity: default_flick_velocity(),
            flick_min_offset: default_flick_min_offset(),
            exit_distance: default_exit_distance(),
            farewell_distance: default_farewell_distance(),
            badge_threshold: default_badge_threshold(),
            rotation_factor: default_rotation_factor(),
            exit_rotation_deg: default_exit_rotation(),
            settle_ms: default_settle_ms(),
            match_dismiss_ms: default_match_dismiss_ms(),
        }
    }
}

impl SwipeConfig {
    pub fn settle(&self) -> Duration {
        Duration::from_millis(self.settle_ms)
    }

    pub fn match_dismiss(&self) -> Duration {
        Duration::from_millis(self.match_dismiss_ms)
    }

    /// Check the thresholds are usable.
    ///
    /// ```rust
    /// use swipe::{ConfigError, SwipeConfig};
    ///
    /// let cfg = SwipeConfig { flick_min_offset: 150.0, ..Default::default() };
    /// assert!(matches!(cfg.validate(), Err(ConfigError::FlickOffsetTooLarge { .. })));
    /// ```
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("commit_distance", self.commit_distance),
            ("flick_velocity", self.flick_velocity),
            ("exit_distance", self.exit_distance),
            ("farewell_distance", self.farewell_distance),
            ("badge_threshold", self.badge_threshold),
        ] {
            positive(name, value)?;
        }
        for (name, value) in [
            ("flick_min_offset", self.flick_min_offset),
            ("rotation_factor", self.rotation_factor),
            ("exit_rotation_deg", self.exit_rotation_deg),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field: name, value });
            }
        }
        if self.flick_min_offset >= self.commit_distance {
            return Err(ConfigError::FlickOffsetTooLarge {
                flick_min_offset: self.flick_min_offset,
                commit_distance: self.commit_distance,
            });
        }
        if self.settle_ms == 0 {
            return Err(ConfigError::ZeroDuration("settle_ms"));
        }
        if self.match_dismiss_ms == 0 {
            return Err(ConfigError::ZeroDuration("match_dismiss_ms"));
        }
        Ok(())
    }
}

/// Drag-to-dismiss thresholds for the bio panel (vertical axis, downward positive).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BioConfig {
    #[serde(default = "default_bio_dismiss_distance")]
    pub dismiss_distance: f32,

    #[serde(default = "default_flick_velocity")]
    pub flick_velocity: f32,

    #[serde(default = "default_flick_min_offset")]
    pub flick_min_offset: f32,
}

impl Default for BioConfig {
    fn default() -> Self {
        Self {
            dismiss_distance: default_bio_dismiss_distance(),
            flick_velocity: default_flick_velocity(),
            flick_min_offset: default_flick_min_offset(),
        }
    }
}

impl BioConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("dismiss_distance", self.dismiss_distance)?;
        positive("flick_velocity", self.flick_velocity)?;
        if self.flick_min_offset >= self.dismiss_distance {
            return Err(ConfigError::FlickOffsetTooLarge {
                flick_min_offset: self.flick_min_offset,
                commit_distance: self.dismiss_distance,
            });
        }
        Ok(())
    }
}

/// Errors returned by `validate()`.
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("{field} must be a positive finite number, got {value}")]
    NotPositive { field: &'static str, value: f32 },

    #[error("{field} must be finite, got {value}")]
    NotFinite { field: &'static str, value: f32 },

    /// The flick rule would never be reached before the distance rule.
    #[error("flick_min_offset ({flick_min_offset}) must be below the commit distance ({commit_distance})")]
    FlickOffsetTooLarge {
        flick_min_offset: f32,
        commit_distance: f32,
    },

    #[error("{0} must be greater than zero")]
    ZeroDuration(&'static str),
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

fn default_commit_distance() -> f32 {
    100.0
}

fn default_flick_velocity() -> f32 {
    500.0
}

fn default_flick_min_offset() -> f32 {
    20.0
}

fn default_exit_distance() -> f32 {
    200.0
}

fn default_farewell_distance() -> f32 {
    1000.0
}

fn default_badge_threshold() -> f32 {
    50.0
}

fn default_rotation_factor() -> f32 {
    0.1
}

fn default_exit_rotation() -> f32 {
    30.0
}

fn default_settle_ms() -> u64 {
    300
}

fn default_match_dismiss_ms() -> u64 {
    4000
}

fn default_bio_dismiss_distance() -> f32 {
    80.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(SwipeConfig::default().validate().is_ok());
        assert!(BioConfig::default().validate().is_ok());
        assert_eq!(SwipeConfig::default().settle(), Duration::from_millis(300));
        assert_eq!(SwipeConfig::default().match_dismiss(), Duration::from_secs(4));
    }

    #[test]
    fn partial_sections_fill_defaults() {
        let cfg: SwipeConfig = serde_json::from_str(r#"{"commit_distance": 120.0}"#).unwrap();
        assert_eq!(cfg.commit_distance, 120.0);
        assert_eq!(cfg.flick_velocity, 500.0);
        assert_eq!(cfg.match_dismiss_ms, 4000);
    }

    #[test]
    fn rejects_nan_threshold() {
        let cfg = SwipeConfig {
            commit_distance: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::NotPositive {
                field: "commit_distance",
                ..
            })
        ));
    }

    #[test]
    fn rejects_zero_settle() {
        let cfg = SwipeConfig {
            settle_ms: 0,
            ..Default::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroDuration("settle_ms")));
    }

    #[test]
    fn bio_flick_offset_must_stay_below_distance() {
        let cfg = BioConfig {
            flick_min_offset: 90.0,
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }
}
