//! Coffee maker configuration parameters
//!
//! All tunable parameters for the control core.  Values can be loaded from
//! JSON (provisioning, test fixtures) or from the compact postcard blob a
//! device keeps in flash.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Which event arms the relief-valve controller's `brewing` latch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ReliefValveTrigger {
    /// Any brew-button press arms the valve, even one the boiler rejects
    /// (pot not empty, boiler dry).  The valve may then open for a brew
    /// that never started.
    #[default]
    ButtonPress,
    /// Only a brew the boiler actually started arms the valve.
    BrewStarted,
}

/// When issued actuator commands are written to the hardware.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WritePolicy {
    /// Write every command the controllers issue, every tick.
    #[default]
    EveryTick,
    /// Skip a write that repeats the last successful write to that actuator.
    OnChange,
}

/// Core control-loop configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoffeeMakerConfig {
    /// Interval at which the caller invokes `tick()` (milliseconds).
    /// Only used to express tick counts as seconds.
    pub poll_interval_ms: u32,
    /// Arming policy for the relief valve.
    pub relief_valve_trigger: ReliefValveTrigger,
    /// Actuator write policy.
    pub write_policy: WritePolicy,
}

/// Upper bound on the poll interval; anything slower misses boil-dry.
const MAX_POLL_INTERVAL_MS: u32 = 60_000;

impl Default for CoffeeMakerConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 500, // 2 Hz
            relief_valve_trigger: ReliefValveTrigger::ButtonPress,
            write_policy: WritePolicy::EveryTick,
        }
    }
}

impl CoffeeMakerConfig {
    /// Range-check every field.  Invalid values are rejected, never clamped.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.poll_interval_ms == 0 {
            return Err(ConfigError::ValidationFailed("poll_interval_ms must be > 0"));
        }
        if self.poll_interval_ms > MAX_POLL_INTERVAL_MS {
            return Err(ConfigError::ValidationFailed(
                "poll_interval_ms must be <= 60000",
            ));
        }
        Ok(())
    }

    /// Parse and validate a JSON document.  Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(|e| {
            log::warn!("config JSON rejected: {}", e);
            ConfigError::Corrupted
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Encode to the compact postcard representation.
    pub fn to_bytes(&self) -> Result<Vec<u8>, ConfigError> {
        postcard::to_allocvec(self).map_err(|_| ConfigError::Corrupted)
    }

    /// Decode and validate a postcard blob produced by [`to_bytes`](Self::to_bytes).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        let config: Self = postcard::from_bytes(bytes).map_err(|_| ConfigError::Corrupted)?;
        config.validate()?;
        Ok(config)
    }

    /// Convert a tick count into seconds at the configured cadence.
    pub fn ticks_to_secs(&self, ticks: u64) -> f32 {
        ticks as f32 * self.poll_interval_ms as f32 / 1000.0
    }
}

/// Errors from loading or validating a [`CoffeeMakerConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The encoded config could not be decoded.
    Corrupted,
    /// A field failed range validation.
    /// The `&'static str` describes which field and why.
    ValidationFailed(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Corrupted => write!(f, "config corrupted"),
            Self::ValidationFailed(msg) => write!(f, "validation failed: {}", msg),
        }
    }
}

impl core::error::Error for ConfigError {}
