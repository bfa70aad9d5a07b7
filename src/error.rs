//! Unified error types for the coffee maker control core.
//!
//! The only runtime failure this layer knows about is the hardware boundary
//! refusing a read or a write.  Every variant is `Copy` so a failed tick can
//! hand the error to the caller and to the [`EventSink`] without allocation.
//!
//! [`EventSink`]: crate::app::ports::EventSink

use core::fmt;

// ---------------------------------------------------------------------------
// Boundary channels
// ---------------------------------------------------------------------------

/// Sensor channels exposed by the hardware boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sensor {
    /// Pot-presence / pot-contents sensor under the warmer plate.
    WarmerPlate,
    /// Float switch in the boiler.
    Boiler,
    /// Latched momentary brew button.
    BrewButton,
}

impl fmt::Display for Sensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WarmerPlate => write!(f, "warmer plate"),
            Self::Boiler => write!(f, "boiler"),
            Self::BrewButton => write!(f, "brew button"),
        }
    }
}

/// Actuator channels exposed by the hardware boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Actuator {
    BoilerHeater,
    WarmerHeater,
    IndicatorLamp,
    ReliefValve,
}

impl fmt::Display for Actuator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoilerHeater => write!(f, "boiler heater"),
            Self::WarmerHeater => write!(f, "warmer heater"),
            Self::IndicatorLamp => write!(f, "indicator lamp"),
            Self::ReliefValve => write!(f, "relief valve"),
        }
    }
}

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

/// A hardware boundary failure.  Aborts the current tick; the control loop
/// never retries on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A sensor could not be read (disconnected, bus error, ...).
    SensorUnavailable(Sensor),
    /// An actuator command could not be written.
    ActuatorUnavailable(Actuator),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SensorUnavailable(s) => write!(f, "sensor unavailable: {s}"),
            Self::ActuatorUnavailable(a) => write!(f, "actuator unavailable: {a}"),
        }
    }
}

impl core::error::Error for Error {}

impl From<Sensor> for Error {
    fn from(s: Sensor) -> Self {
        Self::SensorUnavailable(s)
    }
}

impl From<Actuator> for Error {
    fn from(a: Actuator) -> Self {
        Self::ActuatorUnavailable(a)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
