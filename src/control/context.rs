//! Per-tick data shared by every controller.
//!
//! The coordinator fills a [`SensorSnapshot`] from the sensor port before any
//! controller runs, and every controller writes its decisions into one
//! [`ActuatorCommands`] buffer.  Controllers never talk to the hardware
//! themselves.

use serde::{Deserialize, Serialize};

use crate::app::ports::SensorPort;
use crate::error::Result;

// ---------------------------------------------------------------------------
// Sensor readings
// ---------------------------------------------------------------------------

/// Pot sensor under the warmer plate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WarmerPlateStatus {
    /// No pot on the plate.
    WarmerEmpty,
    /// Pot present, nothing in it.
    PotEmpty,
    /// Pot present with coffee in it.
    PotNotEmpty,
}

/// Float switch in the boiler (more than half a cup of water or not).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoilerStatus {
    Empty,
    NotEmpty,
}

/// Latched momentary brew button.  Reading it resets the latch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BrewButtonStatus {
    Pushed,
    NotPushed,
}

// ---------------------------------------------------------------------------
// Actuator states
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoilerState {
    On,
    Off,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WarmerState {
    On,
    Off,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IndicatorState {
    On,
    Off,
}

/// Closed: steam pressure pushes hot water over the filter.
/// Open: steam escapes and nothing sprays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReliefValveState {
    Open,
    Closed,
}

// ---------------------------------------------------------------------------
// Sensor snapshot (read once per tick; read-only to controllers)
// ---------------------------------------------------------------------------

/// A point-in-time reading of every sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensorSnapshot {
    pub warmer_plate: WarmerPlateStatus,
    pub boiler: BoilerStatus,
    pub brew_button: BrewButtonStatus,
}

impl SensorSnapshot {
    /// Read each sensor exactly once.
    ///
    /// The brew button is consumed here, so every controller sees the same
    /// press.  Fails on the first unavailable sensor without reading the rest.
    pub fn read(hw: &mut impl SensorPort) -> Result<Self> {
        Ok(Self {
            warmer_plate: hw.read_warmer_plate()?,
            boiler: hw.read_boiler()?,
            brew_button: hw.read_brew_button()?,
        })
    }

    pub fn button_pushed(&self) -> bool {
        self.brew_button == BrewButtonStatus::Pushed
    }

    pub fn pot_removed(&self) -> bool {
        self.warmer_plate == WarmerPlateStatus::WarmerEmpty
    }

    pub fn boiler_empty(&self) -> bool {
        self.boiler == BoilerStatus::Empty
    }
}

// ---------------------------------------------------------------------------
// Actuator commands (written by controllers; applied by the coordinator)
// ---------------------------------------------------------------------------

/// Commands issued during one tick.  `None` means no command was issued for
/// that actuator; a later write in the same tick replaces an earlier one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActuatorCommands {
    pub boiler: Option<BoilerState>,
    pub warmer: Option<WarmerState>,
    pub indicator: Option<IndicatorState>,
    pub relief_valve: Option<ReliefValveState>,
}

impl ActuatorCommands {
    /// No commands issued.
    pub fn none() -> Self {
        Self::default()
    }

    /// True if no controller issued anything.
    pub fn is_empty(&self) -> bool {
        *self == Self::none()
    }
}
