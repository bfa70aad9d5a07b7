//! Warmer-plate controller.
//!
//! Keeps the coffee warm: the plate heater follows the pot sensor with no
//! memory of previous ticks.

use super::context::{ActuatorCommands, SensorSnapshot, WarmerPlateStatus, WarmerState};

#[derive(Debug, Default)]
pub struct WarmerPlate;

impl WarmerPlate {
    pub fn new() -> Self {
        Self
    }

    /// Issue exactly one warmer command: On iff there is coffee in the pot.
    pub fn update(&mut self, snap: &SensorSnapshot, out: &mut ActuatorCommands) {
        out.warmer = Some(match snap.warmer_plate {
            WarmerPlateStatus::PotNotEmpty => WarmerState::On,
            WarmerPlateStatus::PotEmpty | WarmerPlateStatus::WarmerEmpty => WarmerState::Off,
        });
    }
}
