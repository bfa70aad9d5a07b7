//! Boiler controller.
//!
//! Owns the only "a brew is really in progress" latch.  A brew starts when
//! the button is pressed with an empty pot on the plate and water in the
//! boiler, and ends when the float switch reports the boiler dry.
//!
//! Both checks run every tick, start first: a brew that starts and completes
//! on the same tick still raises [`Signal::BrewComplete`].

use log::debug;

use super::context::{
    ActuatorCommands, BoilerState, BoilerStatus, SensorSnapshot, WarmerPlateStatus,
};
use crate::events::{EventBus, Signal};

#[derive(Debug, Clone, Default)]
pub struct Boiler {
    brewing: bool,
}

impl Boiler {
    pub fn new() -> Self {
        Self { brewing: false }
    }

    /// True between a successful brew start and boil-dry.
    pub fn is_brewing(&self) -> bool {
        self.brewing
    }

    pub fn update(&mut self, snap: &SensorSnapshot, bus: &mut EventBus, out: &mut ActuatorCommands) {
        if !self.brewing && Self::ready_to_brew(snap) {
            out.boiler = Some(BoilerState::On);
            self.brewing = true;
            bus.push(Signal::BrewStarted);
            debug!("boiler: brew started");
        }

        if snap.boiler_empty() {
            out.boiler = Some(BoilerState::Off);
            if self.brewing {
                bus.push(Signal::BrewComplete);
                debug!("boiler: boiled dry, brew complete");
            }
            self.brewing = false;
        }
    }

    /// All three preconditions in the same tick.  A press that misses them is
    /// dropped: the hardware latch is already consumed.
    fn ready_to_brew(snap: &SensorSnapshot) -> bool {
        snap.button_pushed()
            && snap.warmer_plate == WarmerPlateStatus::PotEmpty
            && snap.boiler == BoilerStatus::NotEmpty
    }
}
