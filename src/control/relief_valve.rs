//! Relief-valve controller.
//!
//! While a brew is in progress, lifting the pot off the plate opens the
//! pressure-relief valve so the boiler vents steam instead of spraying hot
//! water onto an unattended filter.  Putting the pot back closes it again.
//!
//! The `brewing` latch here is independent of the boiler's.  Under
//! [`ReliefValveTrigger::ButtonPress`] it arms on any press, including one
//! the boiler rejected (pot not empty, boiler dry), so the valve can open for
//! a brew that never started.  [`ReliefValveTrigger::BrewStarted`] arms it
//! only from [`Signal::BrewStarted`].

use log::debug;

use super::context::{ActuatorCommands, ReliefValveState, SensorSnapshot};
use crate::config::ReliefValveTrigger;
use crate::events::{EventBus, Signal};

#[derive(Debug, Clone, Default)]
pub struct ReliefValve {
    trigger: ReliefValveTrigger,
    brewing: bool,
}

impl ReliefValve {
    pub fn new(trigger: ReliefValveTrigger) -> Self {
        Self {
            trigger,
            brewing: false,
        }
    }

    /// True while the valve is armed for a brew.
    pub fn is_brewing(&self) -> bool {
        self.brewing
    }

    pub fn update(&mut self, snap: &SensorSnapshot, bus: &EventBus, out: &mut ActuatorCommands) {
        if !self.brewing && self.armed_by(snap, bus) {
            self.brewing = true;
            debug!("relief valve: armed ({:?})", self.trigger);
        }

        if self.brewing {
            out.relief_valve = Some(if snap.pot_removed() {
                ReliefValveState::Open
            } else {
                ReliefValveState::Closed
            });
        }

        if snap.boiler_empty() && self.brewing {
            self.brewing = false;
            debug!("relief valve: disarmed");
        }
    }

    fn armed_by(&self, snap: &SensorSnapshot, bus: &EventBus) -> bool {
        match self.trigger {
            ReliefValveTrigger::ButtonPress => snap.button_pushed(),
            ReliefValveTrigger::BrewStarted => bus.iter().any(|s| match s {
                Signal::BrewStarted => true,
                Signal::BrewComplete => false,
            }),
        }
    }
}
