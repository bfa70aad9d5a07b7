//! Indicator-light controller.
//!
//! The lamp announces a fresh pot: it comes on when the boiler reports a
//! finished brew and goes off once the pot is taken off the plate.

use log::debug;

use super::context::{ActuatorCommands, IndicatorState, SensorSnapshot};
use crate::events::{EventBus, Signal};

#[derive(Debug, Clone, Default)]
pub struct IndicatorLight {
    fresh_pot: bool,
}

impl IndicatorLight {
    pub fn new() -> Self {
        Self { fresh_pot: false }
    }

    /// True from brew completion until the pot is lifted.
    pub fn has_fresh_pot(&self) -> bool {
        self.fresh_pot
    }

    /// Must run after the boiler in the same tick so `BrewComplete` is visible.
    pub fn update(&mut self, snap: &SensorSnapshot, bus: &EventBus, out: &mut ActuatorCommands) {
        let mut completed_now = false;
        for signal in bus.iter() {
            match signal {
                Signal::BrewComplete => {
                    out.indicator = Some(IndicatorState::On);
                    self.fresh_pot = true;
                    completed_now = true;
                    debug!("indicator: fresh pot");
                }
                Signal::BrewStarted => {}
            }
        }

        // A pot lifted on the completion tick keeps the lamp on for that
        // tick; the removal is acted on from the next tick.
        if self.fresh_pot && !completed_now && snap.pot_removed() {
            out.indicator = Some(IndicatorState::Off);
            self.fresh_pot = false;
            debug!("indicator: pot collected");
        }
    }
}
