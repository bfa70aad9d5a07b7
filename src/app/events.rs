//! Outbound application events.
//!
//! The [`CoffeeMaker`](super::service::CoffeeMaker) emits these through the
//! [`EventSink`](super::ports::EventSink) port.  They report what happened;
//! nothing in the control loop depends on them being delivered.

use crate::error::Error;

/// Structured events emitted by the control core.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppEvent {
    /// The coordinator has started.
    Started,

    /// The boiler started heating for a brew.
    BrewStarted { tick: u64 },

    /// The boiler ran dry and the brew finished.
    BrewComplete {
        tick: u64,
        /// Ticks since the matching `BrewStarted`.
        brew_ticks: u64,
        /// `brew_ticks` at the configured poll interval.
        brew_secs: f32,
    },

    /// The fresh pot was lifted off the plate; the lamp went out.
    PotCollected { tick: u64 },

    /// The tick was aborted by a hardware boundary failure.
    HardwareFault(Error),
}
