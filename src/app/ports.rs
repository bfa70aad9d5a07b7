//! Port traits — the boundary between the control core and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ CoffeeMaker (domain)
//! ```
//!
//! Driven adapters (GPIO, simulators, event sinks) implement these traits.
//! The [`CoffeeMaker`](super::service::CoffeeMaker) consumes them via
//! generics, so the control core never touches hardware directly.
//!
//! Every hardware call is fallible; a failure is reported with the channel
//! that failed and is surfaced to the caller unchanged.

use crate::control::context::{
    BoilerState, BoilerStatus, BrewButtonStatus, IndicatorState, ReliefValveState,
    WarmerPlateStatus, WarmerState,
};
use crate::error::Result;

// ───────────────────────────────────────────────────────────────
// Sensor port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port.  The core calls each method at most once per tick.
pub trait SensorPort {
    /// Pot presence and contents on the warmer plate.
    fn read_warmer_plate(&mut self) -> Result<WarmerPlateStatus>;

    /// Boiler float switch.
    fn read_boiler(&mut self) -> Result<BoilerStatus>;

    /// Brew button latch.  Returns the remembered press and resets it, so a
    /// press is reported exactly once however slowly the button is polled.
    fn read_brew_button(&mut self) -> Result<BrewButtonStatus>;
}

// ───────────────────────────────────────────────────────────────
// Actuator port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port.  There is no read-back.
pub trait ActuatorPort {
    /// Boiler heating element.
    fn set_boiler(&mut self, state: BoilerState) -> Result<()>;

    /// Warmer-plate heating element.
    fn set_warmer(&mut self, state: WarmerState) -> Result<()>;

    /// "Coffee ready" lamp.
    fn set_indicator(&mut self, state: IndicatorState) -> Result<()>;

    /// Pressure-relief valve on the boiler.
    fn set_relief_valve(&mut self, state: ReliefValveState) -> Result<()>;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The core emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide where they go.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}

/// Sink that drops every event.
#[derive(Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: &super::events::AppEvent) {}
}
