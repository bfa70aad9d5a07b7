//! Drip coffee maker control core.
//!
//! A fixed-rate polling loop: each [`CoffeeMaker::tick`] reads the sensors
//! once, runs the boiler, warmer-plate, indicator-light and relief-valve
//! controllers in a fixed order, and writes the resulting actuator commands.
//! Controllers coordinate within a tick only through the single-tick
//! [`EventBus`](events::EventBus).
//!
//! The caller owns the hardware (through [`app::ports`]) and the cadence;
//! the core has no notion of wall-clock time.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod control;
pub mod error;
pub mod events;

pub use app::service::{CoffeeMaker, MachineStatus};
pub use config::CoffeeMakerConfig;
pub use error::{Error, Result};
