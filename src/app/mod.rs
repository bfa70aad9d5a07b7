//! Application core — the coordinator and its boundary, zero I/O.
//!
//! [`service::CoffeeMaker`] ties the controllers in [`crate::control`]
//! together.  All interaction with hardware happens through **port traits**
//! defined in [`ports`], keeping this layer fully testable without real
//! peripherals.

pub mod events;
pub mod ports;
pub mod service;
