//! Controllers — one per actuator concern, pure logic, zero I/O.
//!
//! Each controller reads the tick's [`SensorSnapshot`](context::SensorSnapshot),
//! may read or raise signals on the [`EventBus`](crate::events::EventBus), and
//! writes its decisions into [`ActuatorCommands`](context::ActuatorCommands).
//! Latched state is private to the controller that owns it.
//!
//! | Controller       | Latch       | Reads bus       | Raises                       |
//! |------------------|-------------|-----------------|------------------------------|
//! | `Boiler`         | `brewing`   | no              | `BrewStarted`, `BrewComplete`|
//! | `WarmerPlate`    | none        | no              | none                         |
//! | `IndicatorLight` | `fresh_pot` | `BrewComplete`  | none                         |
//! | `ReliefValve`    | `brewing`   | `BrewStarted`\* | none                         |
//!
//! \* only with `ReliefValveTrigger::BrewStarted`.

pub mod boiler;
pub mod context;
pub mod indicator;
pub mod relief_valve;
pub mod warmer_plate;
