//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter    | Implements   | Connects to                |
//! |------------|--------------|----------------------------|
//! | `hardware` | SensorPort   | `embedded-hal` input pins  |
//! |            | ActuatorPort | `embedded-hal` output pins |
//! | `log_sink` | EventSink    | `log` facade               |

pub mod hardware;
pub mod log_sink;
