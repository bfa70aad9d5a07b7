//! Single-tick signal bus.
//!
//! Controllers raise [`Signal`]s to influence controllers that run later in
//! the same tick.  The coordinator owns the bus and clears it once every
//! controller has run, so a signal is never seen on a later tick than the one
//! that raised it.
//!
//! ```text
//! ┌────────┐ push ┌──────────┐ contains / iter ┌────────────────────────┐
//! │ Boiler │─────▶│ EventBus │────────────────▶│ Indicator, ReliefValve │
//! └────────┘      └──────────┘                 └────────────────────────┘
//!                      ▲ clear() after the last controller (Coordinator)
//! ```

use heapless::Vec;

/// Signals exchanged between controllers within one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signal {
    /// The boiler started heating for a brew.
    BrewStarted,
    /// The boiler boiled dry while a brew was in progress.
    BrewComplete,
}

impl Signal {
    /// Number of distinct signals, and so the bus capacity.
    pub const COUNT: usize = 2;
}

/// Broadcast slot holding the signals raised during the current tick.
///
/// Each signal is held at most once; pushing one already present is a no-op.
/// Signals are kept in the order they were raised.
#[derive(Debug, Default)]
pub struct EventBus {
    signals: Vec<Signal, { Signal::COUNT }>,
}

impl EventBus {
    pub fn new() -> Self {
        Self { signals: Vec::new() }
    }

    /// Raise `signal` for the remainder of this tick.
    pub fn push(&mut self, signal: Signal) {
        if self.contains(signal) {
            return;
        }
        // Capacity equals the number of variants, so a new one always fits.
        let pushed = self.signals.push(signal);
        debug_assert!(pushed.is_ok(), "event bus overflow");
    }

    /// Whether `signal` was raised this tick.
    pub fn contains(&self, signal: Signal) -> bool {
        self.signals.contains(&signal)
    }

    /// Signals raised this tick, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = Signal> + '_ {
        self.signals.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.signals.is_empty()
    }

    pub fn len(&self) -> usize {
        self.signals.len()
    }

    /// Drop every signal.  Called once per tick by the coordinator.
    pub fn clear(&mut self) {
        self.signals.clear();
    }
}
