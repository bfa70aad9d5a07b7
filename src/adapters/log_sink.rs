//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing application events through the `log`
//! facade.  Whatever logger the host installs decides where they end up.

use log::{info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`].
#[derive(Debug, Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started => {
                info!("START | coffee maker ready");
            }
            AppEvent::BrewStarted { tick } => {
                info!("BREW  | started tick={}", tick);
            }
            AppEvent::BrewComplete {
                tick,
                brew_ticks,
                brew_secs,
            } => {
                info!(
                    "BREW  | complete tick={} | took {} ticks ({:.1}s)",
                    tick, brew_ticks, brew_secs
                );
            }
            AppEvent::PotCollected { tick } => {
                info!("POT   | collected tick={}", tick);
            }
            AppEvent::HardwareFault(e) => {
                warn!("FAULT | {}", e);
            }
        }
    }
}
