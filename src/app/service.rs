//! Coffee maker coordinator — the hexagonal core.
//!
//! [`CoffeeMaker`] owns one instance of every controller plus the signal bus.
//! All I/O flows through port traits injected at call sites, so the whole
//! control loop is testable with mock adapters.
//!
//! ```text
//!  SensorPort ──▶ ┌──────────────────────────────────────┐ ──▶ EventSink
//!                 │             CoffeeMaker              │
//! ActuatorPort ◀──│ Boiler · Warmer · Indicator · Relief │
//!                 └──────────────────────────────────────┘
//! ```
//!
//! One [`tick`](CoffeeMaker::tick) is one control-loop iteration:
//!
//! 1. read every sensor once into a [`SensorSnapshot`];
//! 2. run Boiler → WarmerPlate → IndicatorLight → ReliefValve;
//! 3. clear the bus;
//! 4. write the issued commands to the actuators;
//! 5. commit: report events, or roll latches back if a write failed.
//!
//! The boiler must run before the indicator so a `BrewComplete` raised this
//! tick is seen by the indicator this tick.

use log::{info, warn};

use crate::config::{CoffeeMakerConfig, WritePolicy};
use crate::control::boiler::Boiler;
use crate::control::context::{
    ActuatorCommands, BrewButtonStatus, IndicatorState, SensorSnapshot,
};
use crate::control::indicator::IndicatorLight;
use crate::control::relief_valve::ReliefValve;
use crate::control::warmer_plate::WarmerPlate;
use crate::error::{Error, Result};
use crate::events::{EventBus, Signal};

use super::events::AppEvent;
use super::ports::{ActuatorPort, EventSink, SensorPort};

// ───────────────────────────────────────────────────────────────
// Status snapshot
// ───────────────────────────────────────────────────────────────

/// Read-only view of the coordinator's latches, for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MachineStatus {
    pub tick_count: u64,
    pub boiler_brewing: bool,
    pub relief_valve_armed: bool,
    pub fresh_pot: bool,
    /// Last state successfully written to each actuator.
    pub last_written: ActuatorCommands,
}

// ───────────────────────────────────────────────────────────────
// CoffeeMaker
// ───────────────────────────────────────────────────────────────

/// The coordinator runs every controller once per tick in a fixed order.
pub struct CoffeeMaker {
    config: CoffeeMakerConfig,
    boiler: Boiler,
    warmer_plate: WarmerPlate,
    indicator: IndicatorLight,
    relief_valve: ReliefValve,
    bus: EventBus,
    tick_count: u64,
    /// Tick of the last `BrewStarted`, cleared on `BrewComplete`.
    brew_started_at: Option<u64>,
    last_written: ActuatorCommands,
    /// Press read by an aborted tick, fed into the next one.
    replay_press: bool,
}

/// Signals raised during one tick, in raise order.
type Raised = heapless::Vec<Signal, { Signal::COUNT }>;

/// Controller latches as they stood before a tick.
struct Checkpoint {
    boiler: Boiler,
    indicator: IndicatorLight,
    relief_valve: ReliefValve,
    tick_count: u64,
}

impl CoffeeMaker {
    /// Construct the coordinator with every latch cleared.
    pub fn new(config: CoffeeMakerConfig) -> Self {
        let relief_valve = ReliefValve::new(config.relief_valve_trigger);
        Self {
            config,
            boiler: Boiler::new(),
            warmer_plate: WarmerPlate::new(),
            indicator: IndicatorLight::new(),
            relief_valve,
            bus: EventBus::new(),
            tick_count: 0,
            brew_started_at: None,
            last_written: ActuatorCommands::none(),
            replay_press: false,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Announce the coordinator.  Ticking without calling this is fine.
    pub fn start(&mut self, sink: &mut impl EventSink) {
        sink.emit(&AppEvent::Started);
        info!(
            "CoffeeMaker started (poll={}ms, relief={:?}, writes={:?})",
            self.config.poll_interval_ms,
            self.config.relief_valve_trigger,
            self.config.write_policy
        );
    }

    // ── Per-tick orchestration ────────────────────────────────

    /// Run one full control cycle: read sensors → controllers → actuators.
    ///
    /// The `hw` parameter satisfies **both** [`SensorPort`] and
    /// [`ActuatorPort`].  Returns the commands the controllers issued.
    ///
    /// A tick commits only if every write succeeds.  A sensor failure aborts
    /// before any controller runs.  An actuator failure stops at that
    /// actuator (earlier writes in the fixed order boiler, warmer, indicator,
    /// relief valve stay applied), rolls every latch back to its pre-tick
    /// value and reports no events except the fault.  A brew press consumed
    /// by an aborted tick is replayed on the next tick.
    pub fn tick(
        &mut self,
        hw: &mut (impl SensorPort + ActuatorPort),
        sink: &mut impl EventSink,
    ) -> Result<ActuatorCommands> {
        let mut snapshot = match SensorSnapshot::read(hw) {
            Ok(snapshot) => snapshot,
            Err(e) => return Err(self.fault(e, sink)),
        };
        if core::mem::take(&mut self.replay_press) {
            snapshot.brew_button = BrewButtonStatus::Pushed;
        }

        let checkpoint = self.checkpoint();
        let (commands, raised) = self.evaluate(&snapshot);

        if let Err(e) = self.apply(&commands, hw) {
            self.restore(checkpoint);
            self.replay_press = snapshot.button_pushed();
            return Err(self.fault(e, sink));
        }
        self.report(&commands, &raised, sink);
        Ok(commands)
    }

    /// Evaluate one tick against an already-read snapshot, without touching
    /// the hardware.  Returns the commands to apply.
    pub fn step(&mut self, snapshot: &SensorSnapshot, sink: &mut impl EventSink) -> ActuatorCommands {
        let (commands, raised) = self.evaluate(snapshot);
        self.report(&commands, &raised, sink);
        commands
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn status(&self) -> MachineStatus {
        MachineStatus {
            tick_count: self.tick_count,
            boiler_brewing: self.boiler.is_brewing(),
            relief_valve_armed: self.relief_valve.is_brewing(),
            fresh_pot: self.indicator.has_fresh_pot(),
            last_written: self.last_written,
        }
    }

    /// Total control ticks evaluated since construction.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn config(&self) -> &CoffeeMakerConfig {
        &self.config
    }

    // ── Internal ──────────────────────────────────────────────

    /// Run the controllers in order, then drain the bus.
    fn evaluate(&mut self, snapshot: &SensorSnapshot) -> (ActuatorCommands, Raised) {
        self.tick_count += 1;
        let mut commands = ActuatorCommands::none();

        self.boiler.update(snapshot, &mut self.bus, &mut commands);
        self.warmer_plate.update(snapshot, &mut commands);
        self.indicator.update(snapshot, &self.bus, &mut commands);
        self.relief_valve.update(snapshot, &self.bus, &mut commands);

        let raised = self.bus.iter().collect();
        self.bus.clear();
        (commands, raised)
    }

    fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            boiler: self.boiler.clone(),
            indicator: self.indicator.clone(),
            relief_valve: self.relief_valve.clone(),
            tick_count: self.tick_count,
        }
    }

    fn restore(&mut self, checkpoint: Checkpoint) {
        self.boiler = checkpoint.boiler;
        self.indicator = checkpoint.indicator;
        self.relief_valve = checkpoint.relief_valve;
        self.tick_count = checkpoint.tick_count;
    }

    /// Turn a committed tick's signals into outbound events.
    fn report(&mut self, commands: &ActuatorCommands, raised: &Raised, sink: &mut impl EventSink) {
        let tick = self.tick_count;
        for &signal in raised {
            match signal {
                Signal::BrewStarted => {
                    self.brew_started_at = Some(tick);
                    info!("Brew started at tick {}", tick);
                    sink.emit(&AppEvent::BrewStarted { tick });
                }
                Signal::BrewComplete => {
                    let started = self.brew_started_at.take().unwrap_or(tick);
                    let brew_ticks = tick - started;
                    let brew_secs = self.config.ticks_to_secs(brew_ticks);
                    info!("Brew complete after {} ticks ({:.1}s)", brew_ticks, brew_secs);
                    sink.emit(&AppEvent::BrewComplete {
                        tick,
                        brew_ticks,
                        brew_secs,
                    });
                }
            }
        }

        if commands.indicator == Some(IndicatorState::Off) {
            sink.emit(&AppEvent::PotCollected { tick });
        }
    }

    /// Translate issued commands into port calls, in fixed order.
    fn apply(&mut self, commands: &ActuatorCommands, hw: &mut impl ActuatorPort) -> Result<()> {
        let policy = self.config.write_policy;
        let last = &mut self.last_written;
        write(policy, commands.boiler, &mut last.boiler, |s| hw.set_boiler(s))?;
        write(policy, commands.warmer, &mut last.warmer, |s| hw.set_warmer(s))?;
        write(policy, commands.indicator, &mut last.indicator, |s| hw.set_indicator(s))?;
        write(policy, commands.relief_valve, &mut last.relief_valve, |s| {
            hw.set_relief_valve(s)
        })?;
        Ok(())
    }

    fn fault(&self, e: Error, sink: &mut impl EventSink) -> Error {
        warn!("Tick {} aborted: {}", self.tick_count, e);
        sink.emit(&AppEvent::HardwareFault(e));
        e
    }
}

/// Write one issued command, honouring the write policy.
fn write<S: Copy + PartialEq>(
    policy: WritePolicy,
    issued: Option<S>,
    last: &mut Option<S>,
    set: impl FnOnce(S) -> Result<()>,
) -> Result<()> {
    let Some(state) = issued else {
        return Ok(());
    };
    if policy == WritePolicy::OnChange && *last == Some(state) {
        return Ok(());
    }
    set(state)?;
    *last = Some(state);
    Ok(())
}
