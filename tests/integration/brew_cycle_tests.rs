//! Integration tests for the sensors → controllers → actuators pipeline.
//!
//! Drive a [`CoffeeMaker`] over [`MockHardware`] tick by tick and assert on
//! the exact actuator calls each tick produces.

use crate::mock_hw::{ActuatorCall, MockHardware, RecordingSink};

use coffeemaker::app::events::AppEvent;
use coffeemaker::config::{CoffeeMakerConfig, ReliefValveTrigger, WritePolicy};
use coffeemaker::control::context::{
    BoilerState, BoilerStatus, IndicatorState, ReliefValveState, WarmerPlateStatus, WarmerState,
};
use coffeemaker::error::Sensor;
use coffeemaker::CoffeeMaker;

fn make(config: CoffeeMakerConfig) -> (CoffeeMaker, MockHardware, RecordingSink) {
    let mut cm = CoffeeMaker::new(config);
    let mut sink = RecordingSink::new();
    cm.start(&mut sink);
    (cm, MockHardware::new(), sink)
}

fn tick(cm: &mut CoffeeMaker, hw: &mut MockHardware, sink: &mut RecordingSink) -> Vec<ActuatorCall> {
    cm.tick(hw, sink).expect("tick should succeed");
    hw.take_calls()
}

// ── Idle ──────────────────────────────────────────────────────

#[test]
fn idle_tick_commands_only_the_warmer() {
    let (mut cm, mut hw, mut sink) = make(CoffeeMakerConfig::default());
    for _ in 0..5 {
        let calls = tick(&mut cm, &mut hw, &mut sink);
        assert_eq!(calls, [ActuatorCall::Warmer(WarmerState::Off)]);
    }
}

#[test]
fn idle_ticks_write_nothing_with_on_change_policy() {
    let config = CoffeeMakerConfig {
        write_policy: WritePolicy::OnChange,
        ..CoffeeMakerConfig::default()
    };
    let (mut cm, mut hw, mut sink) = make(config);
    assert_eq!(cm.config().write_policy, WritePolicy::OnChange);

    assert_eq!(
        tick(&mut cm, &mut hw, &mut sink),
        [ActuatorCall::Warmer(WarmerState::Off)]
    );
    for _ in 0..5 {
        assert!(tick(&mut cm, &mut hw, &mut sink).is_empty());
    }

    // A change is still written.
    hw.warmer_plate = WarmerPlateStatus::PotNotEmpty;
    assert_eq!(
        tick(&mut cm, &mut hw, &mut sink),
        [ActuatorCall::Warmer(WarmerState::On)]
    );
    let last = cm.status().last_written;
    assert_eq!(last.warmer, Some(WarmerState::On));
    assert_eq!(last.boiler, None);
}

// ── Full brew cycle ───────────────────────────────────────────

#[test]
fn brew_serve_and_collect() {
    let (mut cm, mut hw, mut sink) = make(CoffeeMakerConfig::default());

    // Press with an empty pot and a full boiler.
    hw.press_button();
    assert_eq!(
        tick(&mut cm, &mut hw, &mut sink),
        [
            ActuatorCall::Boiler(BoilerState::On),
            ActuatorCall::Warmer(WarmerState::Off),
            ActuatorCall::ReliefValve(ReliefValveState::Closed),
        ]
    );

    // Coffee drips into the pot, boiler runs dry.
    hw.warmer_plate = WarmerPlateStatus::PotNotEmpty;
    hw.boiler = BoilerStatus::Empty;
    assert_eq!(
        tick(&mut cm, &mut hw, &mut sink),
        [
            ActuatorCall::Boiler(BoilerState::Off),
            ActuatorCall::Warmer(WarmerState::On),
            ActuatorCall::Indicator(IndicatorState::On),
            ActuatorCall::ReliefValve(ReliefValveState::Closed),
        ]
    );

    // Pot taken away.
    hw.warmer_plate = WarmerPlateStatus::WarmerEmpty;
    assert_eq!(
        tick(&mut cm, &mut hw, &mut sink),
        [
            ActuatorCall::Boiler(BoilerState::Off),
            ActuatorCall::Warmer(WarmerState::Off),
            ActuatorCall::Indicator(IndicatorState::Off),
        ]
    );

    assert_eq!(
        sink.events,
        [
            AppEvent::Started,
            AppEvent::BrewStarted { tick: 1 },
            AppEvent::BrewComplete {
                tick: 2,
                brew_ticks: 1,
                brew_secs: 0.5,
            },
            AppEvent::PotCollected { tick: 3 },
        ]
    );

    let st = cm.status();
    assert!(!st.boiler_brewing);
    assert!(!st.relief_valve_armed);
    assert!(!st.fresh_pot);
}

#[test]
fn brew_complete_is_raised_once_per_cycle() {
    let (mut cm, mut hw, mut sink) = make(CoffeeMakerConfig::default());
    hw.press_button();
    tick(&mut cm, &mut hw, &mut sink);

    hw.boiler = BoilerStatus::Empty;
    for _ in 0..10 {
        tick(&mut cm, &mut hw, &mut sink);
    }
    assert_eq!(
        sink.count(|e| matches!(e, AppEvent::BrewComplete { .. })),
        1
    );
}

#[test]
fn pot_with_coffee_alone_only_warms() {
    let (mut cm, mut hw, mut sink) = make(CoffeeMakerConfig::default());
    hw.warmer_plate = WarmerPlateStatus::PotNotEmpty;
    assert_eq!(
        tick(&mut cm, &mut hw, &mut sink),
        [ActuatorCall::Warmer(WarmerState::On)]
    );
}

// ── Rejected presses ──────────────────────────────────────────

#[test]
fn press_without_pot_does_not_heat_boiler() {
    let (mut cm, mut hw, mut sink) = make(CoffeeMakerConfig::default());
    hw.warmer_plate = WarmerPlateStatus::WarmerEmpty;
    hw.press_button();
    tick(&mut cm, &mut hw, &mut sink);
    assert!(hw.boiler_calls().is_empty());
    assert!(!cm.status().boiler_brewing);
}

#[test]
fn press_with_full_pot_does_not_heat_boiler() {
    let (mut cm, mut hw, mut sink) = make(CoffeeMakerConfig::default());
    hw.warmer_plate = WarmerPlateStatus::PotNotEmpty;
    hw.press_button();
    let calls = tick(&mut cm, &mut hw, &mut sink);
    assert!(!calls.contains(&ActuatorCall::Boiler(BoilerState::On)));
}

#[test]
fn press_with_dry_boiler_does_not_heat_boiler() {
    let (mut cm, mut hw, mut sink) = make(CoffeeMakerConfig::default());
    hw.boiler = BoilerStatus::Empty;
    hw.press_button();
    let calls = tick(&mut cm, &mut hw, &mut sink);
    assert!(!calls.contains(&ActuatorCall::Boiler(BoilerState::On)));
    assert!(calls.contains(&ActuatorCall::Boiler(BoilerState::Off)));
}

#[test]
fn rejected_press_does_not_retrigger_later() {
    let (mut cm, mut hw, mut sink) = make(CoffeeMakerConfig::default());
    hw.warmer_plate = WarmerPlateStatus::PotNotEmpty;
    hw.press_button();
    tick(&mut cm, &mut hw, &mut sink);
    assert!(!hw.button_latched(), "the read consumes the press");

    hw.warmer_plate = WarmerPlateStatus::PotEmpty;
    let calls = tick(&mut cm, &mut hw, &mut sink);
    assert!(!calls.contains(&ActuatorCall::Boiler(BoilerState::On)));
}

#[test]
fn brew_starts_regardless_of_indicator_latch() {
    let (mut cm, mut hw, mut sink) = make(CoffeeMakerConfig::default());
    hw.press_button();
    tick(&mut cm, &mut hw, &mut sink);
    hw.warmer_plate = WarmerPlateStatus::PotNotEmpty;
    hw.boiler = BoilerStatus::Empty;
    tick(&mut cm, &mut hw, &mut sink);
    assert!(cm.status().fresh_pot);

    // Swap in an empty pot and refill without lifting the plate sensor.
    hw.warmer_plate = WarmerPlateStatus::PotEmpty;
    hw.boiler = BoilerStatus::NotEmpty;
    hw.press_button();
    let calls = tick(&mut cm, &mut hw, &mut sink);
    assert_eq!(calls[0], ActuatorCall::Boiler(BoilerState::On));
}

// ── Relief valve ──────────────────────────────────────────────

#[test]
fn lifting_pot_mid_brew_vents_steam() {
    let (mut cm, mut hw, mut sink) = make(CoffeeMakerConfig::default());
    hw.press_button();
    tick(&mut cm, &mut hw, &mut sink);

    hw.warmer_plate = WarmerPlateStatus::WarmerEmpty;
    let calls = tick(&mut cm, &mut hw, &mut sink);
    assert!(calls.contains(&ActuatorCall::ReliefValve(ReliefValveState::Open)));
    assert!(!calls.iter().any(|c| matches!(c, ActuatorCall::Boiler(_))));

    hw.warmer_plate = WarmerPlateStatus::PotNotEmpty;
    let calls = tick(&mut cm, &mut hw, &mut sink);
    assert!(calls.contains(&ActuatorCall::ReliefValve(ReliefValveState::Closed)));
}

#[test]
fn rejected_press_opens_valve_under_button_trigger() {
    let (mut cm, mut hw, mut sink) = make(CoffeeMakerConfig::default());
    hw.warmer_plate = WarmerPlateStatus::WarmerEmpty;
    hw.press_button();
    let calls = tick(&mut cm, &mut hw, &mut sink);
    assert_eq!(
        calls,
        [
            ActuatorCall::Warmer(WarmerState::Off),
            ActuatorCall::ReliefValve(ReliefValveState::Open),
        ]
    );
    let st = cm.status();
    assert!(st.relief_valve_armed);
    assert!(!st.boiler_brewing);
}

#[test]
fn rejected_press_leaves_valve_alone_under_brew_trigger() {
    let config = CoffeeMakerConfig {
        relief_valve_trigger: ReliefValveTrigger::BrewStarted,
        ..CoffeeMakerConfig::default()
    };
    let (mut cm, mut hw, mut sink) = make(config);
    hw.warmer_plate = WarmerPlateStatus::WarmerEmpty;
    hw.press_button();
    assert_eq!(
        tick(&mut cm, &mut hw, &mut sink),
        [ActuatorCall::Warmer(WarmerState::Off)]
    );
    assert!(!cm.status().relief_valve_armed);

    // A real brew still arms it.
    hw.warmer_plate = WarmerPlateStatus::PotEmpty;
    hw.press_button();
    let calls = tick(&mut cm, &mut hw, &mut sink);
    assert!(calls.contains(&ActuatorCall::ReliefValve(ReliefValveState::Closed)));
    assert!(cm.status().relief_valve_armed);
}

// ── Sensor access discipline ──────────────────────────────────

#[test]
fn each_sensor_read_once_per_tick() {
    let (mut cm, mut hw, mut sink) = make(CoffeeMakerConfig::default());
    hw.press_button();
    tick(&mut cm, &mut hw, &mut sink);
    tick(&mut cm, &mut hw, &mut sink);
    assert_eq!(
        hw.reads,
        [
            Sensor::WarmerPlate,
            Sensor::Boiler,
            Sensor::BrewButton,
            Sensor::WarmerPlate,
            Sensor::Boiler,
            Sensor::BrewButton,
        ]
    );
}
