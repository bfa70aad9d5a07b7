//! GPIO hardware adapter — bridges digital pins to the domain port traits.
//!
//! Works with any `embedded-hal` 1.0 digital pin driver.  All inputs share
//! one pin type and all outputs another, as with type-erased HAL pins
//! (`AnyInputPin`, `PinDriver<AnyIOPin, _>`, ...).
//!
//! ## Wiring (active high)
//!
//! | Pin              | Dir | High means                         |
//! |------------------|-----|------------------------------------|
//! | `pot_present`    | in  | a pot sits on the warmer plate     |
//! | `pot_has_coffee` | in  | the pot on the plate is not empty  |
//! | `boiler_float`   | in  | more than half a cup in the boiler |
//! | `brew_button`    | in  | button held down                   |
//! | `boiler_heater`  | out | element energised                  |
//! | `warmer_heater`  | out | element energised                  |
//! | `indicator_lamp` | out | lamp lit                           |
//! | `relief_valve`   | out | valve open (venting)               |
//!
//! The brew button is a plain momentary switch here; the adapter provides the
//! one-shot latch by reporting `Pushed` on the first read after a rising
//! edge.  A press released between two polls is not seen.

use embedded_hal::digital::{Error as _, InputPin, OutputPin, PinState};
use log::error;

use crate::app::ports::{ActuatorPort, SensorPort};
use crate::control::context::{
    BoilerState, BoilerStatus, BrewButtonStatus, IndicatorState, ReliefValveState,
    WarmerPlateStatus, WarmerState,
};
use crate::error::{Actuator, Error, Result, Sensor};

/// Input pins.
pub struct GpioInputs<I> {
    pub pot_present: I,
    pub pot_has_coffee: I,
    pub boiler_float: I,
    pub brew_button: I,
}

/// Output pins.
pub struct GpioOutputs<O> {
    pub boiler_heater: O,
    pub warmer_heater: O,
    pub indicator_lamp: O,
    pub relief_valve: O,
}

/// Concrete adapter that puts every pin behind the port traits.
pub struct GpioHardware<I, O> {
    inputs: GpioInputs<I>,
    outputs: GpioOutputs<O>,
    /// Button level at the previous read, for edge detection.
    button_was_down: bool,
}

impl<I: InputPin, O: OutputPin> GpioHardware<I, O> {
    pub fn new(inputs: GpioInputs<I>, outputs: GpioOutputs<O>) -> Self {
        Self {
            inputs,
            outputs,
            button_was_down: false,
        }
    }

    /// Give the pins back.
    pub fn release(self) -> (GpioInputs<I>, GpioOutputs<O>) {
        (self.inputs, self.outputs)
    }
}

fn read_pin(pin: &mut impl InputPin, sensor: Sensor) -> Result<bool> {
    pin.is_high().map_err(|e| {
        error!("{} read failed: {:?}", sensor, e.kind());
        Error::SensorUnavailable(sensor)
    })
}

fn write_pin(pin: &mut impl OutputPin, level: PinState, actuator: Actuator) -> Result<()> {
    pin.set_state(level).map_err(|e| {
        error!("{} write failed: {:?}", actuator, e.kind());
        Error::ActuatorUnavailable(actuator)
    })
}

// ── SensorPort implementation ─────────────────────────────────

impl<I: InputPin, O: OutputPin> SensorPort for GpioHardware<I, O> {
    fn read_warmer_plate(&mut self) -> Result<WarmerPlateStatus> {
        if !read_pin(&mut self.inputs.pot_present, Sensor::WarmerPlate)? {
            return Ok(WarmerPlateStatus::WarmerEmpty);
        }
        if read_pin(&mut self.inputs.pot_has_coffee, Sensor::WarmerPlate)? {
            Ok(WarmerPlateStatus::PotNotEmpty)
        } else {
            Ok(WarmerPlateStatus::PotEmpty)
        }
    }

    fn read_boiler(&mut self) -> Result<BoilerStatus> {
        if read_pin(&mut self.inputs.boiler_float, Sensor::Boiler)? {
            Ok(BoilerStatus::NotEmpty)
        } else {
            Ok(BoilerStatus::Empty)
        }
    }

    fn read_brew_button(&mut self) -> Result<BrewButtonStatus> {
        let down = read_pin(&mut self.inputs.brew_button, Sensor::BrewButton)?;
        let pressed = down && !self.button_was_down;
        self.button_was_down = down;
        Ok(if pressed {
            BrewButtonStatus::Pushed
        } else {
            BrewButtonStatus::NotPushed
        })
    }
}

// ── ActuatorPort implementation ───────────────────────────────

impl<I: InputPin, O: OutputPin> ActuatorPort for GpioHardware<I, O> {
    fn set_boiler(&mut self, state: BoilerState) -> Result<()> {
        let level = PinState::from(state == BoilerState::On);
        write_pin(&mut self.outputs.boiler_heater, level, Actuator::BoilerHeater)
    }

    fn set_warmer(&mut self, state: WarmerState) -> Result<()> {
        let level = PinState::from(state == WarmerState::On);
        write_pin(&mut self.outputs.warmer_heater, level, Actuator::WarmerHeater)
    }

    fn set_indicator(&mut self, state: IndicatorState) -> Result<()> {
        let level = PinState::from(state == IndicatorState::On);
        write_pin(&mut self.outputs.indicator_lamp, level, Actuator::IndicatorLamp)
    }

    fn set_relief_valve(&mut self, state: ReliefValveState) -> Result<()> {
        let level = PinState::from(state == ReliefValveState::Open);
        write_pin(&mut self.outputs.relief_valve, level, Actuator::ReliefValve)
    }
}
