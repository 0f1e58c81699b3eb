use heapless::Vec;

use super::{MAX_PIN, MAX_PRESCALER, MAX_SENSORS};
use crate::{
    hal::{Bitmode, Pull},
    Error,
};

/// Number of a P0 GPIO pin a sensor is attached to.
pub type SensorPin = u8;

/// Window duration and cycle interval, both in timer ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MeasurementWindow {
    duration: u32,
    interval: u32,
    prescaler: u8,
    bitmode: Bitmode,
}

impl MeasurementWindow {
    /// Checks that the window closes before the cycle ends and that both
    /// compare values fit the timer.
    pub fn new(
        duration: u32,
        interval: u32,
        prescaler: u8,
        bitmode: Bitmode,
    ) -> Result<Self, Error> {
        if duration == 0 {
            return Err(Error::ZeroDuration);
        }
        if duration >= interval {
            return Err(Error::WindowOrder { duration, interval });
        }
        if interval > bitmode.max_value() {
            return Err(Error::IntervalOverflow { interval, bitmode });
        }
        if prescaler > MAX_PRESCALER {
            return Err(Error::Prescaler(prescaler));
        }

        Ok(Self {
            duration,
            interval,
            prescaler,
            bitmode,
        })
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn interval(&self) -> u32 {
        self.interval
    }

    pub fn prescaler(&self) -> u8 {
        self.prescaler
    }

    pub fn bitmode(&self) -> Bitmode {
        self.bitmode
    }

    /// fTIMER = 16 MHz / 2^prescaler, so one tick lasts 62.5 ns * 2^prescaler.
    /// Returned in picoseconds to stay exact for prescaler 0.
    pub fn tick_ps(&self) -> u64 {
        62_500u64 << self.prescaler
    }

    pub fn tick_ns(&self) -> u64 {
        self.tick_ps() / 1_000
    }

    pub fn duration_us(&self) -> u64 {
        self.duration as u64 * self.tick_ps() / 1_000_000
    }

    pub fn interval_us(&self) -> u64 {
        self.interval as u64 * self.tick_ps() / 1_000_000
    }
}

impl Default for MeasurementWindow {
    fn default() -> Self {
        Self {
            duration: super::REFERENCE_DURATION,
            interval: super::REFERENCE_INTERVAL,
            prescaler: super::REFERENCE_PRESCALER,
            bitmode: Bitmode::B16,
        }
    }
}

/// Everything fixed at startup: which pins are scanned, how long each window
/// lasts, and how the counter is set up.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FloorConfig {
    sensor_pins: Vec<SensorPin, MAX_SENSORS>,
    window: MeasurementWindow,
    counter_bitmode: Bitmode,
    pull: Pull,
}

impl FloorConfig {
    pub fn new(
        sensor_pins: &[SensorPin],
        window: MeasurementWindow,
        counter_bitmode: Bitmode,
        pull: Pull,
    ) -> Result<Self, Error> {
        if sensor_pins.is_empty() {
            return Err(Error::NoSensors);
        }
        if let Some(&pin) = sensor_pins.iter().find(|&&pin| pin > MAX_PIN) {
            return Err(Error::InvalidPin(pin));
        }
        let sensor_pins = Vec::from_slice(sensor_pins).map_err(|_| Error::TooManySensors)?;

        Ok(Self {
            sensor_pins,
            window,
            counter_bitmode,
            pull,
        })
    }

    pub fn sensor_pins(&self) -> &[SensorPin] {
        &self.sensor_pins
    }

    /// Rotation position of the last configured sensor.
    pub fn last_sensor(&self) -> usize {
        self.sensor_pins.len() - 1
    }

    pub fn window(&self) -> &MeasurementWindow {
        &self.window
    }

    pub fn counter_bitmode(&self) -> Bitmode {
        self.counter_bitmode
    }

    pub fn pull(&self) -> Pull {
        self.pull
    }
}

impl Default for FloorConfig {
    fn default() -> Self {
        Self {
            sensor_pins: reference_pins(),
            window: MeasurementWindow::default(),
            counter_bitmode: Bitmode::B16,
            pull: Pull::Up,
        }
    }
}

const _: () = assert!(super::REFERENCE_PINS.len() <= MAX_SENSORS);

/// The reference pin list. The length check above makes the conversion
/// infallible.
fn reference_pins() -> Vec<SensorPin, MAX_SENSORS> {
    Vec::from_slice(&super::REFERENCE_PINS).unwrap_or_default()
}
