//! Hardware seams of the measurement engine.
//!
//! The engine never touches registers itself. A board crate implements these
//! traits on top of its peripheral access crate, and the host tests use
//! [`crate::sim::SimBoard`].

use crate::config::types::{MeasurementWindow, SensorPin};

/// The two compare channels of the window timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Compare {
    /// CC[0]: the window closes and the counter value is captured.
    Window,
    /// CC[1]: the cycle ends and the timer starts over.
    Interval,
}

impl Compare {
    pub const fn index(self) -> usize {
        match self {
            Compare::Window => 0,
            Compare::Interval => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Bitmode {
    B8,
    B16,
    B24,
    B32,
}

impl Bitmode {
    /// Largest value the counter register can hold before it wraps.
    pub const fn max_value(self) -> u32 {
        match self {
            Bitmode::B8 => 0xFF,
            Bitmode::B16 => 0xFFFF,
            Bitmode::B24 => 0x00FF_FFFF,
            Bitmode::B32 => 0xFFFF_FFFF,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Pull {
    None,
    Up,
    Down,
}

/// A timer peripheral used in counter mode.
pub trait PulseCounter {
    /// Counter mode, given bit width, no shortcuts.
    fn counter_configure(&mut self, bitmode: Bitmode);
    fn counter_clear(&mut self);
    fn counter_start(&mut self);
    fn counter_stop(&mut self);
    /// Value latched by the last capture task, not the running count.
    fn counter_captured(&self) -> u32;
}

/// A timer peripheral generating the window and interval compare events.
pub trait WindowTimer {
    /// Programs mode, prescaler, compare values and interrupt enables, and
    /// unmasks the interrupt line of the instance.
    fn timer_configure(&mut self, window: &MeasurementWindow);
    /// Resets the running count to zero.
    fn timer_clear(&mut self);
    fn timer_start(&mut self);
    fn timer_stop(&mut self);
    /// Event flag is set and its interrupt is enabled.
    fn timer_event_pending(&self, compare: Compare) -> bool;
    fn timer_clear_event(&mut self, compare: Compare);
}

/// Event-routing fabric between the sensor pin, the counter and the timer.
pub trait EventRouter {
    /// Routes rising edges on `pin` to the counter COUNT task and the window
    /// compare event to the counter CAPTURE task. Replaces any previous
    /// routing.
    fn route_pin(&mut self, pin: SensorPin, pull: Pull);
}

/// Everything the [`crate::Floor`] controller needs from the board.
pub trait FloorHal: PulseCounter + WindowTimer + EventRouter {}

impl<T: PulseCounter + WindowTimer + EventRouter> FloorHal for T {}
