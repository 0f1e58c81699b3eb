//! Cycle-level model of the measurement hardware.
//!
//! One call to [`SimBoard::tick`] is one window-timer tick. The model covers
//! the parts the controller depends on:
//! - COMPARE events with the COMPARE1_CLEAR shortcut,
//! - the counter's COUNT/CLEAR/CAPTURE tasks and its bit-width wrap,
//! - the two routing channels,
//! - the INTENSET mask and the interrupt line.

use core::cell::RefCell;

use crate::{
    config::types::{MeasurementWindow, SensorPin},
    hal::{Bitmode, Compare, EventRouter, Pull, PulseCounter, WindowTimer},
    Floor, TimerEvent,
};

struct SimState {
    counter_bitmode: Bitmode,
    counter_running: bool,
    counter_value: u32,
    captured: u32,

    window: Option<MeasurementWindow>,
    timer_running: bool,
    timer_value: u32,
    events: [bool; 2],
    intenset: [bool; 2],
    irq_enabled: bool,

    routed_pin: Option<SensorPin>,
    pull: Pull,
    route_count: usize,
}

pub struct SimBoard {
    state: RefCell<SimState>,
}

impl Default for SimBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl SimBoard {
    pub fn new() -> Self {
        Self {
            state: RefCell::new(SimState {
                counter_bitmode: Bitmode::B32,
                counter_running: false,
                counter_value: 0,
                captured: 0,
                window: None,
                timer_running: false,
                timer_value: 0,
                events: [false; 2],
                intenset: [false; 2],
                irq_enabled: false,
                routed_pin: None,
                pull: Pull::None,
                route_count: 0,
            }),
        }
    }

    /// Rising edge on `pin`. Only counted if the pin is routed to a running
    /// counter.
    pub fn pulse(&self, pin: SensorPin) {
        let mut s = self.state.borrow_mut();
        if s.routed_pin == Some(pin) && s.counter_running {
            s.counter_value = s.counter_value.wrapping_add(1) & s.counter_bitmode.max_value();
        }
    }

    pub fn pulses(&self, pin: SensorPin, count: u32) {
        for _ in 0..count {
            self.pulse(pin);
        }
    }

    /// Advances the window timer by one tick.
    pub fn tick(&self) {
        let mut s = self.state.borrow_mut();
        let Some(window) = s.window else {
            return;
        };
        if !s.timer_running {
            return;
        }

        s.timer_value = s.timer_value.wrapping_add(1) & window.bitmode().max_value();
        if s.timer_value == window.duration() {
            s.events[Compare::Window.index()] = true;
            if s.routed_pin.is_some() {
                s.captured = s.counter_value;
            }
        }
        if s.timer_value == window.interval() {
            s.events[Compare::Interval.index()] = true;
            s.timer_value = 0;
        }
    }

    /// Ticks `ticks` times and enters the interrupt handler whenever the line
    /// is pending, the way the NVIC re-enters while an event flag stays set.
    /// `observe` gets the tick number (1-based) and the serviced branch.
    pub fn run<'a>(
        &self,
        floor: &mut Floor<'a, &SimBoard>,
        ticks: u32,
        mut observe: impl FnMut(u32, TimerEvent),
    ) {
        for tick in 1..=ticks {
            self.tick();
            while self.irq_pending() {
                match floor.on_interrupt() {
                    Some(event) => observe(tick, event),
                    None => break,
                }
            }
        }
    }

    /// Forces a compare event flag, as if the comparator matched.
    pub fn raise(&self, compare: Compare) {
        self.state.borrow_mut().events[compare.index()] = true;
    }

    pub fn irq_pending(&self) -> bool {
        let s = self.state.borrow();
        s.irq_enabled && s.events.iter().zip(s.intenset.iter()).any(|(&e, &i)| e && i)
    }

    pub fn event_flag(&self, compare: Compare) -> bool {
        self.state.borrow().events[compare.index()]
    }

    pub fn counter_value(&self) -> u32 {
        self.state.borrow().counter_value
    }

    pub fn counter_running(&self) -> bool {
        self.state.borrow().counter_running
    }

    pub fn timer_value(&self) -> u32 {
        self.state.borrow().timer_value
    }

    pub fn timer_running(&self) -> bool {
        self.state.borrow().timer_running
    }

    pub fn routed_pin(&self) -> Option<SensorPin> {
        self.state.borrow().routed_pin
    }

    pub fn pull(&self) -> Pull {
        self.state.borrow().pull
    }

    pub fn route_count(&self) -> usize {
        self.state.borrow().route_count
    }
}

impl PulseCounter for &SimBoard {
    fn counter_configure(&mut self, bitmode: Bitmode) {
        self.state.borrow_mut().counter_bitmode = bitmode;
    }

    fn counter_clear(&mut self) {
        self.state.borrow_mut().counter_value = 0;
    }

    fn counter_start(&mut self) {
        self.state.borrow_mut().counter_running = true;
    }

    fn counter_stop(&mut self) {
        self.state.borrow_mut().counter_running = false;
    }

    fn counter_captured(&self) -> u32 {
        self.state.borrow().captured
    }
}

impl WindowTimer for &SimBoard {
    fn timer_configure(&mut self, window: &MeasurementWindow) {
        let mut s = self.state.borrow_mut();
        s.window = Some(*window);
        s.timer_value = 0;
        s.events = [false; 2];
        s.intenset = [true; 2];
        s.irq_enabled = true;
    }

    fn timer_clear(&mut self) {
        self.state.borrow_mut().timer_value = 0;
    }

    fn timer_start(&mut self) {
        self.state.borrow_mut().timer_running = true;
    }

    fn timer_stop(&mut self) {
        self.state.borrow_mut().timer_running = false;
    }

    fn timer_event_pending(&self, compare: Compare) -> bool {
        let s = self.state.borrow();
        s.events[compare.index()] && s.intenset[compare.index()]
    }

    fn timer_clear_event(&mut self, compare: Compare) {
        self.state.borrow_mut().events[compare.index()] = false;
    }
}

impl EventRouter for &SimBoard {
    fn route_pin(&mut self, pin: SensorPin, pull: Pull) {
        let mut s = self.state.borrow_mut();
        s.routed_pin = Some(pin);
        s.pull = pull;
        s.route_count += 1;
    }
}
