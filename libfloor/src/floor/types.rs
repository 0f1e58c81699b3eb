use crate::{hal::FloorHal, FloorConfig};

/// Callback bound to one timer event. Runs in interrupt context with the
/// controller borrowed mutably, so it can read the captured count or rotate
/// to the next sensor.
pub type Handler<'a, H> = &'a (dyn Fn(&mut Floor<'a, H>) + Sync);

/// Software mirror of the hardware window state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WindowPhase {
    /// Timer not running.
    Stopped,
    /// Timer running, window open, capture still ahead.
    Armed,
    /// Window compare matched, count captured, waiting for the interval.
    WindowClosed,
    /// Inside the interval-elapsed branch. Sensor switching is allowed here.
    Rollover,
}

/// Which branch one interrupt entry serviced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerEvent {
    WindowComplete,
    IntervalElapsed,
}

pub(crate) struct HandlerRegistry<'a, H: FloorHal> {
    pub(crate) window_complete: Option<Handler<'a, H>>,
    pub(crate) interval_elapsed: Option<Handler<'a, H>>,
}

/// Owns the measurement hardware and all state shared between main-line code
/// and the timer interrupt.
pub struct Floor<'a, H: FloorHal> {
    pub(crate) hal: H,
    pub(crate) config: FloorConfig,
    pub(crate) position: usize,
    pub(crate) phase: WindowPhase,
    pub(crate) handlers: HandlerRegistry<'a, H>,
}
