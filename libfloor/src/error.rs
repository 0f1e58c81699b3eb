use crate::hal::Bitmode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The window has to close before the cycle restarts.
    WindowOrder { duration: u32, interval: u32 },
    ZeroDuration,
    /// Interval compare value does not fit the timer width.
    IntervalOverflow { interval: u32, bitmode: Bitmode },
    /// Prescaler above 9 is not supported by the TIMER peripheral.
    Prescaler(u8),
    NoSensors,
    TooManySensors,
    InvalidPin(u8),
    /// Sensor switch attempted while a capture is still pending.
    WindowOpen,
}
