#![cfg_attr(not(test), no_std)]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod config;
mod error;
pub mod floor;
pub mod hal;
#[cfg(test)]
pub mod sim;

pub use config::types::{FloorConfig, MeasurementWindow, SensorPin};
pub use error::Error;
pub use floor::types::{Floor, Handler, TimerEvent, WindowPhase};
