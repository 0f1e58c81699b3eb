pub mod types;

use crate::config::types::SensorPin;

/// Upper bound on the number of sensors a controller can rotate through.
pub const MAX_SENSORS: usize = 8;
/// P0 has 32 pins.
pub const MAX_PIN: SensorPin = 31;
pub const MAX_PRESCALER: u8 = 9;

// Reference floor: six sensors, 500 us window every 1 ms.
pub const REFERENCE_PINS: [SensorPin; 6] = [0, 1, 2, 7, 6, 5];
pub const REFERENCE_DURATION: u32 = 1000;
pub const REFERENCE_INTERVAL: u32 = 2000;
// 16 MHz / 2^3 = 2 MHz
pub const REFERENCE_PRESCALER: u8 = 3;
