use super::types::Floor;
use crate::hal::FloorHal;

impl<'a, H: FloorHal> Floor<'a, H> {
    /// Puts the counter peripheral in counter mode with no shortcuts.
    pub fn configure_pulse_counter(&mut self) {
        self.hal.counter_configure(self.config.counter_bitmode());
    }

    /// Zeroes the counter and starts counting routed edges.
    pub fn restart_pulse_counter(&mut self) {
        self.hal.counter_clear();
        self.hal.counter_start();
    }

    /// Stops counting. The count is kept.
    pub fn stop_pulse_counter(&mut self) {
        self.hal.counter_stop();
    }

    /// Count latched at the last window end. Reading it does not disturb the
    /// running counter.
    pub fn get_pulse_count(&self) -> u32 {
        self.hal.counter_captured()
    }
}
