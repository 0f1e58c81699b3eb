use super::types::{Floor, WindowPhase};
use crate::hal::FloorHal;

impl<'a, H: FloorHal> Floor<'a, H> {
    /// Programs the window timer: duration on CC[0], interval on CC[1], both
    /// compare interrupts on, interrupt line unmasked. Does not start it.
    pub fn configure_measurement_timer(&mut self) {
        let window = *self.config.window();
        info!(
            "window {} / {} ticks, {} ns per tick",
            window.duration(),
            window.interval(),
            window.tick_ns()
        );
        self.hal.timer_configure(&window);
    }

    /// Starts a fresh cycle from tick zero. Compare events left over from
    /// before are dropped.
    pub fn measurement_timer_enable(&mut self) {
        self.hal.timer_clear();
        self.discard_timer_events();
        self.hal.timer_start();
        self.phase = WindowPhase::Armed;
    }

    pub fn measurement_timer_disable(&mut self) {
        self.hal.timer_stop();
        self.phase = WindowPhase::Stopped;
    }
}
