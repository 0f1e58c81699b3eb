use super::types::{Floor, Handler, TimerEvent, WindowPhase};
use crate::hal::{Compare, FloorHal};

impl<'a, H: FloorHal> Floor<'a, H> {
    /// Binds the callback run when the window closes. `None` unbinds it.
    pub fn set_handler_measurement_complete(&mut self, handler: Option<Handler<'a, H>>) {
        self.handlers.window_complete = handler;
    }

    /// Binds the callback run when the interval elapses. This is the place to
    /// call [`Floor::select_next_sensor`].
    pub fn set_handler_measurement_interval(&mut self, handler: Option<Handler<'a, H>>) {
        self.handlers.interval_elapsed = handler;
    }

    /// Body of the window timer interrupt.
    ///
    /// Services at most one compare event per call, the window match first.
    /// If both are pending the interval event stays set and keeps the
    /// interrupt line pending, so it is handled on the next entry.
    ///
    /// With the timer stopped, pending flags are dropped and no handler runs.
    pub fn on_interrupt(&mut self) -> Option<TimerEvent> {
        if self.phase == WindowPhase::Stopped {
            // A compare matched just before the timer was stopped.
            self.discard_timer_events();
            return None;
        }

        if self.hal.timer_event_pending(Compare::Window) {
            // Clear before the handler runs, or the line fires again.
            self.hal.timer_clear_event(Compare::Window);
            self.phase = WindowPhase::WindowClosed;
            trace!("window complete, captured {}", self.get_pulse_count());

            if let Some(handler) = self.handlers.window_complete {
                handler(self);
            }
            Some(TimerEvent::WindowComplete)
        } else if self.hal.timer_event_pending(Compare::Interval) {
            self.hal.timer_clear_event(Compare::Interval);
            self.phase = WindowPhase::Rollover;

            if let Some(handler) = self.handlers.interval_elapsed {
                handler(self);
            }

            // Counter keeps running through CLEAR.
            self.hal.counter_clear();
            if self.phase == WindowPhase::Rollover {
                self.phase = WindowPhase::Armed;
            }
            Some(TimerEvent::IntervalElapsed)
        } else {
            None
        }
    }

    pub(crate) fn discard_timer_events(&mut self) {
        self.hal.timer_clear_event(Compare::Window);
        self.hal.timer_clear_event(Compare::Interval);
    }
}
