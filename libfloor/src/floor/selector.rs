use super::types::{Floor, WindowPhase};
use crate::{config::types::SensorPin, hal::FloorHal, Error};

impl<'a, H: FloorHal> Floor<'a, H> {
    /// Rewinds the rotation and routes the first sensor pin into the counter.
    pub fn select_first_sensor(&mut self) -> Result<(), Error> {
        self.ensure_switchable()?;
        self.position = 0;
        self.route_active();
        Ok(())
    }

    /// Moves to the next sensor, wrapping after the last one. Only allowed
    /// while the timer is stopped or from the interval-elapsed handler.
    pub fn select_next_sensor(&mut self) -> Result<(), Error> {
        self.ensure_switchable()?;
        if self.is_last_sensor() {
            return self.select_first_sensor();
        }

        self.position += 1;
        self.route_active();
        Ok(())
    }

    pub fn is_last_sensor(&self) -> bool {
        self.position >= self.config.last_sensor()
    }

    pub fn active_sensor(&self) -> usize {
        self.position
    }

    pub fn active_pin(&self) -> SensorPin {
        self.config.sensor_pins()[self.position]
    }

    fn ensure_switchable(&self) -> Result<(), Error> {
        match self.phase {
            WindowPhase::Stopped | WindowPhase::Rollover => Ok(()),
            // A capture is still ahead or its count has not been cleared yet.
            WindowPhase::Armed | WindowPhase::WindowClosed => Err(Error::WindowOpen),
        }
    }

    /// Configures the pin at the current position for counting.
    fn route_active(&mut self) {
        let pin = self.active_pin();
        debug!("routing sensor {} (pin {})", self.position, pin);
        self.hal.route_pin(pin, self.config.pull());
    }
}
