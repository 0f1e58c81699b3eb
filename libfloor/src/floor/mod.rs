//! The measurement controller.
//!
//! A [`Floor`] owns the counter, the window timer and the routing channels.
//! Main-line code configures it, picks the first sensor and arms the timer;
//! from then on the timer interrupt calls [`Floor::on_interrupt`], which hands
//! the controller to the bound handlers.

pub mod types;

mod counter;
mod dispatcher;
mod selector;
mod timer;

use crate::{hal::FloorHal, FloorConfig};
use types::{Floor, HandlerRegistry, WindowPhase};

impl<'a, H: FloorHal> Floor<'a, H> {
    /// `config` is validated on construction, so the pin list is never empty.
    pub fn new(hal: H, config: FloorConfig) -> Self {
        Self {
            hal,
            config,
            position: 0,
            phase: WindowPhase::Stopped,
            handlers: HandlerRegistry {
                window_complete: None,
                interval_elapsed: None,
            },
        }
    }

    pub fn config(&self) -> &FloorConfig {
        &self.config
    }

    pub fn phase(&self) -> WindowPhase {
        self.phase
    }

    pub fn hal(&self) -> &H {
        &self.hal
    }
}
