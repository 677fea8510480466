//! Folds a burst of key events into one [`Controls`] value.
//!
//! Within a burst the last key on each axis wins, and fire is sticky: one
//! space press anywhere in the burst fires.

use crate::map::KeyIntent;
use crate::types::Controls;

#[derive(Debug, Clone, Default)]
pub struct ControlsAccumulator {
    pending: Controls,
    events: u32,
}

impl ControlsAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, intent: KeyIntent) {
        match intent {
            KeyIntent::Up => self.pending.rows = -1,
            KeyIntent::Down => self.pending.rows = 1,
            KeyIntent::Left => self.pending.columns = -1,
            KeyIntent::Right => self.pending.columns = 1,
            KeyIntent::Fire => self.pending.fire = true,
        }
        self.events += 1;
    }

    /// Number of intents applied since the last [`Self::take`].
    pub fn events(&self) -> u32 {
        self.events
    }

    /// Return the accumulated controls and start a new burst.
    pub fn take(&mut self) -> Controls {
        self.events = 0;
        std::mem::take(&mut self.pending)
    }
}
