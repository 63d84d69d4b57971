//! Score counter with a polled change notification
//!
//! Hosts display the score by polling [`Score::take_change`] after each command or
//! tick instead of binding to the counter.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    value: u32,
    changed: bool,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    /// Add points; a zero delta is not a change
    pub fn add(&mut self, delta: u32) {
        if delta == 0 {
            return;
        }
        self.value = self.value.saturating_add(delta);
        self.changed = true;
    }

    pub fn reset(&mut self) {
        if self.value != 0 {
            self.changed = true;
        }
        self.value = 0;
    }

    /// New value if the score changed since the last call
    pub fn take_change(&mut self) -> Option<u32> {
        if std::mem::take(&mut self.changed) {
            Some(self.value)
        } else {
            None
        }
    }
}
