/// Virtual playback time. Only moves forward.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PlaybackClock {
    now: f64,
}

impl PlaybackClock {
    /// Clock at time zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current time.
    pub fn now(&self) -> f64 {
        self.now
    }

    /// Move forward by `dt` and return the new time. Negative or non-finite steps are ignored.
    pub fn advance(&mut self, dt: f64) -> f64 {
        if dt.is_finite() && dt > 0.0 {
            self.now += dt;
        }
        self.now
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schedule/clock.rs"]
mod tests;
