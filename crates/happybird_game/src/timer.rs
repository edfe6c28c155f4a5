/// Accumulator timer polled once per frame.
#[derive(Clone, Debug, PartialEq)]
pub struct IntervalTimer {
    interval_ms: u32,
    elapsed_ms: f64,
    enabled: bool,
    repeating: bool,
}

impl IntervalTimer {
    /// Fires every `interval_ms` while armed. Starts disarmed.
    pub fn repeating(interval_ms: u32) -> Self {
        Self {
            interval_ms,
            elapsed_ms: 0.0,
            enabled: false,
            repeating: true,
        }
    }

    /// Fires once, `interval_ms` after being armed, then disarms itself.
    pub fn one_shot(interval_ms: u32) -> Self {
        Self {
            repeating: false,
            ..Self::repeating(interval_ms)
        }
    }

    pub fn is_armed(&self) -> bool {
        self.enabled
    }

    /// Start counting from zero.
    pub fn arm(&mut self) {
        self.enabled = true;
        self.elapsed_ms = 0.0;
    }

    pub fn disarm(&mut self) {
        self.enabled = false;
        self.elapsed_ms = 0.0;
    }

    /// Advance by `dt` seconds. Fires at most once per call; time beyond
    /// one interval carries over to later calls.
    pub fn tick(&mut self, dt: f32) -> bool {
        if !self.enabled || self.interval_ms == 0 {
            return false;
        }
        self.elapsed_ms += dt as f64 * 1000.0;

        let interval = self.interval_ms as f64;
        if self.elapsed_ms < interval {
            return false;
        }
        if self.repeating {
            self.elapsed_ms -= interval;
        } else {
            self.disarm();
        }
        true
    }
}
