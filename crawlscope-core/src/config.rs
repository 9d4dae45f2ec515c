use std::time::Duration;

/// Default simulated submission latency
pub const DEFAULT_SUBMIT_DELAY_MS: u64 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormConfig {
    /// How long a submission stays in flight
    pub submit_delay: Duration,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            submit_delay: Duration::from_millis(DEFAULT_SUBMIT_DELAY_MS),
        }
    }
}

impl FormConfig {
    pub fn with_submit_delay_ms(mut self, millis: u64) -> Self {
        self.submit_delay = Duration::from_millis(millis);
        self
    }
}
