use crate::domain::TIMESTAMP_FORMAT;
use crate::ports::outbound::Clock;

/// Default clock using local system time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_timestamp(&self) -> String {
        chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
    }
}

/// Clock frozen at one timestamp, for tests.
#[derive(Debug, Clone)]
pub struct FixedClock(pub String);

impl FixedClock {
    pub fn new(timestamp: impl Into<String>) -> Self {
        Self(timestamp.into())
    }
}

impl Clock for FixedClock {
    fn now_timestamp(&self) -> String {
        self.0.clone()
    }
}
