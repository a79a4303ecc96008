use chrono::{DateTime, Utc};

/// Source of the current instant.
///
/// Expiry classification never reads the wall clock itself; use cases ask
/// their injected clock and pass the instant down explicitly.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Clock backed by the system wall clock.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn should_return_current_time_from_system_clock() {
        let before = Utc::now();

        let now = SystemClock.now();

        assert!(now >= before);
        assert!(now - before < Duration::seconds(5));
    }
}
