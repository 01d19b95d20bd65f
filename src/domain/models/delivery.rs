use std::time::Duration;

use chrono::{DateTime, Utc};

/// One pending invite notification. Owned by the polling task that created
/// it; never persisted and never deduplicated against other deliveries for
/// the same user, so a process restart drops it silently.
#[derive(Debug, Clone)]
pub struct ScheduledDelivery {
    pub user_id: String,
    pub fire_at: DateTime<Utc>,
}

impl ScheduledDelivery {
    pub fn new(user_id: impl Into<String>, fire_at: DateTime<Utc>) -> Self {
        Self {
            user_id: user_id.into(),
            fire_at,
        }
    }

    /// Time left until the fire time, zero when already past due.
    pub fn remaining_from(&self, now: DateTime<Utc>) -> Duration {
        (self.fire_at - now).to_std().unwrap_or(Duration::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeDelta;

    use super::*;

    #[test]
    fn remaining_counts_down_to_the_fire_time() {
        let now = Utc::now();
        let delivery = ScheduledDelivery::new("42", now + TimeDelta::minutes(15));
        assert_eq!(delivery.remaining_from(now), Duration::from_secs(900));
        assert_eq!(
            delivery.remaining_from(now + TimeDelta::minutes(14)),
            Duration::from_secs(60)
        );
    }

    #[test]
    fn stale_fire_time_has_no_remaining_wait() {
        let now = Utc::now();
        let delivery = ScheduledDelivery::new("42", now - TimeDelta::hours(1));
        assert_eq!(delivery.remaining_from(now), Duration::ZERO);
    }
}
