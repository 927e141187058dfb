//! Transient "limit reached" warning state. Raised only when an add is
//! rejected at capacity; hides itself once the deadline passes. Nothing
//! else in the editor cancels or extends it.

use std::time::{Duration, Instant};

const VISIBLE_FOR: Duration = Duration::from_secs(3);

/// Deadline-based visibility flag for the capacity warning banner. A
/// re-trigger while visible moves the single deadline forward, so the
/// banner stays up until 3 seconds after the most recent rejection.
#[derive(Debug, Default)]
pub struct LimitNotice {
    deadline: Option<Instant>,
}

impl LimitNotice {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trigger(&mut self, now: Instant) {
        self.deadline = Some(now + VISIBLE_FOR);
    }

    pub fn is_visible(&self, now: Instant) -> bool {
        self.deadline.is_some_and(|deadline| now < deadline)
    }

    /// Time left until the banner hides, for repaint scheduling. `None`
    /// once hidden.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        let deadline = self.deadline?;
        (now < deadline).then(|| deadline - now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_until_triggered() {
        let notice = LimitNotice::new();
        assert!(!notice.is_visible(Instant::now()));
        assert_eq!(notice.remaining(Instant::now()), None);
    }

    #[test]
    fn visible_for_three_seconds_after_trigger() {
        let mut notice = LimitNotice::new();
        let t0 = Instant::now();
        notice.trigger(t0);

        assert!(notice.is_visible(t0));
        assert!(notice.is_visible(t0 + Duration::from_millis(2999)));
        assert!(!notice.is_visible(t0 + Duration::from_secs(3)));
    }

    #[test]
    fn retrigger_resets_the_deadline() {
        let mut notice = LimitNotice::new();
        let t0 = Instant::now();
        notice.trigger(t0);
        notice.trigger(t0 + Duration::from_secs(2));

        // Still visible past the first deadline, hidden after the second.
        assert!(notice.is_visible(t0 + Duration::from_secs(4)));
        assert!(!notice.is_visible(t0 + Duration::from_secs(5)));
    }

    #[test]
    fn remaining_shrinks_toward_the_deadline() {
        let mut notice = LimitNotice::new();
        let t0 = Instant::now();
        notice.trigger(t0);

        assert_eq!(notice.remaining(t0), Some(Duration::from_secs(3)));
        assert_eq!(
            notice.remaining(t0 + Duration::from_secs(1)),
            Some(Duration::from_secs(2))
        );
        assert_eq!(notice.remaining(t0 + Duration::from_secs(3)), None);
    }
}
