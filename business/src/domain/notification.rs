use chrono::{DateTime, Duration, Utc};

/// How long a notification stays visible before auto-dismissing.
pub const NOTIFICATION_TTL_MS: i64 = 3_500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Failure,
}

/// Transient operator notification. At most one is visible at a time: a new
/// one replaces the previous and restarts the dismissal window.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    shown_at: DateTime<Utc>,
}

impl Notification {
    pub fn success(message: impl Into<String>, shown_at: DateTime<Utc>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
            shown_at,
        }
    }

    pub fn failure(message: impl Into<String>, shown_at: DateTime<Utc>) -> Self {
        Self {
            kind: NotificationKind::Failure,
            message: message.into(),
            shown_at,
        }
    }

    pub fn is_visible_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.shown_at && now - self.shown_at < Duration::milliseconds(NOTIFICATION_TTL_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn shown_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 10, 9, 0, 0).unwrap()
    }

    #[test]
    fn should_be_visible_within_the_window() {
        let toast = Notification::success("Applied 30% discount to Sliced Bread", shown_at());
        assert!(toast.is_visible_at(shown_at()));
        assert!(toast.is_visible_at(shown_at() + Duration::milliseconds(3_499)));
    }

    #[test]
    fn should_auto_dismiss_after_the_window() {
        let toast = Notification::failure("Failed to apply discount", shown_at());
        assert!(!toast.is_visible_at(shown_at() + Duration::milliseconds(3_500)));
    }

    #[test]
    fn replacement_restarts_the_dismissal_window() {
        let later = shown_at() + Duration::seconds(2);
        let replacement = Notification::success("Applied 10% discount to Milk", later);

        // Visible past the point where the first toast would have expired.
        let past_first_expiry = shown_at() + Duration::seconds(5);
        assert!(replacement.is_visible_at(past_first_expiry));
        assert!(!replacement.is_visible_at(later + Duration::seconds(4)));
    }
}
