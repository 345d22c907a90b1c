//! Rate limit reset time attached to rate-limit failures.
//!
//! The report run does not back off or retry; when GitHub refuses a request
//! because the quota is spent, the gateway queries `/rate_limit` once so the
//! fatal error can tell the operator when a re-run will succeed.

use chrono::{DateTime, SecondsFormat, Utc};

/// When GitHub's current rate limit window resets.
///
/// # Example
///
/// ```
/// use kudos::github::rate_limit::RateLimitInfo;
///
/// let info = RateLimitInfo::from_epoch_seconds(1_700_000_000).expect("valid timestamp");
/// assert_eq!(info.to_string(), "2023-11-14T22:13:20Z");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitInfo {
    reset_at: DateTime<Utc>,
}

impl RateLimitInfo {
    /// Creates a snapshot resetting at `reset_at`.
    #[must_use]
    pub const fn new(reset_at: DateTime<Utc>) -> Self {
        Self { reset_at }
    }

    /// Builds a snapshot from the Unix `reset` field of `/rate_limit`.
    ///
    /// Returns `None` when the value is outside chrono's representable range.
    #[must_use]
    pub fn from_epoch_seconds(reset: u64) -> Option<Self> {
        let seconds = i64::try_from(reset).ok()?;
        DateTime::from_timestamp(seconds, 0).map(Self::new)
    }

    /// When the window resets.
    #[must_use]
    pub const fn reset_at(&self) -> DateTime<Utc> {
        self.reset_at
    }
}

impl std::fmt::Display for RateLimitInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.reset_at.to_rfc3339_opts(SecondsFormat::Secs, true))
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use rstest::rstest;

    use super::RateLimitInfo;

    #[rstest]
    fn epoch_reset_converts_to_utc() {
        let info = RateLimitInfo::from_epoch_seconds(1_700_000_000).expect("valid timestamp");

        let expected = Utc
            .with_ymd_and_hms(2023, 11, 14, 22, 13, 20)
            .single()
            .expect("valid date");
        assert_eq!(info.reset_at(), expected);
        assert_eq!(info.to_string(), "2023-11-14T22:13:20Z");
    }

    #[rstest]
    fn out_of_range_reset_is_dropped() {
        assert_eq!(RateLimitInfo::from_epoch_seconds(u64::MAX), None);
    }
}
