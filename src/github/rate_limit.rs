//! Search quota information reported by GitHub.
//!
//! The search API has its own, much smaller, quota than the core REST API
//! (30 requests a minute when authenticated, 10 when anonymous). When a
//! search is rejected for exceeding it, the gateway asks `/rate_limit` for the
//! search bucket so the user can be told when to retry.

/// Quota snapshot for one GitHub rate limit bucket.
///
/// # Example
///
/// ```
/// use trendfeed::github::rate_limit::RateLimitInfo;
///
/// let info = RateLimitInfo::new(30, 0, 1_700_000_000);
/// assert_eq!(
///     info.describe_from(1_699_999_990),
///     "0/30 search requests left, resets in 10s"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitInfo {
    limit: u32,
    remaining: u32,
    /// Unix timestamp when the bucket refills.
    reset_at: u64,
}

impl RateLimitInfo {
    /// Creates a new quota snapshot.
    #[must_use]
    pub const fn new(limit: u32, remaining: u32, reset_at: u64) -> Self {
        Self {
            limit,
            remaining,
            reset_at,
        }
    }

    /// Seconds until the bucket refills, measured from `now_unix`.
    const fn seconds_until_reset_from(&self, now_unix: u64) -> u64 {
        self.reset_at.saturating_sub(now_unix)
    }

    /// Short user-facing summary, e.g. `0/30 search requests left, resets in 42s`.
    #[must_use]
    pub fn describe_from(&self, now_unix: u64) -> String {
        format!(
            "{remaining}/{limit} search requests left, resets in {seconds}s",
            remaining = self.remaining,
            limit = self.limit,
            seconds = self.seconds_until_reset_from(now_unix)
        )
    }
}
