//! Lazy mode: a time-bounded toggle that discourages scheduling
//! high-energy tasks.
//!
//! Expiry is evaluated lazily on each check against the caller's `now`;
//! there is no background timer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lazy-mode state stored on the user's preference record.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct LazyMode {
    pub enabled: bool,
    /// Optional auto-expiry; absent means on until explicitly disabled.
    pub until: Option<DateTime<Utc>>,
}

impl LazyMode {
    /// Whether lazy mode is active at `now`.
    ///
    /// Active iff enabled and either no expiry is set or `now` is strictly
    /// before it; an expiry exactly equal to `now` counts as expired.
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        if !self.enabled {
            return false;
        }
        match self.until {
            None => true,
            Some(until) => now < until,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_disabled_is_inactive() {
        let now = Utc::now();
        let mode = LazyMode {
            enabled: false,
            until: Some(now + Duration::minutes(1)),
        };
        assert!(!mode.is_active(now));
    }

    #[test]
    fn test_enabled_without_expiry() {
        let mode = LazyMode {
            enabled: true,
            until: None,
        };
        assert!(mode.is_active(Utc::now()));
    }

    #[test]
    fn test_expiry_is_strict() {
        let now = Utc::now();
        let mode = LazyMode {
            enabled: true,
            until: Some(now),
        };
        // Exactly at expiry counts as expired
        assert!(!mode.is_active(now));
        assert!(mode.is_active(now - Duration::milliseconds(1)));

        let past = LazyMode {
            enabled: true,
            until: Some(now - Duration::milliseconds(1)),
        };
        assert!(!past.is_active(now));

        let future = LazyMode {
            enabled: true,
            until: Some(now + Duration::minutes(1)),
        };
        assert!(future.is_active(now));
    }
}
