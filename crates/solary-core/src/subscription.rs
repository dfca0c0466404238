//! Subscription validity evaluation.
//!
//! A user's overall validity is the latest end-of-coverage among all their
//! grants. With no grants the fold seed (Unix epoch) makes them effectively
//! always expired.

use chrono::{DateTime, Duration, Utc};

use crate::models::Subscription;

const SECONDS_PER_DAY: i64 = 86_400;

/// Latest end-of-coverage among all grants, or the epoch if there are none.
pub fn valid_until(subscriptions: &[Subscription]) -> DateTime<Utc> {
    subscriptions
        .iter()
        .fold(DateTime::<Utc>::UNIX_EPOCH, |latest, grant| {
            let expires = grant.created_at + Duration::seconds(grant.period_days * SECONDS_PER_DAY);
            latest.max(expires)
        })
}

/// Whether any grant still covers `now`. Strict: expiry exactly at `now`
/// is not valid.
pub fn is_valid(subscriptions: &[Subscription], now: DateTime<Utc>) -> bool {
    valid_until(subscriptions) > now
}
