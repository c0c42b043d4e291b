//! Time-limited token minting for activation and password reset flows.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Activation and reset tokens stay valid for 7 days.
pub const TOKEN_TTL_DAYS: i64 = 7;

/// A freshly minted token and its expiry.
///
/// The raw token is handed to an out-of-band delivery collaborator (e.g. an
/// email sender); the same values are stored on the record for later
/// comparison.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Mint a new token: a random 128-bit UUID rendered in its canonical
/// string-safe form, expiring [`TOKEN_TTL_DAYS`] from now.
pub(crate) fn issue() -> IssuedToken {
    IssuedToken {
        token: Uuid::new_v4().to_string(),
        expires_at: Utc::now() + Duration::days(TOKEN_TTL_DAYS),
    }
}

/// The zero expiry. A record that never had a token minted carries this
/// value, which always compares as already expired.
pub(crate) fn epoch() -> DateTime<Utc> {
    DateTime::<Utc>::UNIX_EPOCH
}

pub(crate) fn is_expired(expires_at: DateTime<Utc>) -> bool {
    Utc::now() > expires_at
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_produces_uuid_token() {
        let issued = issue();
        assert!(Uuid::parse_str(&issued.token).is_ok());
    }

    #[test]
    fn test_issue_tokens_are_unique() {
        assert_ne!(issue().token, issue().token);
    }

    #[test]
    fn test_issue_expiry_is_seven_days_out() {
        let issued = issue();
        let ttl = issued.expires_at - Utc::now();
        // Allow clock-resolution slack around the 7 day mark.
        assert!(ttl > Duration::days(7) - Duration::seconds(5));
        assert!(ttl <= Duration::days(7));
    }

    #[test]
    fn test_epoch_is_always_expired() {
        assert!(is_expired(epoch()));
    }
}
