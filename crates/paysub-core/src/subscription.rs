//! Subscription status mirrored from the payment processor.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of a remote subscription.
///
/// The processor owns the lifecycle; this system only mirrors the status string
/// from lookups and distinguishes `active` for display purposes. Statuses the
/// processor may introduce later deserialize as `Unknown` rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SubscriptionStatus {
    /// The subscription is active and will renew.
    Active,
    /// Cancelled but still in its paid period.
    NonRenewing,
    /// A renewal charge failed and needs attention.
    Attention,
    /// The subscription ran its course.
    Completed,
    /// Fully cancelled.
    Cancelled,
    /// Any processor-defined status this system does not model.
    #[serde(other)]
    Unknown,
}

impl SubscriptionStatus {
    /// Whether the subscription counts as active locally.
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }
}

impl fmt::Display for SubscriptionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Active => "active",
            Self::NonRenewing => "non-renewing",
            Self::Attention => "attention",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
            Self::Unknown => "unknown",
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_processor_statuses() {
        let status: SubscriptionStatus = serde_json::from_str("\"active\"").unwrap();
        assert_eq!(status, SubscriptionStatus::Active);
        assert!(status.is_active());

        let status: SubscriptionStatus = serde_json::from_str("\"non-renewing\"").unwrap();
        assert_eq!(status, SubscriptionStatus::NonRenewing);
        assert!(!status.is_active());
    }

    #[test]
    fn unknown_statuses_do_not_fail() {
        let status: SubscriptionStatus = serde_json::from_str("\"paused\"").unwrap();
        assert_eq!(status, SubscriptionStatus::Unknown);
        assert!(!status.is_active());
    }
}
