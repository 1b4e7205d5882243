//! Identifier types for paysub.
//!
//! All string identifiers here are issued by the payment processor and treated as
//! opaque. `CustomerId` is the processor's internal numeric id, which is distinct
//! from the customer code and is the only accepted filter for subscription lookups.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Errors from parsing identifiers.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum IdError {
    /// The value is not a valid numeric identifier.
    #[error("invalid numeric identifier")]
    InvalidNumeric,
}

/// A processor-issued customer code (e.g. `CUS_xnxdt6s1zg1f4nx`).
///
/// Assigned once at customer creation and immutable thereafter. This is the only
/// valid identifier for subsequent subscription operations on a customer; it is
/// never fabricated locally.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerCode(String);

/// A processor-issued subscription code (e.g. `SUB_vsyqdmlzble3uii`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubscriptionCode(String);

/// The per-subscription email token paired with a subscription code.
///
/// Obtained only via a subscription lookup; required to authorize cancellation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmailToken(String);

/// A pre-provisioned billing plan code (e.g. `PLN_gx2wn530m0i3w3m`).
///
/// Plans are external configuration; this system never creates or modifies them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlanCode(String);

macro_rules! opaque_code {
    ($name:ident) => {
        impl $name {
            /// Wrap a raw processor-issued value.
            #[must_use]
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Return the underlying string.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

opaque_code!(CustomerCode);
opaque_code!(SubscriptionCode);
opaque_code!(EmailToken);
opaque_code!(PlanCode);

/// The processor's internal numeric customer id.
///
/// Distinct from [`CustomerCode`]: the subscription listing endpoint filters by
/// this id, not by the code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(u64);

impl CustomerId {
    /// Wrap a raw numeric id.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Return the underlying numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl FromStr for CustomerId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>().map(Self).map_err(|_| IdError::InvalidNumeric)
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn customer_code_round_trip() {
        let code = CustomerCode::new("CUS_1a2b3c");
        assert_eq!(code.as_str(), "CUS_1a2b3c");
        assert_eq!(code.to_string(), "CUS_1a2b3c");
    }

    #[test]
    fn codes_serialize_as_plain_strings() {
        let code = SubscriptionCode::new("SUB_abc");
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, "\"SUB_abc\"");

        let back: SubscriptionCode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, code);
    }

    #[test]
    fn customer_id_parses_from_string() {
        let id: CustomerId = "1173".parse().unwrap();
        assert_eq!(id.get(), 1173);

        let err = "not-a-number".parse::<CustomerId>();
        assert_eq!(err, Err(IdError::InvalidNumeric));
    }
}
