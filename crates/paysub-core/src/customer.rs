//! Customer types for paysub.
//!
//! `NewCustomer` is the validated registration input; `CustomerRecord` is the
//! document persisted after the processor has issued a customer code.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::ids::CustomerCode;

/// Validated input for registering a customer.
///
/// Construction enforces the registration preconditions: all fields non-empty and
/// the email matching basic email syntax. No remote call is attempted with invalid
/// input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCustomer {
    /// Customer email, also the storage key.
    pub email: String,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Phone number.
    pub phone: String,
}

impl NewCustomer {
    /// Validate and build a registration input.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidEmail` if the email fails the basic syntax
    /// check, or `ValidationError::EmptyField` naming the first empty field.
    pub fn new(
        email: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let email = email.into();
        let first_name = first_name.into();
        let last_name = last_name.into();
        let phone = phone.into();

        if !is_valid_email(&email) {
            return Err(ValidationError::InvalidEmail(email));
        }
        if first_name.trim().is_empty() {
            return Err(ValidationError::EmptyField("first_name"));
        }
        if last_name.trim().is_empty() {
            return Err(ValidationError::EmptyField("last_name"));
        }
        if phone.trim().is_empty() {
            return Err(ValidationError::EmptyField("phone"));
        }

        Ok(Self {
            email,
            first_name,
            last_name,
            phone,
        })
    }
}

/// Basic email syntax check: something before an `@`, and a domain with a dot.
///
/// This is intentionally shallow; the processor performs its own validation.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !local.is_empty() && !host.is_empty() && !tld.is_empty()
}

/// A stored customer record, keyed by email.
///
/// Created exactly once after a successful remote customer creation and never
/// updated thereafter. The `subscribed` flag is locally tracked and advisory only;
/// the processor remains the source of truth for subscription state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerRecord {
    /// Customer email (storage key).
    pub email: String,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Phone number.
    pub phone: String,
    /// Locally tracked subscription flag. Always `false` at creation.
    pub subscribed: bool,
    /// Processor-issued customer code, immutable once assigned.
    pub customer_code: CustomerCode,
}

impl CustomerRecord {
    /// Build the record persisted after the processor issued `customer_code`.
    #[must_use]
    pub fn from_registration(input: NewCustomer, customer_code: CustomerCode) -> Self {
        Self {
            email: input.email,
            first_name: input.first_name,
            last_name: input.last_name,
            phone: input.phone,
            subscribed: false,
            customer_code,
        }
    }
}
