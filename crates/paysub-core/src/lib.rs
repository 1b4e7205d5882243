//! Core types for paysub.
//!
//! This crate provides the foundational types used throughout paysub:
//!
//! - **Identifiers**: `CustomerCode`, `SubscriptionCode`, `EmailToken`, `PlanCode`,
//!   `CustomerId`
//! - **Customers**: `CustomerRecord`, `NewCustomer`
//! - **Subscriptions**: `SubscriptionStatus`
//!
//! # Identifiers
//!
//! Every identifier except the email key is issued by the payment processor and is
//! opaque to this system. The newtypes exist so a subscription code can never be
//! passed where a customer code is expected, and so the processor's internal
//! numeric customer id stays distinct from the customer code.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod customer;
pub mod error;
pub mod ids;
pub mod subscription;

pub use customer::{CustomerRecord, NewCustomer};
pub use error::ValidationError;
pub use ids::{CustomerCode, CustomerId, EmailToken, IdError, PlanCode, SubscriptionCode};
pub use subscription::SubscriptionStatus;
