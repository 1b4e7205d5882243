//! Paystack client for paysub.
//!
//! This crate wraps the five processor operations the system needs: create a
//! customer, list customers, create a subscription (with the hosted-checkout
//! fallback), fetch a customer's first subscription, and disable a subscription.
//!
//! # Example
//!
//! ```no_run
//! use paysub_client::{PaystackClient, SubscribeOutcome};
//! use paysub_core::{CustomerCode, PlanCode};
//!
//! # async fn example() -> Result<(), paysub_client::ClientError> {
//! let client = PaystackClient::new("sk_test_xxxx")?;
//!
//! let customer = CustomerCode::new("CUS_xnxdt6s1zg1f4nx");
//! let plan = PlanCode::new("PLN_gx2wn530m0i3w3m");
//!
//! match client.create_subscription(&customer, &plan, "a@b.com").await? {
//!     SubscribeOutcome::Created(code) => println!("subscribed: {code}"),
//!     SubscribeOutcome::RedirectRequired { authorization_url } => {
//!         println!("send the user to {authorization_url}");
//!     }
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod client;
mod error;
mod types;

pub use client::{PaystackClient, SubscribeOutcome};
pub use error::ClientError;
pub use types::{PlanInfo, RemoteCustomer, Subscription};
