//! Paystack API types.
//!
//! Every response arrives in the same envelope: `{status, message, data}`, with
//! error bodies optionally adding `code` and `meta.nextStep`. Field names follow
//! the processor's published contract exactly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use paysub_core::{
    CustomerCode, CustomerId, EmailToken, PlanCode, SubscriptionCode, SubscriptionStatus,
};

/// The common Paystack response envelope.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Envelope {
    /// Whether the processor considers the request successful.
    pub status: bool,
    /// Human-readable message.
    #[serde(default)]
    pub message: String,
    /// Payload; shape depends on the endpoint.
    #[serde(default)]
    pub data: Option<serde_json::Value>,
    /// Processor-defined error code on rejections.
    #[serde(default)]
    pub code: Option<String>,
    /// Extra hints on some rejections.
    #[serde(default)]
    pub meta: Option<EnvelopeMeta>,
}

/// Envelope `meta` object.
///
/// On the listing endpoints this carries pagination, which is ignored here; on the
/// no-stored-authorization rejection it carries the continuation hint.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct EnvelopeMeta {
    /// Continuation hint pointing the caller at hosted checkout.
    #[serde(rename = "nextStep", default)]
    pub next_step: Option<String>,
}

/// Customer creation request body.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct CreateCustomerRequest<'a> {
    pub email: &'a str,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub phone: &'a str,
}

/// Customer creation response payload; only the issued code matters here.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CreatedCustomer {
    pub customer_code: CustomerCode,
}

/// A customer as returned by the remote listing.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteCustomer {
    /// Processor-internal numeric id; the filter key for subscription lookups.
    pub id: CustomerId,
    /// Processor-issued customer code.
    pub customer_code: CustomerCode,
    /// Customer email.
    pub email: String,
    /// First name, if the processor has one.
    #[serde(default)]
    pub first_name: Option<String>,
    /// Last name, if the processor has one.
    #[serde(default)]
    pub last_name: Option<String>,
    /// Phone number, if the processor has one.
    #[serde(default)]
    pub phone: Option<String>,
}

/// Subscription creation request body.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct CreateSubscriptionRequest<'a> {
    pub customer: &'a str,
    pub plan: &'a str,
}

/// Subscription creation response payload; only the issued code matters here.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CreatedSubscription {
    pub subscription_code: SubscriptionCode,
}

/// A subscription as returned by the remote listing.
///
/// Held only in transient state; never persisted. The `email_token` is the
/// cancellation credential paired with the subscription code.
#[derive(Debug, Clone, Deserialize)]
pub struct Subscription {
    /// Processor-issued subscription code.
    pub subscription_code: SubscriptionCode,
    /// Token authorizing cancellation of this subscription.
    pub email_token: EmailToken,
    /// Remote status; only `active` is distinguished locally.
    pub status: SubscriptionStatus,
    /// Charge amount in the plan's subunit.
    #[serde(default)]
    pub amount: Option<i64>,
    /// When the next charge is due, if scheduled.
    #[serde(default)]
    pub next_payment_date: Option<DateTime<Utc>>,
    /// The plan this subscription bills against.
    #[serde(default)]
    pub plan: Option<PlanInfo>,
}

/// Plan details nested in a subscription listing.
#[derive(Debug, Clone, Deserialize)]
pub struct PlanInfo {
    /// The plan's code.
    pub plan_code: PlanCode,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Amount in the plan's subunit.
    #[serde(default)]
    pub amount: Option<i64>,
    /// Billing interval (e.g. `monthly`).
    #[serde(default)]
    pub interval: Option<String>,
    /// Currency code (e.g. `NGN`).
    #[serde(default)]
    pub currency: Option<String>,
}

/// Zero-amount transaction initialization request body.
///
/// `amount` is explicitly zero so the plan's predefined amount applies.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct InitializeTransactionRequest<'a> {
    pub email: &'a str,
    pub plan: &'a str,
    pub amount: u64,
}

/// Transaction initialization response payload.
///
/// The payload also carries an access code and reference; only the hosted
/// checkout URL is consumed here.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct InitializedTransaction {
    pub authorization_url: String,
}

/// Subscription disable request body.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct DisableSubscriptionRequest<'a> {
    pub code: &'a str,
    pub token: &'a str,
}
