//! Customer registration, listing, and subscription lookup handlers.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use paysub_client::{RemoteCustomer, Subscription};
use paysub_core::{CustomerId, CustomerRecord, NewCustomer};
use paysub_store::RecordStore;

use crate::error::ApiError;
use crate::state::AppState;

/// Customer registration request.
#[derive(Debug, Deserialize)]
pub struct RegisterCustomerRequest {
    /// Customer email.
    pub email: String,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Phone number.
    pub phone: String,
}

/// Stored customer record response.
#[derive(Debug, Serialize)]
pub struct CustomerRecordResponse {
    /// Customer email.
    pub email: String,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Phone number.
    pub phone: String,
    /// Locally tracked subscription flag.
    pub subscribed: bool,
    /// Processor-issued customer code.
    pub customer_code: String,
}

impl From<&CustomerRecord> for CustomerRecordResponse {
    fn from(record: &CustomerRecord) -> Self {
        Self {
            email: record.email.clone(),
            first_name: record.first_name.clone(),
            last_name: record.last_name.clone(),
            phone: record.phone.clone(),
            subscribed: record.subscribed,
            customer_code: record.customer_code.to_string(),
        }
    }
}

/// Register a customer.
///
/// One strictly sequential chain: validate, create the customer remotely, then
/// persist the record with the issued code. If the remote creation succeeds and
/// the local write fails, the processor keeps a customer this system has no
/// record of; the error is surfaced and nothing compensates.
pub async fn register_customer(
    State(state): State<Arc<AppState>>,
    Json(body): Json<RegisterCustomerRequest>,
) -> Result<(StatusCode, Json<CustomerRecordResponse>), ApiError> {
    let input = NewCustomer::new(body.email, body.first_name, body.last_name, body.phone)?;

    let customer_code = state.paystack()?.create_customer(&input).await?;

    let record = CustomerRecord::from_registration(input, customer_code);
    state.store.put_record(&record)?;

    tracing::info!(
        email = %record.email,
        customer_code = %record.customer_code,
        "customer registered"
    );

    Ok((StatusCode::CREATED, Json((&record).into())))
}

/// A customer as the processor lists it.
#[derive(Debug, Serialize)]
pub struct RemoteCustomerResponse {
    /// Processor-internal numeric id.
    pub id: u64,
    /// Processor-issued customer code.
    pub customer_code: String,
    /// Customer email.
    pub email: String,
    /// First name, if known remotely.
    pub first_name: Option<String>,
    /// Last name, if known remotely.
    pub last_name: Option<String>,
    /// Phone number, if known remotely.
    pub phone: Option<String>,
}

impl From<RemoteCustomer> for RemoteCustomerResponse {
    fn from(customer: RemoteCustomer) -> Self {
        Self {
            id: customer.id.get(),
            customer_code: customer.customer_code.to_string(),
            email: customer.email,
            first_name: customer.first_name,
            last_name: customer.last_name,
            phone: customer.phone,
        }
    }
}

/// List customers from the processor's first listing page.
pub async fn list_customers(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<RemoteCustomerResponse>>, ApiError> {
    let customers = state.paystack()?.list_customers().await?;

    Ok(Json(customers.into_iter().map(Into::into).collect()))
}

/// Transient view of a customer's first subscription.
#[derive(Debug, Serialize)]
pub struct SubscriptionView {
    /// Processor-issued subscription code.
    pub subscription_code: String,
    /// Token authorizing cancellation, paired with the code.
    pub email_token: String,
    /// Remote status string.
    pub status: String,
    /// When the next charge is due, if scheduled.
    pub next_payment_date: Option<String>,
    /// The plan billed against, if reported.
    pub plan_code: Option<String>,
}

impl From<Subscription> for SubscriptionView {
    fn from(subscription: Subscription) -> Self {
        Self {
            subscription_code: subscription.subscription_code.to_string(),
            email_token: subscription.email_token.to_string(),
            status: subscription.status.to_string(),
            next_payment_date: subscription.next_payment_date.map(|d| d.to_rfc3339()),
            plan_code: subscription.plan.map(|p| p.plan_code.to_string()),
        }
    }
}

/// Subscription lookup response.
///
/// `active` is the display cue: an active subscription means the caller offers
/// "Unsubscribe", an absent or inactive one means "Subscribe".
#[derive(Debug, Serialize)]
pub struct SubscriptionStatusResponse {
    /// Whether the first subscription is active.
    pub active: bool,
    /// The first subscription, if the customer has any.
    pub subscription: Option<SubscriptionView>,
}

/// Fetch the first subscription for a customer's numeric processor id.
///
/// An empty remote listing is a normal response with a null subscription, not an
/// error.
pub async fn customer_subscription(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<Json<SubscriptionStatusResponse>, ApiError> {
    let subscription = state
        .paystack()?
        .first_subscription_for(CustomerId::new(id))
        .await?;

    let active = subscription
        .as_ref()
        .is_some_and(|s| s.status.is_active());

    Ok(Json(SubscriptionStatusResponse {
        active,
        subscription: subscription.map(Into::into),
    }))
}
