//! Subscription creation and cancellation handlers.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use paysub_client::SubscribeOutcome;
use paysub_core::{CustomerCode, EmailToken, SubscriptionCode};

use crate::error::ApiError;
use crate::state::AppState;

/// Subscribe request.
///
/// The customer code must be the processor-issued one from registration or the
/// remote listing; it is never derived locally. The email is needed for the
/// hosted-checkout fallback.
#[derive(Debug, Deserialize)]
pub struct SubscribeRequest {
    /// Processor-issued customer code.
    pub customer_code: String,
    /// Customer email.
    pub email: String,
}

/// Subscribe response: the discriminated outcome of the creation attempt.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SubscribeResponse {
    /// The subscription was created against a stored authorization.
    Created {
        /// Processor-issued subscription code.
        subscription_code: String,
    },
    /// The end user must complete hosted checkout; the subscription stays
    /// pending until they return.
    RedirectRequired {
        /// Hosted checkout URL.
        authorization_url: String,
    },
}

/// Subscribe a customer to the configured plan.
pub async fn subscribe(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SubscribeRequest>,
) -> Result<Json<SubscribeResponse>, ApiError> {
    if body.customer_code.trim().is_empty() {
        return Err(ApiError::BadRequest("customer_code must not be empty".into()));
    }

    let customer = CustomerCode::new(body.customer_code);
    let outcome = state
        .paystack()?
        .create_subscription(&customer, &state.config.plan_code, &body.email)
        .await?;

    let response = match outcome {
        SubscribeOutcome::Created(code) => {
            tracing::info!(customer = %customer, subscription_code = %code, "customer subscribed");
            SubscribeResponse::Created {
                subscription_code: code.to_string(),
            }
        }
        SubscribeOutcome::RedirectRequired { authorization_url } => {
            tracing::info!(customer = %customer, "checkout redirect required");
            SubscribeResponse::RedirectRequired { authorization_url }
        }
    };

    Ok(Json(response))
}

/// Unsubscribe request: the code/token pair from a prior subscription lookup.
#[derive(Debug, Deserialize)]
pub struct DisableSubscriptionRequest {
    /// Processor-issued subscription code.
    pub code: String,
    /// Email token paired with the code.
    pub token: String,
}

/// Unsubscribe response.
#[derive(Debug, Serialize)]
pub struct DisableSubscriptionResponse {
    /// Whether the processor reported the subscription disabled.
    pub disabled: bool,
}

/// Disable a subscription.
///
/// Without the email token cancellation cannot be attempted; an explicit
/// unsuccessful answer from the processor is reported as `disabled: false`, not
/// an error.
pub async fn disable_subscription(
    State(state): State<Arc<AppState>>,
    Json(body): Json<DisableSubscriptionRequest>,
) -> Result<Json<DisableSubscriptionResponse>, ApiError> {
    if body.code.trim().is_empty() {
        return Err(ApiError::BadRequest("code must not be empty".into()));
    }
    if body.token.trim().is_empty() {
        return Err(ApiError::BadRequest("token must not be empty".into()));
    }

    let disabled = state
        .paystack()?
        .disable_subscription(
            &SubscriptionCode::new(body.code),
            &EmailToken::new(body.token),
        )
        .await?;

    Ok(Json(DisableSubscriptionResponse { disabled }))
}
