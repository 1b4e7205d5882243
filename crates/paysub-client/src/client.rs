//! Paystack HTTP client implementation.

use reqwest::{Client, StatusCode};
use std::time::Duration;

use paysub_core::{CustomerCode, CustomerId, EmailToken, NewCustomer, PlanCode, SubscriptionCode};

use crate::error::ClientError;
use crate::types::{
    CreateCustomerRequest, CreateSubscriptionRequest, CreatedCustomer, CreatedSubscription,
    DisableSubscriptionRequest, Envelope, InitializeTransactionRequest, InitializedTransaction,
    RemoteCustomer, Subscription,
};

/// Paystack API base URL.
const BASE_URL: &str = "https://api.paystack.co";

/// Request timeout in seconds.
const TIMEOUT_SECONDS: u64 = 30;

/// Rejection code meaning the customer has no stored payment authorization.
///
/// Together with a present `meta.nextStep` hint this triggers the hosted-checkout
/// fallback during subscription creation.
const NO_ACTIVE_AUTHORIZATIONS: &str = "no_active_authorizations_for_customer";

/// Outcome of a subscription creation attempt.
///
/// The processor dictates a two-phase protocol: a direct attempt against the
/// customer's stored payment authorization, and a one-shot hosted-checkout fallback
/// when no such authorization exists. Presenting the redirect is the caller's
/// responsibility; the subscription stays pending until the end user completes
/// checkout out-of-band.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubscribeOutcome {
    /// The processor charged the stored authorization and issued a subscription.
    Created(SubscriptionCode),
    /// No stored authorization: the end user must complete hosted checkout.
    RedirectRequired {
        /// Hosted checkout URL to send the end user to.
        authorization_url: String,
    },
}

/// Paystack API client.
///
/// A stateless wrapper around the processor's REST endpoints. Each operation is a
/// single attempt mapping to one remote call (subscription creation may make the
/// fixed fallback call); failures propagate to the caller, which decides whether
/// to retry.
#[derive(Debug, Clone)]
pub struct PaystackClient {
    client: Client,
    base_url: String,
    secret_key: String,
}

impl PaystackClient {
    /// Create a client against the fixed Paystack base URL.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Configuration` if the secret key is empty.
    pub fn new(secret_key: impl Into<String>) -> Result<Self, ClientError> {
        Self::with_base_url(BASE_URL, secret_key)
    }

    /// Create a client against a custom base URL (used by tests).
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Configuration` if the secret key is empty, or
    /// `ClientError::Http` if the underlying HTTP client cannot be built.
    pub fn with_base_url(
        base_url: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Result<Self, ClientError> {
        let secret_key = secret_key.into();
        if secret_key.trim().is_empty() {
            return Err(ClientError::Configuration(
                "Paystack secret key is not set".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(TIMEOUT_SECONDS))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            secret_key,
        })
    }

    /// Create a customer and return the processor-issued customer code.
    ///
    /// Issues exactly one creation request. A success response that lacks the
    /// customer code is an error, never a silent empty code.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Api` if the processor rejects the request or the
    /// response is missing the code, `ClientError::Http` on network failure.
    pub async fn create_customer(&self, input: &NewCustomer) -> Result<CustomerCode, ClientError> {
        let url = format!("{}/customer", self.base_url);
        let request = CreateCustomerRequest {
            email: &input.email,
            first_name: &input.first_name,
            last_name: &input.last_name,
            phone: &input.phone,
        };

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.secret_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        let created: CreatedCustomer = Self::handle_response(response).await?;

        tracing::debug!(customer_code = %created.customer_code, "customer created");
        Ok(created.customer_code)
    }

    /// List customers as the processor sees them.
    ///
    /// Returns whatever the first page of the remote listing yields; pagination is
    /// not followed.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Api` if the processor rejects the request,
    /// `ClientError::Http` on network failure.
    pub async fn list_customers(&self) -> Result<Vec<RemoteCustomer>, ClientError> {
        let url = format!("{}/customer", self.base_url);

        let response = self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.secret_key))
            .send()
            .await?;

        Self::handle_response(response).await
    }

    /// Subscribe a customer to a plan.
    ///
    /// Attempts direct creation against the customer's stored payment
    /// authorization. If the processor rejects with
    /// `no_active_authorizations_for_customer` and a `meta.nextStep` hint, falls
    /// back to initializing a zero-amount transaction for the plan and returns the
    /// hosted checkout URL. The fallback is one-shot; any other rejection is an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Api` for any other rejection, `ClientError::Http` on
    /// network failure.
    pub async fn create_subscription(
        &self,
        customer: &CustomerCode,
        plan: &PlanCode,
        email: &str,
    ) -> Result<SubscribeOutcome, ClientError> {
        let url = format!("{}/subscription", self.base_url);
        let request = CreateSubscriptionRequest {
            customer: customer.as_str(),
            plan: plan.as_str(),
        };

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.secret_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        let (status, envelope) = Self::read_envelope(response).await?;

        if status.is_success() && envelope.status {
            let created: CreatedSubscription = Self::expect_data(status, envelope)?;
            tracing::debug!(subscription_code = %created.subscription_code, "subscription created");
            return Ok(SubscribeOutcome::Created(created.subscription_code));
        }

        let needs_checkout = envelope.code.as_deref() == Some(NO_ACTIVE_AUTHORIZATIONS)
            && envelope.meta.as_ref().is_some_and(|m| m.next_step.is_some());

        if needs_checkout {
            tracing::debug!(customer = %customer, "no stored authorization, initializing checkout");
            let init = self.initialize_transaction(email, plan).await?;
            return Ok(SubscribeOutcome::RedirectRequired {
                authorization_url: init.authorization_url,
            });
        }

        Err(Self::rejection(status, envelope))
    }

    /// Fetch the first subscription for a customer, by the processor's numeric id.
    ///
    /// "First" is whatever the remote listing returns first; no additional sort is
    /// imposed. An empty listing yields `Ok(None)`, not an error.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Api` if the processor rejects the request,
    /// `ClientError::Http` on network failure.
    pub async fn first_subscription_for(
        &self,
        customer_id: CustomerId,
    ) -> Result<Option<Subscription>, ClientError> {
        let url = format!("{}/subscription?customer={customer_id}", self.base_url);

        let response = self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.secret_key))
            .send()
            .await?;

        let subscriptions: Vec<Subscription> = Self::handle_response(response).await?;
        Ok(subscriptions.into_iter().next())
    }

    /// Disable a subscription.
    ///
    /// Both the subscription code and the email token from a prior lookup are
    /// required; cancellation cannot be attempted without the token. Returns `true`
    /// only when the processor reports success, `false` for an explicit
    /// unsuccessful response. An unsuccessful `false` deliberately does not
    /// distinguish "already cancelled" from "wrong token"; the processor's contract
    /// does not either.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Http` on network failure, `ClientError::Api` only if
    /// the response body is not the processor's envelope.
    pub async fn disable_subscription(
        &self,
        code: &SubscriptionCode,
        token: &EmailToken,
    ) -> Result<bool, ClientError> {
        let url = format!("{}/subscription/disable", self.base_url);
        let request = DisableSubscriptionRequest {
            code: code.as_str(),
            token: token.as_str(),
        };

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.secret_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        let (status, envelope) = Self::read_envelope(response).await?;
        let disabled = status.is_success() && envelope.status;

        if !disabled {
            tracing::warn!(
                code = %code,
                message = %envelope.message,
                "subscription disable rejected"
            );
        }

        Ok(disabled)
    }

    /// Initialize a zero-amount transaction tied to a plan.
    ///
    /// The checkout fallback of [`Self::create_subscription`]: the zero amount
    /// makes the plan's predefined amount apply.
    async fn initialize_transaction(
        &self,
        email: &str,
        plan: &PlanCode,
    ) -> Result<InitializedTransaction, ClientError> {
        let url = format!("{}/transaction/initialize", self.base_url);
        let request = InitializeTransactionRequest {
            email,
            plan: plan.as_str(),
            amount: 0,
        };

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.secret_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        Self::handle_response(response).await
    }

    /// Read the response body as the processor's envelope.
    ///
    /// Network failures surface as `Http`; a body that is not the envelope is an
    /// `Api` error carrying the HTTP status.
    async fn read_envelope(
        response: reqwest::Response,
    ) -> Result<(StatusCode, Envelope), ClientError> {
        let status = response.status();
        let body = response.bytes().await?;

        match serde_json::from_slice::<Envelope>(&body) {
            Ok(envelope) => Ok((status, envelope)),
            Err(_) => Err(ClientError::Api {
                status: status.as_u16(),
                message: format!("HTTP {status}"),
                code: None,
            }),
        }
    }

    /// Handle an API response, expecting a payload of type `T` on success.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let (status, envelope) = Self::read_envelope(response).await?;

        if status.is_success() && envelope.status {
            return Self::expect_data(status, envelope);
        }

        Err(Self::rejection(status, envelope))
    }

    /// Extract and parse the envelope's `data` payload.
    ///
    /// A success envelope with missing or misshapen data is an `Api` error; the
    /// payload is never trusted to optional-chain through.
    fn expect_data<T: serde::de::DeserializeOwned>(
        status: StatusCode,
        envelope: Envelope,
    ) -> Result<T, ClientError> {
        let code = envelope.code;
        let Some(data) = envelope.data else {
            return Err(ClientError::Api {
                status: status.as_u16(),
                message: "response is missing the data payload".to_string(),
                code,
            });
        };

        serde_json::from_value(data).map_err(|e| {
            tracing::warn!(error = %e, "unexpected response payload shape");
            ClientError::Api {
                status: status.as_u16(),
                message: "response data had an unexpected shape".to_string(),
                code,
            }
        })
    }

    /// Build the rejection error for a non-success envelope.
    fn rejection(status: StatusCode, envelope: Envelope) -> ClientError {
        let message = if envelope.message.is_empty() {
            format!("HTTP {status}")
        } else {
            envelope.message
        };

        ClientError::Api {
            status: status.as_u16(),
            message,
            code: envelope.code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_creation() {
        let client = PaystackClient::new("sk_test_key").unwrap();
        assert_eq!(client.base_url, "https://api.paystack.co");
    }

    #[test]
    fn client_trims_trailing_slash() {
        let client = PaystackClient::with_base_url("http://localhost:8080/", "sk_test_key").unwrap();
        assert_eq!(client.base_url, "http://localhost:8080");
    }

    #[test]
    fn empty_secret_key_is_a_configuration_error() {
        let result = PaystackClient::new("");
        assert!(matches!(result, Err(ClientError::Configuration(_))));

        let result = PaystackClient::new("   ");
        assert!(matches!(result, Err(ClientError::Configuration(_))));
    }
}
