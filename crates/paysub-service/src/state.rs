//! Application state.

use std::sync::Arc;

use paysub_client::PaystackClient;
use paysub_store::RocksStore;

use crate::config::ServiceConfig;
use crate::error::ApiError;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// The storage backend.
    pub store: Arc<RocksStore>,

    /// Service configuration.
    pub config: ServiceConfig,

    /// Paystack client (absent when no credential is configured).
    pub paystack: Option<Arc<PaystackClient>>,
}

impl AppState {
    /// Create a new application state.
    ///
    /// The Paystack client is constructed only when a credential is configured;
    /// otherwise every processor-backed endpoint answers with a configuration
    /// error without attempting a call.
    #[must_use]
    pub fn new(store: Arc<RocksStore>, config: ServiceConfig) -> Self {
        let paystack = config.paystack_secret_key.as_ref().and_then(|key| {
            match PaystackClient::with_base_url(&config.paystack_api_url, key) {
                Ok(client) => {
                    tracing::info!(api_url = %config.paystack_api_url, "Paystack integration enabled");
                    Some(Arc::new(client))
                }
                Err(e) => {
                    tracing::error!(error = %e, "Failed to create Paystack client");
                    None
                }
            }
        });

        if paystack.is_none() {
            tracing::warn!("Paystack not configured - processor operations will be rejected");
        }

        Self {
            store,
            config,
            paystack,
        }
    }

    /// The Paystack client, or the configuration error when absent.
    pub fn paystack(&self) -> Result<&PaystackClient, ApiError> {
        self.paystack
            .as_deref()
            .ok_or(ApiError::NotConfigured)
    }
}
