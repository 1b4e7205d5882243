//! Client error types.

/// Errors that can occur when calling the payment processor.
///
/// There are exactly three failure modes and no retries: a missing credential is
/// caught before any call, a processor response that signals failure (or has an
/// unexpected shape) carries the processor's message, and network-level failures
/// surface generically.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Network-level failure reaching the processor.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The processor responded but signaled failure or returned an unexpected shape.
    #[error("Paystack API error: {status} - {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Processor-supplied message when available.
        message: String,
        /// Processor-defined error code, if present.
        code: Option<String>,
    },

    /// Missing or empty service credential; no call was attempted.
    #[error("configuration error: {0}")]
    Configuration(String),
}
