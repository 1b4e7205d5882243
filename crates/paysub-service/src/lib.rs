//! Paysub HTTP API Service.
//!
//! This crate provides the HTTP API tying the Paystack client and the record
//! store together, including:
//!
//! - Customer registration (remote creation followed by the local record write)
//! - Remote customer listing
//! - Subscription lookup, creation, and cancellation
//!
//! Each request runs one strictly sequential chain of remote calls; nothing is
//! retried, parallelized, or cancellable mid-chain.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Allow some pedantic lints that are noisy for Axum handler functions
#![allow(clippy::missing_errors_doc)] // Axum handlers all return Result

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use config::ServiceConfig;
pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
