//! `RocksDB` record storage for paysub.
//!
//! This crate persists one document per customer, keyed by email. The write is an
//! idempotent upsert with no read-modify-write semantics; the service issues it
//! exactly once, after a successful remote customer creation.
//!
//! # Architecture
//!
//! A single column family is used:
//!
//! - `records`: customer records, keyed by email, CBOR-encoded values
//!
//! # Example
//!
//! ```no_run
//! use paysub_store::{RecordStore, RocksStore};
//! use paysub_core::{CustomerCode, CustomerRecord, NewCustomer};
//!
//! let store = RocksStore::open("/tmp/paysub-db").unwrap();
//!
//! let input = NewCustomer::new("a@b.com", "A", "B", "08011112222").unwrap();
//! let record = CustomerRecord::from_registration(input, CustomerCode::new("CUS_1"));
//! store.put_record(&record).unwrap();
//!
//! let stored = store.get_record("a@b.com").unwrap();
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod keys;
pub mod rocks;
pub mod schema;

pub use error::{Result, StoreError};
pub use rocks::RocksStore;

use paysub_core::CustomerRecord;

/// The storage trait for customer records.
///
/// This trait abstracts the storage layer, allowing for different implementations
/// (e.g. `RocksDB`, in-memory for testing).
pub trait RecordStore: Send + Sync {
    /// Insert or update a customer record, keyed by its email.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    fn put_record(&self, record: &CustomerRecord) -> Result<()>;

    /// Get a customer record by email.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    fn get_record(&self, email: &str) -> Result<Option<CustomerRecord>>;

    /// List all stored customer records, in key order.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    fn list_records(&self) -> Result<Vec<CustomerRecord>>;
}
