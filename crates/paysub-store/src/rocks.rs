//! `RocksDB` storage implementation.
//!
//! This module provides the `RocksStore` implementation of the `RecordStore` trait.

use std::path::Path;
use std::sync::Arc;

use rocksdb::{
    BoundColumnFamily, ColumnFamilyDescriptor, DBWithThreadMode, IteratorMode, MultiThreaded,
    Options,
};

use paysub_core::CustomerRecord;

use crate::error::{Result, StoreError};
use crate::keys;
use crate::schema::{all_column_families, cf};
use crate::RecordStore;

/// RocksDB-backed storage implementation.
pub struct RocksStore {
    db: Arc<DBWithThreadMode<MultiThreaded>>,
}

impl RocksStore {
    /// Open or create a `RocksDB` database at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or created.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let cf_descriptors: Vec<_> = all_column_families()
            .into_iter()
            .map(|name| ColumnFamilyDescriptor::new(name, Options::default()))
            .collect();

        let db = DBWithThreadMode::open_cf_descriptors(&opts, path, cf_descriptors)
            .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(Self { db: Arc::new(db) })
    }

    /// Get a column family handle.
    fn cf(&self, name: &str) -> Result<Arc<BoundColumnFamily<'_>>> {
        self.db
            .cf_handle(name)
            .ok_or_else(|| StoreError::Database(format!("column family not found: {name}")))
    }

    /// Serialize a value using CBOR.
    fn serialize<T: serde::Serialize>(value: &T) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        ciborium::into_writer(value, &mut buf)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        Ok(buf)
    }

    /// Deserialize a value from CBOR.
    fn deserialize<T: serde::de::DeserializeOwned>(data: &[u8]) -> Result<T> {
        ciborium::from_reader(data).map_err(|e| StoreError::Serialization(e.to_string()))
    }
}

impl RecordStore for RocksStore {
    fn put_record(&self, record: &CustomerRecord) -> Result<()> {
        let cf = self.cf(cf::RECORDS)?;
        let key = keys::record_key(&record.email);
        let value = Self::serialize(record)?;

        self.db
            .put_cf(&cf, key, value)
            .map_err(|e| StoreError::Database(e.to_string()))?;

        tracing::debug!(email = %record.email, "customer record stored");
        Ok(())
    }

    fn get_record(&self, email: &str) -> Result<Option<CustomerRecord>> {
        let cf = self.cf(cf::RECORDS)?;
        let key = keys::record_key(email);

        self.db
            .get_cf(&cf, key)
            .map_err(|e| StoreError::Database(e.to_string()))?
            .map(|data| Self::deserialize(&data))
            .transpose()
    }

    fn list_records(&self) -> Result<Vec<CustomerRecord>> {
        let cf = self.cf(cf::RECORDS)?;

        let mut records = Vec::new();
        for item in self.db.iterator_cf(&cf, IteratorMode::Start) {
            let (_, value) = item.map_err(|e| StoreError::Database(e.to_string()))?;
            records.push(Self::deserialize(&value)?);
        }

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paysub_core::{CustomerCode, NewCustomer};
    use tempfile::TempDir;

    fn create_test_store() -> (RocksStore, TempDir) {
        let dir = TempDir::new().unwrap();
        let store = RocksStore::open(dir.path()).unwrap();
        (store, dir)
    }

    fn record(email: &str, code: &str) -> CustomerRecord {
        let input = NewCustomer::new(email, "A", "B", "08011112222").unwrap();
        CustomerRecord::from_registration(input, CustomerCode::new(code))
    }

    #[test]
    fn put_and_get_round_trip() {
        let (store, _dir) = create_test_store();
        let record = record("a@b.com", "CUS_1");

        store.put_record(&record).unwrap();

        let stored = store.get_record("a@b.com").unwrap().unwrap();
        assert_eq!(stored, record);
        assert!(!stored.subscribed);
        assert_eq!(stored.customer_code, CustomerCode::new("CUS_1"));
    }

    #[test]
    fn get_missing_record_is_none() {
        let (store, _dir) = create_test_store();
        assert!(store.get_record("nobody@example.com").unwrap().is_none());
    }

    #[test]
    fn put_is_an_upsert_keyed_by_email() {
        let (store, _dir) = create_test_store();

        store.put_record(&record("a@b.com", "CUS_1")).unwrap();
        store.put_record(&record("a@b.com", "CUS_2")).unwrap();

        let records = store.list_records().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].customer_code, CustomerCode::new("CUS_2"));
    }

    #[test]
    fn list_returns_all_records() {
        let (store, _dir) = create_test_store();

        store.put_record(&record("a@b.com", "CUS_1")).unwrap();
        store.put_record(&record("c@d.com", "CUS_2")).unwrap();

        let records = store.list_records().unwrap();
        assert_eq!(records.len(), 2);

        let emails: Vec<_> = records.iter().map(|r| r.email.as_str()).collect();
        assert!(emails.contains(&"a@b.com"));
        assert!(emails.contains(&"c@d.com"));
    }
}
