//! Key encoding utilities for `RocksDB`.
//!
//! Records are keyed by the customer's email verbatim; the processor treats the
//! email as the unique identifier and so does the store.

/// Create a record key from a customer email.
#[must_use]
pub fn record_key(email: &str) -> Vec<u8> {
    email.as_bytes().to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_key_is_the_email_bytes() {
        let key = record_key("a@b.com");
        assert_eq!(key, b"a@b.com");
    }
}
