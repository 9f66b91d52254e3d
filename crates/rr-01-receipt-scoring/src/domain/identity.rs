//! Content-addressed receipt identifiers.
//!
//! `id = hex(sha256(compact_json(receipt)))`. Identity is syntactic: two
//! receipts share an ID only if every field string and the item order match.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

use crate::domain::receipt::Receipt;
use crate::error::ReceiptError;

/// Length of a hex-encoded SHA-256 digest.
pub const RECEIPT_ID_LEN: usize = 64;

/// Lowercase hex SHA-256 digest of a receipt.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReceiptId(String);

impl ReceiptId {
    /// Accept a client-supplied ID only if it has the digest shape.
    pub fn parse(value: &str) -> Option<Self> {
        let well_formed = value.len() == RECEIPT_ID_LEN
            && value
                .bytes()
                .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b));
        well_formed.then(|| Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn from_digest(digest: &[u8]) -> Self {
        Self(hex::encode(digest))
    }
}

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ReceiptId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Derive the ID of a receipt from its serialized content.
pub fn identify(receipt: &Receipt) -> Result<ReceiptId, ReceiptError> {
    let bytes =
        serde_json::to_vec(receipt).map_err(|e| ReceiptError::Serialization(e.to_string()))?;

    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    Ok(ReceiptId::from_digest(&hasher.finalize()))
}
