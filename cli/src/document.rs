//! The JSON share document: a `keys` header plus one object per share,
//! keyed by the share index.

use std::collections::BTreeMap;

use recon_core::EncodedShare;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Keys {
    /// Number of shares the document claims to hold.
    pub n: usize,
    /// Threshold: shares needed to reconstruct.
    pub k: usize,
}

#[derive(Debug, Deserialize)]
pub struct ShareDocument {
    pub keys: Keys,
    #[serde(flatten)]
    entries: BTreeMap<String, Value>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum BaseField {
    Number(u32),
    Text(String),
}

#[derive(Debug, Deserialize)]
struct RawShare {
    base: BaseField,
    value: String,
}

/// An entry that was left out of the share list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Skipped {
    #[error("ignoring key {0:?}: not a share index")]
    NotAnIndex(String),
    #[error("skipping share {key}: {reason}")]
    Malformed { key: String, reason: String },
    #[error("skipping share {key}: base {base:?} is not a number")]
    UnparsableBase { key: String, base: String },
}

impl ShareDocument {
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// Extract every well-formed share, reporting the entries left out.
    ///
    /// Shares come back in ascending index order. Decoding the digit strings
    /// is left to the caller.
    pub fn shares(&self) -> (Vec<EncodedShare>, Vec<Skipped>) {
        let mut shares = Vec::with_capacity(self.entries.len());
        let mut skipped = Vec::new();

        for (key, value) in &self.entries {
            match Self::share_from_entry(key, value) {
                Ok(share) => shares.push(share),
                Err(reason) => skipped.push(reason),
            }
        }

        shares.sort_by_key(|share| share.index);
        (shares, skipped)
    }

    fn share_from_entry(key: &str, value: &Value) -> Result<EncodedShare, Skipped> {
        let index: i64 = key
            .trim()
            .parse()
            .map_err(|_| Skipped::NotAnIndex(key.to_owned()))?;

        let raw = RawShare::deserialize(value).map_err(|err| Skipped::Malformed {
            key: key.to_owned(),
            reason: err.to_string(),
        })?;

        let base = match raw.base {
            BaseField::Number(base) => base,
            BaseField::Text(text) => {
                text.trim().parse().map_err(|_| Skipped::UnparsableBase {
                    key: key.to_owned(),
                    base: text.clone(),
                })?
            }
        };

        Ok(EncodedShare::new(index, base, raw.value))
    }
}
