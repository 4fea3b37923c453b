use recon_math::radix::decode_base_value;
use serde::{Deserialize, Serialize};

use crate::error::{ReconstructError, ReconstructResult};
use crate::point::Point;

/// A share as it arrives from the document layer: index, declared base and
/// the still-encoded digit string.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedShare {
    pub index: i64,
    pub base: u32,
    pub digits: String,
}

impl EncodedShare {
    pub fn new(index: i64, base: u32, digits: impl Into<String>) -> Self {
        EncodedShare {
            index,
            base,
            digits: digits.into(),
        }
    }

    /// Decode the digit string into a [`Point`], tagging failures with the index.
    pub fn decode(&self) -> ReconstructResult<Point> {
        let value = decode_base_value(&self.digits, self.base)
            .map_err(|source| ReconstructError::decode(self.index, source))?;
        Ok(Point::new(self.index, value))
    }
}
