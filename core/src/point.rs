use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

use crate::traits::PointSource;

/// One sample `(x = index, y = value)` of the hidden polynomial.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    index: i64,
    value: BigInt,
}

impl Point {
    pub fn new(index: i64, value: impl Into<BigInt>) -> Self {
        Point {
            index,
            value: value.into(),
        }
    }

    #[inline]
    pub fn index(&self) -> i64 {
        self.index
    }

    #[inline]
    pub fn value(&self) -> &BigInt {
        &self.value
    }

    pub fn into_parts(self) -> (i64, BigInt) {
        (self.index, self.value)
    }
}

impl From<(i64, BigInt)> for Point {
    fn from((index, value): (i64, BigInt)) -> Self {
        Point::new(index, value)
    }
}

impl PointSource for Point {
    fn abscissa(&self) -> i64 {
        self.index
    }

    fn ordinate(&self) -> &BigInt {
        &self.value
    }
}
