use std::fmt;

use num_bigint::BigInt;
use recon_math::rational::Rational;
use serde::Serialize;

use crate::error::ReconstructResult;
use crate::interpolator::Interpolator;
use crate::point::Point;
use crate::share::EncodedShare;
use crate::store::PointStore;

/// The reconstructed secret together with the share indices that produced it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Reconstruction {
    secret: Rational,
    indices: Vec<i64>,
}

impl Reconstruction {
    /// Interpolate through the `k` smallest indices held by `store`.
    pub fn from_store(store: &PointStore, k: usize) -> ReconstructResult<Self> {
        let interpolator = Interpolator::new(k)?;
        let subset = store.ordered_subset(interpolator.threshold())?;
        let secret = interpolator.reconstruct(&subset)?;

        Ok(Reconstruction {
            secret,
            indices: subset.iter().map(Point::index).collect(),
        })
    }

    #[inline]
    pub fn secret(&self) -> &Rational {
        &self.secret
    }

    pub fn into_secret(self) -> Rational {
        self.secret
    }

    /// Indices of the shares used, ascending.
    #[inline]
    pub fn indices(&self) -> &[i64] {
        &self.indices
    }

    /// Whether the secret is an integer (denominator one).
    ///
    /// A fractional secret means the selected shares do not lie on an
    /// integer polynomial of degree `k - 1`.
    #[inline]
    pub fn is_integral(&self) -> bool {
        self.secret.is_integral()
    }

    pub fn integer_secret(&self) -> Option<BigInt> {
        self.secret.to_integer_if_exact()
    }
}

impl fmt::Display for Reconstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.secret)
    }
}

/// Decode every share, keep the last value seen per index, and reconstruct
/// from the `k` smallest indices.
pub fn recover_secret(
    shares: &[EncodedShare],
    k: usize,
) -> ReconstructResult<Reconstruction> {
    Interpolator::new(k)?;
    let store = shares
        .iter()
        .map(EncodedShare::decode)
        .collect::<ReconstructResult<PointStore>>()?;
    Reconstruction::from_store(&store, k)
}
