use recon_math::rational::Rational;

use crate::error::{ReconstructError, ReconstructResult};
use crate::lagrange::interpolate_at_zero;
use crate::traits::PointSource;

/// Threshold-`k` reconstruction of the constant term.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Interpolator {
    threshold: usize,
}

impl Interpolator {
    /// Create an interpolator for threshold `k`, which must be at least 1.
    pub fn new(k: usize) -> ReconstructResult<Self> {
        if k == 0 {
            return Err(ReconstructError::InvalidK(k));
        }
        Ok(Interpolator { threshold: k })
    }

    #[inline]
    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// Interpolate through the first `k` of `points`, as given.
    ///
    /// The caller chooses the order;
    /// [`PointStore::ordered_subset`](crate::store::PointStore::ordered_subset)
    /// yields the ascending-index selection.
    pub fn reconstruct<S: PointSource>(
        &self,
        points: &[S],
    ) -> ReconstructResult<Rational> {
        let active = self.select_active_points(points)?;
        interpolate_at_zero(active)
    }

    /// Take the first `threshold` points, failing when too few are supplied.
    fn select_active_points<'a, S: PointSource>(
        &self,
        points: &'a [S],
    ) -> ReconstructResult<&'a [S]> {
        if points.len() < self.threshold {
            return Err(ReconstructError::InsufficientPoints {
                required: self.threshold,
                available: points.len(),
            });
        }
        Ok(&points[..self.threshold])
    }
}

/// Reconstruct `P(0)` from the first `k` of `points`.
///
/// ```
/// use recon_core::{reconstruct_secret, Point};
/// use recon_math::rat;
///
/// let points = [Point::new(1, 3), Point::new(2, 5), Point::new(3, 7)];
/// assert_eq!(reconstruct_secret(&points, 2).unwrap(), rat!(1));
/// ```
pub fn reconstruct_secret<S: PointSource>(
    points: &[S],
    k: usize,
) -> ReconstructResult<Rational> {
    Interpolator::new(k)?.reconstruct(points)
}
