//! Exact Lagrange interpolation evaluated at `x = 0`.
//!
//! For distinct abscissas `x_0..x_{k-1}` the constant term of the unique
//! polynomial of degree `< k` through the points is
//!
//! ```text
//! P(0) = Σ_i y_i · λ_i,    λ_i = Π_{j ≠ i} (-x_j) / (x_i - x_j)
//! ```
//!
//! Every weight and partial product is a [`Rational`], so the result is exact
//! for ordinates of any size.

use num_bigint::BigInt;
use num_traits::{One, Zero};
use recon_math::rational::Rational;

use crate::error::{ReconstructError, ReconstructResult};
use crate::traits::PointSource;

/// Lagrange weights `λ_i` for evaluating at zero over the abscissas `xs`.
///
/// The weights sum to one. Fails with [`ReconstructError::InvalidK`] for an
/// empty slice and [`ReconstructError::DuplicateAbscissa`] when two
/// abscissas coincide.
pub fn lagrange_coefficients(xs: &[i64]) -> ReconstructResult<Vec<Rational>> {
    if xs.is_empty() {
        return Err(ReconstructError::InvalidK(0));
    }

    xs.iter()
        .enumerate()
        .map(|(i, &xi)| {
            xs.iter().enumerate().filter(|&(j, _)| j != i).try_fold(
                Rational::one(),
                |weight, (_, &xj)| -> ReconstructResult<Rational> {
                    let gap = BigInt::from(xi) - BigInt::from(xj);
                    if gap.is_zero() {
                        return Err(ReconstructError::DuplicateAbscissa(xi));
                    }
                    let factor = Rational::new(-BigInt::from(xj), gap)?;
                    Ok(weight.multiply(&factor))
                },
            )
        })
        .collect()
}

/// Interpolate through every supplied point and return `P(0)`.
pub fn interpolate_at_zero<S: PointSource>(
    points: &[S],
) -> ReconstructResult<Rational> {
    let xs: Vec<i64> = points.iter().map(PointSource::abscissa).collect();
    let weights = lagrange_coefficients(&xs)?;

    Ok(points.iter().zip(&weights).fold(
        Rational::zero(),
        |secret, (point, weight)| {
            let y = Rational::of_integer(point.ordinate().clone());
            secret + weight.multiply(&y)
        },
    ))
}
