//! Floating-point cross-check of the exact reconstruction.
//!
//! Solves the Vandermonde system `V · c = y` by Gaussian elimination with
//! partial pivoting in `f64` and reads off `c_0`. The answer is only
//! trustworthy while every ordinate and power of an abscissa fits in a
//! double's 53-bit mantissa; beyond that it rounds or overflows. It exists to
//! be compared against [`crate::lagrange::interpolate_at_zero`], never to
//! replace it.

use std::collections::BTreeSet;

use num_traits::ToPrimitive;
use recon_math::rational::Rational;

use crate::error::{ReconstructError, ReconstructResult};
use crate::traits::PointSource;

const PIVOT_EPSILON: f64 = 1e-15;

/// Relative tolerance used by the command line cross-check.
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

/// Approximate `P(0)` through every supplied point.
pub fn approximate_secret<S: PointSource>(points: &[S]) -> ReconstructResult<f64> {
    if points.is_empty() {
        return Err(ReconstructError::InvalidK(0));
    }

    let mut seen = BTreeSet::new();
    if let Some(point) = points.iter().find(|p| !seen.insert(p.abscissa())) {
        return Err(ReconstructError::DuplicateAbscissa(point.abscissa()));
    }

    let k = points.len();
    let mut matrix: Vec<Vec<f64>> = points
        .iter()
        .map(|point| {
            let x = point.abscissa() as f64;
            (0..k).map(|power| x.powi(power as i32)).collect()
        })
        .collect();
    let mut values: Vec<f64> = points
        .iter()
        .map(|point| point.ordinate().to_f64().unwrap_or(f64::NAN))
        .collect();

    let coefficients = gaussian_solve(&mut matrix, &mut values)?;
    Ok(coefficients[0])
}

/// Solve `a · x = b` in place; `a` is square with `b.len()` rows.
fn gaussian_solve(
    a: &mut [Vec<f64>],
    b: &mut [f64],
) -> ReconstructResult<Vec<f64>> {
    let n = b.len();

    for col in 0..n {
        let pivot = (col..n)
            .max_by(|&r, &s| a[r][col].abs().total_cmp(&a[s][col].abs()))
            .unwrap_or(col);
        // Written negated so that NaN pivots are rejected too.
        if !(a[pivot][col].abs() >= PIVOT_EPSILON) {
            return Err(ReconstructError::SingularSystem);
        }
        a.swap(col, pivot);
        b.swap(col, pivot);

        let (upper, lower) = a.split_at_mut(col + 1);
        let pivot_row = &upper[col];
        for (offset, row) in lower.iter_mut().enumerate() {
            let factor = row[col] / pivot_row[col];
            for c in col..n {
                row[c] -= factor * pivot_row[c];
            }
            b[col + 1 + offset] -= factor * b[col];
        }
    }

    let mut x = vec![0.0; n];
    for i in (0..n).rev() {
        let tail: f64 = (i + 1..n).map(|j| a[i][j] * x[j]).sum();
        x[i] = (b[i] - tail) / a[i][i];
    }
    Ok(x)
}

/// Side-by-side view of the exact secret and its floating-point estimate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CrossCheck {
    pub exact: f64,
    pub approximate: f64,
    pub agrees: bool,
}

impl CrossCheck {
    /// Compare within a relative `tolerance` (absolute below magnitude one).
    pub fn compare(exact: &Rational, approximate: f64, tolerance: f64) -> Self {
        let exact = exact.approximate();
        let scale = exact.abs().max(1.0);
        let agrees = exact.is_finite()
            && approximate.is_finite()
            && (approximate - exact).abs() / scale <= tolerance;
        CrossCheck {
            exact,
            approximate,
            agrees,
        }
    }
}
