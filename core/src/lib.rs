//! Reconstruction of a Shamir-style secret from `k` integer shares.
//!
//! Shares are decoded from their declared base into [`Point`]s, collected in
//! a [`PointStore`], and the constant term of the interpolating polynomial is
//! computed exactly with [`Rational`](recon_math::Rational) arithmetic.

#[cfg(feature = "approx")]
pub mod approx;
pub mod error;
pub mod interpolator;
pub mod lagrange;
pub mod point;
pub mod reconstruct;
pub mod share;
pub mod store;
pub mod traits;

pub use error::{ReconstructError, ReconstructResult};
pub use interpolator::{reconstruct_secret, Interpolator};
pub use lagrange::{interpolate_at_zero, lagrange_coefficients};
pub use point::Point;
pub use reconstruct::{recover_secret, Reconstruction};
pub use share::EncodedShare;
pub use store::PointStore;
pub use traits::PointSource;
