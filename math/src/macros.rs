//! Shared macros for constructing exact values in tests and examples.

/// Simplifies constructing [`Rational`](crate::rational::Rational)s from
/// integer literals.
///
/// `rat!(n)` is the integer `n`; `rat!(n / d)` is the reduced fraction.
///
/// # Panics
///
/// `rat!(n / 0)` panics, like integer division by a zero literal.
///
/// ```
/// use recon_math::prelude::*;
///
/// assert_eq!(rat!(6 / 8), Rational::new(3.into(), 4.into()).unwrap());
/// assert_eq!(rat!(-2), Rational::of_integer(-2));
/// ```
#[macro_export]
macro_rules! rat {
    ($numer:literal / $denom:literal) => {
        $crate::rational::Rational::new(
            $crate::BigInt::from($numer),
            $crate::BigInt::from($denom),
        )
        .expect("rat!: zero denominator")
    };
    ($value:expr) => {
        $crate::rational::Rational::of_integer($value)
    };
}

/// Create a [`Vec`] of integral [`Rational`](crate::rational::Rational)s.
///
/// ```
/// use recon_math::prelude::*;
///
/// assert_eq!(rat_vec![1, 2], vec![rat!(1), rat!(2)]);
/// ```
#[macro_export]
macro_rules! rat_vec {
    ($($value:expr),* $(,)?) => {
        vec![$($crate::rational::Rational::of_integer($value)),*]
    };
}
