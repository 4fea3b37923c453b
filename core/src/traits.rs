use num_bigint::BigInt;

/// Abstract source of an interpolation point `(x, y)`.
///
/// The interpolator only needs the abscissa and a borrowed ordinate, so
/// anything carrying both can be reconstructed from without conversion.
pub trait PointSource {
    /// The x-coordinate (share index) of this point.
    fn abscissa(&self) -> i64;

    /// The y-coordinate (share value) of this point.
    fn ordinate(&self) -> &BigInt;
}

impl PointSource for (i64, BigInt) {
    fn abscissa(&self) -> i64 {
        self.0
    }

    fn ordinate(&self) -> &BigInt {
        &self.1
    }
}

impl<T: PointSource + ?Sized> PointSource for &T {
    fn abscissa(&self) -> i64 {
        (**self).abscissa()
    }

    fn ordinate(&self) -> &BigInt {
        (**self).ordinate()
    }
}
