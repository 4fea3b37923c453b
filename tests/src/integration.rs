#[cfg(test)]
mod integration_tests {
    use num_bigint::{BigInt, BigUint};
    use num_traits::Zero;
    use proptest::collection::{btree_set, vec};
    use proptest::prelude::*;
    use recon_core::{
        reconstruct_secret, recover_secret, EncodedShare, Point, PointStore,
        ReconstructError,
    };
    use recon_math::error::DecodeError;
    use recon_math::{rat, Rational};
    use serde_json::Value;
    use test_strategy::proptest;

    const WIDE_DOCUMENT: &str = include_str!("../../cli/demos/wide.json");
    const WIDE_SECRET: &str = include_str!("../../cli/demos/wide.secret");

    /// Pull `(index, base, value)` triples out of a share document.
    fn shares_from_document(text: &str) -> (usize, Vec<EncodedShare>) {
        let document: Value = serde_json::from_str(text).expect("valid json");
        let k = document["keys"]["k"].as_u64().expect("keys.k") as usize;
        let shares = document
            .as_object()
            .expect("top-level object")
            .iter()
            .filter_map(|(key, entry)| {
                let index: i64 = key.parse().ok()?;
                let base = entry["base"].as_str()?.parse().ok()?;
                let digits = entry["value"].as_str()?;
                Some(EncodedShare::new(index, base, digits))
            })
            .collect();
        (k, shares)
    }

    fn evaluate(coeffs: &[BigInt], x: i64) -> BigInt {
        coeffs
            .iter()
            .rev()
            .fold(BigInt::zero(), |acc, c| acc * BigInt::from(x) + c)
    }

    #[test]
    fn test_wide_document_recovers_256_bit_secret() {
        let (k, shares) = shares_from_document(WIDE_DOCUMENT);
        assert_eq!(k, 7);
        assert_eq!(shares.len(), 10);

        let expected: BigInt = WIDE_SECRET.trim().parse().unwrap();
        let result = recover_secret(&shares, k).expect("reconstruction succeeds");

        assert_eq!(result.indices(), &[1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(result.integer_secret(), Some(expected));
    }

    #[test]
    fn test_every_window_of_k_shares_agrees() {
        let (k, shares) = shares_from_document(WIDE_DOCUMENT);
        let store: PointStore = shares
            .iter()
            .map(|share| share.decode().expect("decodable"))
            .collect();
        let points: Vec<Point> = store.ordered_subset(store.len()).unwrap();
        let expected: BigInt = WIDE_SECRET.trim().parse().unwrap();

        for window in points.windows(k) {
            let secret = reconstruct_secret(window, k).unwrap();
            assert_eq!(secret.to_integer_if_exact(), Some(expected.clone()));
        }
    }

    #[test]
    fn test_off_polynomial_share_gives_fraction() {
        // y = x^2 + 3 except at x = 4, which should be 19.
        let points = vec![Point::new(1, 4), Point::new(2, 7), Point::new(4, 20)];
        let secret = reconstruct_secret(&points, 3).unwrap();
        assert_eq!(secret, rat!(10 / 3));
        assert_eq!(secret.to_integer_if_exact(), None);
    }

    #[test]
    fn test_duplicate_abscissa_scenario() {
        let points = vec![Point::new(1, 3), Point::new(1, 5), Point::new(2, 7)];
        assert_eq!(
            reconstruct_secret(&points, 2),
            Err(ReconstructError::DuplicateAbscissa(1))
        );
    }

    #[test]
    fn test_insufficient_points_scenario() {
        let shares = vec![
            EncodedShare::new(1, 10, "3"),
            EncodedShare::new(2, 10, "5"),
            EncodedShare::new(3, 10, "7"),
        ];
        assert_eq!(
            recover_secret(&shares, 4),
            Err(ReconstructError::InsufficientPoints {
                required: 4,
                available: 3
            })
        );
    }

    #[test]
    fn test_invalid_digit_scenario() {
        let shares = vec![
            EncodedShare::new(1, 16, "ff"),
            EncodedShare::new(2, 16, "fg"),
        ];
        assert_eq!(
            recover_secret(&shares, 2),
            Err(ReconstructError::Decode {
                index: 2,
                source: DecodeError::InvalidDigit {
                    digit: 'g',
                    position: 1,
                    radix: 16
                }
            })
        );
    }

    #[test]
    fn test_zero_secret_through_pipeline() {
        // y = x / 2 passes through the origin.
        let shares = vec![
            EncodedShare::new(2, 10, "1"),
            EncodedShare::new(4, 10, "2"),
        ];
        let result = recover_secret(&shares, 2).unwrap();
        assert_eq!(result.secret(), &Rational::zero());
        assert_eq!(result.integer_secret(), Some(BigInt::zero()));
    }

    fn wide_coefficient() -> impl Strategy<Value = BigInt> {
        (vec(any::<u32>(), 1..10), any::<bool>()).prop_map(|(limbs, negative)| {
            let magnitude = BigInt::from(BigUint::new(limbs));
            if negative {
                -magnitude
            } else {
                magnitude
            }
        })
    }

    #[proptest(cases = 64)]
    fn recovers_wide_secrets_from_mixed_bases(
        #[strategy(btree_set(1i64..60, 1..=8))] xs: std::collections::BTreeSet<i64>,
        #[strategy(vec(wide_coefficient(), #xs.len()))] coeffs: Vec<BigInt>,
        #[strategy(vec(2u32..=36, #xs.len()))] bases: Vec<u32>,
    ) {
        // Shares are magnitudes, so lift the polynomial until every share is
        // non-negative at every sampled x; the constant term stays the secret.
        let mut coeffs = coeffs;
        let floor = xs
            .iter()
            .map(|&x| evaluate(&coeffs, x))
            .min()
            .unwrap_or_default();
        if floor < BigInt::zero() {
            coeffs[0] -= &floor;
        }

        let shares: Vec<EncodedShare> = xs
            .iter()
            .zip(&bases)
            .map(|(&x, &base)| {
                EncodedShare::new(x, base, evaluate(&coeffs, x).to_str_radix(base))
            })
            .collect();

        let result = recover_secret(&shares, xs.len()).unwrap();
        assert_eq!(result.integer_secret(), Some(coeffs[0].clone()));
    }
}
