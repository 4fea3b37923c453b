mod integration;

#[cfg(test)]
mod tests {
    use num_bigint::BigInt;
    use recon_core::{recover_secret, EncodedShare};

    #[test]
    fn test_complete_workflow() {
        // y = x^2 + 3, shares written in mixed bases
        let shares = vec![
            EncodedShare::new(1, 10, "4"),
            EncodedShare::new(2, 2, "111"),
            EncodedShare::new(3, 10, "12"),
            EncodedShare::new(6, 4, "213"),
        ];
        let threshold = 3;

        let result = recover_secret(&shares, threshold)
            .expect("reconstruction succeeds");

        assert_eq!(result.indices(), &[1, 2, 3]);
        assert!(result.is_integral());
        assert_eq!(result.integer_secret(), Some(BigInt::from(3)));
    }
}
