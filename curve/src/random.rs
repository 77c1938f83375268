use rand::TryRngCore;

use crate::uint::U256;

/// Uniform draw from `[1, bound)`. Zero draws are discarded and redrawn;
/// a failing random source ends the loop with its error.
pub fn random_nonzero_below<R: TryRngCore + ?Sized>(
    rng: &mut R,
    bound: &U256,
) -> Result<U256, R::Error> {
    loop {
        let candidate = U256::random_below(rng, bound)?;
        if !candidate.is_zero() {
            return Ok(candidate);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ScalarField;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_nonzero_draws_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(1);
        let bound = U256::from_u64(2);
        // The only admissible value below 2 is 1.
        for _ in 0..50 {
            assert_eq!(random_nonzero_below(&mut rng, &bound).unwrap(), U256::ONE);
        }
    }

    #[test]
    fn test_scalar_draws_are_distinct_and_below_order() {
        let mut rng = StdRng::seed_from_u64(2);
        let n = ScalarField::modulus();
        let a = random_nonzero_below(&mut rng, &n).unwrap();
        let b = random_nonzero_below(&mut rng, &n).unwrap();
        assert_ne!(a, b);
        assert!(a < n && b < n);
    }
}
