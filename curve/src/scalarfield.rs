//! Scalar field of secp256k1, n = 0xfffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141.
//!
//! Signature arithmetic (nonce inversion, `s = (e + d*r) / k`) happens here,
//! never in the coordinate field.

use crate::field::{FieldParams, Fp};
use crate::group::{PrimeScalar, ScalarBits};
use crate::uint::U256;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ScalarParams;

impl FieldParams for ScalarParams {
    const MODULUS: [u64; 4] = [
        0xbfd25e8cd0364141,
        0xbaaedce6af48a03b,
        0xfffffffffffffffe,
        0xffffffffffffffff,
    ];
    // R = 2^256 mod n
    const R: [u64; 4] = [
        0x402da1732fc9bebf,
        0x4551231950b75fc4,
        0x0000000000000001,
        0x0000000000000000,
    ];
    // R^2 = 2^512 mod n
    const R2: [u64; 4] = [
        0x896cf21467d7d140,
        0x741496c20e7cf878,
        0xe697f5e45bcd07c6,
        0x9d671cd581c69bc5,
    ];
    const MU: u64 = 0x4b0dff665588b13f;
}

/// Integers modulo the group order.
pub type ScalarField = Fp<ScalarParams>;

impl<P: FieldParams> ScalarBits for Fp<P> {
    #[inline]
    fn to_u64_limbs(&self) -> [u64; 4] {
        self.to_canonical_limbs()
    }
}

impl<P: FieldParams> PrimeScalar for Fp<P> {
    #[inline]
    fn from_u256_reduced(value: &U256) -> Self {
        Fp::from_u256(value)
    }

    #[inline]
    fn to_u256(&self) -> U256 {
        Fp::to_u256(self)
    }

    #[inline]
    fn try_inverse(&self) -> Option<Self> {
        Fp::try_inverse(self)
    }

    #[inline]
    fn is_zero(&self) -> bool {
        Fp::is_zero(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basefield::BaseField;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn order_minus(k: u64) -> U256 {
        ScalarField::modulus()
            .checked_sub(&U256::from_u64(k))
            .unwrap()
    }

    #[test]
    fn test_zero_one() {
        assert_eq!(ScalarField::ZERO + ScalarField::ZERO, ScalarField::ZERO);
        assert_eq!(ScalarField::ONE * ScalarField::ONE, ScalarField::ONE);
        assert_eq!(ScalarField::ZERO * ScalarField::ONE, ScalarField::ZERO);
        assert_eq!(ScalarField::ONE.to_u256(), U256::ONE);
    }

    #[test]
    fn test_addition_wraps_at_order() {
        let a = ScalarField::from_u256(&order_minus(1));
        let c = a + ScalarField::from_u64(3);
        assert_eq!(c, ScalarField::from_u64(2));
    }

    #[test]
    fn test_subtraction() {
        let a = ScalarField::from_u64(3);
        let b = ScalarField::from_u64(10);
        assert_eq!((a - b).to_u256(), order_minus(7));
        assert_eq!(b - a, ScalarField::from_u64(7));
    }

    #[test]
    fn test_multiplication() {
        let a = ScalarField::from_u64(6);
        let b = ScalarField::from_u64(7);
        assert_eq!(a * b, ScalarField::from_u64(42));

        // (n-1)^2 = 1 mod n
        let minus_one = ScalarField::from_u256(&order_minus(1));
        assert_eq!(minus_one * minus_one, ScalarField::ONE);
        assert_eq!(-ScalarField::ONE, minus_one);
    }

    #[test]
    fn test_inverse() {
        let a = ScalarField::from_u64(5);
        assert_eq!(a * a.inverse(), ScalarField::ONE);
        assert_eq!(ScalarField::ZERO.try_inverse(), None);

        let big = ScalarField::from_u256(&order_minus(12345));
        assert_eq!(big / big, ScalarField::ONE);
    }

    #[test]
    fn test_reduction_of_values_above_order() {
        // n + 5 reduces to 5, and 2^256 - 1 reduces to 2^256 - 1 - n.
        let n_plus_five = ScalarField::modulus()
            .checked_add(&U256::from_u64(5))
            .unwrap();
        assert_eq!(
            ScalarField::from_u256(&n_plus_five),
            ScalarField::from_u64(5)
        );

        let expected = U256::MAX.checked_sub(&ScalarField::modulus()).unwrap();
        assert_eq!(ScalarField::from_u256(&U256::MAX).to_u256(), expected);
    }

    #[test]
    fn test_base_field_uses_distinct_modulus() {
        let p_minus_one = BaseField::modulus().checked_sub(&U256::ONE).unwrap();
        let x = BaseField::from_u256(&p_minus_one);
        assert_eq!(x + BaseField::ONE, BaseField::ZERO);
        assert_eq!(x * x, BaseField::ONE);

        // The same integer is a different residue mod n.
        let y = ScalarField::from_u256(&p_minus_one);
        assert_ne!(y.to_u256(), p_minus_one);
    }

    #[test]
    fn test_base_field_inverse() {
        let a = BaseField::from_u64(0xdead_beef);
        assert_eq!(a * a.inverse(), BaseField::ONE);
        assert_eq!(a.square(), a * a);
    }

    #[test]
    fn test_random_below_order_round_trips() {
        let mut rng = StdRng::seed_from_u64(42);
        let n = ScalarField::modulus();
        for _ in 0..32 {
            let k = U256::random_below(&mut rng, &n).unwrap();
            assert_eq!(ScalarField::from_u256(&k).to_u256(), k);
        }
    }
}
