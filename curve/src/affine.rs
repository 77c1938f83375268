// secp256k1 (SEC 2, section 2.4.1)
// E(GF(p)) : y^2 = x^3 + 7, p = 2^256 - 2^32 - 977
// Generator G = (0x79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798,
//                0x483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8)
// Group order n = 0xfffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141
// Cofactor: 1

use crate::basefield::BaseField;
use crate::group::{AffineCoordinates, ScalarBits};
use crate::projective::Projective;
use crate::uint::U256;
use crate::{Group, ScalarField};
use core::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};
use serde::{Deserialize, Serialize};

const GENERATOR_X: U256 = U256::from_limbs([
    0x59f2815b16f81798,
    0x029bfcdb2dce28d9,
    0x55a06295ce870b07,
    0x79be667ef9dcbbac,
]);

const GENERATOR_Y: U256 = U256::from_limbs([
    0x9c47d08ffb10d4b8,
    0xfd17b448a6855419,
    0x5da4fbfc0e1108a8,
    0x483ada7726a3c465,
]);

/// Affine point on the elliptic curve.
/// Represents a point in affine coordinates (x, y) or the point at infinity.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Affine {
    pub x: BaseField,
    pub y: BaseField,
    /// Whether this point is the point at infinity (identity element)
    pub is_infinity: bool,
}

impl Affine {
    /// The 'a' coefficient: 0
    #[inline]
    pub(crate) fn curve_a() -> BaseField {
        BaseField::ZERO
    }

    /// The 'b' coefficient: 7
    #[inline]
    pub(crate) fn curve_b() -> BaseField {
        BaseField::from_u64(7)
    }

    /// The point at infinity (identity element)
    pub const INFINITY: Self = Affine {
        x: BaseField::ZERO,
        y: BaseField::ZERO,
        is_infinity: true,
    };

    pub fn new(x: BaseField, y: BaseField) -> Self {
        Affine {
            x,
            y,
            is_infinity: false,
        }
    }

    #[inline]
    pub fn is_infinity(&self) -> bool {
        self.is_infinity
    }

    /// Check if a point is on the curve: y^2 = x^3 + a*x + b.
    pub fn is_on_curve(&self) -> bool {
        if self.is_infinity {
            return true;
        }

        let y2 = self.y.square();
        let x3 = self.x.square() * self.x;
        let rhs = x3 + Self::curve_a() * self.x + Self::curve_b();

        y2 == rhs
    }

    pub fn generator() -> Self {
        Affine::new(
            BaseField::from_u256(&GENERATOR_X),
            BaseField::from_u256(&GENERATOR_Y),
        )
    }

    /// Point doubling: 2*P.
    pub fn double(&self) -> Self {
        if self.is_infinity {
            return *self;
        }

        // Vertical tangent
        if self.y.is_zero() {
            return Self::INFINITY;
        }

        // λ = (3x^2 + a) / (2y)
        let x2 = self.x.square();
        let numerator = x2 + x2 + x2 + Self::curve_a();
        let lambda = numerator / self.y.double();

        // x_r = λ^2 - 2x
        let x_r = lambda.square() - self.x - self.x;

        // y_r = λ(x - x_r) - y
        let y_r = lambda * (self.x - x_r) - self.y;

        Affine::new(x_r, y_r)
    }

    pub fn negate(&self) -> Self {
        if self.is_infinity {
            return *self;
        }
        Affine::new(self.x, -self.y)
    }

    /// Multiply the fixed generator.
    pub fn mul_generator<S: ScalarBits + ?Sized>(scalar: &S) -> Self {
        Projective::generator()
            .scalar_mul_windowed(scalar)
            .to_affine()
    }

    /// Compute a * G + b * P, where G is the fixed generator.
    pub fn double_scalar_mul_basepoint<A, B>(a: &A, b: &B, point: &Self) -> Self
    where
        A: ScalarBits + ?Sized,
        B: ScalarBits + ?Sized,
    {
        crate::msm::double_scalar_mul_basepoint_affine(a, b, point)
    }
}

impl Group for Affine {
    #[inline]
    fn identity() -> Self {
        Self::INFINITY
    }

    #[inline]
    fn is_identity(&self) -> bool {
        self.is_infinity
    }

    #[inline]
    fn generator() -> Self {
        Affine::generator()
    }

    #[inline]
    fn double(&self) -> Self {
        Self::double(self)
    }

    #[inline]
    fn negate(&self) -> Self {
        Self::negate(self)
    }

    // Affine additions cost an inversion each; multiply in Jacobian
    // coordinates and normalize once.
    fn scalar_mul<S: ScalarBits + ?Sized>(&self, scalar: &S) -> Self {
        Projective::from_affine(self).scalar_mul(scalar).to_affine()
    }

    fn scalar_mul_windowed<S: ScalarBits + ?Sized>(&self, scalar: &S) -> Self {
        Projective::from_affine(self)
            .scalar_mul_windowed(scalar)
            .to_affine()
    }

    fn mul_generator<S: ScalarBits + ?Sized>(scalar: &S) -> Self {
        Affine::mul_generator(scalar)
    }
}

impl AffineCoordinates for Affine {
    fn from_coordinates(x: &U256, y: &U256) -> Self {
        Affine::new(BaseField::from_u256(x), BaseField::from_u256(y))
    }

    fn coordinates(&self) -> Option<(U256, U256)> {
        if self.is_infinity {
            None
        } else {
            Some((self.x.to_u256(), self.y.to_u256()))
        }
    }

    fn is_on_curve(&self) -> bool {
        Affine::is_on_curve(self)
    }
}

impl Add for Affine {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        if self.is_infinity {
            return other;
        }
        if other.is_infinity {
            return self;
        }

        if self.x == other.x {
            if self.y == other.y {
                return self.double();
            } else {
                // Points are inverses
                return Self::INFINITY;
            }
        }

        // λ = (y2 - y1) / (x2 - x1)
        let lambda = (other.y - self.y) / (other.x - self.x);

        // x_r = λ^2 - x1 - x2
        let x_r = lambda.square() - self.x - other.x;

        // y_r = λ(x1 - x_r) - y1
        let y_r = lambda * (self.x - x_r) - self.y;

        Affine::new(x_r, y_r)
    }
}

impl AddAssign for Affine {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

#[allow(clippy::suspicious_arithmetic_impl)]
impl Sub for Affine {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self + other.negate()
    }
}

impl SubAssign for Affine {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl Neg for Affine {
    type Output = Self;

    fn neg(self) -> Self {
        self.negate()
    }
}

impl Mul<ScalarField> for Affine {
    type Output = Self;

    fn mul(self, scalar: ScalarField) -> Self {
        <Self as Group>::scalar_mul_windowed(&self, &scalar)
    }
}

impl Mul<&U256> for Affine {
    type Output = Self;

    fn mul(self, scalar: &U256) -> Self {
        <Self as Group>::scalar_mul_windowed(&self, scalar)
    }
}

impl Mul<Affine> for ScalarField {
    type Output = Affine;

    fn mul(self, point: Affine) -> Affine {
        <Affine as Group>::scalar_mul_windowed(&point, &self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Group;

    fn hex_point(x: &str, y: &str) -> Affine {
        Affine::from_coordinates(&U256::from_hex(x).unwrap(), &U256::from_hex(y).unwrap())
    }

    #[test]
    fn test_generator_and_infinity_coordinates() {
        assert_eq!(
            Affine::generator().coordinates(),
            Some((GENERATOR_X, GENERATOR_Y))
        );
        assert!(Affine::generator().is_on_curve());

        assert_eq!(Affine::INFINITY.coordinates(), None);
        assert!(Affine::INFINITY.is_on_curve());
        assert_eq!(Affine::generator() + Affine::INFINITY, Affine::generator());
    }

    #[test]
    fn test_point_doubling_matches_known_value() {
        let g2 = Affine::generator().double();
        let expected = hex_point(
            "C6047F9441ED7D6D3045406E95C07CD85C778E4B8CEF3CA7ABAC09B95C709EE5",
            "1AE168FEA63DC339A3C58419466CEAEEF7F632653266D0E1236431A950CFE52A",
        );

        assert_eq!(g2, expected);
        assert_eq!(Affine::generator() + Affine::generator(), g2);
    }

    #[test]
    fn test_opposite_points_cancel() {
        let p = Affine::mul_generator(&1000u64);
        assert_eq!(p + p.negate(), Affine::INFINITY);
        assert_eq!(p - p, Affine::INFINITY);
        assert_eq!((-p).coordinates().unwrap().0, p.coordinates().unwrap().0);
    }

    #[test]
    fn test_scalar_mul_by_order_is_identity() {
        let g = Affine::generator();
        let n = ScalarField::modulus();
        assert_eq!(g.scalar_mul_windowed(&n), Affine::INFINITY);
        assert_eq!(g.scalar_mul(&U256::ZERO), Affine::INFINITY);

        let n_minus_one = n.checked_sub(&U256::ONE).unwrap();
        assert_eq!(g * &n_minus_one, -g);
    }

    #[test]
    fn test_seventh_multiple() {
        let seven_g = Affine::mul_generator(&7u64);
        let (x, _) = seven_g.coordinates().unwrap();
        assert_eq!(
            x.to_hex(),
            "5CBDF0646E5DB4EAA398F365F2EA7A0E3D419B7E0330E39CE92BDDEDCAC4F9BC"
        );
        assert_eq!(seven_g, Affine::generator().mul_u64(7));
    }

    #[test]
    fn test_scalar_field_mul_distributes() {
        let g = Affine::generator();
        let a = ScalarField::from_u64(3);
        let b = ScalarField::from_u64(5);

        assert_eq!(g * (a + b), g * a + g * b);
        assert_eq!(a * g, g * a);
    }

    #[test]
    fn test_mul_strategies_agree() {
        let g = Affine::generator();
        let scalar = U256::from_hex("DEADBEEF0123456789").unwrap();

        let plain = <Affine as Group>::scalar_mul(&g, &scalar);
        assert_eq!(plain, g.scalar_mul_windowed(&scalar));
        assert_eq!(plain, <Affine as Group>::mul_generator(&scalar));
        assert!(plain.is_on_curve());
    }

    #[test]
    fn test_from_coordinates_skips_curve_check() {
        let p = Affine::from_coordinates(&U256::ONE, &U256::ONE);
        assert!(!p.is_infinity());
        assert!(!p.is_on_curve());
    }
}
