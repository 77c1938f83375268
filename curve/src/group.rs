use core::fmt::Debug;
use core::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

use crate::uint::U256;

/// Anything that can drive a scalar multiplication: four little-endian limbs.
pub trait ScalarBits {
    fn to_u64_limbs(&self) -> [u64; 4];
}

impl ScalarBits for U256 {
    #[inline]
    fn to_u64_limbs(&self) -> [u64; 4] {
        self.limbs()
    }
}

impl ScalarBits for u64 {
    #[inline]
    fn to_u64_limbs(&self) -> [u64; 4] {
        [*self, 0, 0, 0]
    }
}

pub trait Group:
    Sized
    + Copy
    + Add<Output = Self>
    + AddAssign
    + Sub<Output = Self>
    + SubAssign
    + Neg<Output = Self>
{
    fn identity() -> Self;
    fn is_identity(&self) -> bool;
    fn generator() -> Self;
    fn double(&self) -> Self;
    fn negate(&self) -> Self;

    #[inline]
    fn scalar_mul<S: ScalarBits + ?Sized>(&self, scalar: &S) -> Self {
        let scalar_limbs = scalar.to_u64_limbs();
        let mut result = Self::identity();
        let mut temp = *self;

        for &limb in scalar_limbs.iter() {
            let mut bits = limb;
            for _ in 0..64 {
                if bits & 1 == 1 {
                    result = result + temp;
                }
                temp = temp.double();
                bits >>= 1;
            }
        }

        result
    }

    fn scalar_mul_windowed<S: ScalarBits + ?Sized>(&self, scalar: &S) -> Self {
        if self.is_identity() {
            return Self::identity();
        }

        let mut table = [Self::identity(); 16];
        table[1] = *self;

        for i in 2..16 {
            table[i] = if i % 2 == 0 {
                table[i / 2].double()
            } else {
                table[i - 1] + table[1]
            };
        }

        let scalar_limbs = scalar.to_u64_limbs();
        let mut result = Self::identity();

        for &limb in scalar_limbs.iter().rev() {
            for shift in (0..64).step_by(4).rev() {
                result = result.double();
                result = result.double();
                result = result.double();
                result = result.double();

                let window = ((limb >> shift) & 0xF) as usize;
                if window != 0 {
                    result = result + table[window];
                }
            }
        }

        result
    }

    /// Multiply the fixed generator.
    fn mul_generator<S: ScalarBits + ?Sized>(scalar: &S) -> Self {
        Self::generator().scalar_mul_windowed(scalar)
    }

    fn mul_u64(&self, n: u64) -> Self {
        match n {
            0 => Self::identity(),
            1 => *self,
            _ => self.scalar_mul(&n),
        }
    }
}

/// Access to the affine `(x, y)` coordinates of a point, as integers.
pub trait AffineCoordinates: Sized {
    /// Build a point from coordinates, reducing each modulo the field prime.
    /// No on-curve check is performed.
    fn from_coordinates(x: &U256, y: &U256) -> Self;

    /// `None` for the point at infinity.
    fn coordinates(&self) -> Option<(U256, U256)>;

    fn is_on_curve(&self) -> bool;
}

/// Arithmetic modulo the group order, as needed by signature schemes.
pub trait PrimeScalar:
    Copy
    + Eq
    + Debug
    + Send
    + Sync
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    fn from_u256_reduced(value: &U256) -> Self;
    fn to_u256(&self) -> U256;
    fn try_inverse(&self) -> Option<Self>;
    fn is_zero(&self) -> bool;
}

/// The fixed parameters of an elliptic-curve group: generator, field prime
/// and group order, together with the point and scalar types that implement
/// its arithmetic.
pub trait CurveDomain: Copy + Debug + Default + Send + Sync + 'static {
    type Point: Group + AffineCoordinates + PartialEq + Eq + Debug + Send + Sync;
    type Scalar: PrimeScalar;

    /// Curve name, e.g. `"secp256k1"`.
    const NAME: &'static str;

    /// Group order n.
    fn order() -> U256;

    /// Coordinate field prime p.
    fn field_prime() -> U256;

    fn generator() -> Self::Point {
        <Self::Point as Group>::generator()
    }

    fn infinity() -> Self::Point {
        <Self::Point as Group>::identity()
    }

    fn mul_generator(scalar: &U256) -> Self::Point {
        <Self::Point as Group>::mul_generator(scalar)
    }

    /// `a * G + b * point`.
    fn double_scalar_mul_basepoint(a: &U256, b: &U256, point: &Self::Point) -> Self::Point {
        Self::mul_generator(a) + point.scalar_mul_windowed(b)
    }
}
