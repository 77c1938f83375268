//! Prime field arithmetic in Montgomery form, generic over the modulus.
//!
//! A field element is represented as [u64; 4] in little-endian order holding
//! `value * R mod m` with `R = 2^256`. Moduli may use the full 256 bits, so the
//! multiplication keeps an extra carry word during reduction.

use core::fmt::{self, Debug, Display, Formatter};
use core::hash::Hash;
use core::iter::{Product, Sum};
use core::marker::PhantomData;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use serde::{Deserialize, Serialize};

use crate::uint::U256;

/// Constants describing a prime modulus for Montgomery arithmetic.
pub trait FieldParams:
    Copy + Clone + Debug + Default + PartialEq + Eq + Hash + Send + Sync + 'static
{
    /// The modulus, little-endian limbs.
    const MODULUS: [u64; 4];
    /// 2^256 mod m.
    const R: [u64; 4];
    /// 2^512 mod m.
    const R2: [u64; 4];
    /// -m^{-1} mod 2^64.
    const MU: u64;
}

/// Element of the prime field described by `P`.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fp<P: FieldParams> {
    limbs: [u64; 4],
    #[serde(skip)]
    _params: PhantomData<P>,
}

impl<P: FieldParams> Fp<P> {
    pub const ZERO: Self = Fp {
        limbs: [0, 0, 0, 0],
        _params: PhantomData,
    };

    /// One element (in Montgomery form: R mod m)
    pub const ONE: Self = Fp {
        limbs: P::R,
        _params: PhantomData,
    };

    #[inline]
    const fn from_montgomery(limbs: [u64; 4]) -> Self {
        Fp {
            limbs,
            _params: PhantomData,
        }
    }

    #[inline]
    pub fn from_u64(val: u64) -> Self {
        Self::from_canonical_limbs([val, 0, 0, 0])
    }

    /// Convert any 256-bit value, reducing it modulo m.
    #[inline]
    pub fn from_u256(value: &U256) -> Self {
        Self::from_canonical_limbs(value.limbs())
    }

    /// Canonical (non-Montgomery) value.
    #[inline]
    pub fn to_u256(&self) -> U256 {
        U256::from_limbs(self.to_canonical_limbs())
    }

    /// The modulus as an integer.
    pub fn modulus() -> U256 {
        U256::from_limbs(P::MODULUS)
    }

    /// Convert from Montgomery form to canonical little-endian limbs.
    #[inline]
    pub fn to_canonical_limbs(&self) -> [u64; 4] {
        montgomery_mul::<P>(self.limbs, [1, 0, 0, 0])
    }

    /// Accepts limbs of any size below 2^256; the Montgomery product with R^2
    /// reduces them.
    #[inline]
    pub fn from_canonical_limbs(limbs: [u64; 4]) -> Self {
        Self::from_montgomery(montgomery_mul::<P>(limbs, P::R2))
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.limbs == [0, 0, 0, 0]
    }

    #[inline]
    pub fn square(&self) -> Self {
        *self * *self
    }

    #[inline]
    pub fn double(&self) -> Self {
        *self + *self
    }

    /// Multiplicative inverse via Fermat's little theorem: a^{m-2}.
    /// Zero maps to zero.
    pub fn inverse(&self) -> Self {
        let exp = sub_mod(P::MODULUS, [2, 0, 0, 0], P::MODULUS);
        self.pow_vartime(exp)
    }

    pub fn try_inverse(&self) -> Option<Self> {
        if self.is_zero() {
            None
        } else {
            Some(self.inverse())
        }
    }

    /// Variable-time exponentiation
    pub fn pow_vartime(&self, exp: [u64; 4]) -> Self {
        if self.is_zero() {
            return Self::ZERO;
        }

        let mut result = Self::ONE;
        let mut base = *self;

        for &limb in exp.iter() {
            let mut remaining = limb;
            for _ in 0..64 {
                if remaining & 1 == 1 {
                    result *= base;
                }
                base = base.square();
                remaining >>= 1;
            }
        }

        result
    }
}

/// Add two 256-bit numbers mod m
#[inline]
const fn add_mod(a: [u64; 4], b: [u64; 4], m: [u64; 4]) -> [u64; 4] {
    let (r0, carry) = a[0].overflowing_add(b[0]);
    let (r1, carry) = carrying_add(a[1], b[1], carry);
    let (r2, carry) = carrying_add(a[2], b[2], carry);
    let (r3, carry) = carrying_add(a[3], b[3], carry);

    let (s0, borrow) = r0.overflowing_sub(m[0]);
    let (s1, borrow) = borrowing_sub(r1, m[1], borrow);
    let (s2, borrow) = borrowing_sub(r2, m[2], borrow);
    let (s3, borrow) = borrowing_sub(r3, m[3], borrow);

    // A carry out of the top limb means the true sum exceeds m.
    if carry || !borrow {
        [s0, s1, s2, s3]
    } else {
        [r0, r1, r2, r3]
    }
}

/// Subtract two 256-bit numbers mod m
#[inline]
const fn sub_mod(a: [u64; 4], b: [u64; 4], m: [u64; 4]) -> [u64; 4] {
    let (r0, borrow) = a[0].overflowing_sub(b[0]);
    let (r1, borrow) = borrowing_sub(a[1], b[1], borrow);
    let (r2, borrow) = borrowing_sub(a[2], b[2], borrow);
    let (r3, borrow) = borrowing_sub(a[3], b[3], borrow);

    if borrow {
        let (r0, carry) = r0.overflowing_add(m[0]);
        let (r1, carry) = carrying_add(r1, m[1], carry);
        let (r2, carry) = carrying_add(r2, m[2], carry);
        let (r3, _) = carrying_add(r3, m[3], carry);
        [r0, r1, r2, r3]
    } else {
        [r0, r1, r2, r3]
    }
}

#[inline]
const fn neg_mod(a: [u64; 4], m: [u64; 4]) -> [u64; 4] {
    if a[0] == 0 && a[1] == 0 && a[2] == 0 && a[3] == 0 {
        return [0, 0, 0, 0];
    }
    sub_mod(m, a, m)
}

/// a < b
#[inline]
const fn is_below(a: [u64; 4], b: [u64; 4]) -> bool {
    let (_, borrow) = a[0].overflowing_sub(b[0]);
    let (_, borrow) = borrowing_sub(a[1], b[1], borrow);
    let (_, borrow) = borrowing_sub(a[2], b[2], borrow);
    let (_, borrow) = borrowing_sub(a[3], b[3], borrow);
    borrow
}

#[inline]
const fn carrying_add(a: u64, b: u64, carry: bool) -> (u64, bool) {
    let (sum, overflow1) = a.overflowing_add(b);
    let (sum, overflow2) = sum.overflowing_add(carry as u64);
    (sum, overflow1 || overflow2)
}

#[inline]
const fn borrowing_sub(a: u64, b: u64, borrow: bool) -> (u64, bool) {
    let (diff, overflow1) = a.overflowing_sub(b);
    let (diff, overflow2) = diff.overflowing_sub(borrow as u64);
    (diff, overflow1 || overflow2)
}

/// Montgomery multiplication (CIOS): a * b * R^{-1} mod m.
///
/// Requires a * b < m * R, which holds whenever one operand is below m.
#[inline]
fn montgomery_mul<P: FieldParams>(a: [u64; 4], b: [u64; 4]) -> [u64; 4] {
    let m = P::MODULUS;
    let mut t = [0u64; 6];

    for i in 0..4 {
        let mut carry = 0u128;
        for j in 0..4 {
            let product = (t[j] as u128) + (a[j] as u128) * (b[i] as u128) + carry;
            t[j] = product as u64;
            carry = product >> 64;
        }
        let sum = (t[4] as u128) + carry;
        t[4] = sum as u64;
        t[5] = (sum >> 64) as u64;

        let k = t[0].wrapping_mul(P::MU);
        let product = (t[0] as u128) + (k as u128) * (m[0] as u128);
        let mut carry = product >> 64;
        for j in 1..4 {
            let product = (t[j] as u128) + (k as u128) * (m[j] as u128) + carry;
            t[j - 1] = product as u64;
            carry = product >> 64;
        }
        let sum = (t[4] as u128) + carry;
        t[3] = sum as u64;
        t[4] = t[5] + ((sum >> 64) as u64);
    }

    // Result is below 2m; t[4] holds the bit above 2^256.
    let result = [t[0], t[1], t[2], t[3]];
    if t[4] != 0 || !is_below(result, m) {
        let (r0, borrow) = result[0].overflowing_sub(m[0]);
        let (r1, borrow) = borrowing_sub(result[1], m[1], borrow);
        let (r2, borrow) = borrowing_sub(result[2], m[2], borrow);
        let (r3, _) = borrowing_sub(result[3], m[3], borrow);
        [r0, r1, r2, r3]
    } else {
        result
    }
}

impl<P: FieldParams> Add for Fp<P> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::from_montgomery(add_mod(self.limbs, rhs.limbs, P::MODULUS))
    }
}

impl<P: FieldParams> AddAssign for Fp<P> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<P: FieldParams> Sub for Fp<P> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::from_montgomery(sub_mod(self.limbs, rhs.limbs, P::MODULUS))
    }
}

impl<P: FieldParams> SubAssign for Fp<P> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<P: FieldParams> Neg for Fp<P> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::from_montgomery(neg_mod(self.limbs, P::MODULUS))
    }
}

impl<P: FieldParams> Mul for Fp<P> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::from_montgomery(montgomery_mul::<P>(self.limbs, rhs.limbs))
    }
}

impl<P: FieldParams> MulAssign for Fp<P> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

#[allow(clippy::suspicious_arithmetic_impl)]
impl<P: FieldParams> Div for Fp<P> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        self * rhs.inverse()
    }
}

impl<P: FieldParams> DivAssign for Fp<P> {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl<P: FieldParams> Sum for Fp<P> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| acc + x)
    }
}

impl<P: FieldParams> Product for Fp<P> {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, |acc, x| acc * x)
    }
}

impl<P: FieldParams> Display for Fp<P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.to_u256(), f)
    }
}

impl<P: FieldParams> Debug for Fp<P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Fp({})", self)
    }
}
