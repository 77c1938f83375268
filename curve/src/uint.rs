//! Fixed-width 256-bit unsigned integer.
//!
//! `U256` is the raw integer type behind private keys, nonces and signature
//! components. It carries no modulus: reduction happens only when a value is
//! converted into a field element.

use core::cmp::Ordering;
use core::fmt::{self, Debug, Display, Formatter};

use num_bigint::BigUint;
use rand::TryRngCore;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of hex digits in a fully padded `U256`.
pub const U256_HEX_DIGITS: usize = 64;

/// Errors produced when parsing a `U256` from text.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseU256Error {
    #[error("empty input")]
    Empty,
    #[error("too many digits: at most {max} allowed, got {actual}")]
    TooLong { max: usize, actual: usize },
    #[error("invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),
    #[error("invalid decimal digit")]
    InvalidDecimal,
    #[error("value does not fit in 256 bits")]
    Overflow,
}

/// 256-bit unsigned integer stored as four little-endian `u64` limbs.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct U256([u64; 4]);

impl U256 {
    pub const ZERO: Self = U256([0, 0, 0, 0]);
    pub const ONE: Self = U256([1, 0, 0, 0]);
    pub const MAX: Self = U256([u64::MAX; 4]);

    /// Build from little-endian limbs.
    #[inline]
    pub const fn from_limbs(limbs: [u64; 4]) -> Self {
        U256(limbs)
    }

    /// Little-endian limbs.
    #[inline]
    pub const fn limbs(&self) -> [u64; 4] {
        self.0
    }

    #[inline]
    pub const fn from_u64(value: u64) -> Self {
        U256([value, 0, 0, 0])
    }

    pub fn from_be_bytes(bytes: [u8; 32]) -> Self {
        let mut limbs = [0u64; 4];
        for (i, chunk) in bytes.chunks_exact(8).enumerate() {
            let mut word = [0u8; 8];
            word.copy_from_slice(chunk);
            limbs[3 - i] = u64::from_be_bytes(word);
        }
        U256(limbs)
    }

    pub fn to_be_bytes(&self) -> [u8; 32] {
        let mut out = [0u8; 32];
        for (i, limb) in self.0.iter().rev().enumerate() {
            out[i * 8..(i + 1) * 8].copy_from_slice(&limb.to_be_bytes());
        }
        out
    }

    /// Parse a big-endian hex string of 1 to 64 digits. Shorter inputs are
    /// zero-padded on the left.
    pub fn from_hex(s: &str) -> Result<Self, ParseU256Error> {
        if s.is_empty() {
            return Err(ParseU256Error::Empty);
        }
        if s.len() > U256_HEX_DIGITS {
            return Err(ParseU256Error::TooLong {
                max: U256_HEX_DIGITS,
                actual: s.len(),
            });
        }

        let padded = format!("{s:0>width$}", width = U256_HEX_DIGITS);
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(padded, &mut bytes)?;
        Ok(Self::from_be_bytes(bytes))
    }

    /// Uppercase hex, always exactly 64 characters.
    pub fn to_hex(&self) -> String {
        hex::encode_upper(self.to_be_bytes())
    }

    /// Parse an unsigned decimal string.
    pub fn from_dec_str(s: &str) -> Result<Self, ParseU256Error> {
        if s.is_empty() {
            return Err(ParseU256Error::Empty);
        }
        let value = BigUint::parse_bytes(s.as_bytes(), 10)
            .ok_or(ParseU256Error::InvalidDecimal)?;
        Self::try_from(&value)
    }

    pub fn to_dec_string(&self) -> String {
        self.to_biguint().to_str_radix(10)
    }

    pub fn to_biguint(&self) -> BigUint {
        BigUint::from_bytes_be(&self.to_be_bytes())
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == [0, 0, 0, 0]
    }

    /// Number of significant bits.
    pub fn bits(&self) -> u32 {
        for (i, limb) in self.0.iter().enumerate().rev() {
            if *limb != 0 {
                return (i as u32) * 64 + (64 - limb.leading_zeros());
            }
        }
        0
    }

    pub fn overflowing_add(&self, rhs: &Self) -> (Self, bool) {
        let mut out = [0u64; 4];
        let mut carry = false;
        for (i, slot) in out.iter_mut().enumerate() {
            let (sum, c1) = self.0[i].overflowing_add(rhs.0[i]);
            let (sum, c2) = sum.overflowing_add(carry as u64);
            *slot = sum;
            carry = c1 || c2;
        }
        (U256(out), carry)
    }

    pub fn overflowing_sub(&self, rhs: &Self) -> (Self, bool) {
        let mut out = [0u64; 4];
        let mut borrow = false;
        for (i, slot) in out.iter_mut().enumerate() {
            let (diff, b1) = self.0[i].overflowing_sub(rhs.0[i]);
            let (diff, b2) = diff.overflowing_sub(borrow as u64);
            *slot = diff;
            borrow = b1 || b2;
        }
        (U256(out), borrow)
    }

    pub fn checked_add(&self, rhs: &Self) -> Option<Self> {
        match self.overflowing_add(rhs) {
            (sum, false) => Some(sum),
            (_, true) => None,
        }
    }

    pub fn checked_sub(&self, rhs: &Self) -> Option<Self> {
        match self.overflowing_sub(rhs) {
            (diff, false) => Some(diff),
            (_, true) => None,
        }
    }

    /// Draw a uniform value in `[0, bound)` by rejection sampling.
    ///
    /// Candidate bytes are masked down to the bit length of `bound`, so the
    /// expected number of draws is below two. Errors from the random source
    /// are returned unchanged and are never retried.
    ///
    /// # Panics
    ///
    /// Panics if `bound` is zero.
    pub fn random_below<R: TryRngCore + ?Sized>(
        rng: &mut R,
        bound: &Self,
    ) -> Result<Self, R::Error> {
        assert!(!bound.is_zero(), "random_below requires a non-zero bound");

        let bits = bound.bits();
        let excess = 256 - bits;
        loop {
            let mut bytes = [0u8; 32];
            rng.try_fill_bytes(&mut bytes)?;

            // Clear the high bits the bound cannot have.
            let full_bytes = (excess / 8) as usize;
            for byte in bytes.iter_mut().take(full_bytes) {
                *byte = 0;
            }
            if full_bytes < 32 {
                bytes[full_bytes] &= 0xFFu8 >> (excess % 8);
            }

            let candidate = Self::from_be_bytes(bytes);
            if candidate < *bound {
                return Ok(candidate);
            }
        }
    }
}

impl Ord for U256 {
    fn cmp(&self, other: &Self) -> Ordering {
        for i in (0..4).rev() {
            match self.0[i].cmp(&other.0[i]) {
                Ordering::Equal => continue,
                ord => return ord,
            }
        }
        Ordering::Equal
    }
}

impl PartialOrd for U256 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<u64> for U256 {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl From<[u8; 32]> for U256 {
    fn from(bytes: [u8; 32]) -> Self {
        Self::from_be_bytes(bytes)
    }
}

impl TryFrom<&BigUint> for U256 {
    type Error = ParseU256Error;

    fn try_from(value: &BigUint) -> Result<Self, Self::Error> {
        let bytes = value.to_bytes_be();
        if bytes.len() > 32 {
            return Err(ParseU256Error::Overflow);
        }
        let mut padded = [0u8; 32];
        padded[32 - bytes.len()..].copy_from_slice(&bytes);
        Ok(Self::from_be_bytes(padded))
    }
}

impl Display for U256 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "0x{:016x}{:016x}{:016x}{:016x}",
            self.0[3], self.0[2], self.0[1], self.0[0]
        )
    }
}

impl Debug for U256 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "U256({})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_hex_round_trip_is_padded() {
        let v = U256::from_hex("1f").unwrap();
        assert_eq!(v, U256::from_u64(0x1F));
        assert_eq!(
            v.to_hex(),
            "000000000000000000000000000000000000000000000000000000000000001F"
        );
        assert_eq!(U256::from_hex(&v.to_hex()).unwrap(), v);
    }

    #[test]
    fn test_hex_rejects_bad_input() {
        assert_eq!(U256::from_hex(""), Err(ParseU256Error::Empty));
        assert_eq!(
            U256::from_hex(&"1".repeat(65)),
            Err(ParseU256Error::TooLong { max: 64, actual: 65 })
        );
        assert!(matches!(
            U256::from_hex("12xz"),
            Err(ParseU256Error::InvalidHex(_))
        ));
    }

    #[test]
    fn test_decimal() {
        let v = U256::from_dec_str("1234567890123456789012345678901234567890").unwrap();
        assert_eq!(
            v.to_dec_string(),
            "1234567890123456789012345678901234567890"
        );
        assert_eq!(
            U256::from_dec_str("12a"),
            Err(ParseU256Error::InvalidDecimal)
        );

        // 2^256 does not fit.
        let too_big =
            "115792089237316195423570985008687907853269984665640564039457584007913129639936";
        assert_eq!(U256::from_dec_str(too_big), Err(ParseU256Error::Overflow));
        assert_eq!(
            U256::from_dec_str(&U256::MAX.to_dec_string()).unwrap(),
            U256::MAX
        );
    }

    #[test]
    fn test_ordering_uses_high_limb_first() {
        let low = U256::from_limbs([u64::MAX, 0, 0, 0]);
        let high = U256::from_limbs([0, 0, 0, 1]);
        assert!(low < high);
        assert!(U256::ZERO < U256::ONE);
        assert_eq!(U256::MAX.cmp(&U256::MAX), Ordering::Equal);
    }

    #[test]
    fn test_bytes_and_bits() {
        let mut bytes = [0u8; 32];
        bytes[0] = 0x80;
        bytes[31] = 0x01;
        let v = U256::from_be_bytes(bytes);
        assert_eq!(v.limbs(), [1, 0, 0, 0x8000_0000_0000_0000]);
        assert_eq!(v.to_be_bytes(), bytes);
        assert_eq!(v.bits(), 256);
        assert_eq!(U256::ZERO.bits(), 0);
        assert_eq!(U256::from_u64(5).bits(), 3);
    }

    #[test]
    fn test_checked_arithmetic() {
        assert_eq!(U256::MAX.checked_add(&U256::ONE), None);
        assert_eq!(U256::ZERO.checked_sub(&U256::ONE), None);
        let a = U256::from_limbs([u64::MAX, 0, 0, 0]);
        assert_eq!(
            a.checked_add(&U256::ONE),
            Some(U256::from_limbs([0, 1, 0, 0]))
        );
        assert_eq!(
            U256::from_limbs([0, 1, 0, 0]).checked_sub(&U256::ONE),
            Some(a)
        );
    }

    #[test]
    fn test_random_below_respects_bound() {
        let mut rng = StdRng::seed_from_u64(7);
        let bound = U256::from_u64(1000);
        for _ in 0..200 {
            let v = U256::random_below(&mut rng, &bound).unwrap();
            assert!(v < bound);
        }
    }
}
