//! ECDSA signing and verification over any `CurveDomain`.

use curve::{AffineCoordinates, CurveDomain, Group, PrimeScalar, U256, random_nonzero_below};
use rand::TryCryptoRng;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::{trace, warn};

use crate::constants::{DER_SIGNATURE_SIZE, SCALAR_SIZE, SIGNATURE_HEX_LEN};
use crate::der;
use crate::errors::EcdsaError;

/// An ECDSA signature: the pair `(r, s)`.
///
/// A signature is only meaningful when both components lie in `(0, n)`;
/// construction does not check this, verification does.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Signature {
    /// x-coordinate of `k * G`, reduced mod n
    pub r: U256,
    /// `(e + d * r) / k` mod n
    pub s: U256,
}

impl Signature {
    /// Wraps `(r, s)` without range checks.
    pub fn new(r: U256, s: U256) -> Self {
        Self { r, s }
    }

    /// Checks `0 < r < n` and `0 < s < n` for the curve `C`.
    pub fn ensure_in_range<C: CurveDomain>(&self) -> Result<(), EcdsaError> {
        let n = C::order();
        if self.r.is_zero() || self.r >= n || self.s.is_zero() || self.s >= n {
            return Err(EcdsaError::OutOfRange);
        }
        Ok(())
    }

    /// Boolean form of [`Signature::ensure_in_range`].
    pub fn is_in_range<C: CurveDomain>(&self) -> bool {
        self.ensure_in_range::<C>().is_ok()
    }

    /// Fixed-layout DER encoding, see [`der::encode`].
    pub fn to_der(&self) -> [u8; DER_SIGNATURE_SIZE] {
        der::encode(&self.r, &self.s)
    }

    /// Decodes the fixed layout, see [`der::decode`].
    ///
    /// # Example
    ///
    /// ```
    /// use eckey::{Signature, U256};
    ///
    /// let sig = Signature::new(U256::from_u64(7), U256::from_u64(9));
    /// assert_eq!(Signature::from_der(&sig.to_der()).expect("valid DER"), sig);
    /// assert!(Signature::from_der(&[0x30, 0x45]).is_err());
    /// ```
    pub fn from_der(bytes: &[u8]) -> Result<Self, EcdsaError> {
        der::decode(bytes)
    }

    /// `r || s` as 128 uppercase hex characters.
    pub fn to_hex(&self) -> String {
        let mut out = self.r.to_hex();
        out.push_str(&self.s.to_hex());
        out
    }

    /// Parses the 128-character form produced by [`Signature::to_hex`].
    ///
    /// # Errors
    ///
    /// - `EcdsaError::Format` for any other length
    /// - `EcdsaError::Parse` for non-hex characters
    pub fn from_hex(hex: &str) -> Result<Self, EcdsaError> {
        if hex.len() != SIGNATURE_HEX_LEN {
            return Err(EcdsaError::format(format!(
                "signature hex must be {SIGNATURE_HEX_LEN} characters, got {}",
                hex.len()
            )));
        }

        let mut bytes = [0u8; 2 * SCALAR_SIZE];
        hex::decode_to_slice(hex, &mut bytes).map_err(curve::ParseU256Error::from)?;

        Ok(Self {
            r: read_scalar(&bytes[..SCALAR_SIZE]),
            s: read_scalar(&bytes[SCALAR_SIZE..]),
        })
    }
}

/// Read a 32-byte big-endian integer. `bytes` must be exactly 32 bytes long.
pub(crate) fn read_scalar(bytes: &[u8]) -> U256 {
    let mut buf = [0u8; SCALAR_SIZE];
    buf.copy_from_slice(bytes);
    U256::from_be_bytes(buf)
}

/// SHA-256 of `message`, read as a big-endian integer.
pub fn hash_message(message: &[u8]) -> U256 {
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(&Sha256::digest(message));
    U256::from_be_bytes(bytes)
}

/// Draw a scalar uniformly from `[1, n - 1]`.
pub(crate) fn random_scalar<C, R>(rng: &mut R) -> Result<U256, EcdsaError>
where
    C: CurveDomain,
    R: TryCryptoRng + ?Sized,
{
    random_nonzero_below(rng, &C::order()).map_err(|err| {
        warn!(curve = C::NAME, error = %err, "secure random source failed");
        EcdsaError::EntropyExhausted {
            reason: err.to_string(),
        }
    })
}

/// Signs `digest` with `private_key` using a fresh random nonce.
///
/// The algorithm, with all arithmetic modulo the group order n:
/// 1. Draw `k` uniformly from `[1, n - 1]`
/// 2. Compute `R = k * G` and `r = R.x mod n`
/// 3. Compute `s = (e + d * r) / k`, where `e` is the digest reduced mod n
/// 4. Redraw `k` if `R` is infinity, `r = 0` or `s = 0`
///
/// Two calls over the same digest and key produce different signatures.
///
/// # Errors
///
/// Returns `EcdsaError::EntropyExhausted` if the random source fails. This is
/// the only failure; it is not retried.
pub fn sign<C, R>(digest: &U256, private_key: &U256, rng: &mut R) -> Result<Signature, EcdsaError>
where
    C: CurveDomain,
    R: TryCryptoRng + ?Sized,
{
    let e = C::Scalar::from_u256_reduced(digest);
    let d = C::Scalar::from_u256_reduced(private_key);

    loop {
        let k = random_scalar::<C, R>(rng)?;

        let Some((x, _)) = C::mul_generator(&k).coordinates() else {
            trace!(curve = C::NAME, "nonce point is infinity, redrawing");
            continue;
        };

        let r = C::Scalar::from_u256_reduced(&x);
        if r.is_zero() {
            trace!(curve = C::NAME, "r is zero, redrawing nonce");
            continue;
        }

        let Some(k_inv) = C::Scalar::from_u256_reduced(&k).try_inverse() else {
            continue;
        };

        let s = (e + d * r) * k_inv;
        if s.is_zero() {
            trace!(curve = C::NAME, "s is zero, redrawing nonce");
            continue;
        }

        return Ok(Signature {
            r: r.to_u256(),
            s: s.to_u256(),
        });
    }
}

/// Verifies the signature `(r, s)` on `digest` against `public_key`.
///
/// With all arithmetic modulo n:
/// 1. Reject unless `0 < r < n` and `0 < s < n`
/// 2. Compute `w = 1 / s`, `u1 = e * w`, `u2 = r * w`
/// 3. Compute `P = u1 * G + u2 * public_key`
/// 4. Accept iff `P` is affine and `P.x mod n == r`
///
/// Returns `false` rather than an error for every invalid signature,
/// including a public key or a result at infinity.
pub fn verify<C: CurveDomain>(digest: &U256, r: &U256, s: &U256, public_key: &C::Point) -> bool {
    if Signature::new(*r, *s).ensure_in_range::<C>().is_err() {
        trace!(curve = C::NAME, "signature component out of range");
        return false;
    }
    if public_key.is_identity() {
        trace!(curve = C::NAME, "public key is the point at infinity");
        return false;
    }

    let e = C::Scalar::from_u256_reduced(digest);
    let r = C::Scalar::from_u256_reduced(r);
    let Some(w) = C::Scalar::from_u256_reduced(s).try_inverse() else {
        return false;
    };

    let u1 = e * w;
    let u2 = r * w;

    match C::double_scalar_mul_basepoint(&u1.to_u256(), &u2.to_u256(), public_key).coordinates() {
        Some((x, _)) => C::Scalar::from_u256_reduced(&x) == r,
        None => {
            trace!(curve = C::NAME, "verification point is infinity");
            false
        }
    }
}
