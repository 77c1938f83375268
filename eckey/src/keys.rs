//! ECDSA key pairs.

use core::fmt;

use curve::{AffineCoordinates, CurveDomain, U256};
use rand::TryCryptoRng;
use tracing::debug;

use crate::constants::{PUBLIC_KEY_HEX_LEN, PUBLIC_KEY_SIZE, SCALAR_SIZE, SEC1_UNCOMPRESSED_TAG};
use crate::errors::EcdsaError;
use crate::signatures::{self, Signature, random_scalar, read_scalar};

#[derive(Copy, Clone, PartialEq, Eq)]
enum KeyMaterial<P> {
    /// Private key and its public point.
    Full { private_key: U256, public_key: P },
    /// Verification only.
    PublicOnly { public_key: P },
    /// Private key whose public point has not been computed yet.
    Deferred { private_key: U256 },
}

/// An ECDSA key pair over the curve `C`.
///
/// A key pair holds a private key, a public point, or both:
///
/// - [`KeyPair::from_private_key`] and [`KeyPair::random`] derive the public
///   point immediately.
/// - [`KeyPair::from_private_key_deferred`] and [`KeyPair::random_deferred`]
///   skip the scalar multiplication. The public point reads as infinity until
///   [`KeyPair::derive_public_key`] is called.
/// - [`KeyPair::from_public_point`] builds a verification-only key. Its
///   private key reads as zero and signing fails with
///   `EcdsaError::MissingPrivateKey`.
///
/// The private key is not range-checked. A key at or above the group order
/// is reduced mod n when signing.
///
/// # Example
///
/// ```
/// use eckey::{KeyPair, Secp256k1, hash_message};
///
/// let mut rng = rand::rng();
/// let key = KeyPair::<Secp256k1>::random(&mut rng).expect("keygen failed");
///
/// let digest = hash_message(b"hello");
/// let signature = key.sign(&digest, &mut rng).expect("signing failed");
/// assert!(key.verify(&digest, &signature));
/// ```
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct KeyPair<C: CurveDomain> {
    material: KeyMaterial<C::Point>,
}

impl<C: CurveDomain> KeyPair<C> {
    /// Builds a key pair from a private key, computing `public = d * G`.
    pub fn from_private_key(private_key: U256) -> Self {
        Self {
            material: KeyMaterial::Full {
                private_key,
                public_key: C::mul_generator(&private_key),
            },
        }
    }

    /// Builds a key pair from a private key without deriving the public point.
    pub fn from_private_key_deferred(private_key: U256) -> Self {
        Self {
            material: KeyMaterial::Deferred { private_key },
        }
    }

    /// Parses a big-endian hex private key (up to 64 digits) and derives the
    /// public point.
    pub fn from_private_hex(hex: &str) -> Result<Self, EcdsaError> {
        Ok(Self::from_private_key(U256::from_hex(hex)?))
    }

    /// A verification-only key.
    pub fn from_public_point(public_key: C::Point) -> Self {
        Self {
            material: KeyMaterial::PublicOnly { public_key },
        }
    }

    /// A verification-only key from a 130-character uncompressed hex point.
    pub fn from_public_hex(hex: &str) -> Result<Self, EcdsaError> {
        Ok(Self::from_public_point(Self::parse_public_point(hex)?))
    }

    /// Pairs a private key with a caller-supplied public point. The two are
    /// not checked against each other.
    pub fn from_parts(private_key: U256, public_key: C::Point) -> Self {
        Self {
            material: KeyMaterial::Full {
                private_key,
                public_key,
            },
        }
    }

    /// Generates a key pair with a private key drawn uniformly from `[1, n - 1]`.
    ///
    /// # Errors
    ///
    /// `EcdsaError::EntropyExhausted` if the random source fails.
    pub fn random<R: TryCryptoRng + ?Sized>(rng: &mut R) -> Result<Self, EcdsaError> {
        let private_key = random_scalar::<C, R>(rng)?;
        debug!(curve = C::NAME, "generated random key pair");
        Ok(Self::from_private_key(private_key))
    }

    /// Like [`KeyPair::random`] but leaves the public point underived.
    pub fn random_deferred<R: TryCryptoRng + ?Sized>(rng: &mut R) -> Result<Self, EcdsaError> {
        let private_key = random_scalar::<C, R>(rng)?;
        debug!(curve = C::NAME, "generated random private key");
        Ok(Self::from_private_key_deferred(private_key))
    }

    /// Returns a copy with the public point computed. Keys that already hold
    /// a public point are returned unchanged.
    pub fn derive_public_key(&self) -> Self {
        match self.material {
            KeyMaterial::Deferred { private_key } => Self::from_private_key(private_key),
            _ => *self,
        }
    }

    /// The private key, or zero for a verification-only key.
    pub fn private_key(&self) -> U256 {
        match self.material {
            KeyMaterial::Full { private_key, .. } | KeyMaterial::Deferred { private_key } => {
                private_key
            }
            KeyMaterial::PublicOnly { .. } => U256::ZERO,
        }
    }

    /// The public point, or infinity while derivation is deferred.
    pub fn public_key_point(&self) -> C::Point {
        match self.material {
            KeyMaterial::Full { public_key, .. } | KeyMaterial::PublicOnly { public_key } => {
                public_key
            }
            KeyMaterial::Deferred { .. } => C::infinity(),
        }
    }

    /// `false` only for verification-only keys.
    pub fn has_private_key(&self) -> bool {
        !matches!(self.material, KeyMaterial::PublicOnly { .. })
    }

    /// 64 uppercase hex characters, zero-padded.
    pub fn private_key_hex(&self) -> String {
        self.private_key().to_hex()
    }

    /// Uncompressed SEC1 encoding: `04 || x || y`.
    ///
    /// # Errors
    ///
    /// `EcdsaError::InvalidPoint` if the public point is infinity, which
    /// includes a deferred key.
    pub fn public_key_bytes(&self) -> Result<[u8; PUBLIC_KEY_SIZE], EcdsaError> {
        let (x, y) = self
            .public_key_point()
            .coordinates()
            .ok_or(EcdsaError::InvalidPoint)?;

        let mut out = [0u8; PUBLIC_KEY_SIZE];
        out[0] = SEC1_UNCOMPRESSED_TAG;
        out[1..1 + SCALAR_SIZE].copy_from_slice(&x.to_be_bytes());
        out[1 + SCALAR_SIZE..].copy_from_slice(&y.to_be_bytes());
        Ok(out)
    }

    /// `"04"` followed by x and y, 130 uppercase hex characters.
    pub fn public_key_hex(&self) -> Result<String, EcdsaError> {
        Ok(hex::encode_upper(self.public_key_bytes()?))
    }

    /// Parses an uncompressed public point from 130 hex characters.
    ///
    /// The leading byte must be `04`. The point is not checked against the
    /// curve equation.
    ///
    /// # Errors
    ///
    /// - `EcdsaError::Format` for a wrong length or leading byte
    /// - `EcdsaError::Parse` for non-hex characters
    pub fn parse_public_point(hex: &str) -> Result<C::Point, EcdsaError> {
        if hex.len() != PUBLIC_KEY_HEX_LEN {
            return Err(EcdsaError::format(format!(
                "public key hex must be {PUBLIC_KEY_HEX_LEN} characters, got {}",
                hex.len()
            )));
        }

        let mut bytes = [0u8; PUBLIC_KEY_SIZE];
        hex::decode_to_slice(hex, &mut bytes).map_err(curve::ParseU256Error::from)?;
        Self::point_from_bytes(&bytes)
    }

    /// Parses the 65-byte uncompressed SEC1 form.
    pub fn point_from_bytes(bytes: &[u8]) -> Result<C::Point, EcdsaError> {
        if bytes.len() != PUBLIC_KEY_SIZE {
            return Err(EcdsaError::format(format!(
                "public key must be {PUBLIC_KEY_SIZE} bytes, got {}",
                bytes.len()
            )));
        }
        if bytes[0] != SEC1_UNCOMPRESSED_TAG {
            return Err(EcdsaError::format(format!(
                "expected uncompressed point tag 0x04, got {:#04x}",
                bytes[0]
            )));
        }

        let x = read_scalar(&bytes[1..1 + SCALAR_SIZE]);
        let y = read_scalar(&bytes[1 + SCALAR_SIZE..]);
        Ok(C::Point::from_coordinates(&x, &y))
    }

    /// Signs `digest` with a fresh nonce drawn from `rng`.
    ///
    /// # Errors
    ///
    /// - `EcdsaError::MissingPrivateKey` for a verification-only key
    /// - `EcdsaError::EntropyExhausted` if the random source fails
    pub fn sign<R: TryCryptoRng + ?Sized>(
        &self,
        digest: &U256,
        rng: &mut R,
    ) -> Result<Signature, EcdsaError> {
        match self.material {
            KeyMaterial::Full { private_key, .. } | KeyMaterial::Deferred { private_key } => {
                signatures::sign::<C, R>(digest, &private_key, rng)
            }
            KeyMaterial::PublicOnly { .. } => Err(EcdsaError::MissingPrivateKey),
        }
    }

    /// Checks `signature` on `digest` against this key's public point.
    /// Always `false` while the public point is deferred.
    pub fn verify(&self, digest: &U256, signature: &Signature) -> bool {
        signatures::verify::<C>(digest, &signature.r, &signature.s, &self.public_key_point())
    }
}

impl<C: CurveDomain> fmt::Debug for KeyPair<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let public_key = self.public_key_point();
        f.debug_struct("KeyPair")
            .field("curve", &C::NAME)
            .field("has_private_key", &self.has_private_key())
            .field("public_key", &public_key)
            .finish_non_exhaustive()
    }
}
