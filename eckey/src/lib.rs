//! ECDSA key pairs and signatures over secp256k1.
//!
//! This library provides:
//! - Key pairs with lazy or eager public key derivation
//! - ECDSA signing with a caller-supplied secure random source
//! - Verification that reports invalid signatures as `false`, never as errors
//! - A fixed 71-byte DER layout for `(r, s)`
//!
//! Signing and verification are generic over [`CurveDomain`]; [`Secp256k1`]
//! is the only domain shipped.
//!
//! # Example
//!
//! ```
//! use eckey::{KeyPair, Secp256k1, Signature, hash_message};
//!
//! let mut rng = rand::rng();
//! let key = KeyPair::<Secp256k1>::random(&mut rng).expect("keygen failed");
//!
//! let digest = hash_message(b"transfer 10 coins");
//! let signature = key.sign(&digest, &mut rng).expect("signing failed");
//!
//! // Ship the public key and the DER signature to a verifier.
//! let public_hex = key.public_key_hex().expect("public key is derived");
//! let der = signature.to_der();
//!
//! let verifier = KeyPair::<Secp256k1>::from_public_hex(&public_hex).expect("valid hex");
//! let received = Signature::from_der(&der).expect("valid DER");
//! assert!(verifier.verify(&digest, &received));
//! ```
//!
//! # Security Considerations
//!
//! - Pass a cryptographically secure random source; each signature draws a
//!   fresh nonce from it
//! - The private key is held as a plain integer and is not zeroized on drop
//! - Arithmetic is not constant-time

mod constants;
pub mod der;
mod errors;
mod keys;
mod signatures;


pub use constants::{
    DER_SIGNATURE_SIZE, PRIVATE_KEY_HEX_LEN, PUBLIC_KEY_HEX_LEN, PUBLIC_KEY_SIZE,
    SIGNATURE_HEX_LEN,
};
pub use curve::{CurveDomain, Secp256k1, U256};
pub use errors::EcdsaError;
pub use keys::KeyPair;
pub use signatures::{Signature, hash_message, sign, verify};
