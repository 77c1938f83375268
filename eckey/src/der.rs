//! Fixed-layout DER encoding of `(r, s)`.
//!
//! The layout is always 71 bytes:
//!
//! ```text
//! 30 45            SEQUENCE, 69 content bytes
//! 02 20 <r:32>     INTEGER, r unpadded
//! 02 21 00 <s:32>  INTEGER, s with one sign-padding byte
//! ```
//!
//! This is a simplification of DER kept for byte-exact compatibility with
//! existing consumers. Strict DER would pad `r` when its high bit is set and
//! strip leading zero bytes from both integers; neither is done here, so the
//! output is not canonical DER for every `(r, s)`.

use curve::U256;

use crate::constants::{
    DER_HEADER, DER_R_OFFSET, DER_S_OFFSET, DER_S_PREFIX, DER_S_PREFIX_OFFSET,
    DER_SIGNATURE_SIZE, SCALAR_SIZE,
};
use crate::errors::EcdsaError;
use crate::signatures::{Signature, read_scalar};

/// Encodes `(r, s)` into the fixed 71-byte layout.
///
/// # Example
///
/// ```
/// use eckey::U256;
///
/// let der = eckey::der::encode(&U256::from_u64(1), &U256::from_u64(2));
/// assert_eq!(der.len(), 71);
/// assert_eq!(&der[..4], &[0x30, 0x45, 0x02, 0x20]);
/// assert_eq!(der[70], 2);
/// ```
pub fn encode(r: &U256, s: &U256) -> [u8; DER_SIGNATURE_SIZE] {
    let mut out = [0u8; DER_SIGNATURE_SIZE];
    out[..DER_R_OFFSET].copy_from_slice(&DER_HEADER);
    out[DER_R_OFFSET..DER_S_PREFIX_OFFSET].copy_from_slice(&r.to_be_bytes());
    out[DER_S_PREFIX_OFFSET..DER_S_OFFSET].copy_from_slice(&DER_S_PREFIX);
    out[DER_S_OFFSET..].copy_from_slice(&s.to_be_bytes());
    out
}

/// Decodes the fixed layout produced by [`encode`].
///
/// Every structural byte is checked; the buffer must be exactly 71 bytes.
/// The values of `r` and `s` are not range-checked.
pub fn decode(bytes: &[u8]) -> Result<Signature, EcdsaError> {
    if bytes.len() != DER_SIGNATURE_SIZE {
        return Err(EcdsaError::format(format!(
            "DER signature must be {DER_SIGNATURE_SIZE} bytes, got {}",
            bytes.len()
        )));
    }
    if bytes[..DER_R_OFFSET] != DER_HEADER {
        return Err(EcdsaError::format("unexpected DER sequence header"));
    }
    if bytes[DER_S_PREFIX_OFFSET..DER_S_OFFSET] != DER_S_PREFIX {
        return Err(EcdsaError::format("unexpected DER integer header for s"));
    }

    Ok(Signature {
        r: read_scalar(&bytes[DER_R_OFFSET..DER_R_OFFSET + SCALAR_SIZE]),
        s: read_scalar(&bytes[DER_S_OFFSET..]),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (U256, U256) {
        (
            U256::from_hex("61CCAE675AE09AF5D3B1831D1604B6A578DCBB3493DC04A7077E4BD194CBBB6C")
                .unwrap(),
            U256::from_hex("AE1DA0CA5D73FEE85885F31BEF5894F2D2CB3E8392163E20127368E33534B53D")
                .unwrap(),
        )
    }

    #[test]
    fn test_encode_known_vector() {
        let (r, s) = sample();
        let expected = hex::decode(concat!(
            "30450220",
            "61ccae675ae09af5d3b1831d1604b6a578dcbb3493dc04a7077e4bd194cbbb6c",
            "022100",
            "ae1da0ca5d73fee85885f31bef5894f2d2cb3e8392163e20127368e33534b53d",
        ))
        .unwrap();

        let der = encode(&r, &s);
        assert_eq!(der.len(), 71);
        assert_eq!(&der[..4], &[0x30, 0x45, 0x02, 0x20]);
        assert_eq!(der.to_vec(), expected);
    }

    #[test]
    fn test_decode_round_trip() {
        let (r, s) = sample();
        let decoded = decode(&encode(&r, &s)).unwrap();
        assert_eq!(decoded, Signature { r, s });

        // Small values keep their fixed width.
        let small = decode(&encode(&U256::ONE, &U256::from_u64(2))).unwrap();
        assert_eq!(small, Signature::new(U256::ONE, U256::from_u64(2)));
    }

    #[test]
    fn test_decode_rejects_wrong_length() {
        let (r, s) = sample();
        let der = encode(&r, &s);

        assert!(matches!(decode(&der[..70]), Err(EcdsaError::Format { .. })));
        assert!(matches!(decode(&[]), Err(EcdsaError::Format { .. })));

        let mut long = der.to_vec();
        long.push(0);
        assert!(matches!(decode(&long), Err(EcdsaError::Format { .. })));
    }

    #[test]
    fn test_decode_rejects_bad_tags() {
        let (r, s) = sample();
        for idx in [0usize, 1, 2, 3, 36, 37, 38] {
            let mut der = encode(&r, &s);
            der[idx] ^= 0x01;
            assert!(
                matches!(decode(&der), Err(EcdsaError::Format { .. })),
                "byte {idx} was not checked"
            );
        }
    }
}
