//! Sizes and tag bytes of the key and signature encodings.

/// Length of a private key in hex: 32 bytes, zero-padded.
pub const PRIVATE_KEY_HEX_LEN: usize = 64;

/// Size of an uncompressed SEC1 public key: tag byte, 32-byte x, 32-byte y.
pub const PUBLIC_KEY_SIZE: usize = 65;

/// Length of an uncompressed public key in hex (`04` + x + y).
pub const PUBLIC_KEY_HEX_LEN: usize = 2 * PUBLIC_KEY_SIZE;

/// Leading byte of an uncompressed SEC1 point.
pub const SEC1_UNCOMPRESSED_TAG: u8 = 0x04;

/// Size of one big-endian coordinate or scalar.
pub const SCALAR_SIZE: usize = 32;

/// Length of a raw `r || s` signature in hex.
pub const SIGNATURE_HEX_LEN: usize = 4 * SCALAR_SIZE;

/// Size of the fixed-layout DER signature:
/// `30 45 02 20 <r:32> 02 21 00 <s:32>`.
pub const DER_SIGNATURE_SIZE: usize = 71;

/// SEQUENCE tag, content length, INTEGER tag, r length.
pub(crate) const DER_HEADER: [u8; 4] = [0x30, 0x45, 0x02, 0x20];

/// INTEGER tag, s length, sign-padding byte.
pub(crate) const DER_S_PREFIX: [u8; 3] = [0x02, 0x21, 0x00];

pub(crate) const DER_R_OFFSET: usize = DER_HEADER.len();
pub(crate) const DER_S_PREFIX_OFFSET: usize = DER_R_OFFSET + SCALAR_SIZE;
pub(crate) const DER_S_OFFSET: usize = DER_S_PREFIX_OFFSET + DER_S_PREFIX.len();
