use crate::field::{FieldParams, Fp};

/// Parameters of the secp256k1 coordinate field, p = 2^256 - 2^32 - 977.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct BaseParams;

impl FieldParams for BaseParams {
    const MODULUS: [u64; 4] = [
        0xfffffffefffffc2f,
        0xffffffffffffffff,
        0xffffffffffffffff,
        0xffffffffffffffff,
    ];
    const R: [u64; 4] = [0x00000001000003d1, 0, 0, 0];
    const R2: [u64; 4] = [0x000007a2000e90a1, 0x0000000000000001, 0, 0];
    const MU: u64 = 0xd838091dd2253531;
}

/// Field of point coordinates.
pub type BaseField = Fp<BaseParams>;
