use crate::affine::Affine;
use crate::basefield::BaseField;
use crate::group::CurveDomain;
use crate::scalarfield::ScalarField;
use crate::uint::U256;

/// The secp256k1 curve domain.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Secp256k1;

impl CurveDomain for Secp256k1 {
    type Point = Affine;
    type Scalar = ScalarField;

    const NAME: &'static str = "secp256k1";

    fn order() -> U256 {
        ScalarField::modulus()
    }

    fn field_prime() -> U256 {
        BaseField::modulus()
    }

    fn double_scalar_mul_basepoint(a: &U256, b: &U256, point: &Affine) -> Affine {
        Affine::double_scalar_mul_basepoint(a, b, point)
    }
}
