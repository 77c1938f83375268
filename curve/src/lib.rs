//! secp256k1 elliptic curve group.
//!
//! This crate provides a 256-bit integer type, Montgomery prime fields for
//! the coordinate field and the scalar field, affine and Jacobian curve
//! points, and the `CurveDomain` trait through which signature code stays
//! generic over the curve it runs on.

mod affine;
mod basefield;
mod domain;
mod field;
mod group;
mod msm;
mod projective;
mod random;
mod scalarfield;
mod uint;

pub use affine::Affine;
pub use basefield::{BaseField, BaseParams};
pub use domain::Secp256k1;
pub use field::{FieldParams, Fp};
pub use group::{AffineCoordinates, CurveDomain, Group, PrimeScalar, ScalarBits};
pub use msm::double_scalar_mul_basepoint_affine;
pub use projective::Projective;
pub use random::random_nonzero_below;
pub use scalarfield::{ScalarField, ScalarParams};
pub use uint::{ParseU256Error, U256, U256_HEX_DIGITS};
