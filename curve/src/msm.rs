use crate::affine::Affine;
use crate::group::ScalarBits;
use crate::projective::Projective;

/// Compute a * G + b * P with one shared doubling chain (Shamir's trick).
pub fn double_scalar_mul_basepoint_affine<A, B>(a: &A, b: &B, point: &Affine) -> Affine
where
    A: ScalarBits + ?Sized,
    B: ScalarBits + ?Sized,
{
    let g = Projective::generator();
    let p = Projective::from_affine(point);
    let g_plus_p = g + p;

    let a_limbs = a.to_u64_limbs();
    let b_limbs = b.to_u64_limbs();
    let mut result = Projective::INFINITY;

    for limb_idx in (0..4).rev() {
        let a_limb = a_limbs[limb_idx];
        let b_limb = b_limbs[limb_idx];
        for shift in (0..64).rev() {
            result = result.double();

            match ((a_limb >> shift) & 1, (b_limb >> shift) & 1) {
                (1, 1) => result += g_plus_p,
                (1, 0) => result += g,
                (0, 1) => result += p,
                _ => {}
            }
        }
    }

    result.to_affine()
}
