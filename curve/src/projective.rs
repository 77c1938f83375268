use crate::affine::Affine;
use crate::basefield::BaseField;
use crate::group::ScalarBits;
use crate::Group;
use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Point in Jacobian coordinates (X:Y:Z) where (x,y) = (X/Z^2, Y/Z^3).
/// The point at infinity is represented with Z = 0.
#[derive(Copy, Clone, Debug)]
pub struct Projective {
    pub x: BaseField,
    pub y: BaseField,
    pub z: BaseField,
}

impl Projective {
    /// The point at infinity (identity element): (0:1:0)
    pub const INFINITY: Self = Projective {
        x: BaseField::ZERO,
        y: BaseField::ONE,
        z: BaseField::ZERO,
    };

    pub fn new(x: BaseField, y: BaseField, z: BaseField) -> Self {
        Projective { x, y, z }
    }

    #[inline]
    pub fn is_infinity(&self) -> bool {
        self.z.is_zero()
    }

    /// Convert to affine coordinates (one field inversion).
    pub fn to_affine(&self) -> Affine {
        if self.is_infinity() {
            return Affine::INFINITY;
        }

        let z_inv = self.z.inverse();
        let z_inv2 = z_inv.square();
        let x = self.x * z_inv2;
        let y = self.y * z_inv2 * z_inv;

        Affine::new(x, y)
    }

    pub fn from_affine(point: &Affine) -> Self {
        if point.is_infinity() {
            return Self::INFINITY;
        }

        Projective::new(point.x, point.y, BaseField::ONE)
    }

    /// Check if a point is on the curve: Y^2 = X^3 + a*X*Z^4 + b*Z^6.
    pub fn is_on_curve(&self) -> bool {
        if self.is_infinity() {
            return true;
        }

        let z2 = self.z.square();
        let z4 = z2.square();
        let z6 = z4 * z2;

        let x3 = self.x.square() * self.x;
        let lhs = self.y.square();
        let rhs = x3 + Affine::curve_a() * self.x * z4 + Affine::curve_b() * z6;

        lhs == rhs
    }

    pub fn generator() -> Self {
        Self::from_affine(&Affine::generator())
    }

    /// Point doubling (dbl-2007-bl).
    pub fn double(&self) -> Self {
        if self.is_infinity() || self.y.is_zero() {
            return Self::INFINITY;
        }

        let xx = self.x.square();
        let yy = self.y.square();
        let yyyy = yy.square();
        let zz = self.z.square();

        // S = 2*((X1+YY)^2-XX-YYYY)
        let s = ((self.x + yy).square() - xx - yyyy).double();
        // M = 3*XX+a*ZZ^2
        let m = xx.double() + xx + Affine::curve_a() * zz.square();
        let t = m.square() - s.double();

        let x3 = t;
        let eight_yyyy = yyyy.double().double().double();
        let y3 = m * (s - t) - eight_yyyy;
        let z3 = (self.y + self.z).square() - yy - zz;

        Projective::new(x3, y3, z3)
    }

    pub fn negate(&self) -> Self {
        if self.is_infinity() {
            return *self;
        }
        Projective::new(self.x, -self.y, self.z)
    }

    /// Multiply the fixed generator.
    pub fn mul_generator<S: ScalarBits + ?Sized>(scalar: &S) -> Self {
        Self::generator().scalar_mul_windowed(scalar)
    }
}

impl PartialEq for Projective {
    fn eq(&self, other: &Self) -> bool {
        match (self.is_infinity(), other.is_infinity()) {
            (true, true) => true,
            (false, false) => {
                // Cross-multiply to compare without inverting.
                let z1z1 = self.z.square();
                let z2z2 = other.z.square();
                self.x * z2z2 == other.x * z1z1
                    && self.y * z2z2 * other.z == other.y * z1z1 * self.z
            }
            _ => false,
        }
    }
}

impl Eq for Projective {}

impl Group for Projective {
    #[inline]
    fn identity() -> Self {
        Self::INFINITY
    }

    #[inline]
    fn is_identity(&self) -> bool {
        self.is_infinity()
    }

    #[inline]
    fn generator() -> Self {
        Projective::generator()
    }

    #[inline]
    fn double(&self) -> Self {
        Self::double(self)
    }

    #[inline]
    fn negate(&self) -> Self {
        Self::negate(self)
    }
}

// Addition (add-2007-bl)
impl Add for Projective {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        if self.is_infinity() {
            return other;
        }
        if other.is_infinity() {
            return self;
        }

        let z1z1 = self.z.square();
        let z2z2 = other.z.square();
        let u1 = self.x * z2z2;
        let u2 = other.x * z1z1;
        let s1 = self.y * other.z * z2z2;
        let s2 = other.y * self.z * z1z1;

        let h = u2 - u1;
        let r = (s2 - s1).double();

        if h.is_zero() {
            return if r.is_zero() {
                self.double()
            } else {
                Self::INFINITY
            };
        }

        let i = h.double().square();
        let j = h * i;
        let v = u1 * i;

        let x3 = r.square() - j - v.double();
        let y3 = r * (v - x3) - (s1 * j).double();
        let z3 = ((self.z + other.z).square() - z1z1 - z2z2) * h;

        Projective::new(x3, y3, z3)
    }
}

impl AddAssign for Projective {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

#[allow(clippy::suspicious_arithmetic_impl)]
impl Sub for Projective {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self + other.negate()
    }
}

impl SubAssign for Projective {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl Neg for Projective {
    type Output = Self;

    fn neg(self) -> Self {
        self.negate()
    }
}

// Conversions
impl From<Affine> for Projective {
    fn from(point: Affine) -> Self {
        Projective::from_affine(&point)
    }
}

impl From<&Affine> for Projective {
    fn from(point: &Affine) -> Self {
        Projective::from_affine(point)
    }
}

impl From<Projective> for Affine {
    fn from(point: Projective) -> Self {
        point.to_affine()
    }
}

impl From<&Projective> for Affine {
    fn from(point: &Projective) -> Self {
        point.to_affine()
    }
}
