//! `Fp2 = Fp[i] / (i^2 + 1)`: the quadratic extension the twist curve and
//! the rest of the tower are built over.

use super::fp::Fp;
use crate::bigint::Big;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fp2 {
    pub a: Fp,
    pub b: Fp,
}

impl Fp2 {
    pub const ZERO: Self = Fp2 {
        a: Fp::ZERO,
        b: Fp::ZERO,
    };

    pub fn one() -> Self {
        Fp2 {
            a: Fp::one(),
            b: Fp::ZERO,
        }
    }

    pub fn new(a: Fp, b: Fp) -> Self {
        Fp2 { a, b }
    }

    pub fn is_zero(&self) -> bool {
        self.a.is_zero() && self.b.is_zero()
    }

    pub fn equals(&self, y: &Fp2) -> bool {
        self.a.equals(&y.a) && self.b.equals(&y.b)
    }

    /// Constant-time conditional move, component-wise. `cond` must be `0`
    /// or `1`.
    pub fn cmove_ct(&mut self, other: &Fp2, cond: i64) {
        self.a.cmove_ct(&other.a, cond);
        self.b.cmove_ct(&other.b, cond);
    }

    pub fn add(&self, y: &Fp2) -> Fp2 {
        Fp2 {
            a: self.a.add(&y.a),
            b: self.b.add(&y.b),
        }
    }

    pub fn sub(&self, y: &Fp2) -> Fp2 {
        Fp2 {
            a: self.a.sub(&y.a),
            b: self.b.sub(&y.b),
        }
    }

    pub fn neg(&self) -> Fp2 {
        Fp2 {
            a: self.a.neg(),
            b: self.b.neg(),
        }
    }

    /// Complex conjugate: `(a, -b)`.
    pub fn conj(&self) -> Fp2 {
        Fp2 {
            a: self.a,
            b: self.b.neg(),
        }
    }

    /// Karatsuba multiplication: three `Fp` multiplies instead of four.
    pub fn mul(&self, y: &Fp2) -> Fp2 {
        let z0 = self.a.mul(&y.a);
        let z1 = self.b.mul(&y.b);
        let cross = self.a.add(&self.b).mul(&y.a.add(&y.b));
        Fp2 {
            a: z0.sub(&z1),
            b: cross.sub(&z0).sub(&z1),
        }
    }

    /// Squaring via two `Fp` multiplies: `(a+bi)^2 = (a-b)(a+b) + 2ab*i`.
    pub fn sqr(&self) -> Fp2 {
        let m = self.a.mul(&self.b);
        let real = self.a.add(&self.b).mul(&self.a.sub(&self.b));
        Fp2 {
            a: real,
            b: m.add(&m),
        }
    }

    /// Multiplies by the non-residue `1 + i`: `(a+bi)(1+i) = (a-b) + (a+b)i`.
    pub fn mul_ip(&self) -> Fp2 {
        Fp2 {
            a: self.a.sub(&self.b),
            b: self.a.add(&self.b),
        }
    }

    /// Multiplies by `i`: `(a+bi)i = -b + ai`.
    pub fn times_i(&self) -> Fp2 {
        Fp2 {
            a: self.b.neg(),
            b: self.a,
        }
    }

    /// Divides by `1 + i`, i.e. multiplies by `(1-i)/2`.
    pub fn div_ip(&self) -> Fp2 {
        let sum = self.a.add(&self.b);
        let diff = self.b.sub(&self.a);
        let inv2 = inv_two();
        Fp2 {
            a: sum.mul(&inv2),
            b: diff.mul(&inv2),
        }
    }

    /// Divides by `(1+i)/2`, i.e. multiplies by `1 - i`.
    pub fn div_ip2(&self) -> Fp2 {
        Fp2 {
            a: self.a.add(&self.b),
            b: self.b.sub(&self.a),
        }
    }

    /// Fermat inverse via the norm: `conj(a) / (a*conj(a))`.
    pub fn inverse(&self) -> Fp2 {
        let norm = self.a.sqr().add(&self.b.sqr());
        let inv_norm = norm.inverse();
        Fp2 {
            a: self.a.mul(&inv_norm),
            b: self.b.neg().mul(&inv_norm),
        }
    }

    /// Square root via the standard reduction to an `Fp` square root of
    /// the norm, followed by a single `Fp` square root to recover the
    /// real part. Returns `None` when `self` is a non-residue.
    pub fn sqrt(&self) -> Option<Fp2> {
        if self.is_zero() {
            return Some(Fp2::ZERO);
        }
        if self.b.is_zero() {
            if let Some(r) = self.a.sqrt() {
                return Some(Fp2::new(r, Fp::ZERO));
            }
            let neg_a = self.a.neg();
            return neg_a.sqrt().map(|r| Fp2::new(Fp::ZERO, r));
        }

        let alpha = self.a.sqr().add(&self.b.sqr());
        let alpha_sqrt = alpha.sqrt()?;
        let inv2 = inv_two();

        let mut delta = self.a.add(&alpha_sqrt).mul(&inv2);
        if delta.jacobi() != 1 {
            delta = self.a.sub(&alpha_sqrt).mul(&inv2);
        }
        let x0 = delta.sqrt()?;
        let two_x0 = x0.add(&x0);
        let x1 = self.b.mul(&two_x0.inverse());
        Some(Fp2::new(x0, x1))
    }

    pub fn jacobi(&self) -> i32 {
        let norm = self.a.sqr().add(&self.b.sqr());
        norm.jacobi()
    }
}

fn inv_two() -> Fp {
    Fp::from_big(Big::from_u32(2)).inverse()
}

impl core::ops::Add for Fp2 {
    type Output = Fp2;
    fn add(self, rhs: Fp2) -> Fp2 {
        Fp2::add(&self, &rhs)
    }
}

impl core::ops::Sub for Fp2 {
    type Output = Fp2;
    fn sub(self, rhs: Fp2) -> Fp2 {
        Fp2::sub(&self, &rhs)
    }
}

impl core::ops::Mul for Fp2 {
    type Output = Fp2;
    fn mul(self, rhs: Fp2) -> Fp2 {
        Fp2::mul(&self, &rhs)
    }
}

impl core::ops::Neg for Fp2 {
    type Output = Fp2;
    fn neg(self) -> Fp2 {
        Fp2::neg(&self)
    }
}
