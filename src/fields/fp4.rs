//! `Fp4 = Fp2[j] / (j^2 - (1+i))`: the quadratic extension over `Fp2` used
//! as a layer of the main tower between `Fp2` and `Fp12`.

use super::fp2::Fp2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fp4 {
    pub a: Fp2,
    pub b: Fp2,
}

impl Fp4 {
    pub const ZERO: Self = Fp4 {
        a: Fp2::ZERO,
        b: Fp2::ZERO,
    };

    pub fn one() -> Self {
        Fp4 {
            a: Fp2::one(),
            b: Fp2::ZERO,
        }
    }

    pub fn new(a: Fp2, b: Fp2) -> Self {
        Fp4 { a, b }
    }

    pub fn is_zero(&self) -> bool {
        self.a.is_zero() && self.b.is_zero()
    }

    pub fn equals(&self, y: &Fp4) -> bool {
        self.a.equals(&y.a) && self.b.equals(&y.b)
    }

    /// Constant-time conditional move, component-wise. `cond` must be `0`
    /// or `1`.
    pub fn cmove_ct(&mut self, other: &Fp4, cond: i64) {
        self.a.cmove_ct(&other.a, cond);
        self.b.cmove_ct(&other.b, cond);
    }

    pub fn add(&self, y: &Fp4) -> Fp4 {
        Fp4 {
            a: self.a.add(&y.a),
            b: self.b.add(&y.b),
        }
    }

    pub fn sub(&self, y: &Fp4) -> Fp4 {
        Fp4 {
            a: self.a.sub(&y.a),
            b: self.b.sub(&y.b),
        }
    }

    pub fn neg(&self) -> Fp4 {
        Fp4 {
            a: self.a.neg(),
            b: self.b.neg(),
        }
    }

    /// Conjugate over `Fp2`: `(a, -b)`.
    pub fn conj(&self) -> Fp4 {
        Fp4 {
            a: self.a,
            b: self.b.neg(),
        }
    }

    /// Karatsuba multiplication (three `Fp2` multiplies): `j^2 = 1+i`, so
    /// the cross term's `b*d` contribution is folded in via `mul_ip`.
    pub fn mul(&self, y: &Fp4) -> Fp4 {
        let z0 = self.a.mul(&y.a);
        let z1 = self.b.mul(&y.b);
        let cross = self.a.add(&self.b).mul(&y.a.add(&y.b));
        Fp4 {
            a: z0.add(&z1.mul_ip()),
            b: cross.sub(&z0).sub(&z1),
        }
    }

    /// `(a+bj)^2 = (a^2 + (1+i)*b^2) + 2ab*j`, two `Fp2` squarings and one
    /// multiply.
    pub fn sqr(&self) -> Fp4 {
        let m = self.a.mul(&self.b);
        let a2 = self.a.sqr();
        let b2 = self.b.sqr();
        Fp4 {
            a: a2.add(&b2.mul_ip()),
            b: m.add(&m),
        }
    }

    pub fn mul_ip(&self) -> Fp4 {
        Fp4 {
            a: self.a.mul_ip(),
            b: self.b.mul_ip(),
        }
    }

    /// Multiplies by the cubic-tower generator `j` used to build `Fp12 =
    /// Fp4[w]/(w^3 - j)`: `(a+bj)*j = b*(1+i) + a*j`.
    pub fn mul_j(&self) -> Fp4 {
        Fp4 {
            a: self.b.mul_ip(),
            b: self.a,
        }
    }

    /// Applies the `p`-power Frobenius to an `Fp4` coefficient sitting
    /// inside an `Fp12` element: conjugate both `Fp2` halves, then twist
    /// the odd-degree half by the ROM Frobenius constant `f`.
    pub fn frob(&self, f: &Fp2) -> Fp4 {
        Fp4 {
            a: self.a.conj(),
            b: self.b.conj().mul(f),
        }
    }

    /// Fermat-style inverse via the `Fp2` norm: `a^2 - (1+i)*b^2`.
    pub fn inverse(&self) -> Fp4 {
        let norm = self.a.sqr().sub(&self.b.sqr().mul_ip());
        let inv_norm = norm.inverse();
        Fp4 {
            a: self.a.mul(&inv_norm),
            b: self.b.neg().mul(&inv_norm),
        }
    }

}

impl core::ops::Add for Fp4 {
    type Output = Fp4;
    fn add(self, rhs: Fp4) -> Fp4 {
        Fp4::add(&self, &rhs)
    }
}

impl core::ops::Sub for Fp4 {
    type Output = Fp4;
    fn sub(self, rhs: Fp4) -> Fp4 {
        Fp4::sub(&self, &rhs)
    }
}

impl core::ops::Mul for Fp4 {
    type Output = Fp4;
    fn mul(self, rhs: Fp4) -> Fp4 {
        Fp4::mul(&self, &rhs)
    }
}

impl core::ops::Neg for Fp4 {
    type Output = Fp4;
    fn neg(self) -> Fp4 {
        Fp4::neg(&self)
    }
}
