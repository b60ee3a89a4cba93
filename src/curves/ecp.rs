//! `G1`: the short Weierstrass curve `y^2 = x^3 + b` over `Fp`, in
//! projective coordinates with the point at infinity signaled by `z == 0`.

use crate::bigint::Big;
use crate::fields::Fp;
use crate::rom;

#[derive(Clone, Copy, Debug)]
pub struct Ecp {
    pub x: Fp,
    pub y: Fp,
    pub z: Fp,
}

/// Affine form, used at the Miller-loop boundary and for serialization.
#[derive(Clone, Copy, Debug)]
pub struct G1Affine {
    pub x: Fp,
    pub y: Fp,
    pub infinity: bool,
}

fn curve_b() -> Fp {
    Fp::from_big(Big::from_u32(rom::CURVE_B_I as u32))
}

fn curve_b3() -> Fp {
    Fp::from_big(Big::from_u32(3 * rom::CURVE_B_I as u32))
}

impl Ecp {
    pub fn inf() -> Self {
        Ecp {
            x: Fp::ZERO,
            y: Fp::one(),
            z: Fp::ZERO,
        }
    }

    pub fn generator() -> Self {
        Ecp {
            x: Fp::from_big(rom::CURVE_GX),
            y: Fp::from_big(rom::CURVE_GY),
            z: Fp::one(),
        }
    }

    pub fn is_infinity(&self) -> bool {
        self.z.is_zero()
    }

    /// Installs the point `(x, y)` after checking `y^2 = x^3 + b`; on
    /// failure returns the point at infinity.
    pub fn setxy(x: Fp, y: Fp) -> Self {
        let rhs = x.sqr().mul(&x).add(&curve_b());
        if y.sqr().equals(&rhs) {
            Ecp { x, y, z: Fp::one() }
        } else {
            Ecp::inf()
        }
    }

    /// Installs a point from `x` and the sign bit of `y` (its parity),
    /// recovering `y` via `Fp::sqrt`. Falls back to infinity when `x` does
    /// not lie on the curve.
    pub fn setxi(x: Fp, s: i64) -> Self {
        let rhs = x.sqr().mul(&x).add(&curve_b());
        match rhs.sqrt() {
            Some(mut y) => {
                if y.redc().parity() != s {
                    y = y.neg();
                }
                Ecp { x, y, z: Fp::one() }
            }
            None => Ecp::inf(),
        }
    }

    pub fn neg(&self) -> Ecp {
        Ecp {
            x: self.x,
            y: self.y.neg(),
            z: self.z,
        }
    }

    pub fn to_affine(&self) -> G1Affine {
        if self.is_infinity() {
            return G1Affine {
                x: Fp::ZERO,
                y: Fp::one(),
                infinity: true,
            };
        }
        let zinv = self.z.inverse();
        G1Affine {
            x: self.x.mul(&zinv),
            y: self.y.mul(&zinv),
            infinity: false,
        }
    }

    pub fn equals(&self, other: &Ecp) -> bool {
        let l = self.x.mul(&other.z);
        let r = other.x.mul(&self.z);
        if !l.equals(&r) {
            return false;
        }
        let l = self.y.mul(&other.z);
        let r = other.y.mul(&self.z);
        l.equals(&r)
    }

    /// Complete projective addition for `a = 0` curves (Renes–Costello–
    /// Batina, "Complete addition formulas for prime order elliptic
    /// curves", Algorithm 7): exception-free, 12 field multiplications
    /// plus 2 multiplications by the constant `b3 = 3b`.
    pub fn add(&self, q: &Ecp) -> Ecp {
        let (x1, y1, z1) = (self.x, self.y, self.z);
        let (x2, y2, z2) = (q.x, q.y, q.z);
        let b3 = curve_b3();

        let t0 = x1.mul(&x2);
        let t1 = y1.mul(&y2);
        let t2 = z1.mul(&z2);
        let mut t3 = x1.add(&y1);
        let mut t4 = x2.add(&y2);
        t3 = t3.mul(&t4);
        t4 = t0.add(&t1);
        t3 = t3.sub(&t4);
        t4 = y1.add(&z1);
        let mut x3 = y2.add(&z2);
        t4 = t4.mul(&x3);
        x3 = t1.add(&t2);
        t4 = t4.sub(&x3);
        x3 = x1.add(&z1);
        let mut y3 = x2.add(&z2);
        x3 = x3.mul(&y3);
        y3 = t0.add(&t2);
        y3 = x3.sub(&y3);
        x3 = t0.add(&t0);
        let t0b = x3.add(&t0);
        let t2b = b3.mul(&t2);
        let mut z3 = t1.add(&t2b);
        let t1b = t1.sub(&t2b);
        y3 = b3.mul(&y3);
        x3 = t4.mul(&y3);
        let t2c = t3.mul(&t1b);
        x3 = t2c.sub(&x3);
        y3 = y3.mul(&t0b);
        let t1c = t0b.mul(&t1b);
        y3 = t1c.add(&y3);
        let t0c = t0b.mul(&t3);
        z3 = z3.mul(&t4);
        z3 = z3.add(&t0c);

        Ecp { x: x3, y: y3, z: z3 }
    }

    /// Complete projective doubling for `a = 0` curves (Renes–Costello–
    /// Batina, Algorithm 9): 6 field multiplications plus 2 multiplications
    /// by `b3 = 3b`.
    pub fn dbl(&self) -> Ecp {
        let (x, y, z) = (self.x, self.y, self.z);
        let b3 = curve_b3();

        let t0 = y.sqr();
        let mut z3 = t0.add(&t0);
        z3 = z3.add(&z3);
        z3 = z3.add(&z3);
        let t1 = y.mul(&z);
        let mut t2 = z.sqr();
        t2 = b3.mul(&t2);
        let mut x3 = t2.mul(&z3);
        let mut y3 = t0.add(&t2);
        z3 = t1.mul(&z3);
        let t1b = t2.add(&t2);
        let t2b = t1b.add(&t2);
        let t0b = t0.sub(&t2b);
        y3 = t0b.mul(&y3);
        y3 = x3.add(&y3);
        let t1c = x.mul(&y);
        x3 = t0b.mul(&t1c);
        x3 = x3.add(&x3);

        Ecp { x: x3, y: y3, z: z3 }
    }

    fn cmove_ct(&mut self, other: &Ecp, cond: i64) {
        let mut x = self.x.reduced();
        let mut y = self.y.reduced();
        let mut z = self.z.reduced();
        x.f.cmove(&other.x.reduced().f, cond);
        y.f.cmove(&other.y.reduced().f, cond);
        z.f.cmove(&other.z.reduced().f, cond);
        *self = Ecp { x, y, z };
    }

    /// Scalar multiplication via a fixed-iteration-count double-and-add
    /// ladder: every step doubles and unconditionally computes the
    /// tentative addition, then `cmove`s the result in based on the
    /// current scalar bit, so the sequence of field operations executed
    /// does not depend on `e`'s value — only on `CURVE_ORDER`'s bit
    /// length, which is public.
    pub fn mul(&self, e: &Big) -> Ecp {
        let fixed_bits = rom::CURVE_ORDER.bit_length();
        let mut t = *e;
        t.norm();

        let mut r = Ecp::inf();
        for i in (0..fixed_bits).rev() {
            r = r.dbl();
            let added = r.add(self);
            r.cmove_ct(&added, t.bit(i));
        }

        let inf = Ecp::inf();
        r.cmove_ct(&inf, self.is_infinity() as i64);
        r
    }

    /// Joint double-scalar `e*self + f*q`, via the same fixed-iteration
    /// ladder, doubling once per bit and conditionally adding each of the
    /// two terms.
    pub fn mul2(&self, e: &Big, q: &Ecp, f: &Big) -> Ecp {
        let fixed_bits = rom::CURVE_ORDER.bit_length();
        let mut te = *e;
        te.norm();
        let mut tf = *f;
        tf.norm();

        let mut r = Ecp::inf();
        for i in (0..fixed_bits).rev() {
            r = r.dbl();
            let with_p = r.add(self);
            r.cmove_ct(&with_p, te.bit(i));
            let with_q = r.add(q);
            r.cmove_ct(&with_q, tf.bit(i));
        }
        r
    }

    pub fn to_bytes(&self, compress: bool) -> Vec<u8> {
        let a = self.to_affine();
        if a.infinity {
            return if compress {
                vec![0u8; 33]
            } else {
                vec![0u8; 65]
            };
        }
        let x = a.x.redc();
        if compress {
            let mut out = vec![0u8; 33];
            let y = a.y.redc();
            out[0] = if y.parity() == 0 { 0x02 } else { 0x03 };
            out[1..33].copy_from_slice(&x.to_bytes());
            out
        } else {
            let mut out = vec![0u8; 65];
            out[0] = 0x04;
            out[1..33].copy_from_slice(&x.to_bytes());
            out[33..65].copy_from_slice(&a.y.redc().to_bytes());
            out
        }
    }

    /// Decodes a compressed (`0x02`/`0x03`) or uncompressed (`0x04`) `G1`
    /// point, or the all-zero infinity encoding `to_bytes` produces.
    pub fn try_from_bytes(bytes: &[u8]) -> Result<Ecp, DecodeError> {
        if bytes.is_empty() {
            return Ok(Ecp::inf());
        }
        let tag = bytes[0];
        if tag == 0x00 {
            return Ok(Ecp::inf());
        }
        if bytes.len() < 33 {
            return Err(DecodeError::Truncated);
        }
        let mut xb = [0u8; 32];
        xb.copy_from_slice(&bytes[1..33]);
        let xbig = Big::from_bytes(&xb);
        if xbig.cmp(&rom::MODULUS) != core::cmp::Ordering::Less {
            return Err(DecodeError::CoordinateOutOfRange);
        }
        let x = Fp::from_big(xbig);

        match tag {
            0x02 | 0x03 => {
                let p = Ecp::setxi(x, if tag == 0x02 { 0 } else { 1 });
                if p.is_infinity() {
                    Err(DecodeError::NotOnCurve)
                } else {
                    Ok(p)
                }
            }
            0x04 => {
                if bytes.len() < 65 {
                    return Err(DecodeError::Truncated);
                }
                let mut yb = [0u8; 32];
                yb.copy_from_slice(&bytes[33..65]);
                let ybig = Big::from_bytes(&yb);
                if ybig.cmp(&rom::MODULUS) != core::cmp::Ordering::Less {
                    return Err(DecodeError::CoordinateOutOfRange);
                }
                Ok(Ecp::setxy(x, Fp::from_big(ybig)))
            }
            _ => Err(DecodeError::BadTag(tag)),
        }
    }

    /// Infallible convenience wrapper over [`Ecp::try_from_bytes`]: malformed
    /// input decodes to the point at infinity rather than propagating an
    /// error, matching the crate's sentinel-based fallibility convention.
    pub fn from_bytes(bytes: &[u8]) -> Ecp {
        Ecp::try_from_bytes(bytes).unwrap_or_else(|_| Ecp::inf())
    }
}

/// Why a byte string failed to decode as a `G1` point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecodeError {
    /// The tag byte wasn't one of `0x00`, `0x02`, `0x03`, `0x04`.
    BadTag(u8),
    /// Fewer bytes than the tag promised.
    Truncated,
    /// A coordinate was not reduced modulo the field prime.
    CoordinateOutOfRange,
    /// The tag claimed a point but no `y` (or `y` of the requested parity)
    /// exists for that `x` on the curve.
    NotOnCurve,
}

