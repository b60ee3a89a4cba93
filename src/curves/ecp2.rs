//! `G2`: the sextic twist curve over `Fp2`, `y^2 = x^3 + b'` with
//! `b' = CURVE_B_I / (1+i)`, in projective coordinates.

use crate::bigint::Big;
use crate::fields::{Fp, Fp2};
use crate::rom;

#[derive(Clone, Copy, Debug)]
pub struct Ecp2 {
    pub x: Fp2,
    pub y: Fp2,
    pub z: Fp2,
}

#[derive(Clone, Copy, Debug)]
pub struct G2Affine {
    pub x: Fp2,
    pub y: Fp2,
    pub infinity: bool,
}

fn curve_b() -> Fp2 {
    let b = Fp::from_big(Big::from_u32(rom::CURVE_B_I as u32));
    Fp2::new(b, Fp::ZERO).div_ip()
}

fn curve_b3() -> Fp2 {
    let b3 = curve_b();
    b3.add(&b3).add(&b3)
}

impl Ecp2 {
    pub fn inf() -> Self {
        Ecp2 {
            x: Fp2::ZERO,
            y: Fp2::one(),
            z: Fp2::ZERO,
        }
    }

    pub fn generator() -> Self {
        Ecp2 {
            x: Fp2::new(Fp::from_big(rom::CURVE_PXA), Fp::from_big(rom::CURVE_PXB)),
            y: Fp2::new(Fp::from_big(rom::CURVE_PYA), Fp::from_big(rom::CURVE_PYB)),
            z: Fp2::one(),
        }
    }

    pub fn is_infinity(&self) -> bool {
        self.z.is_zero()
    }

    pub fn setxy(x: Fp2, y: Fp2) -> Self {
        let rhs = x.sqr().mul(&x).add(&curve_b());
        if y.sqr().equals(&rhs) {
            Ecp2 {
                x,
                y,
                z: Fp2::one(),
            }
        } else {
            Ecp2::inf()
        }
    }

    pub fn setxi(x: Fp2, s: i64) -> Self {
        let rhs = x.sqr().mul(&x).add(&curve_b());
        match rhs.sqrt() {
            Some(mut y) => {
                if y.a.redc().parity() != s {
                    y = y.neg();
                }
                Ecp2 {
                    x,
                    y,
                    z: Fp2::one(),
                }
            }
            None => Ecp2::inf(),
        }
    }

    pub fn neg(&self) -> Ecp2 {
        Ecp2 {
            x: self.x,
            y: self.y.neg(),
            z: self.z,
        }
    }

    pub fn to_affine(&self) -> G2Affine {
        if self.is_infinity() {
            return G2Affine {
                x: Fp2::ZERO,
                y: Fp2::one(),
                infinity: true,
            };
        }
        let zinv = self.z.inverse();
        G2Affine {
            x: self.x.mul(&zinv),
            y: self.y.mul(&zinv),
            infinity: false,
        }
    }

    pub fn equals(&self, other: &Ecp2) -> bool {
        let l = self.x.mul(&other.z);
        let r = other.x.mul(&self.z);
        if !l.equals(&r) {
            return false;
        }
        let l = self.y.mul(&other.z);
        let r = other.y.mul(&self.z);
        l.equals(&r)
    }

    /// Same complete `a = 0` addition formulas as [`super::ecp::Ecp`],
    /// instantiated over `Fp2`.
    pub fn add(&self, q: &Ecp2) -> Ecp2 {
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

        Ecp2 { x: x3, y: y3, z: z3 }
    }

    pub fn dbl(&self) -> Ecp2 {
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

        Ecp2 { x: x3, y: y3, z: z3 }
    }

    fn cmove_ct(&mut self, other: &Ecp2, cond: i64) {
        let mut x = self.x;
        let mut y = self.y;
        let mut z = self.z;
        x.a.reduce();
        x.b.reduce();
        y.a.reduce();
        y.b.reduce();
        z.a.reduce();
        z.b.reduce();
        let o = other.to_reduced();
        x.a.f.cmove(&o.x.a.f, cond);
        x.b.f.cmove(&o.x.b.f, cond);
        y.a.f.cmove(&o.y.a.f, cond);
        y.b.f.cmove(&o.y.b.f, cond);
        z.a.f.cmove(&o.z.a.f, cond);
        z.b.f.cmove(&o.z.b.f, cond);
        *self = Ecp2 { x, y, z };
    }

    fn to_reduced(&self) -> Ecp2 {
        Ecp2 {
            x: Fp2::new(self.x.a.reduced(), self.x.b.reduced()),
            y: Fp2::new(self.y.a.reduced(), self.y.b.reduced()),
            z: Fp2::new(self.z.a.reduced(), self.z.b.reduced()),
        }
    }

    /// Same fixed-iteration double-and-add ladder as `Ecp::mul` (see that
    /// doc comment for the constant-time rationale).
    pub fn mul(&self, e: &Big) -> Ecp2 {
        let fixed_bits = rom::CURVE_ORDER.bit_length();
        let mut t = *e;
        t.norm();

        let mut r = Ecp2::inf();
        for i in (0..fixed_bits).rev() {
            r = r.dbl();
            let added = r.add(self);
            r.cmove_ct(&added, t.bit(i));
        }
        r
    }

    /// Frobenius endomorphism via the ROM `Fp2` element `X`: `x <- conj(x)
    /// * X^2`, `y <- conj(y) * X^3`, `z` unchanged under conjugation.
    pub fn frob(&self, x_rom: &Fp2) -> Ecp2 {
        let x2 = x_rom.sqr();
        let x3 = x2.mul(x_rom);
        Ecp2 {
            x: self.x.conj().mul(&x2),
            y: self.y.conj().mul(&x3),
            z: self.z.conj(),
        }
    }

    /// Sign-pivot multi-scalar used by `G2` multiplication after a
    /// Galbraith–Scott decomposition: `sum_i (neg[i] ? -1 : 1) * u[i] *
    /// q[i]`, via a 16-entry combination table over the four points and a
    /// shared doubling ladder (see `pairing::gs`).
    pub fn mul4(q: &[Ecp2; 4], u: &[Big; 4], neg: &[bool; 4]) -> Ecp2 {
        let mut base = [Ecp2::inf(); 4];
        for i in 0..4 {
            base[i] = q[i];
            base[i].cmove_ct(&q[i].neg(), neg[i] as i64);
        }

        let mut table = [Ecp2::inf(); 16];
        for mask in 1usize..16 {
            let lowest = mask.trailing_zeros() as usize;
            let rest = mask & (mask - 1);
            table[mask] = table[rest].add(&base[lowest]);
        }

        let nbits = u.iter().map(|m| m.bit_length()).max().unwrap_or(0);
        let mut r = Ecp2::inf();
        for i in (0..nbits).rev() {
            r = r.dbl();
            let mask = (u[0].bit(i)) | (u[1].bit(i) << 1) | (u[2].bit(i) << 2) | (u[3].bit(i) << 3);
            let mut sel = table[0];
            for (idx, entry) in table.iter().enumerate().skip(1) {
                sel.cmove_ct(entry, (idx as i64 == mask) as i64);
            }
            r = r.add(&sel);
        }
        r
    }

    pub fn to_bytes(&self) -> [u8; 128] {
        let a = self.to_affine();
        let mut out = [0u8; 128];
        out[0..32].copy_from_slice(&a.x.a.redc().to_bytes());
        out[32..64].copy_from_slice(&a.x.b.redc().to_bytes());
        out[64..96].copy_from_slice(&a.y.a.redc().to_bytes());
        out[96..128].copy_from_slice(&a.y.b.redc().to_bytes());
        out
    }

    /// Decodes the fixed 128-byte uncompressed `(x.a, x.b, y.a, y.b)`
    /// encoding [`Ecp2::to_bytes`] produces, or the all-zero infinity
    /// encoding.
    pub fn try_from_bytes(bytes: &[u8; 128]) -> Result<Ecp2, DecodeError> {
        if bytes.iter().all(|b| *b == 0) {
            return Ok(Ecp2::inf());
        }
        let fields: [Big; 4] = core::array::from_fn(|i| {
            let mut chunk = [0u8; 32];
            chunk.copy_from_slice(&bytes[i * 32..i * 32 + 32]);
            Big::from_bytes(&chunk)
        });
        if fields
            .iter()
            .any(|f| f.cmp(&rom::MODULUS) != core::cmp::Ordering::Less)
        {
            return Err(DecodeError::CoordinateOutOfRange);
        }
        let x = Fp2::new(Fp::from_big(fields[0]), Fp::from_big(fields[1]));
        let y = Fp2::new(Fp::from_big(fields[2]), Fp::from_big(fields[3]));
        let p = Ecp2::setxy(x, y);
        if p.is_infinity() {
            Err(DecodeError::NotOnCurve)
        } else {
            Ok(p)
        }
    }

    /// Infallible convenience wrapper over [`Ecp2::try_from_bytes`]:
    /// malformed input decodes to the point at infinity.
    pub fn from_bytes(bytes: &[u8; 128]) -> Ecp2 {
        Ecp2::try_from_bytes(bytes).unwrap_or_else(|_| Ecp2::inf())
    }
}

/// Why a byte string failed to decode as a `G2` point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecodeError {
    /// A coordinate was not reduced modulo the field prime.
    CoordinateOutOfRange,
    /// No `y` exists on the curve for the decoded `x`.
    NotOnCurve,
}
