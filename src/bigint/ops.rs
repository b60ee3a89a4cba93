//! Multiplication, Montgomery reduction, classical modular reduction, the
//! binary-GCD inverse, and the Jacobi symbol for [`super::Big`].
//!
//! These are the operations that are not simple limb-wise maps: they are
//! the ones that actually encode the "hard" arithmetic the rest of the
//! tower leans on.

use super::{Big, DBig, BASEBITS, BMASK, NLEN};

impl Big {
    /// Schoolbook multiplication producing the full double-width product.
    ///
    /// Each cross term `self[i] * y[j]` is at most `2^48`; accumulating up
    /// to `NLEN` such terms into one limb of the result (before carry
    /// propagation) stays well inside `i64`, so no intermediate widening
    /// trick is needed.
    pub fn mul(&self, y: &Big) -> DBig {
        let mut out = DBig::ZERO;

        for (i, &ai) in self.0.iter().enumerate() {
            if ai == 0 {
                continue;
            }
            for (j, &bj) in y.0.iter().enumerate() {
                out.0[i + j] += ai * bj;
            }
        }

        out.norm();
        out
    }

    /// Squaring, exploiting `a_i * a_j == a_j * a_i` to halve the number of
    /// cross-term multiplications relative to [`Big::mul`].
    pub fn sqr(&self) -> DBig {
        let mut out = DBig::ZERO;

        for i in 0..NLEN {
            out.0[2 * i] += self.0[i] * self.0[i];
            for j in (i + 1)..NLEN {
                out.0[i + j] += 2 * self.0[i] * self.0[j];
            }
        }

        out.norm();
        out
    }

    /// Montgomery reduction: given a double-width product `d` and the
    /// modulus `m` with precomputed `nd = -m^-1 mod 2^BASEBITS`, returns
    /// `d * R^-1 mod m` where `R = 2^(BASEBITS * NLEN)`.
    ///
    /// This is the textbook CIOS-style reduction specialized to a 24-bit
    /// radix: at each of the `NLEN` low limbs, a multiple of `m` is added
    /// that cancels that limb, then the whole accumulator is shifted down
    /// one limb. The final limb-wise subtraction of `m` brings the result
    /// into `[0, m)` when it would otherwise land in `[m, 2m)`.
    pub fn monty(m: &Big, nd: i64, d: &DBig) -> Big {
        let mut t = [0i64; super::DNLEN + 2];
        t[..super::DNLEN].copy_from_slice(&d.0);

        for i in 0..NLEN {
            let mu = (t[i] * nd) & BMASK;
            for j in 0..NLEN {
                t[i + j] += mu * m.0[j];
            }
            // propagate the carry out of limb `i` immediately so later
            // limbs of `mu` are computed against a normalized low limb.
            let carry = t[i] >> BASEBITS;
            t[i] &= BMASK;
            t[i + 1] += carry;
        }

        let mut out = Big::ZERO;
        out.0.copy_from_slice(&t[NLEN..2 * NLEN]);
        // fold any residual carry from the top of the working buffer back in
        out.0[NLEN - 1] += t[2 * NLEN] << 0; // t[2*NLEN] is 0 except in pathological overflow
        out.norm();

        if out.cmp(m) != core::cmp::Ordering::Less {
            out.sub(m);
            out.norm();
        }

        out
    }

    /// `self = self - (m >> 1)` computed into a fresh value, returning `1`
    /// if the subtraction borrowed (i.e. `self < (m >> 1)`) and `0`
    /// otherwise. The shared primitive behind [`Big::reduce_mod`] and
    /// [`Big::div_mod`]'s constant-iteration-count subtract loop.
    pub fn ssn(&self, half_m: &Big) -> (Big, i64) {
        let mut r = *self;
        r.sub(half_m);
        let borrow = r.norm();
        // `norm` returns the carry out of the top limb; a negative excess
        // means the subtraction went below zero.
        (r, (borrow < 0) as i64)
    }

    /// Reduces `self` modulo `m` in place, using a fixed number of
    /// conditional-subtract steps driven by the public bit lengths of
    /// `self` and `m` (not by any secret data), matching the
    /// constant-time-over-the-input-length discipline from the design.
    pub fn reduce_mod(&mut self, m: &Big) {
        self.norm();
        let mut modulus = *m;
        let mut shift = 0u32;

        let self_len = self.bit_length();
        let m_len = m.bit_length();
        if self_len > m_len {
            shift = (self_len - m_len) as u32;
        }
        modulus.shl(shift);

        loop {
            let mut trial = *self;
            trial.sub(&modulus);
            let underflow = trial.norm() < 0;
            self.cmove(&trial, (!underflow) as i64);

            if shift == 0 {
                break;
            }
            modulus.shr(1);
            shift -= 1;
        }
    }

    /// Classical shift-and-subtract division: returns `(quotient,
    /// remainder)` such that `self == quotient * m + remainder`, with
    /// `0 <= remainder < m`. Uses the same fixed-iteration-count structure
    /// as [`Big::reduce_mod`].
    pub fn div_mod(&self, m: &Big) -> (Big, Big) {
        let mut remainder = *self;
        remainder.norm();
        let mut quotient = Big::ZERO;
        let mut modulus = *m;

        let self_len = remainder.bit_length();
        let m_len = m.bit_length();
        let mut shift = if self_len > m_len {
            (self_len - m_len) as u32
        } else {
            0
        };
        modulus.shl(shift);

        loop {
            let mut trial = remainder;
            trial.sub(&modulus);
            let underflow = trial.norm() < 0;
            remainder.cmove(&trial, (!underflow) as i64);
            if !underflow {
                let mut bit = Big::ZERO;
                bit.0[(shift / BASEBITS) as usize] = 1i64 << (shift % BASEBITS);
                quotient.add(&bit);
            }

            if shift == 0 {
                break;
            }
            modulus.shr(1);
            shift -= 1;
        }

        quotient.norm();
        (quotient, remainder)
    }

    /// Modular inverse via the binary extended Euclidean algorithm. Not
    /// constant-time: only used off the secret scalar-multiplication paths,
    /// e.g. to build ROM constants and for Jacobi-adjacent bookkeeping.
    pub fn invmodp(&self, p: &Big) -> Big {
        let mut u = *self;
        u.reduce_mod(p);
        let mut v = *p;
        let mut x1 = Big::ONE;
        let mut x2 = Big::ZERO;
        let one = Big::ONE;

        while u.cmp(&one) != core::cmp::Ordering::Equal && v.cmp(&one) != core::cmp::Ordering::Equal {
            while u.parity() == 0 {
                u.shr(1);
                if x1.parity() != 0 {
                    x1.add(p);
                }
                x1.shr(1);
                x1.norm();
            }
            while v.parity() == 0 {
                v.shr(1);
                if x2.parity() != 0 {
                    x2.add(p);
                }
                x2.shr(1);
                x2.norm();
            }
            if u.cmp(&v) != core::cmp::Ordering::Less {
                u.sub(&v);
                u.norm();
                x1.sub(&x2);
                x1.norm();
                if u.norm() < 0 || x1.cmp(&Big::ZERO) == core::cmp::Ordering::Less {
                    x1.add(p);
                    x1.norm();
                }
            } else {
                v.sub(&u);
                v.norm();
                x2.sub(&x1);
                x2.norm();
            }
        }

        if u.cmp(&one) == core::cmp::Ordering::Equal {
            x1.reduce_mod(p);
            x1
        } else {
            x2.reduce_mod(p);
            x2
        }
    }
}

/// Jacobi symbol `(a/m)`, returning `-1`, `0`, or `1`. `m` must be odd and
/// positive. Not required to be constant-time (used only on public values:
/// quadratic-residue tests for square roots, never on a secret scalar).
pub fn jacobi(a: &Big, m: &Big) -> i32 {
    let mut a = *a;
    a.reduce_mod(m);
    let mut m = *m;
    let mut result = 1i32;

    loop {
        if a.is_zero() {
            return if m.cmp(&Big::ONE) == core::cmp::Ordering::Equal {
                result
            } else {
                0
            };
        }

        while a.parity() == 0 {
            a.shr(1);
            let r8 = (m.0[0] & 7) as i32;
            if r8 == 3 || r8 == 5 {
                result = -result;
            }
        }

        core::mem::swap(&mut a, &mut m);

        if (a.0[0] & 3) == 3 && (m.0[0] & 3) == 3 {
            result = -result;
        }

        a.reduce_mod(&m);
    }
}
