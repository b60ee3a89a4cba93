//! Fixed-width multi-precision integers for the BN254 tower.
//!
//! This module implements the `Big`/`DBig` pair that every layer above it
//! (`Fp`, `Fp2`, `Fp4`, `Fp12`, the curve groups, and the pairing itself)
//! is built on. The representation is a little-endian array of `NLEN`
//! limbs in radix `2^BASEBITS`:
//!
//! ```text
//! BASEBITS = 24, NLEN = 11  =>  264 bits of capacity for a 254-bit prime
//! ```
//!
//! Limbs are stored as `i64` rather than the historical 24-bit-with-
//! floating-point-assisted-carry trick of the Milagro/AMCL lineage this
//! tower descends from: a 24-bit-by-24-bit product is at most 48 bits, and
//! an `NLEN`-term accumulation of such products comfortably fits in `i64`
//! without the `MODINV` floating-point constant. The radix itself is kept
//! at 24 bits so the byte-level encoding (`MODBYTES = 32`) and algorithm
//! shapes described in the design match the reference construction
//! bit-for-bit.
//!
//! Values are "numerically non-negative" but not always normalized:
//! `add`/`sub`/`rsub` are limb-wise and do not propagate carries, so a
//! limb may temporarily leave `[0, 2^24)`. Callers must call [`Big::norm`]
//! before comparing, shifting, or serializing.
//!
//! Submodules: [`ops`] holds multiplication, Montgomery reduction, modular
//! division, and the Jacobi symbol; this file holds construction,
//! normalization, shifts, comparisons, constant-time selection, and byte
//! (de)serialization.

mod ops;

pub use ops::jacobi;

/// Machine word width assumed by the limb arithmetic (informational only;
/// all arithmetic here is expressed directly in terms of `i64`).
pub const CHUNK: u32 = 32;

/// Limb radix: each limb holds `BASEBITS` bits when normalized.
pub const BASEBITS: u32 = 24;

/// Number of limbs in a [`Big`].
pub const NLEN: usize = 11;

/// Number of limbs in a [`DBig`] (double-width product accumulator).
pub const DNLEN: usize = 2 * NLEN;

/// Byte width of the big-endian wire encoding of a [`Big`].
pub const MODBYTES: usize = 32;

/// Mask selecting the low `BASEBITS` bits of a limb.
pub const BMASK: i64 = (1i64 << BASEBITS) - 1;

/// A `NLEN`-limb, radix-`2^BASEBITS`, little-endian multi-precision
/// integer. See the module documentation for the normalization discipline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Big(pub [i64; NLEN]);

/// A `DNLEN`-limb double-width integer, used to hold unreduced products
/// before Montgomery reduction or classical division brings them back down
/// to a [`Big`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DBig(pub [i64; DNLEN]);

impl Big {
    /// The additive identity.
    pub const ZERO: Self = Big([0; NLEN]);

    /// The multiplicative identity.
    pub const ONE: Self = {
        let mut limbs = [0i64; NLEN];
        limbs[0] = 1;
        Big(limbs)
    };

    /// Builds a `Big` equal to the single-limb value `v` (`v < 2^BASEBITS`
    /// is not required; the caller should `norm` afterwards if `v` does not
    /// fit in one limb).
    pub const fn from_u32(v: u32) -> Self {
        let mut limbs = [0i64; NLEN];
        limbs[0] = v as i64;
        Big(limbs)
    }

    /// Builds a `Big` from a `u64`, distributing it across as many `24`-bit
    /// limbs as needed (up to three).
    pub const fn from_u64(v: u64) -> Self {
        let mut limbs = [0i64; NLEN];
        limbs[0] = (v & BMASK as u64) as i64;
        limbs[1] = ((v >> BASEBITS) & BMASK as u64) as i64;
        limbs[2] = (v >> (2 * BASEBITS)) as i64;
        Big(limbs)
    }

    /// Decodes a big-endian, `MODBYTES`-byte encoding into a `Big`.
    ///
    /// The input is interpreted as an unsigned integer in
    /// `[0, 2^(8*MODBYTES))`; the result is not reduced modulo anything,
    /// matching the wire format described in the design's external
    /// interfaces section.
    pub fn from_bytes(bytes: &[u8; MODBYTES]) -> Self {
        let mut out = Big::ZERO;
        for &byte in bytes.iter() {
            out = out.fshl_small(8);
            out.0[0] |= byte as i64;
        }
        out.norm();
        out
    }

    /// Encodes this value as a big-endian, `MODBYTES`-byte array.
    ///
    /// The receiver is normalized first; values whose true magnitude
    /// exceeds `2^(8*MODBYTES)` are truncated to their low bits, mirroring
    /// the reference behavior of a fixed-width serializer.
    pub fn to_bytes(&self) -> [u8; MODBYTES] {
        let mut v = *self;
        v.norm();
        let mut out = [0u8; MODBYTES];
        for i in (0..MODBYTES).rev() {
            out[i] = (v.0[0] & 0xff) as u8;
            v = v.fshr_small(8);
        }
        out
    }

    /// Propagates carries so every limb lies in `[0, 2^BASEBITS)`.
    ///
    /// Returns the excess of the (now carried-out) top limb, i.e. how many
    /// multiples of `2^(BASEBITS*NLEN)` the pre-normalized value exceeded
    /// the `NLEN`-limb range by. For inputs produced by the lazy
    /// `add`/`sub` family this is always `0` in practice (the tower above
    /// keeps values within the modulus's bit length), but the return value
    /// lets [`crate::fields::fp::Fp`] detect genuine overflow.
    pub fn norm(&mut self) -> i64 {
        let mut carry = 0i64;

        for limb in self.0.iter_mut() {
            let v = *limb + carry;
            *limb = v & BMASK;
            carry = v >> BASEBITS;
        }

        carry
    }

    /// `self += y`, limb-wise, without carry propagation.
    pub fn add(&mut self, y: &Big) {
        for (a, b) in self.0.iter_mut().zip(y.0.iter()) {
            *a += b;
        }
    }

    /// `self -= y`, limb-wise, without borrow propagation. May leave
    /// negative limbs; call [`Big::norm`] before further use.
    pub fn sub(&mut self, y: &Big) {
        for (a, b) in self.0.iter_mut().zip(y.0.iter()) {
            *a -= b;
        }
    }

    /// `self = y - self`, limb-wise, without borrow propagation.
    pub fn rsub(&mut self, y: &Big) {
        for (a, b) in self.0.iter_mut().zip(y.0.iter()) {
            *a = b - *a;
        }
    }

    /// Doubles every limb in place (`self += self`, unnormalized).
    pub fn fshl_double(&mut self) {
        for limb in self.0.iter_mut() {
            *limb <<= 1;
        }
    }

    /// Multiplies by a small non-negative constant, unnormalized.
    pub fn imul(&mut self, c: i64) {
        for limb in self.0.iter_mut() {
            *limb *= c;
        }
    }

    /// Left shift by `k < BASEBITS` bits. Requires the input to be
    /// normalized; the fast path used internally by byte (de)serialization.
    fn fshl_small(&self, k: u32) -> Big {
        debug_assert!(k < BASEBITS);
        let mut out = Big::ZERO;
        let mut carry = 0i64;

        for i in 0..NLEN {
            let v = (self.0[i] << k) | carry;
            out.0[i] = v & BMASK;
            carry = v >> BASEBITS;
        }

        out
    }

    /// Right shift by `k < BASEBITS` bits. Requires the input to be
    /// normalized.
    fn fshr_small(&self, k: u32) -> Big {
        debug_assert!(k < BASEBITS);
        let mut out = Big::ZERO;

        for i in 0..NLEN {
            let lo = self.0[i] >> k;
            let hi = if i + 1 < NLEN {
                (self.0[i + 1] << (BASEBITS - k)) & BMASK
            } else {
                0
            };
            out.0[i] = lo | hi;
        }

        out
    }

    /// General left shift by `k` bits (any `k >= 0`). Normalizes the
    /// receiver first.
    pub fn shl(&mut self, k: u32) {
        self.norm();
        let limb_shift = (k / BASEBITS) as usize;
        let bit_shift = k % BASEBITS;

        if limb_shift > 0 {
            for i in (limb_shift..NLEN).rev() {
                self.0[i] = self.0[i - limb_shift];
            }
            for i in 0..limb_shift.min(NLEN) {
                self.0[i] = 0;
            }
        }

        if bit_shift > 0 {
            let shifted = self.fshl_small(bit_shift);
            *self = shifted;
        }
    }

    /// General right shift by `k` bits (any `k >= 0`). Normalizes the
    /// receiver first.
    pub fn shr(&mut self, k: u32) {
        self.norm();
        let limb_shift = (k / BASEBITS) as usize;
        let bit_shift = k % BASEBITS;

        if limb_shift > 0 {
            for i in 0..NLEN {
                self.0[i] = if i + limb_shift < NLEN {
                    self.0[i + limb_shift]
                } else {
                    0
                };
            }
        }

        if bit_shift > 0 {
            let shifted = self.fshr_small(bit_shift);
            *self = shifted;
        }
    }

    /// Returns `true` if every limb is zero. Does not normalize first:
    /// callers on a potentially-unnormalized value should `norm` before
    /// calling this.
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&limb| limb == 0)
    }

    /// Returns the least-significant bit (the parity) of a normalized
    /// value.
    pub fn parity(&self) -> i64 {
        self.0[0] & 1
    }

    /// Returns bit `i` (`0` = least significant) of a normalized value.
    pub fn bit(&self, i: usize) -> i64 {
        let limb = i / BASEBITS as usize;
        let offset = i % BASEBITS as usize;
        if limb >= NLEN {
            0
        } else {
            (self.0[limb] >> offset) & 1
        }
    }

    /// Index of the most significant set bit, or `0` if the value is zero.
    /// Requires a normalized input.
    pub fn bit_length(&self) -> usize {
        for i in (0..NLEN).rev() {
            if self.0[i] != 0 {
                let top = 63 - (self.0[i] as u64).leading_zeros() as usize;
                return i * BASEBITS as usize + top + 1;
            }
        }
        0
    }

    /// Three-way comparison of two normalized values.
    pub fn cmp(&self, y: &Big) -> core::cmp::Ordering {
        for i in (0..NLEN).rev() {
            if self.0[i] != y.0[i] {
                return self.0[i].cmp(&y.0[i]);
            }
        }
        core::cmp::Ordering::Equal
    }

    /// Constant-time conditional swap: when `cond` is `1`, swaps `self` and
    /// `other` limb-wise; when `0`, leaves both unchanged. `cond` must be
    /// `0` or `1`.
    pub fn cswap(&mut self, other: &mut Big, cond: i64) {
        let mask = -cond;
        for (a, b) in self.0.iter_mut().zip(other.0.iter_mut()) {
            let t = (*a ^ *b) & mask;
            *a ^= t;
            *b ^= t;
        }
    }

    /// Constant-time conditional move: when `cond` is `1`, overwrites
    /// `self` with `other`; when `0`, leaves `self` unchanged. `cond` must
    /// be `0` or `1`.
    pub fn cmove(&mut self, other: &Big, cond: i64) {
        let mask = -cond;
        for (a, b) in self.0.iter_mut().zip(other.0.iter()) {
            *a ^= (*a ^ *b) & mask;
        }
    }
}

impl DBig {
    pub const ZERO: Self = DBig([0; DNLEN]);

    /// Propagates carries across the double-width accumulator.
    pub fn norm(&mut self) -> i64 {
        let mut carry = 0i64;

        for limb in self.0.iter_mut() {
            let v = *limb + carry;
            *limb = v & BMASK;
            carry = v >> BASEBITS;
        }

        carry
    }

    /// Splits into the low and high `Big` halves (each `NLEN` limbs),
    /// after normalizing.
    pub fn split(&self) -> (Big, Big) {
        let mut lo = Big::ZERO;
        let mut hi = Big::ZERO;
        lo.0.copy_from_slice(&self.0[0..NLEN]);
        hi.0.copy_from_slice(&self.0[NLEN..DNLEN]);
        (lo, hi)
    }
}
