//! A from-scratch BN254 Optimal Ate pairing implementation.
//!
//! This crate provides the field tower, curve groups, and pairing
//! operations BN254-based protocols (zk-SNARK verifiers, BLS-style
//! aggregate signatures) are built on.
//!
//! The focus is on **clarity, predictability, and auditability**, rather
//! than on providing a large or high-level cryptographic API. All
//! components are dependency-free and explicit in their semantics.
//!
//! # Module overview
//!
//! - `bigint`
//!   Fixed-width, radix-`2^24` multi-precision integers (`Big`, `DBig`)
//!   and their Montgomery-reduction machinery. The foundation every other
//!   module is built on.
//!
//! - `rom`
//!   Read-only constant tables: the field modulus, the group order, the
//!   two generator points, and the endomorphism data the GLV/GS scalar
//!   decompositions need.
//!
//! - `fields`
//!   The algebraic tower `Fp -> Fp2 -> Fp4 -> Fp12` BN254 arithmetic is
//!   built on.
//!
//! - `curves`
//!   `G1` (over `Fp`) and `G2` (over `Fp2`, the sextic twist), in
//!   projective coordinates with complete addition formulas.
//!
//! - `pairing`
//!   The Miller loop, the final exponentiation, the GLV/GS scalar
//!   decompositions, and the public `G1`/`G2`/`Gt` scalar-multiplication
//!   and pairing entry points built on the layers below.
//!
//! # Design goals
//!
//! - No heap allocations in the field/curve/pairing core (serialization
//!   helpers are the only place a `Vec` appears)
//! - Minimal and explicit APIs
//! - Stable, well-defined semantics
//! - Clear separation between cryptographic code and supporting utilities

pub mod bigint;
pub mod curves;
pub mod fields;
pub mod pairing;
pub mod rom;

pub use bigint::Big;
pub use curves::{Ecp, Ecp2, G1Affine, G2Affine};
pub use fields::{Fp, Fp12, Fp2, Fp4};
pub use pairing::{multi_pairing, pairing, Gt, Scalar};
