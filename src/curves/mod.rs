//! The two projective Weierstrass groups the pairing operates on: `G1`
//! over `Fp` and `G2` over `Fp2`, the sextic twist.

pub mod ecp;
pub mod ecp2;

pub use ecp::{DecodeError as G1DecodeError, Ecp, G1Affine};
pub use ecp2::{DecodeError as G2DecodeError, Ecp2, G2Affine};
