//! The algebraic tower `Fp -> Fp2 -> Fp4 -> Fp12` BN254 arithmetic is built
//! on, each layer exposing only the operations the layer above needs.

pub mod fp;
pub mod fp12;
pub mod fp2;
pub mod fp4;

pub use fp::Fp;
pub use fp12::{Fp12, Stype};
pub use fp2::Fp2;
pub use fp4::Fp4;
