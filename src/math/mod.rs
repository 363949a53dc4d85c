//! Numerical primitives shared by the curve stages.

pub mod interp;

pub use interp::*;
