//! # Math
//!
//! Integer-only numeric layer for targets without a floating-point unit.
//!
//! - `fixed`: Q23.8 `Fixed` scalar
//! - `trig`: quarter-wave sine table
//! - `transform`: `Vec2`, `Mat3`, `Transform` and the scale-rotate-translate evaluator

pub mod fixed;
pub mod transform;
pub mod trig;

pub use fixed::{Fixed, FRAC_BITS};
pub use transform::{apply_transform, Mat3, Transform, Vec2};
