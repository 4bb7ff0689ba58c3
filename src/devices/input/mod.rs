//! # Input Device Module
//!
//! Turns the raw key register into a `KeyState`.
//!
//! ```text
//! KEYINPUT (active-low u16) ──► KeyState::from_register ──► is_pressed / horizontal / vertical
//! ```
//!
//! The register is sampled once per frame by the orchestrator; everything
//! downstream works on that single snapshot.

pub mod keys;

pub use keys::{Buttons, KeyState};
