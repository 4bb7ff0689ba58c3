//! Device Subsystem
//!
//! Hardware access and its in-memory stand-ins:
//! - `registers`: `Peripheral` / `VideoMemory` traits and the volatile MMIO implementations
//! - `simulated`: register file, scan clock and video memory for tests and the hosted runner
//! - `framebuffer`: drawing into the mode 3 bitmap
//! - `input`: active-low key decoding
//! - `debug_console`: line-buffered log output

pub mod debug_console;
pub mod framebuffer;
pub mod input;
pub mod registers;
pub mod simulated;

pub use registers::{Peripheral, VideoMemory};
