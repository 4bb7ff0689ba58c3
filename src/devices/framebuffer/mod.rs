//! # Framebuffer Graphics Module
//!
//! Pixel-level drawing into the single mode 3 bitmap.
//!
//! ## Modules
//!
//! - `framebuffer`: `FrameBuffer` with bounds-checked `plot` and paired-store `clear`
//! - `raster`: Bresenham `line`, `triangle_wireframe`, `rect` and the `Rect` type
//! - `color`: packed 15-bit `Color` with common colour constants
//!
//! ## Clipping
//!
//! Every write goes through the same test, `0 <= x < 240 && 0 <= y < 160`.
//! Anything outside is dropped silently; no primitive reports an error.
//!
//! ## Surface
//!
//! There is exactly one visible bitmap and no back buffer. When a write
//! lands matters as much as what it writes; see `sync` for the
//! blank-interval discipline that keeps writes off the visible scan.

pub mod color;
pub mod framebuffer;
pub mod raster;

pub use color::Color;
pub use framebuffer::FrameBuffer;
pub use raster::{LinePoints, Rect};
