//! # Frame Synchronization
//!
//! Owns the surface and the scan-position register, and decides when
//! drawing may touch the visible bitmap.
//!
//! ## Timeline
//!
//! ```text
//! scanline:  0 ............ 159 | 160 ........ 227 | 0 ...
//!            visible (drawing)  |  vertical blank  |
//!                               ^ wait_for_blank_start returns here
//! ```
//!
//! `wait_for_blank_start` hands back a `BlankWindow` borrowing the surface.
//! Dirty-rectangle updates are only reachable through that window, and the
//! borrow ends before the next wait can begin.

pub mod dirty;
pub mod frame_sync;

pub use dirty::DirtyRegion;
pub use frame_sync::{BlankWindow, FrameSync};
