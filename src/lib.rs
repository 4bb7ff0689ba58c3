//! Software rasterizer and frame loop for the GBA's 240x160 bitmap mode.
//!
//! The library is hardware-agnostic: everything that touches the machine
//! goes through [`devices::registers::Peripheral`] and
//! [`devices::registers::VideoMemory`], so the same engine runs on the
//! console and against [`devices::simulated`] on a host.
#![no_std]

pub mod app;
pub mod devices;
pub mod format;
pub mod kernel;
pub mod math;
pub mod sync;

use spin::Mutex;

use crate::devices::debug_console::DebugConsole;

pub static DEBUG: Mutex<DebugConsole> = Mutex::new(DebugConsole::new());

#[macro_export]
macro_rules! println {
    ($($arg:tt)*) => {{
        use core::fmt::Write;
        let mut console = $crate::DEBUG.lock();
        let _ = writeln!(console, $($arg)*);
    }};
}
