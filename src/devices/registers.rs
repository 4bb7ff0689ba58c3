//! # Memory-Mapped Registers
//!
//! Typed access to the handful of display and input registers the engine
//! touches, and to video memory.
//!
//! | Register  | Address       | Width | Access |
//! |-----------|---------------|-------|--------|
//! | DISPCNT   | `0x0400_0000` | 16    | write  |
//! | VCOUNT    | `0x0400_0006` | 16    | read   |
//! | KEYINPUT  | `0x0400_0130` | 16    | read   |
//! | VRAM      | `0x0600_0000` | 16/32 | r/w    |
//!
//! Every access goes through `read_volatile`/`write_volatile` so the compiler
//! can neither cache a polled value nor drop or reorder a store.

use core::ptr::{read_volatile, write_volatile};

pub const SCREEN_WIDTH: usize = 240;
pub const SCREEN_HEIGHT: usize = 160;
pub const PIXEL_COUNT: usize = SCREEN_WIDTH * SCREEN_HEIGHT;

/// First scanline of the vertical blank.
pub const VBLANK_START: u16 = 160;
/// Scanlines per frame, visible plus blank.
pub const TOTAL_SCANLINES: u16 = 228;

// DISPCNT bits
pub const MODE_3: u16 = 0x0003;
pub const BG2_ENABLE: u16 = 0x0400;

const REG_DISPCNT: usize = 0x0400_0000;
const REG_VCOUNT: usize = 0x0400_0006;
const REG_KEYINPUT: usize = 0x0400_0130;
const VRAM_BASE: usize = 0x0600_0000;

/// Display and input registers.
pub trait Peripheral {
    fn write_display_control(&mut self, value: u16);
    /// Current scanline, `0..TOTAL_SCANLINES`.
    fn read_scanline(&self) -> u16;
    /// Raw key register. Active-low: a cleared bit is a pressed button.
    fn read_keys(&self) -> u16;
}

/// The 240x160 array of 16-bit cells backing the visible bitmap.
pub trait VideoMemory {
    fn write_cell(&mut self, index: usize, color: u16);
    /// Writes cells `2 * word_index` (low half) and `2 * word_index + 1`
    /// (high half) with one 32-bit store.
    fn write_cell_pair(&mut self, word_index: usize, packed: u32);
    fn read_cell(&self, index: usize) -> u16;
}

/// The real register block.
pub struct GbaRegisters {
    _private: (),
}

impl GbaRegisters {
    /// # Safety
    /// Only valid on the target hardware (or an emulator of it); the caller
    /// must not create a second handle.
    pub const unsafe fn new() -> Self {
        Self { _private: () }
    }
}

impl Peripheral for GbaRegisters {
    #[inline]
    fn write_display_control(&mut self, value: u16) {
        unsafe { write_volatile(REG_DISPCNT as *mut u16, value) }
    }

    #[inline]
    fn read_scanline(&self) -> u16 {
        unsafe { read_volatile(REG_VCOUNT as *const u16) }
    }

    #[inline]
    fn read_keys(&self) -> u16 {
        unsafe { read_volatile(REG_KEYINPUT as *const u16) }
    }
}

/// Mode 3 bitmap in VRAM.
pub struct GbaVram {
    _private: (),
}

impl GbaVram {
    /// # Safety
    /// Only valid on the target hardware; one handle at a time.
    pub const unsafe fn new() -> Self {
        Self { _private: () }
    }
}

impl VideoMemory for GbaVram {
    #[inline]
    fn write_cell(&mut self, index: usize, color: u16) {
        debug_assert!(index < PIXEL_COUNT);
        unsafe { write_volatile((VRAM_BASE as *mut u16).add(index), color) }
    }

    #[inline]
    fn write_cell_pair(&mut self, word_index: usize, packed: u32) {
        debug_assert!(word_index < PIXEL_COUNT / 2);
        unsafe { write_volatile((VRAM_BASE as *mut u32).add(word_index), packed) }
    }

    #[inline]
    fn read_cell(&self, index: usize) -> u16 {
        debug_assert!(index < PIXEL_COUNT);
        unsafe { read_volatile((VRAM_BASE as *const u16).add(index)) }
    }
}
