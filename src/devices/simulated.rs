//! # Simulated Device
//!
//! In-memory stand-ins for the register block and video memory, used by the
//! tests and by the hosted runner.
//!
//! The scan clock is driven by polling: every `read_scanline` returns the
//! current line and then advances one line, wrapping after line 227. A busy
//! wait therefore always makes progress, and frame boundaries are
//! deterministic.

use core::cell::Cell;

use super::input::Buttons;
use super::registers::{Peripheral, VideoMemory, PIXEL_COUNT, TOTAL_SCANLINES};

pub struct SimulatedRegisters {
    display_control: Option<u16>,
    display_control_writes: u32,
    scanline: Cell<u16>,
    frames: Cell<u32>,
    pressed: Buttons,
}

impl SimulatedRegisters {
    pub const fn new() -> Self {
        Self {
            display_control: None,
            display_control_writes: 0,
            scanline: Cell::new(0),
            frames: Cell::new(0),
            pressed: Buttons::NONE,
        }
    }

    /// Starts the scan clock at `line` (taken modulo the frame length).
    pub fn starting_at(line: u16) -> Self {
        let regs = Self::new();
        regs.scanline.set(line % TOTAL_SCANLINES);
        regs
    }

    /// Buttons held from now on; the register reports them active-low.
    pub fn set_pressed(&mut self, buttons: Buttons) {
        self.pressed = buttons;
    }

    /// Line the next poll will return, without advancing.
    pub fn scanline(&self) -> u16 {
        self.scanline.get()
    }

    /// Number of times the clock wrapped from the last line back to 0.
    pub fn frames(&self) -> u32 {
        self.frames.get()
    }

    pub fn display_control(&self) -> Option<u16> {
        self.display_control
    }

    pub fn display_control_writes(&self) -> u32 {
        self.display_control_writes
    }
}

impl Default for SimulatedRegisters {
    fn default() -> Self {
        Self::new()
    }
}

impl Peripheral for SimulatedRegisters {
    fn write_display_control(&mut self, value: u16) {
        self.display_control = Some(value);
        self.display_control_writes += 1;
    }

    fn read_scanline(&self) -> u16 {
        let line = self.scanline.get();
        let next = line + 1;
        if next == TOTAL_SCANLINES {
            self.scanline.set(0);
            self.frames.set(self.frames.get() + 1);
        } else {
            self.scanline.set(next);
        }
        line
    }

    fn read_keys(&self) -> u16 {
        !self.pressed.bits()
    }
}

/// Plain array of cells. Compare two instances with `==` to check that two
/// render paths produced the same picture; the write counter is ignored.
#[derive(Clone)]
pub struct SimulatedVram {
    cells: [u16; PIXEL_COUNT],
    writes: u32,
}

impl SimulatedVram {
    pub const fn new() -> Self {
        Self { cells: [0; PIXEL_COUNT], writes: 0 }
    }

    pub fn cells(&self) -> &[u16] {
        &self.cells
    }

    /// Cell stores so far; a paired store counts as two.
    pub fn writes(&self) -> u32 {
        self.writes
    }

    pub fn reset_write_count(&mut self) {
        self.writes = 0;
    }
}

impl PartialEq for SimulatedVram {
    fn eq(&self, other: &Self) -> bool {
        self.cells == other.cells
    }
}

impl Eq for SimulatedVram {}

impl Default for SimulatedVram {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for SimulatedVram {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SimulatedVram").field("writes", &self.writes).finish_non_exhaustive()
    }
}

impl VideoMemory for SimulatedVram {
    fn write_cell(&mut self, index: usize, color: u16) {
        self.cells[index] = color;
        self.writes += 1;
    }

    fn write_cell_pair(&mut self, word_index: usize, packed: u32) {
        // Little-endian: the low half lands on the lower address.
        self.cells[word_index * 2] = packed as u16;
        self.cells[word_index * 2 + 1] = (packed >> 16) as u16;
        self.writes += 2;
    }

    fn read_cell(&self, index: usize) -> u16 {
        self.cells[index]
    }
}
