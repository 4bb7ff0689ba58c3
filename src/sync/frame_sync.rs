//! Blank-interval gating and dirty-rectangle redraw.
use core::hint::spin_loop;

use crate::devices::framebuffer::{Color, FrameBuffer};
use crate::devices::input::KeyState;
use crate::devices::registers::{Peripheral, VideoMemory, VBLANK_START};
use crate::sync::dirty::DirtyRegion;

pub struct FrameSync<P: Peripheral, V: VideoMemory> {
    registers: P,
    framebuffer: FrameBuffer<V>,
}

impl<P: Peripheral, V: VideoMemory> FrameSync<P, V> {
    pub fn new(registers: P, vram: V) -> Self {
        Self { registers, framebuffer: FrameBuffer::new(vram) }
    }

    /// Busy-waits for the start of a fresh vertical blank.
    ///
    /// If a blank is already in progress it is skipped: first wait for
    /// drawing to resume, then for the next blank to begin. The caller
    /// always gets the whole interval. There is no timeout; a scan counter
    /// that never moves blocks forever.
    pub fn wait_for_blank_start(&mut self) -> BlankWindow<'_, V> {
        while self.registers.read_scanline() >= VBLANK_START {
            spin_loop();
        }
        while self.registers.read_scanline() < VBLANK_START {
            spin_loop();
        }
        BlankWindow { framebuffer: &mut self.framebuffer }
    }

    /// One read of the key register.
    pub fn sample_keys(&self) -> KeyState {
        KeyState::from_register(self.registers.read_keys())
    }

    /// Unsynchronized access, for start-up drawing and state-change
    /// repaints that accept a possible tear.
    pub fn framebuffer(&mut self) -> &mut FrameBuffer<V> {
        &mut self.framebuffer
    }

    pub fn registers(&self) -> &P {
        &self.registers
    }

    pub fn registers_mut(&mut self) -> &mut P {
        &mut self.registers
    }

    pub fn into_parts(self) -> (P, FrameBuffer<V>) {
        (self.registers, self.framebuffer)
    }
}

/// Write access to the surface during one vertical blank.
pub struct BlankWindow<'a, V: VideoMemory> {
    framebuffer: &'a mut FrameBuffer<V>,
}

impl<'a, V: VideoMemory> BlankWindow<'a, V> {
    /// Erase the old rectangle with `background`, then draw the new one in
    /// `color`. Returns whether anything was drawn.
    pub fn present_dirty(&mut self, region: &DirtyRegion, background: Color, color: Color) -> bool {
        if !region.is_dirty() {
            return false;
        }
        self.framebuffer.fill_rect(region.previous, background);
        self.framebuffer.fill_rect(region.current, color);
        true
    }

    pub fn framebuffer(&mut self) -> &mut FrameBuffer<V> {
        &mut *self.framebuffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::devices::framebuffer::Rect;
    use crate::devices::input::Buttons;
    use crate::devices::registers::TOTAL_SCANLINES;
    use crate::devices::simulated::{SimulatedRegisters, SimulatedVram};

    fn sync_at(line: u16) -> FrameSync<SimulatedRegisters, SimulatedVram> {
        FrameSync::new(SimulatedRegisters::starting_at(line), SimulatedVram::new())
    }

    #[test]
    fn returns_at_first_blank_line_from_visible_scan() {
        let mut sync = sync_at(0);
        sync.wait_for_blank_start();
        // The poll that saw line 160 has already advanced the clock.
        assert_eq!(sync.registers().scanline(), VBLANK_START + 1);
        assert_eq!(sync.registers().frames(), 0);
    }

    #[test]
    fn skips_a_blank_already_in_progress() {
        let mut sync = sync_at(200);
        sync.wait_for_blank_start();
        assert_eq!(sync.registers().frames(), 1);
        assert_eq!(sync.registers().scanline(), VBLANK_START + 1);
    }

    #[test]
    fn entering_exactly_at_blank_start_waits_a_full_frame() {
        let mut sync = sync_at(VBLANK_START);
        sync.wait_for_blank_start();
        assert_eq!(sync.registers().frames(), 1);
    }

    #[test]
    fn consecutive_waits_are_one_frame_apart() {
        let mut sync = sync_at(17);
        sync.wait_for_blank_start();
        let first = sync.registers().frames();
        for _ in 0..5 {
            sync.wait_for_blank_start();
        }
        assert_eq!(sync.registers().frames(), first + 5);
        assert!(sync.registers().scanline() < TOTAL_SCANLINES);
    }

    #[test]
    fn dirty_present_erases_then_draws() {
        let mut sync = sync_at(0);
        sync.framebuffer().clear(Color::BLACK);
        sync.framebuffer().rect(10, 10, 4, 4, Color::BLUE);

        let region = DirtyRegion::new(Rect::new(10, 10, 4, 4), Rect::new(12, 10, 4, 4));
        let mut window = sync.wait_for_blank_start();
        assert!(window.present_dirty(&region, Color::BLACK, Color::BLUE));

        let fb = sync.framebuffer();
        assert_eq!(fb.pixel(10, 10), Some(Color::BLACK));
        assert_eq!(fb.pixel(11, 13), Some(Color::BLACK));
        // Overlap belongs to the new position.
        assert_eq!(fb.pixel(12, 10), Some(Color::BLUE));
        assert_eq!(fb.pixel(15, 13), Some(Color::BLUE));
    }

    #[test]
    fn clean_region_writes_nothing() {
        let mut sync = sync_at(0);
        let r = Rect::new(0, 0, 8, 8);
        let mut window = sync.wait_for_blank_start();
        assert!(!window.present_dirty(&DirtyRegion::new(r, r), Color::BLACK, Color::RED));
        assert_eq!(sync.framebuffer().vram().writes(), 0);
    }

    #[test]
    fn keys_are_sampled_in_pressed_polarity() {
        let mut sync = sync_at(0);
        sync.registers_mut().set_pressed(Buttons::L | Buttons::DOWN);
        let keys = sync.sample_keys();
        assert!(keys.is_pressed(Buttons::L));
        assert!(keys.is_pressed(Buttons::DOWN));
        assert!(!keys.is_pressed(Buttons::R));
    }
}
