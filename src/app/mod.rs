//! # Demo Engine
//!
//! The frame loop shared by every demo preset.
//!
//! ## States
//!
//! ```text
//! Init ──start()──► Frame ──┐
//!                     ▲     │ frame()
//!                     └─────┘   (no exit; runs until power-off)
//! ```
//!
//! ## Frame Order
//!
//! 1. Sample the key register once
//! 2. Look up the background priority chain
//! 3. On a background change: clear and repaint everything
//! 4. Move the object from the d-pad (and rotate/scale for models)
//! 5. Clamp it onto the surface
//! 6. Wait for a fresh vertical blank
//! 7. Inside the blank: erase the old position, draw the new one
//!
//! All mutable state lives in `Scene`, owned here and passed down
//! explicitly.

pub mod config;
pub mod scene;

pub use config::{DemoConfig, SceneConfig};
pub use scene::{Redraw, Scene, SceneObject, Vertex};

use crate::devices::registers::{Peripheral, VideoMemory, BG2_ENABLE, MODE_3};
use crate::println;
use crate::sync::{DirtyRegion, FrameSync};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    Init,
    Frame,
}

pub struct Engine<P: Peripheral, V: VideoMemory> {
    sync: FrameSync<P, V>,
    config: DemoConfig,
    scene: Scene,
    state: EngineState,
    frames: u32,
}

impl<P: Peripheral, V: VideoMemory> Engine<P, V> {
    /// `config` must already have passed `DemoConfig::validate`; build
    /// engines through `kernel::init_engine`, which checks it first.
    pub(crate) fn new(registers: P, vram: V, config: DemoConfig) -> Self {
        Self {
            sync: FrameSync::new(registers, vram),
            scene: Scene::new(&config),
            config,
            state: EngineState::Init,
            frames: 0,
        }
    }

    /// Select the bitmap mode and paint the first picture. Only acts once.
    pub fn start(&mut self) {
        if self.state != EngineState::Init {
            return;
        }
        self.sync.registers_mut().write_display_control(MODE_3 | BG2_ENABLE);
        self.scene.render(&self.config, self.sync.framebuffer());
        self.state = EngineState::Frame;
    }

    pub fn step(&mut self) {
        match self.state {
            EngineState::Init => self.start(),
            EngineState::Frame => self.frame(),
        }
    }

    pub fn run(mut self) -> ! {
        loop {
            self.step();
        }
    }

    fn frame(&mut self) {
        let keys = self.sync.sample_keys();

        if let Some(background) = self.config.requested_background(keys) {
            if background != self.scene.background {
                println!(
                    "frame {}: background {:#06x} -> {:#06x}",
                    self.frames,
                    self.scene.background.raw(),
                    background.raw()
                );
                self.scene.background = background;
                // Clearing wipes the object too, so repaint it right away.
                self.scene.render(&self.config, self.sync.framebuffer());
            }
        }

        let redraw = self.scene.update(&self.config, keys);

        let mut window = self.sync.wait_for_blank_start();
        match redraw {
            Redraw::Nothing => {}
            Redraw::Box { previous, current, color } => {
                window.present_dirty(
                    &DirtyRegion::new(previous, current),
                    self.scene.background,
                    color,
                );
            }
            Redraw::Model { previous } => {
                if let SceneConfig::Playground(p) = &self.config.scene {
                    self.scene.redraw_model(p, previous, window.framebuffer());
                }
            }
        }

        self.frames = self.frames.wrapping_add(1);
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn config(&self) -> &DemoConfig {
        &self.config
    }

    /// Completed `Frame` iterations.
    pub fn frames(&self) -> u32 {
        self.frames
    }

    pub fn sync(&mut self) -> &mut FrameSync<P, V> {
        &mut self.sync
    }

    pub fn into_parts(self) -> (P, V) {
        let (registers, framebuffer) = self.sync.into_parts();
        (registers, framebuffer.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::devices::framebuffer::Color;
    use crate::devices::input::Buttons;
    use crate::devices::simulated::{SimulatedRegisters, SimulatedVram};

    type SimEngine = Engine<SimulatedRegisters, SimulatedVram>;

    fn engine(config: DemoConfig) -> SimEngine {
        let mut engine = Engine::new(SimulatedRegisters::new(), SimulatedVram::new(), config);
        engine.step();
        engine
    }

    #[test]
    fn init_writes_display_control_once() {
        let mut e = engine(DemoConfig::dirty_rect_mover());
        assert_eq!(e.state(), EngineState::Frame);
        e.start();
        e.step();
        let regs = e.sync().registers();
        assert_eq!(regs.display_control(), Some(0x0403));
        assert_eq!(regs.display_control_writes(), 1);
    }

    #[test]
    fn first_picture_has_centred_box() {
        let mut e = engine(DemoConfig::dirty_rect_mover());
        let fb = e.sync().framebuffer();
        assert_eq!(fb.pixel(115, 75), Some(Color::BLUE));
        assert_eq!(fb.pixel(124, 84), Some(Color::BLUE));
        assert_eq!(fb.pixel(125, 84), Some(Color::BLACK));
    }

    #[test]
    fn each_frame_waits_for_one_blank() {
        let mut e = engine(DemoConfig::dirty_rect_mover());
        for _ in 0..4 {
            e.step();
        }
        assert_eq!(e.frames(), 4);
        assert_eq!(e.sync().registers().frames(), 3);
        assert_eq!(e.sync().registers().scanline(), 161);
    }

    #[test]
    fn idle_frames_touch_no_pixels() {
        let mut e = engine(DemoConfig::dirty_rect_mover());
        e.sync().framebuffer().vram_mut().reset_write_count();
        for _ in 0..10 {
            e.step();
        }
        assert_eq!(e.sync().framebuffer().vram().writes(), 0);
    }

    #[test]
    fn movement_redraws_only_dirty_rectangles() {
        let mut e = engine(DemoConfig::dirty_rect_mover());
        e.sync().framebuffer().vram_mut().reset_write_count();
        e.sync().registers_mut().set_pressed(Buttons::RIGHT);
        e.step();
        assert_eq!(e.sync().framebuffer().vram().writes(), 200);
        let fb = e.sync().framebuffer();
        assert_eq!(fb.pixel(115, 75), Some(Color::BLACK));
        assert_eq!(fb.pixel(116, 75), Some(Color::BLACK));
        assert_eq!(fb.pixel(117, 75), Some(Color::BLUE));
        assert_eq!(fb.pixel(126, 84), Some(Color::BLUE));
    }

    #[test]
    fn background_change_repaints_once() {
        let mut e = engine(DemoConfig::dirty_rect_mover());
        e.sync().registers_mut().set_pressed(Buttons::A | Buttons::B);
        e.step();
        assert_eq!(e.scene().background, Color::RED);
        assert_eq!(e.sync().framebuffer().pixel(0, 0), Some(Color::RED));
        assert_eq!(e.sync().framebuffer().pixel(120, 80), Some(Color::BLUE));

        // Holding the same button is not a change.
        e.sync().framebuffer().vram_mut().reset_write_count();
        e.step();
        assert_eq!(e.sync().framebuffer().vram().writes(), 0);
    }

    #[test]
    fn static_demos_never_redraw() {
        for config in [DemoConfig::solid_fill(), DemoConfig::wireframe_test()] {
            let mut e = engine(config);
            e.sync().framebuffer().vram_mut().reset_write_count();
            e.sync().registers_mut().set_pressed(Buttons::ALL);
            for _ in 0..3 {
                e.step();
            }
            assert_eq!(e.sync().framebuffer().vram().writes(), 0, "{}", config.name);
        }
    }

    #[test]
    fn model_moves_and_leaves_no_trail() {
        let config = DemoConfig::transform_playground();
        let mut e = engine(config);
        e.sync().registers_mut().set_pressed(Buttons::RIGHT | Buttons::R);
        for _ in 0..5 {
            e.step();
        }
        let scene = *e.scene();
        let (_, vram) = e.into_parts();

        let mut expected = crate::devices::framebuffer::FrameBuffer::new(SimulatedVram::new());
        scene.render(&config, &mut expected);
        assert!(vram.cells() == expected.vram().cells());
    }
}
