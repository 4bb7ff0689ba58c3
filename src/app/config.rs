//! Demo presets.
//!
//! Every program variant is one `DemoConfig`; the engine loop is shared.
use crate::devices::framebuffer::Color;
use crate::devices::input::{Buttons, KeyState};
use crate::devices::registers::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::math::{Fixed, Transform, Vec2};

/// Background priority chain: the first pressed entry wins.
pub type Palette = &'static [(Buttons, Color)];

pub const MOVER_PALETTE: Palette = &[
    (Buttons::A, Color::RED),
    (Buttons::B, Color::GOLD),
    (Buttons::L, Color::GREEN),
    (Buttons::R, Color::WHITE),
    (Buttons::SELECT, Color::BLACK),
];

/// Triangle in model space, centred on its origin.
pub const SHIP_MODEL: [Vec2; 3] = [
    Vec2::from_ints(0, -20),
    Vec2::from_ints(-15, 15),
    Vec2::from_ints(15, 15),
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DemoConfig {
    pub name: &'static str,
    pub background: Color,
    pub palette: Palette,
    pub scene: SceneConfig,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SceneConfig {
    /// Nothing but the background.
    SolidFill,
    /// Crosshair and two overlapping triangles, drawn once.
    WireframeTest,
    /// Axis-aligned box steered by the d-pad.
    Mover(MoverConfig),
    /// Wireframe model placed by a `Transform`.
    Playground(PlaygroundConfig),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoverConfig {
    pub width: u32,
    pub height: u32,
    pub color: Color,
    /// Distance per frame along each held axis.
    pub step: Fixed,
}

impl MoverConfig {
    /// Top-left corner that centres the box on screen.
    pub fn centred_start(&self) -> Vec2 {
        Vec2::from_ints(
            SCREEN_WIDTH as i32 / 2 - self.width as i32 / 2,
            SCREEN_HEIGHT as i32 / 2 - self.height as i32 / 2,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaygroundConfig {
    pub model: [Vec2; 3],
    pub start: Transform,
    pub color: Color,
    pub guide: Color,
    pub move_step: Fixed,
    /// Radians per frame.
    pub turn_step: f32,
    pub scale_step: Fixed,
    pub min_scale: Fixed,
    pub max_scale: Fixed,
}

impl DemoConfig {
    pub fn solid_fill() -> Self {
        Self {
            name: "solid fill",
            background: Color::BLUE,
            palette: &[],
            scene: SceneConfig::SolidFill,
        }
    }

    pub fn wireframe_test() -> Self {
        Self {
            name: "wireframe test",
            background: Color::BLACK,
            palette: &[],
            scene: SceneConfig::WireframeTest,
        }
    }

    pub fn dirty_rect_mover() -> Self {
        Self {
            name: "dirty-rect mover",
            background: Color::BLACK,
            palette: MOVER_PALETTE,
            scene: SceneConfig::Mover(MoverConfig {
                width: 10,
                height: 10,
                color: Color::BLUE,
                step: Fixed::from_int(2),
            }),
        }
    }

    pub fn fixed_point_mover() -> Self {
        Self {
            name: "fixed-point mover",
            background: Color::BLACK,
            palette: MOVER_PALETTE,
            scene: SceneConfig::Mover(MoverConfig {
                width: 16,
                height: 16,
                color: Color::BLUE,
                step: Fixed::from_int(2),
            }),
        }
    }

    pub fn transform_playground() -> Self {
        Self {
            name: "transform playground",
            background: Color::BLACK,
            palette: &[],
            scene: SceneConfig::Playground(PlaygroundConfig {
                model: SHIP_MODEL,
                start: Transform::at(Vec2::from_ints(120, 80)),
                color: Color::GREEN,
                guide: Color::GUIDE_GRAY,
                move_step: Fixed::from_int(2),
                turn_step: 0.05,
                scale_step: Fixed::ONE / 10,
                min_scale: Fixed::ONE / 5,
                max_scale: Fixed::from_int(3),
            }),
        }
    }

    /// Picks a preset from the buttons held at power-on.
    pub fn for_boot_keys(keys: KeyState) -> Self {
        if keys.is_pressed(Buttons::L) {
            Self::transform_playground()
        } else if keys.is_pressed(Buttons::R) {
            Self::wireframe_test()
        } else if keys.is_pressed(Buttons::SELECT) {
            Self::solid_fill()
        } else if keys.is_pressed(Buttons::B) {
            Self::fixed_point_mover()
        } else {
            Self::dirty_rect_mover()
        }
    }

    /// Background requested by this frame's input, if any.
    pub fn requested_background(&self, keys: KeyState) -> Option<Color> {
        self.palette
            .iter()
            .find(|(button, _)| keys.is_pressed(*button))
            .map(|&(_, color)| color)
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        match &self.scene {
            SceneConfig::SolidFill | SceneConfig::WireframeTest => Ok(()),
            SceneConfig::Mover(m) => {
                if m.width == 0 || m.height == 0 {
                    return Err("object has zero size");
                }
                if m.width as usize > SCREEN_WIDTH || m.height as usize > SCREEN_HEIGHT {
                    return Err("object larger than the screen");
                }
                if m.step <= Fixed::ZERO {
                    return Err("movement step must be positive");
                }
                Ok(())
            }
            SceneConfig::Playground(p) => {
                if p.min_scale <= Fixed::ZERO || p.min_scale > p.max_scale {
                    return Err("scale bounds inverted or non-positive");
                }
                if p.move_step <= Fixed::ZERO {
                    return Err("movement step must be positive");
                }
                let extent = model_radius(&p.model, p.max_scale);
                if 2 * extent + 2 > SCREEN_HEIGHT.min(SCREEN_WIDTH) as i32 {
                    return Err("model does not fit on screen at maximum scale");
                }
                Ok(())
            }
        }
    }
}

// Integer square root for no_std environments
fn isqrt(n: i32) -> i32 {
    if n <= 0 {
        return 0;
    }
    let mut x = n;
    let mut y = (x + 1) / 2;
    while y < x {
        x = y;
        y = (x + n / x) / 2;
    }
    x
}

/// Upper bound, in whole pixels, on how far any model vertex can reach from
/// the origin at `scale`, under any rotation.
fn model_radius(model: &[Vec2], scale: Fixed) -> i32 {
    let r2 = model
        .iter()
        .map(|v| {
            let (x, y) = v.to_ints();
            x * x + y * y
        })
        .max()
        .unwrap_or(0);
    let r = Fixed::from_int(isqrt(r2) + 1);
    (r * scale).to_int() + 1
}
