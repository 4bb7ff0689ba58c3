//! Per-object state, movement, clamping and drawing.
use crate::app::config::{DemoConfig, MoverConfig, PlaygroundConfig, SceneConfig};
use crate::devices::framebuffer::{Color, FrameBuffer, Rect};
use crate::devices::input::{Buttons, KeyState};
use crate::devices::registers::{VideoMemory, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::math::{apply_transform, Fixed, Transform, Vec2};
use core::f32::consts::{PI, TAU};

const W: i32 = SCREEN_WIDTH as i32;
const H: i32 = SCREEN_HEIGHT as i32;

/// Position plus appearance, for objects without rotation or scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vertex {
    pub x: Fixed,
    pub y: Fixed,
    pub color: Color,
}

impl Vertex {
    pub fn bounds(&self, width: u32, height: u32) -> Rect {
        Rect::new(self.x.to_int(), self.y.to_int(), width, height)
    }
}

/// Keeps `[pos, pos + size)` inside `[0, limit)`.
pub fn clamp_axis(pos: Fixed, size: u32, limit: i32) -> Fixed {
    pos.clamp(Fixed::ZERO, Fixed::from_int(limit - size as i32))
}

/// Everything that changes while a demo runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scene {
    pub background: Color,
    pub object: SceneObject,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SceneObject {
    None,
    Box(Vertex),
    Model {
        transform: Transform,
        /// Screen-space corners as last drawn.
        drawn: [(i32, i32); 3],
    },
}

/// What a frame's update asks the blank-window redraw to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redraw {
    Nothing,
    Box { previous: Rect, current: Rect, color: Color },
    Model { previous: [(i32, i32); 3] },
}

impl Scene {
    pub fn new(config: &DemoConfig) -> Self {
        let object = match &config.scene {
            SceneConfig::SolidFill | SceneConfig::WireframeTest => SceneObject::None,
            SceneConfig::Mover(m) => {
                let start = m.centred_start();
                SceneObject::Box(Vertex { x: start.x, y: start.y, color: m.color })
            }
            SceneConfig::Playground(p) => SceneObject::Model {
                transform: p.start,
                drawn: project(&p.model, &p.start),
            },
        };
        Self { background: config.background, object }
    }

    /// Movement and clamping for one frame of input.
    pub fn update(&mut self, config: &DemoConfig, keys: KeyState) -> Redraw {
        match (&mut self.object, &config.scene) {
            (SceneObject::Box(vertex), SceneConfig::Mover(m)) => {
                let previous = vertex.bounds(m.width, m.height);
                move_box(vertex, m, keys);
                let current = vertex.bounds(m.width, m.height);
                if previous == current {
                    Redraw::Nothing
                } else {
                    Redraw::Box { previous, current, color: vertex.color }
                }
            }
            (SceneObject::Model { transform, drawn }, SceneConfig::Playground(p)) => {
                steer_model(transform, p, keys);
                let corners = clamp_model(transform, &p.model);
                if corners == *drawn {
                    Redraw::Nothing
                } else {
                    let previous = *drawn;
                    *drawn = corners;
                    Redraw::Model { previous }
                }
            }
            _ => Redraw::Nothing,
        }
    }

    /// Paint the scene over whatever is in the framebuffer, background first.
    pub fn render<V: VideoMemory>(&self, config: &DemoConfig, fb: &mut FrameBuffer<V>) {
        fb.clear(self.background);
        match config.scene {
            SceneConfig::SolidFill => {}
            SceneConfig::WireframeTest => draw_test_pattern(fb),
            SceneConfig::Mover(m) => {
                if let SceneObject::Box(vertex) = self.object {
                    fb.fill_rect(vertex.bounds(m.width, m.height), vertex.color);
                }
            }
            SceneConfig::Playground(p) => {
                if let SceneObject::Model { drawn, .. } = self.object {
                    fb.triangle_wireframe(drawn[0], drawn[1], drawn[2], p.color);
                }
                draw_guide(fb, p.guide);
            }
        }
    }

    /// Erase the model at `previous`, draw it at its current corners and
    /// put the guide back on top. Must run inside a blank window.
    pub fn redraw_model<V: VideoMemory>(
        &self,
        p: &PlaygroundConfig,
        previous: [(i32, i32); 3],
        fb: &mut FrameBuffer<V>,
    ) {
        fb.triangle_wireframe(previous[0], previous[1], previous[2], self.background);
        if let SceneObject::Model { drawn, .. } = self.object {
            fb.triangle_wireframe(drawn[0], drawn[1], drawn[2], p.color);
        }
        // The guide stays visible where the model crosses it.
        draw_guide(fb, p.guide);
    }
}

fn move_box(vertex: &mut Vertex, m: &MoverConfig, keys: KeyState) {
    // Opposing directions both apply and cancel out.
    if keys.is_pressed(Buttons::UP) {
        vertex.y -= m.step;
    }
    if keys.is_pressed(Buttons::DOWN) {
        vertex.y += m.step;
    }
    if keys.is_pressed(Buttons::LEFT) {
        vertex.x -= m.step;
    }
    if keys.is_pressed(Buttons::RIGHT) {
        vertex.x += m.step;
    }
    vertex.x = clamp_axis(vertex.x, m.width, W);
    vertex.y = clamp_axis(vertex.y, m.height, H);
}

fn steer_model(t: &mut Transform, p: &PlaygroundConfig, keys: KeyState) {
    t.position.x += p.move_step * keys.horizontal();
    t.position.y += p.move_step * keys.vertical();

    if keys.is_pressed(Buttons::L) {
        t.angle -= p.turn_step;
    }
    if keys.is_pressed(Buttons::R) {
        t.angle += p.turn_step;
    }
    // Keep the float small so quantization stays exact over long sessions.
    if t.angle > PI || t.angle < -PI {
        t.angle = libm::remainderf(t.angle, TAU);
    }

    if keys.is_pressed(Buttons::A) {
        t.scale += p.scale_step;
    }
    if keys.is_pressed(Buttons::B) {
        t.scale -= p.scale_step;
    }
    t.scale = t.scale.clamp(p.min_scale, p.max_scale);
}

/// Screen-space corners of `model` under `t`.
pub fn project(model: &[Vec2; 3], t: &Transform) -> [(i32, i32); 3] {
    model.map(|v| apply_transform(v, t).to_ints())
}

/// Shifts the transform by whole pixels until the projected model is on
/// screen, and returns the final corners.
fn clamp_model(t: &mut Transform, model: &[Vec2; 3]) -> [(i32, i32); 3] {
    let corners = project(model, t);
    let Some(bounds) = Rect::bounding(&corners) else {
        return corners;
    };
    let shift_x = overflow_shift(bounds.x, bounds.right(), W);
    let shift_y = overflow_shift(bounds.y, bounds.bottom(), H);
    if shift_x == 0 && shift_y == 0 {
        return corners;
    }
    t.position.x += Fixed::from_int(shift_x);
    t.position.y += Fixed::from_int(shift_y);
    corners.map(|(x, y)| (x + shift_x, y + shift_y))
}

fn overflow_shift(start: i32, end: i32, limit: i32) -> i32 {
    if start < 0 {
        -start
    } else if end > limit {
        limit - end
    } else {
        0
    }
}

fn draw_test_pattern<V: VideoMemory>(fb: &mut FrameBuffer<V>) {
    fb.line(120, 10, 120, 150, Color::DARK_GRAY);
    fb.line(10, 80, 230, 80, Color::DARK_GRAY);
    fb.triangle_wireframe((120, 30), (80, 100), (160, 100), Color::RED);
    fb.triangle_wireframe((120, 130), (80, 60), (160, 60), Color::BLUE);
}

fn draw_guide<V: VideoMemory>(fb: &mut FrameBuffer<V>, color: Color) {
    fb.line(120, 75, 120, 85, color);
    fb.line(115, 80, 125, 80, color);
}
