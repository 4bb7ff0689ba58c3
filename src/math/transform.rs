//! # 2D Affine Transforms
//!
//! Vectors and 3x3 homogeneous matrices in Fixed, plus the object
//! `Transform` (position, uniform scale, angle).
//!
//! ## Order
//!
//! `apply_transform` evaluates `Translate * Rotate * Scale` applied to a
//! model-space point without building the matrix:
//!
//! ```text
//! (x, y) --scale--> (sx, sy) --rotate--> (rx, ry) --translate--> (rx + px, ry + py)
//! ```
//!
//! Scaling happens along the model's own axes, before rotation.

use super::fixed::Fixed;
use super::trig;
use core::ops::{Add, Mul, Sub};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Vec2 {
    pub x: Fixed,
    pub y: Fixed,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: Fixed::ZERO, y: Fixed::ZERO };

    #[inline]
    pub const fn new(x: Fixed, y: Fixed) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn from_ints(x: i32, y: i32) -> Self {
        Self { x: Fixed::from_int(x), y: Fixed::from_int(y) }
    }

    /// Screen coordinates, floored.
    #[inline]
    pub const fn to_ints(self) -> (i32, i32) {
        (self.x.to_int(), self.y.to_int())
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Row-major 3x3 matrix. Row 2 stays `(0, 0, 1)` for every constructor here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mat3 {
    pub m: [[Fixed; 3]; 3],
}

impl Mat3 {
    pub const fn identity() -> Self {
        let o = Fixed::ONE;
        let z = Fixed::ZERO;
        Self { m: [[o, z, z], [z, o, z], [z, z, o]] }
    }

    /// Counter-clockwise in math convention; with y pointing down the
    /// screen this turns clockwise.
    pub fn rotation(angle: f32) -> Self {
        let (s, c) = trig::sin_cos(angle);
        let o = Fixed::ONE;
        let z = Fixed::ZERO;
        Self { m: [[c, -s, z], [s, c, z], [z, z, o]] }
    }

    pub const fn translation(offset: Vec2) -> Self {
        let o = Fixed::ONE;
        let z = Fixed::ZERO;
        Self { m: [[o, z, offset.x], [z, o, offset.y], [z, z, o]] }
    }

    pub const fn scaling(factor: Fixed) -> Self {
        let o = Fixed::ONE;
        let z = Fixed::ZERO;
        Self { m: [[factor, z, z], [z, factor, z], [z, z, o]] }
    }

    /// `M * (x, y, 1)`, dropping the homogeneous coordinate.
    pub fn transform_point(&self, v: Vec2) -> Vec2 {
        let m = &self.m;
        Vec2::new(
            m[0][0] * v.x + m[0][1] * v.y + m[0][2],
            m[1][0] * v.x + m[1][1] * v.y + m[1][2],
        )
    }
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mul for Mat3 {
    type Output = Mat3;

    fn mul(self, rhs: Mat3) -> Mat3 {
        let mut out = [[Fixed::ZERO; 3]; 3];
        for (r, row) in out.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                *cell = (0..3).fold(Fixed::ZERO, |acc, k| acc + self.m[r][k] * rhs.m[k][c]);
            }
        }
        Mat3 { m: out }
    }
}

impl Mul<Vec2> for Mat3 {
    type Output = Vec2;

    fn mul(self, v: Vec2) -> Vec2 {
        self.transform_point(v)
    }
}

/// Placement of an object in screen space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec2,
    /// Uniform; `Fixed::ONE` is unscaled.
    pub scale: Fixed,
    /// Radians. Kept as a float and quantized on use by the sine table.
    pub angle: f32,
}

impl Transform {
    pub const fn at(position: Vec2) -> Self {
        Self { position, scale: Fixed::ONE, angle: 0.0 }
    }

    /// The equivalent matrix `T * R * S`.
    pub fn matrix(&self) -> Mat3 {
        Mat3::translation(self.position) * Mat3::rotation(self.angle) * Mat3::scaling(self.scale)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::at(Vec2::ZERO)
    }
}

/// Scale, then rotate, then translate `v`.
pub fn apply_transform(v: Vec2, t: &Transform) -> Vec2 {
    let (s, c) = trig::sin_cos(t.angle);

    let sx = v.x * t.scale;
    let sy = v.y * t.scale;

    let rx = sx * c - sy * s;
    let ry = sx * s + sy * c;

    Vec2::new(rx + t.position.x, ry + t.position.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec2, b: Vec2, tolerance: i32) -> bool {
        (a.x - b.x).abs().to_bits() <= tolerance && (a.y - b.y).abs().to_bits() <= tolerance
    }

    #[test]
    fn identity_transform_returns_input() {
        let t = Transform::default();
        for (x, y) in [(0, 0), (0, -20), (-15, 15), (239, 159), (-300, 7)] {
            let v = Vec2::from_ints(x, y);
            assert_eq!(apply_transform(v, &t), v);
        }
        let odd = Vec2::new(Fixed::from_bits(-77), Fixed::from_bits(1234));
        assert_eq!(apply_transform(odd, &t), odd);
    }

    #[test]
    fn translates_model_tip_to_screen() {
        let t = Transform::at(Vec2::from_ints(120, 80));
        let out = apply_transform(Vec2::from_ints(0, -20), &t);
        assert_eq!(out, Vec2::from_ints(120, 60));
    }

    #[test]
    fn quarter_turn_maps_x_axis_to_y_axis() {
        let t = Transform { angle: core::f32::consts::FRAC_PI_2, ..Transform::default() };
        let out = apply_transform(Vec2::from_ints(10, 0), &t);
        assert_eq!(out, Vec2::from_ints(0, 10));
    }

    #[test]
    fn scale_applies_before_rotation() {
        let t = Transform {
            position: Vec2::from_ints(50, 50),
            scale: Fixed::from_int(2),
            angle: core::f32::consts::FRAC_PI_2,
        };
        // (10, 0) -> (20, 0) -> (0, 20) -> (50, 70)
        let out = apply_transform(Vec2::from_ints(10, 0), &t);
        assert_eq!(out, Vec2::from_ints(50, 70));
    }

    #[test]
    fn direct_evaluation_matches_composed_matrix() {
        let t = Transform {
            position: Vec2::from_ints(120, 80),
            scale: Fixed::from_bits(320),
            angle: 0.7,
        };
        let m = t.matrix();
        for (x, y) in [(0, -20), (-15, 15), (15, 15)] {
            let v = Vec2::from_ints(x, y);
            assert!(close(apply_transform(v, &t), m * v, 48));
        }
    }

    #[test]
    fn identity_matrix_leaves_points_alone() {
        let v = Vec2::from_ints(37, -12);
        assert_eq!(Mat3::identity() * v, v);
        assert_eq!(Mat3::identity() * Mat3::translation(v), Mat3::translation(v));
    }

    #[test]
    fn rotation_matrix_has_affine_bottom_row() {
        let m = Mat3::rotation(1.3);
        assert_eq!(m.m[2], [Fixed::ZERO, Fixed::ZERO, Fixed::ONE]);
        assert_eq!(m.m[0][0], m.m[1][1]);
        assert_eq!(m.m[0][1], -m.m[1][0]);
    }

    #[test]
    fn matrix_vector_multiply_adds_translation_column() {
        let m = Mat3::translation(Vec2::from_ints(5, -3));
        assert_eq!(m * Vec2::from_ints(1, 1), Vec2::from_ints(6, -2));
    }
}
