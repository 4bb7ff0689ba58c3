//! Sine/cosine lookup in Fixed.
//!
//! One turn is quantized into 512 steps. Only the first quadrant is stored
//! (129 entries, both ends inclusive); the other three are folded onto it.

use super::fixed::Fixed;
use core::f32::consts::TAU;

/// Steps per full turn.
pub const ANGLE_STEPS: i32 = 512;
const QUARTER: i32 = ANGLE_STEPS / 4;

/// `round(256 * sin(i * 2pi / 512))` for `i` in `0..=128`.
#[rustfmt::skip]
const QUARTER_SINE: [i16; QUARTER as usize + 1] = [
    0, 3, 6, 9, 13, 16, 19, 22, 25, 28, 31, 34, 38, 41, 44, 47,
    50, 53, 56, 59, 62, 65, 68, 71, 74, 77, 80, 83, 86, 89, 92, 95,
    98, 101, 104, 107, 109, 112, 115, 118, 121, 123, 126, 129, 132, 134, 137, 140,
    142, 145, 147, 150, 152, 155, 157, 160, 162, 165, 167, 170, 172, 174, 177, 179,
    181, 183, 185, 188, 190, 192, 194, 196, 198, 200, 202, 204, 206, 207, 209, 211,
    213, 215, 216, 218, 220, 221, 223, 224, 226, 227, 229, 230, 231, 233, 234, 235,
    237, 238, 239, 240, 241, 242, 243, 244, 245, 246, 247, 248, 248, 249, 250, 250,
    251, 252, 252, 253, 253, 254, 254, 254, 255, 255, 255, 256, 256, 256, 256, 256,
    256,
];

/// Quantizes radians to the nearest table step. Any real angle is accepted;
/// the result is not wrapped.
#[inline]
pub fn angle_to_step(radians: f32) -> i32 {
    libm::floorf(radians * (ANGLE_STEPS as f32 / TAU) + 0.5) as i32
}

pub fn sin_step(step: i32) -> Fixed {
    let s = step.rem_euclid(ANGLE_STEPS);
    let r = (s % QUARTER) as usize;
    let q = QUARTER as usize;
    let bits = match s / QUARTER {
        0 => QUARTER_SINE[r],
        1 => QUARTER_SINE[q - r],
        2 => -QUARTER_SINE[r],
        _ => -QUARTER_SINE[q - r],
    };
    Fixed::from_bits(bits as i32)
}

#[inline]
pub fn cos_step(step: i32) -> Fixed {
    sin_step(step + QUARTER)
}

/// Returns `(sin, cos)` of an angle in radians.
pub fn sin_cos(radians: f32) -> (Fixed, Fixed) {
    let step = angle_to_step(radians);
    (sin_step(step), cos_step(step))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_tracks_libm_within_one_lsb() {
        for step in 0..ANGLE_STEPS {
            let radians = step as f64 * core::f64::consts::TAU / ANGLE_STEPS as f64;
            let want_sin = libm::round(libm::sin(radians) * 256.0) as i32;
            let want_cos = libm::round(libm::cos(radians) * 256.0) as i32;
            assert!((sin_step(step).to_bits() - want_sin).abs() <= 1, "sin step {}", step);
            assert!((cos_step(step).to_bits() - want_cos).abs() <= 1, "cos step {}", step);
        }
    }

    #[test]
    fn cardinal_angles_are_exact() {
        assert_eq!(sin_cos(0.0), (Fixed::ZERO, Fixed::ONE));
        assert_eq!(sin_step(128), Fixed::ONE);
        assert_eq!(cos_step(256), -Fixed::ONE);
        assert_eq!(sin_step(384), -Fixed::ONE);
    }

    #[test]
    fn steps_wrap_in_both_directions() {
        assert_eq!(sin_step(-128), -Fixed::ONE);
        assert_eq!(sin_step(ANGLE_STEPS + 40), sin_step(40));
        assert_eq!(cos_step(-40), cos_step(40));
    }

    #[test]
    fn radians_quantize_to_nearest_step() {
        assert_eq!(angle_to_step(0.0), 0);
        assert_eq!(angle_to_step(core::f32::consts::FRAC_PI_2), 128);
        assert_eq!(angle_to_step(-core::f32::consts::PI), -256);
        // 0.05 rad is about 4.07 steps.
        assert_eq!(angle_to_step(0.05), 4);
    }
}
