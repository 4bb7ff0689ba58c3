//! # Fixed-Point Numbers
//!
//! `Fixed` is a Q23.8 scaled integer: the stored `i32` is the real value
//! times 2^8. Screen coordinates (0..240, 0..160) and per-frame velocities
//! sit comfortably in range, with 1/256 pixel resolution.
//!
//! Addition and subtraction work on the raw value directly. Multiplication
//! widens to `i64` and shifts back down by `FRAC_BITS`. Nothing saturates:
//! callers keep magnitudes within the coordinate space, and overflow is
//! outside the contract.

use core::fmt;
use core::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// Number of fractional bits.
pub const FRAC_BITS: u32 = 8;

#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fixed(i32);

impl Fixed {
    pub const ZERO: Fixed = Fixed(0);
    pub const ONE: Fixed = Fixed(1 << FRAC_BITS);

    #[inline]
    pub const fn from_bits(bits: i32) -> Self {
        Self(bits)
    }

    #[inline]
    pub const fn to_bits(self) -> i32 {
        self.0
    }

    /// Exact for `|n| < 2^23`.
    #[inline]
    pub const fn from_int(n: i32) -> Self {
        Self(n << FRAC_BITS)
    }

    /// Arithmetic shift: truncates toward negative infinity, so `-0.5`
    /// becomes `-1`, not `0`.
    #[inline]
    pub const fn to_int(self) -> i32 {
        self.0 >> FRAC_BITS
    }

    /// Rounds to the nearest representable value.
    #[inline]
    pub fn from_f32(value: f32) -> Self {
        Self(libm::floorf(value * Self::ONE.0 as f32 + 0.5) as i32)
    }

    #[inline]
    pub fn to_f32(self) -> f32 {
        self.0 as f32 / Self::ONE.0 as f32
    }

    /// Widening multiply, rescaled back to Q23.8.
    #[inline]
    pub const fn mul(self, rhs: Fixed) -> Fixed {
        Fixed(((self.0 as i64 * rhs.0 as i64) >> FRAC_BITS) as i32)
    }

    #[inline]
    pub const fn abs(self) -> Fixed {
        Fixed(self.0.abs())
    }

    #[inline]
    pub fn clamp(self, min: Fixed, max: Fixed) -> Fixed {
        Ord::clamp(self, min, max)
    }
}

impl Add for Fixed {
    type Output = Fixed;

    #[inline]
    fn add(self, rhs: Fixed) -> Fixed {
        Fixed(self.0 + rhs.0)
    }
}

impl Sub for Fixed {
    type Output = Fixed;

    #[inline]
    fn sub(self, rhs: Fixed) -> Fixed {
        Fixed(self.0 - rhs.0)
    }
}

impl Neg for Fixed {
    type Output = Fixed;

    #[inline]
    fn neg(self) -> Fixed {
        Fixed(-self.0)
    }
}

impl AddAssign for Fixed {
    #[inline]
    fn add_assign(&mut self, rhs: Fixed) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Fixed {
    #[inline]
    fn sub_assign(&mut self, rhs: Fixed) {
        self.0 -= rhs.0;
    }
}

impl Mul for Fixed {
    type Output = Fixed;

    #[inline]
    fn mul(self, rhs: Fixed) -> Fixed {
        Fixed::mul(self, rhs)
    }
}

/// Scaling by a plain integer needs no rescale.
impl Mul<i32> for Fixed {
    type Output = Fixed;

    #[inline]
    fn mul(self, rhs: i32) -> Fixed {
        Fixed(self.0 * rhs)
    }
}

impl Div<i32> for Fixed {
    type Output = Fixed;

    #[inline]
    fn div(self, rhs: i32) -> Fixed {
        Fixed(self.0 / rhs)
    }
}

impl From<i32> for Fixed {
    fn from(n: i32) -> Self {
        Fixed::from_int(n)
    }
}

impl fmt::Debug for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fixed({}/256)", self.0)
    }
}

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let raw = self.0.unsigned_abs();
        let whole = raw >> FRAC_BITS;
        let frac = raw & ((1 << FRAC_BITS) - 1);
        // Two decimal places are enough for log output.
        write!(f, "{}{}.{:02}", sign, whole, frac * 100 / (1 << FRAC_BITS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_round_trip_is_exact() {
        for n in [-1000, -240, -1, 0, 1, 2, 79, 159, 160, 239, 240, 4096] {
            assert_eq!(Fixed::from_int(n).to_int(), n);
        }
    }

    #[test]
    fn to_int_floors_negative_values() {
        assert_eq!(Fixed::from_bits(-128).to_int(), -1);
        assert_eq!(Fixed::from_bits(-1).to_int(), -1);
        assert_eq!(Fixed::from_bits(255).to_int(), 0);
        assert_eq!(Fixed::from_bits(-256).to_int(), -1);
        assert_eq!(Fixed::from_bits(-257).to_int(), -2);
    }

    #[test]
    fn one_is_multiplicative_identity() {
        for bits in [-65_536, -300, -1, 0, 1, 77, 256, 61_440, 1 << 20] {
            let f = Fixed::from_bits(bits);
            assert_eq!(Fixed::ONE * f, f);
            assert_eq!(f * Fixed::ONE, f);
        }
    }

    #[test]
    fn mul_rescales_products() {
        let half = Fixed::ONE / 2;
        assert_eq!(Fixed::from_int(120) * half, Fixed::from_int(60));
        assert_eq!(Fixed::from_int(-3) * Fixed::from_int(4), Fixed::from_int(-12));
        // 1.5 * 1.5 = 2.25
        let one_and_half = Fixed::from_bits(384);
        assert_eq!(one_and_half * one_and_half, Fixed::from_bits(576));
    }

    #[test]
    fn mul_does_not_overflow_for_screen_sized_operands() {
        let a = Fixed::from_int(240);
        let b = Fixed::from_int(160);
        assert_eq!(a * b, Fixed::from_int(38_400));
    }

    #[test]
    fn from_f32_rounds_to_nearest() {
        assert_eq!(Fixed::from_f32(1.0), Fixed::ONE);
        assert_eq!(Fixed::from_f32(0.1), Fixed::from_bits(26));
        assert_eq!(Fixed::from_f32(-0.5), Fixed::from_bits(-128));
        assert_eq!(Fixed::from_f32(2.5).to_f32(), 2.5);
    }

    #[test]
    fn tenth_step_matches_integer_division() {
        assert_eq!(Fixed::ONE / 10, Fixed::from_bits(25));
        assert_eq!(Fixed::ONE / 5, Fixed::from_bits(51));
    }
}
