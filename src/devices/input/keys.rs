//! Button state decoding for the active-low key register.

use core::ops::BitOr;

/// A set of buttons, using the register's bit positions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Buttons(u16);

impl Buttons {
    pub const NONE: Buttons = Buttons(0);
    pub const A: Buttons = Buttons(0x0001);
    pub const B: Buttons = Buttons(0x0002);
    pub const SELECT: Buttons = Buttons(0x0004);
    pub const START: Buttons = Buttons(0x0008);
    pub const RIGHT: Buttons = Buttons(0x0010);
    pub const LEFT: Buttons = Buttons(0x0020);
    pub const UP: Buttons = Buttons(0x0040);
    pub const DOWN: Buttons = Buttons(0x0080);
    pub const R: Buttons = Buttons(0x0100);
    pub const L: Buttons = Buttons(0x0200);
    pub const ALL: Buttons = Buttons(0x03FF);

    #[inline]
    pub const fn bits(self) -> u16 {
        self.0
    }

    #[inline]
    pub const fn from_bits_truncate(bits: u16) -> Self {
        Self(bits & Self::ALL.0)
    }

    #[inline]
    pub const fn contains(self, other: Buttons) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for Buttons {
    type Output = Buttons;

    fn bitor(self, rhs: Buttons) -> Buttons {
        Buttons(self.0 | rhs.0)
    }
}

/// One sample of the key register, decoded to "pressed" polarity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState {
    pressed: Buttons,
}

impl KeyState {
    /// Decodes a raw KEYINPUT value: a cleared bit means pressed.
    #[inline]
    pub const fn from_register(raw: u16) -> Self {
        Self { pressed: Buttons::from_bits_truncate(!raw) }
    }

    pub const fn with_pressed(pressed: Buttons) -> Self {
        Self { pressed }
    }

    #[inline]
    pub const fn pressed(self) -> Buttons {
        self.pressed
    }

    /// True when every button in `buttons` is held.
    #[inline]
    pub const fn is_pressed(self, buttons: Buttons) -> bool {
        !buttons.is_empty() && self.pressed.contains(buttons)
    }

    /// `+1` for RIGHT, `-1` for LEFT; both or neither gives `0`.
    pub const fn horizontal(self) -> i32 {
        self.is_pressed(Buttons::RIGHT) as i32 - self.is_pressed(Buttons::LEFT) as i32
    }

    /// `+1` for DOWN (screen y grows downward), `-1` for UP.
    pub const fn vertical(self) -> i32 {
        self.is_pressed(Buttons::DOWN) as i32 - self.is_pressed(Buttons::UP) as i32
    }
}
