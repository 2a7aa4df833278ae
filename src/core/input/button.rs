//=========================================================================
// Logical Buttons
//=========================================================================
//
// The fixed set of controls an example program can query, and the bitmask
// used to store them.
//
// Every button owns exactly one bit. Bit positions are stable and match the
// on-screen tag order, so a raw tag coming from the platform layer can be
// converted with `Button::from_index()`.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::fmt;

//=== Button ==============================================================

/// Logical input control exposed to example programs.
///
/// Four action buttons, four directions, a "more" button and a quit
/// control. The discriminant is the bit position inside a [`ButtonMask`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum Button {
    Action1 = 0,
    Action2 = 1,
    Action3 = 2,
    Action4 = 3,
    Left = 4,
    Right = 5,
    Up = 6,
    Down = 7,
    More = 8,
    Quit = 9,
}

impl Button {
    /// Number of logical buttons.
    pub const COUNT: u32 = 10;

    /// All buttons in bit order.
    pub const ALL: [Button; Self::COUNT as usize] = [
        Button::Action1,
        Button::Action2,
        Button::Action3,
        Button::Action4,
        Button::Left,
        Button::Right,
        Button::Up,
        Button::Down,
        Button::More,
        Button::Quit,
    ];

    /// Converts a raw identifier into a button. Out-of-range values yield `None`.
    pub fn from_index(index: u32) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// Bit position of this button.
    #[inline]
    pub const fn index(self) -> u32 {
        self as u32
    }

    /// Single-bit mask for this button.
    #[inline]
    pub const fn mask(self) -> ButtonMask {
        ButtonMask(1 << self as u32)
    }

    /// Short display label.
    ///
    /// `More` is bound to Q rather than space because space activates
    /// focused UI elements.
    pub const fn name(self) -> &'static str {
        match self {
            Button::Action1 => "1",
            Button::Action2 => "2",
            Button::Action3 => "3",
            Button::Action4 => "4",
            Button::Left => "Left",
            Button::Right => "Right",
            Button::Up => "Up",
            Button::Down => "Down",
            Button::More => "More",
            Button::Quit => "Esc",
        }
    }
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Label for a raw button identifier; anything out of range is `"Unknown"`.
pub fn button_name(index: u32) -> &'static str {
    Button::from_index(index).map_or(UNKNOWN_BUTTON, Button::name)
}

/// Label used for identifiers that do not name a button.
pub const UNKNOWN_BUTTON: &str = "Unknown";

//=== ButtonMask ==========================================================

/// Set of buttons, one bit per [`Button`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ButtonMask(pub(crate) u32);

impl ButtonMask {
    /// No buttons.
    pub const EMPTY: Self = Self(0);

    /// Wraps raw bits. Bits above `Button::COUNT` are discarded.
    #[inline]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits & ((1 << Button::COUNT) - 1))
    }

    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn contains(self, button: Button) -> bool {
        self.0 & button.mask().0 != 0
    }

    /// Buttons contained in this mask, in bit order.
    pub fn iter(self) -> impl Iterator<Item = Button> {
        Button::ALL.into_iter().filter(move |b| self.contains(*b))
    }
}

impl From<Button> for ButtonMask {
    fn from(button: Button) -> Self {
        button.mask()
    }
}

impl std::ops::BitOr for ButtonMask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl fmt::Debug for ButtonMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(Button::name)).finish()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_button_has_a_label() {
        for button in Button::ALL {
            assert!(!button.name().is_empty());
            assert_ne!(button.name(), UNKNOWN_BUTTON);
        }
    }

    #[test]
    fn out_of_range_names_are_unknown() {
        assert_eq!(button_name(Button::COUNT), "Unknown");
        assert_eq!(button_name(u32::MAX), "Unknown");
        assert_eq!(button_name(9), "Esc");
        assert_eq!(button_name(8), "More");
    }

    #[test]
    fn from_index_matches_bit_order() {
        for (i, button) in Button::ALL.iter().enumerate() {
            assert_eq!(Button::from_index(i as u32), Some(*button));
            assert_eq!(button.index(), i as u32);
        }
        assert_eq!(Button::from_index(10), None);
    }

    #[test]
    fn masks_are_single_distinct_bits() {
        let mut seen = 0u32;
        for button in Button::ALL {
            let bits = button.mask().bits();
            assert_eq!(bits.count_ones(), 1);
            assert_eq!(seen & bits, 0);
            seen |= bits;
        }
        assert_eq!(seen, 0b11_1111_1111);
    }

    #[test]
    fn from_bits_drops_unknown_bits() {
        let mask = ButtonMask::from_bits(u32::MAX);
        assert_eq!(mask.iter().count(), Button::COUNT as usize);
    }

    #[test]
    fn debug_lists_labels() {
        let mask = Button::Up.mask() | Button::Quit.mask();
        assert_eq!(format!("{:?}", mask), r#"{"Up", "Esc"}"#);
    }
}
