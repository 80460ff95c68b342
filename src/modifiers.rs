//! Modifier key flags shared by key and mouse events.

use bitflags::bitflags;

bitflags! {
    /// Modifier keys attributed to an input event.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Shift key.
        const SHIFT = 0b0000_0001;
        /// Alt/Option key.
        const ALT = 0b0000_0010;
        /// Control key.
        const CTRL = 0b0000_0100;
    }
}

impl Modifiers {
    /// Decode a legacy CSI modifier bitmask (`value - 1` over Shift=1,
    /// Alt=2, Ctrl=4). Bits outside the known set are ignored.
    #[must_use]
    pub fn from_bitmask(mask: u8) -> Self {
        let mut mods = Self::empty();
        if mask & 1 != 0 {
            mods |= Self::SHIFT;
        }
        if mask & 2 != 0 {
            mods |= Self::ALT;
        }
        if mask & 4 != 0 {
            mods |= Self::CTRL;
        }
        mods
    }
}
