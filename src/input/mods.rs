//! Modifier bitmask in the terminal core's layout.

use serde::{Deserialize, Serialize};
use std::fmt;

bitflags::bitflags! {
    /// Modifier state attached to a key event or trigger.
    ///
    /// The `*_RIGHT` bits record which side produced a modifier. They only
    /// carry meaning while the matching base bit is set.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct Mods: u16 {
        /// Shift
        const SHIFT = 1 << 0;
        /// Control
        const CTRL = 1 << 1;
        /// Alt / Option
        const ALT = 1 << 2;
        /// Super / Command
        const SUPER = 1 << 3;
        /// Caps lock engaged
        const CAPS = 1 << 4;
        /// Num lock engaged
        const NUM = 1 << 5;
        /// Shift came from the right-hand key
        const SHIFT_RIGHT = 1 << 6;
        /// Control came from the right-hand key
        const CTRL_RIGHT = 1 << 7;
        /// Alt came from the right-hand key
        const ALT_RIGHT = 1 << 8;
        /// Super came from the right-hand key
        const SUPER_RIGHT = 1 << 9;
    }
}

impl Mods {
    /// Shift, control, alt and super.
    pub const BASE: Self = Self::SHIFT
        .union(Self::CTRL)
        .union(Self::ALT)
        .union(Self::SUPER);

    /// All side bits.
    pub const SIDES: Self = Self::SHIFT_RIGHT
        .union(Self::CTRL_RIGHT)
        .union(Self::ALT_RIGHT)
        .union(Self::SUPER_RIGHT);

    /// The modifiers that take part in trigger matching.
    ///
    /// Lock state and sides are dropped: `ctrl+a` matches either control key.
    #[must_use]
    pub const fn binding(self) -> Self {
        self.intersection(Self::BASE)
    }

    /// Side bit belonging to a base modifier.
    #[must_use]
    pub const fn side_bit(base: Self) -> Option<Self> {
        if base.bits() == Self::SHIFT.bits() {
            Some(Self::SHIFT_RIGHT)
        } else if base.bits() == Self::CTRL.bits() {
            Some(Self::CTRL_RIGHT)
        } else if base.bits() == Self::ALT.bits() {
            Some(Self::ALT_RIGHT)
        } else if base.bits() == Self::SUPER.bits() {
            Some(Self::SUPER_RIGHT)
        } else {
            None
        }
    }

    /// Whether `base` is held and came from its right-hand key.
    #[must_use]
    pub fn is_right(self, base: Self) -> bool {
        match Self::side_bit(base) {
            Some(side) => self.contains(base) && self.contains(side),
            None => false,
        }
    }

    /// Clears side bits whose base modifier is not held.
    #[must_use]
    pub fn normalized(self) -> Self {
        let mut mods = self;
        for base in [Self::SHIFT, Self::CTRL, Self::ALT, Self::SUPER] {
            if !mods.contains(base) {
                if let Some(side) = Self::side_bit(base) {
                    mods.remove(side);
                }
            }
        }
        mods
    }

    /// Parses a single modifier name as written in triggers.
    #[must_use]
    pub fn from_alias(name: &str) -> Option<Self> {
        let mods = match name.to_ascii_lowercase().as_str() {
            "shift" => Self::SHIFT,
            "ctrl" | "control" => Self::CTRL,
            "alt" | "opt" | "option" => Self::ALT,
            "super" | "cmd" | "command" => Self::SUPER,
            _ => return None,
        };
        Some(mods)
    }
}

impl fmt::Display for Mods {
    /// Writes the base modifiers as `shift+ctrl+alt+super`, omitting absent ones.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = [
            (Self::SHIFT, "shift"),
            (Self::CTRL, "ctrl"),
            (Self::ALT, "alt"),
            (Self::SUPER, "super"),
        ];
        let mut first = true;
        for (flag, name) in names {
            if self.contains(flag) {
                if !first {
                    f.write_str("+")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}
