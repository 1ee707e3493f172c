//! `NSEvent.ModifierFlags` and its translation to core modifiers.

use crate::input::Mods;

bitflags::bitflags! {
    /// Raw value of `NSEvent.ModifierFlags`.
    ///
    /// The low bits are the device-dependent `NX_DEVICE*KEYMASK` values that
    /// tell left and right modifier keys apart. AppKit does not name them but
    /// passes them through in `rawValue`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ModifierFlags: u64 {
        /// `NX_DEVICELCTLKEYMASK`
        const LEFT_CONTROL = 0x0000_0001;
        /// `NX_DEVICELSHIFTKEYMASK`
        const LEFT_SHIFT = 0x0000_0002;
        /// `NX_DEVICERSHIFTKEYMASK`
        const RIGHT_SHIFT = 0x0000_0004;
        /// `NX_DEVICELCMDKEYMASK`
        const LEFT_COMMAND = 0x0000_0008;
        /// `NX_DEVICERCMDKEYMASK`
        const RIGHT_COMMAND = 0x0000_0010;
        /// `NX_DEVICELALTKEYMASK`
        const LEFT_OPTION = 0x0000_0020;
        /// `NX_DEVICERALTKEYMASK`
        const RIGHT_OPTION = 0x0000_0040;
        /// `NX_DEVICERCTLKEYMASK`
        const RIGHT_CONTROL = 0x0000_2000;

        /// `.capsLock`
        const CAPS_LOCK = 1 << 16;
        /// `.shift`
        const SHIFT = 1 << 17;
        /// `.control`
        const CONTROL = 1 << 18;
        /// `.option`
        const OPTION = 1 << 19;
        /// `.command`
        const COMMAND = 1 << 20;
        /// `.numericPad`
        const NUMERIC_PAD = 1 << 21;
        /// `.help`
        const HELP = 1 << 22;
        /// `.function`
        const FUNCTION = 1 << 23;

        const _ = !0;
    }
}

impl ModifierFlags {
    /// `.deviceIndependentFlagsMask`
    pub const DEVICE_INDEPENDENT_MASK: u64 = 0xFFFF_0000;

    /// Drops the device-dependent bits, as AppKit's menu APIs expect.
    #[must_use]
    pub const fn device_independent(self) -> Self {
        Self::from_bits_retain(self.bits() & Self::DEVICE_INDEPENDENT_MASK)
    }
}

/// Base flag, right-side device bit, core base bit, core side bit.
const SIDED: [(ModifierFlags, ModifierFlags, Mods, Mods); 4] = [
    (
        ModifierFlags::SHIFT,
        ModifierFlags::RIGHT_SHIFT,
        Mods::SHIFT,
        Mods::SHIFT_RIGHT,
    ),
    (
        ModifierFlags::CONTROL,
        ModifierFlags::RIGHT_CONTROL,
        Mods::CTRL,
        Mods::CTRL_RIGHT,
    ),
    (
        ModifierFlags::OPTION,
        ModifierFlags::RIGHT_OPTION,
        Mods::ALT,
        Mods::ALT_RIGHT,
    ),
    (
        ModifierFlags::COMMAND,
        ModifierFlags::RIGHT_COMMAND,
        Mods::SUPER,
        Mods::SUPER_RIGHT,
    ),
];

/// Core modifiers for AppKit flags.
///
/// A side bit is set only when the base flag is present and the right-hand
/// device bit is set. If both keys of a pair are held the right side wins.
#[must_use]
pub fn mods_from_flags(flags: ModifierFlags) -> Mods {
    let mut mods = Mods::empty();

    for (flag, right, base, side) in SIDED {
        if flags.contains(flag) {
            mods |= base;
            if flags.contains(right) {
                mods |= side;
            }
        }
    }

    if flags.contains(ModifierFlags::CAPS_LOCK) {
        mods |= Mods::CAPS;
    }

    mods
}

/// AppKit flags for core modifiers.
///
/// Only device-independent flags are produced; which side was held cannot be
/// expressed in a menu key equivalent.
#[must_use]
pub fn flags_from_mods(mods: Mods) -> ModifierFlags {
    let mut flags = ModifierFlags::empty();

    for (flag, _, base, _) in SIDED {
        if mods.contains(base) {
            flags |= flag;
        }
    }

    if mods.contains(Mods::CAPS) {
        flags |= ModifierFlags::CAPS_LOCK;
    }

    flags
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_modifiers() {
        let flags = ModifierFlags::SHIFT | ModifierFlags::COMMAND;
        assert_eq!(mods_from_flags(flags), Mods::SHIFT | Mods::SUPER);
        assert_eq!(
            flags_from_mods(Mods::CTRL | Mods::ALT),
            ModifierFlags::CONTROL | ModifierFlags::OPTION
        );
    }

    #[test]
    fn test_right_side_from_device_bits() {
        let flags = ModifierFlags::OPTION | ModifierFlags::RIGHT_OPTION;
        assert_eq!(mods_from_flags(flags), Mods::ALT | Mods::ALT_RIGHT);

        let flags = ModifierFlags::CONTROL | ModifierFlags::LEFT_CONTROL;
        assert_eq!(mods_from_flags(flags), Mods::CTRL);
    }

    #[test]
    fn test_device_bit_without_base_is_ignored() {
        let flags = ModifierFlags::RIGHT_COMMAND;
        assert_eq!(mods_from_flags(flags), Mods::empty());
    }

    #[test]
    fn test_sides_lost_going_to_flags() {
        let mods = Mods::SUPER | Mods::SUPER_RIGHT;
        let flags = flags_from_mods(mods);
        assert_eq!(flags, ModifierFlags::COMMAND);
        assert_eq!(mods_from_flags(flags), Mods::SUPER);
    }

    #[test]
    fn test_round_trip_preserves_base_four() {
        for bits in 0..16u16 {
            let mods = Mods::from_bits_truncate(bits);
            assert_eq!(mods_from_flags(flags_from_mods(mods)), mods);
        }
    }

    #[test]
    fn test_round_trip_from_flags_keeps_base_four() {
        // Real values observed from NSEvent for a held right command + left shift.
        let raw = 0x0012_0000 | 0x0010 | 0x0002 | 0x0100;
        let flags = ModifierFlags::from_bits_retain(raw);
        let mods = mods_from_flags(flags);
        assert_eq!(mods, Mods::SHIFT | Mods::SUPER | Mods::SUPER_RIGHT);
        assert_eq!(
            flags_from_mods(mods),
            ModifierFlags::SHIFT | ModifierFlags::COMMAND
        );
    }

    #[test]
    fn test_caps_lock() {
        let flags = ModifierFlags::CAPS_LOCK;
        assert_eq!(mods_from_flags(flags), Mods::CAPS);
        assert_eq!(flags_from_mods(Mods::CAPS), ModifierFlags::CAPS_LOCK);
    }

    #[test]
    fn test_device_independent() {
        let flags = ModifierFlags::COMMAND | ModifierFlags::RIGHT_COMMAND;
        assert_eq!(flags.device_independent(), ModifierFlags::COMMAND);
    }
}
