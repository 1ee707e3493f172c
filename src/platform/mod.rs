//! Platform adapters.
//!
//! Each adapter converts a host's native key codes and modifier flags into
//! [`crate::input`] types and back.

pub mod appkit;
pub mod terminal;

use crate::input::{Key, Mods};

/// Translation seam implemented by every host platform.
pub trait Platform {
    /// Native key code type
    type KeyCode: Copy;
    /// Native modifier flag type
    type Modifiers: Copy;

    /// Symbolic key for a native key code, `None` if it has no mapping.
    fn key(code: Self::KeyCode) -> Option<Key>;

    /// Core modifiers for native flags.
    fn mods(flags: Self::Modifiers) -> Mods;

    /// Native flags for core modifiers.
    ///
    /// The base four modifiers always survive `mods(flags(m))`. Side and lock
    /// bits may not.
    fn flags(mods: Mods) -> Self::Modifiers;
}

#[cfg(test)]
mod tests {
    use super::appkit::AppKit;
    use super::terminal::Terminal;
    use super::*;

    fn base_combinations() -> impl Iterator<Item = Mods> {
        (0..16u16).map(Mods::from_bits_truncate)
    }

    fn assert_round_trip<P: Platform>() {
        for mods in base_combinations() {
            assert_eq!(P::mods(P::flags(mods)).binding(), mods);
        }
    }

    #[test]
    fn test_appkit_round_trip() {
        assert_round_trip::<AppKit>();
    }

    #[test]
    fn test_terminal_round_trip() {
        assert_round_trip::<Terminal>();
    }
}
